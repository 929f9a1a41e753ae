//! Version comparison for declared dependencies

/// Result of comparing a declared version with the registry's latest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCheck {
    /// Version declared in the project file
    pub declared_version: Option<String>,
    /// Latest version from the registry (if it could be resolved)
    pub latest_version: Option<String>,
    /// Version status
    pub status: VersionStatus,
}

/// Status of a declared version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionStatus {
    /// Declared version equals the latest version
    Latest,
    /// Declared version differs from the latest version
    Outdated,
    /// No comparison possible (no declared version or no latest version)
    Unknown,
}

impl VersionCheck {
    pub fn is_outdated(&self) -> bool {
        self.status == VersionStatus::Outdated
    }
}

/// Compare a declared version with the latest version
///
/// The comparison is an exact string comparison: `1.0` and `1.0.0` differ,
/// and so does a declared version newer than the registry's latest.
pub fn check_version(declared_version: Option<&str>, latest_version: Option<&str>) -> VersionCheck {
    let status = match (declared_version, latest_version) {
        (Some(declared), Some(latest)) if declared == latest => VersionStatus::Latest,
        (Some(_), Some(_)) => VersionStatus::Outdated,
        _ => VersionStatus::Unknown,
    };

    VersionCheck {
        declared_version: declared_version.map(str::to_string),
        latest_version: latest_version.map(str::to_string),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("2.0.0"), Some("2.0.0"), VersionStatus::Latest)]
    #[case(Some("1.0.0"), Some("1.1.0"), VersionStatus::Outdated)]
    #[case(Some("1.0"), Some("1.0.0"), VersionStatus::Outdated)]
    #[case(Some("3.0.0"), Some("2.0.0"), VersionStatus::Outdated)]
    #[case(Some("[1.0,2.0)"), Some("2.0.0"), VersionStatus::Outdated)]
    #[case(Some("1.0.0"), None, VersionStatus::Unknown)]
    #[case(None, Some("1.0.0"), VersionStatus::Unknown)]
    #[case(None, None, VersionStatus::Unknown)]
    fn check_version_returns_expected_status(
        #[case] declared: Option<&str>,
        #[case] latest: Option<&str>,
        #[case] expected: VersionStatus,
    ) {
        let result = check_version(declared, latest);

        assert_eq!(result.declared_version.as_deref(), declared);
        assert_eq!(result.latest_version.as_deref(), latest);
        assert_eq!(result.status, expected);
    }

    #[test]
    fn is_outdated_is_true_only_for_outdated_status() {
        assert!(check_version(Some("1.0.0"), Some("1.1.0")).is_outdated());
        assert!(!check_version(Some("1.1.0"), Some("1.1.0")).is_outdated());
        assert!(!check_version(None, Some("1.1.0")).is_outdated());
    }
}
