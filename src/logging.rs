//! tracing subscriber setup
//!
//! Logs go to stderr (or a file) so they never interleave with the report on
//! stdout.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor a level flag is given
pub const DEFAULT_LOG_FILTER: &str = "csproj_outdated=info";

/// Build the filter: `RUST_LOG` wins, then the explicit level, then the default.
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = level
            .map(|l| format!("csproj_outdated={}", l))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        EnvFilter::new(directive)
    })
}

/// Install the global subscriber, writing JSON lines when `json` is set.
///
/// The returned guard flushes buffered log lines when dropped; keep it alive
/// for the whole run.
pub fn init(
    level: Option<&str>,
    log_file: Option<&Path>,
    json: bool,
) -> std::io::Result<WorkerGuard> {
    let (writer, guard) = match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("log file path has no file name: {}", path.display()),
                )
            })?;
            std::fs::create_dir_all(directory)?;
            tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name))
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(writer)
        .with_ansi(log_file.is_none() && !json);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(guard)
}
