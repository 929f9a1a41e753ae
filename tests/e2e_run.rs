//! End-to-end run against mocked GitHub and NuGet servers

use std::io::Write;
use std::sync::Arc;

use flate2::Compression;
use flate2::write::GzEncoder;
use mockito::{Matcher, Server};

use csproj_outdated::app::{RunSummary, run};
use csproj_outdated::parser::CsprojParser;
use csproj_outdated::report::ConsoleReporter;
use csproj_outdated::scan::DependencyExtractor;
use csproj_outdated::source::{GitHubSource, SourceError};
use csproj_outdated::version::registries::NuGetRegistry;

const PROJECT: &str = r#"<Project Sdk="Microsoft.NET.Sdk">
  <ItemGroup>
    <PackageReference Include="Serilog" Version="2.12.0" />
    <PackageReference Include="Dapper" Version="2.1.0" />
  </ItemGroup>
</Project>"#;

fn gzip(body: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(body.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

#[tokio::test]
async fn run_reports_outdated_references_of_repositories_with_projects() {
    let mut github = Server::new_async().await;
    let mut nuget = Server::new_async().await;

    let repos_mock = github
        .mock("GET", "/user/repos")
        .match_query(Matcher::UrlEncoded("per_page".into(), "1000".into()))
        .match_header("authorization", "Bearer ghp_e2e")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"name": "app", "full_name": "octo/app", "owner": {"login": "octo"}},
                {"name": "docs", "full_name": "octo/docs", "owner": {"login": "octo"}}
            ]"#,
        )
        .create_async()
        .await;

    // Listed once by the scan and once by the extraction
    let app_root_mock = github
        .mock("GET", "/repos/octo/app/contents")
        .with_status(200)
        .with_body(r#"[{"name": "src", "type": "dir", "download_url": null}]"#)
        .expect(2)
        .create_async()
        .await;

    let app_src_mock = github
        .mock("GET", "/repos/octo/app/contents/src")
        .with_status(200)
        .with_body(format!(
            r#"[{{"name": "App.csproj", "type": "file", "download_url": "{}/raw/octo/app/src/App.csproj"}}]"#,
            github.url()
        ))
        .expect(2)
        .create_async()
        .await;

    let project_mock = github
        .mock("GET", "/raw/octo/app/src/App.csproj")
        .with_status(200)
        .with_body(PROJECT)
        .create_async()
        .await;

    let docs_root_mock = github
        .mock("GET", "/repos/octo/docs/contents")
        .with_status(200)
        .with_body(r#"[{"name": "README.md", "type": "file", "download_url": null}]"#)
        .create_async()
        .await;

    let serilog_mock = nuget
        .mock("GET", "/registration5-gz-semver2/serilog/index.json")
        .with_status(200)
        .with_header("content-encoding", "gzip")
        .with_body(gzip(
            r#"{"items": [{"lower": "1.0.0", "upper": "2.12.0"}, {"lower": "3.0.0", "upper": "3.1.1"}]}"#,
        ))
        .create_async()
        .await;

    let dapper_mock = nuget
        .mock("GET", "/registration5-gz-semver2/dapper/index.json")
        .with_status(404)
        .create_async()
        .await;

    let source = GitHubSource::new(&github.url(), "ghp_e2e");
    let extractor = DependencyExtractor::new(
        Arc::new(CsprojParser::new()),
        Arc::new(NuGetRegistry::new(&nuget.url())),
    );
    let mut reporter = ConsoleReporter::new(Vec::new());

    let summary = run(&source, &extractor, &mut reporter).await.unwrap();

    repos_mock.assert_async().await;
    app_root_mock.assert_async().await;
    app_src_mock.assert_async().await;
    project_mock.assert_async().await;
    docs_root_mock.assert_async().await;
    serilog_mock.assert_async().await;
    dapper_mock.assert_async().await;

    assert_eq!(
        summary,
        RunSummary {
            repositories: 2,
            with_projects: 1,
            aborted: 0,
            dependencies: 2,
            outdated: 1,
        }
    );

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(
        output,
        "Repository: octo/app\n\
         \x20 Found .csproj: App.csproj\n\
         \x20 Dependencies in App.csproj:\n\
         \x20   - Serilog, Version: 2.12.0\n\
         \x20   (Outdated) - Latest Version: 3.1.1, Current Version: 2.12.0\n\
         \x20   - Dapper, Version: 2.1.0\n"
    );
}

#[tokio::test]
async fn run_fails_when_repositories_cannot_be_listed() {
    let mut github = Server::new_async().await;

    let mock = github
        .mock("GET", "/user/repos")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"message": "Bad credentials"}"#)
        .create_async()
        .await;

    let source = GitHubSource::new(&github.url(), "expired");
    let extractor = DependencyExtractor::new(
        Arc::new(CsprojParser::new()),
        Arc::new(NuGetRegistry::new(&github.url())),
    );
    let mut reporter = ConsoleReporter::new(Vec::new());

    let result = run(&source, &extractor, &mut reporter).await;

    mock.assert_async().await;
    assert!(matches!(result, Err(SourceError::Unauthorized)));
    assert!(reporter.into_inner().is_empty());
}
