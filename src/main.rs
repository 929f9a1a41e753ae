use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::error;

use csproj_outdated::app;
use csproj_outdated::config::{Config, DEFAULT_GITHUB_API_URL, DEFAULT_NUGET_API_URL};
use csproj_outdated::logging;
use csproj_outdated::parser::CsprojParser;
use csproj_outdated::report::{ConsoleReporter, ReportEvent, Reporter};
use csproj_outdated::scan::DependencyExtractor;
use csproj_outdated::source::GitHubSource;
use csproj_outdated::version::registries::NuGetRegistry;

#[derive(Parser)]
#[command(name = "csproj-outdated")]
#[command(
    version,
    about = "Report outdated NuGet package references across your GitHub repositories"
)]
struct Cli {
    /// GitHub access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_GITHUB_API_URL)]
    github_api_url: String,

    /// Base URL of the NuGet v3 API
    #[arg(long, env = "NUGET_API_URL", default_value = DEFAULT_NUGET_API_URL)]
    nuget_url: String,

    /// Log level for this tool (overridden by RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(
        cli.log_level.as_deref(),
        cli.log_file.as_deref(),
        cli.log_json,
    )?;

    let mut reporter = ConsoleReporter::stdout();

    let config = match Config::new(cli.token, &cli.github_api_url, &cli.nuget_url) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            reporter.report(ReportEvent::RunFailed {
                reason: e.to_string(),
            });
            return Ok(());
        }
    };

    let source = GitHubSource::new(&config.github_api_url, &config.token);
    let extractor = DependencyExtractor::new(
        Arc::new(CsprojParser::new()),
        Arc::new(NuGetRegistry::new(&config.nuget_api_url)),
    );

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            if let Err(e) = app::run(&source, &extractor, &mut reporter).await {
                error!("Failed to list repositories: {}", e);
                reporter.report(ReportEvent::RunFailed {
                    reason: e.to_string(),
                });
            }
        });

    Ok(())
}
