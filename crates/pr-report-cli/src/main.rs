//! pr-report CLI - daily Markdown reports of a GitHub user's pull requests.

mod report;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use pr_report_core::config::{GitHubConfig, ENV_FILE};
use pr_report_core::Config;
use pr_report_server::AppState;
use pr_report_storage::MemorySessionStore;
use tracing_subscriber::EnvFilter;

use crate::report::ReportRequest;

#[derive(Parser)]
#[command(name = "pr-report")]
#[command(author, version, about = "Daily Markdown report of your GitHub pull requests", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// GitHub username
    #[arg(long)]
    username: Option<String>,

    /// GitHub personal access token
    #[arg(long)]
    token: Option<String>,

    /// Report date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,

    /// Directory the report is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP service
    Serve {
        /// Port to listen on (defaults to API_PORT or the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Serve { port }) => {
            let config = Config::load_with_env_file(Path::new(ENV_FILE))?;
            let port = port.unwrap_or(config.server.port);
            let state = AppState::new(config, Arc::new(MemorySessionStore::new()))?;
            pr_report_server::serve(state, port).await?;
        }
        None => {
            let (username, token, date) = match (cli.username, cli.token, cli.date) {
                (Some(u), Some(t), Some(d)) if !u.is_empty() && !t.is_empty() && !d.is_empty() => {
                    (u, t, d)
                }
                _ => {
                    eprintln!("{}", Cli::command().render_usage());
                    eprintln!("--username, --token and --date are required");
                    std::process::exit(1);
                }
            };

            let github = GitHubConfig::load()?;
            let request = ReportRequest {
                username,
                token,
                date,
                output_dir: cli.output_dir,
            };
            let path = report::run(&github, &request).await?;
            println!("Markdown report written to {}", path.display());
        }
    }

    Ok(())
}
