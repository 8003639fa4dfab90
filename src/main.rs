mod cli;
mod commands;
mod config;
mod discover;
mod mcp;
mod partition;
mod pdf;
mod prompt;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, RunArgs};
use commands::split::SplitOptions;
use config::SplitConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries user output and the MCP transport, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            let config = SplitConfig::from_args(&args);
            tracing::debug!(?config, "resolved configuration");

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let summary = commands::run::run(
                &config,
                args.pieces,
                &mut stdin.lock(),
                &mut stdout.lock(),
            )?;
            tracing::info!(
                succeeded = summary.succeeded,
                failed = summary.failed,
                "run finished"
            );
        }
        Commands::Split {
            path,
            pieces,
            output_dir,
            skip_empty,
            json,
        } => {
            let options = SplitOptions { skip_empty };
            commands::split::run(&path, pieces, &output_dir, &options, json)?;
        }
        Commands::List { dir } => {
            let dir = dir.unwrap_or_else(config::default_source_dir);
            commands::list::run(&dir)?;
        }
        Commands::Partition {
            total_pages,
            pieces,
        } => {
            commands::partition::run(total_pages, pieces)?;
        }
        Commands::Mcp => {
            mcp::run_server().await?;
        }
    }

    Ok(())
}
