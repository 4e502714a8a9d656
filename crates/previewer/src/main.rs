mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;
use cli::{Cli, Command};
use previewer_config::constants;
use previewer_context::GitHubContext;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // stdout carries the sanitized spec, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let ctx = GitHubContext::from_env()?;
    let step_output = std::env::var(constants::ENV_OUTPUT)
        .ok()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);

    let app_name = match cli.command {
        Command::Sanitize(args) => {
            let file_config = previewer_config::parse_previewer_toml(&cli.repo_dir)?;
            let settings = config::create_sanitize_settings(&cli.repo_dir, file_config, args);

            let outcome = match commands::sanitize(&settings, &ctx) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("Sanitizing {} failed: {:#}", settings.spec_path.display(), e);
                    return Err(e);
                }
            };

            output::write_result(settings.output.as_deref(), &outcome.rendered)?;
            if let Some(path) = &settings.output {
                tracing::info!("Wrote preview spec to {}", path.display());
            }
            outcome.app_name
        }
        Command::Name => {
            let name = commands::app_name(&ctx)?;
            output::write_result(None, &name)?;
            name
        }
    };

    if let Some(path) = step_output {
        output::append_step_output(&path, "app_name", &app_name)?;
    }

    Ok(())
}
