use clap::{Args, Parser, Subcommand, ValueEnum};
use previewer_config::constants::ENV_WORKSPACE;
use previewer_spec::SpecFormat;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "previewer", version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Prepare app specs for pull request preview deployments", long_about = None)]
pub struct Cli {
    /// Repository checkout holding previewer.toml and the app spec.
    #[arg(long, env = ENV_WORKSPACE, default_value = ".")]
    pub repo_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Rewrite the app spec for a preview of the current pull request.
    Sanitize(SanitizeArgs),
    /// Print the preview app name of the current pull request.
    Name,
}

#[derive(Debug, Args, Clone, Default)]
pub struct SanitizeArgs {
    /// App spec to sanitize, relative to the repository.
    #[arg(long, env = "INPUT_APP_SPEC_LOCATION")]
    pub spec: Option<PathBuf>,

    /// Keep domains and substitute their {BRANCH}, {PR_NUMBER}, {REPO} and
    /// {OWNER} tokens instead of dropping them.
    #[arg(
        long,
        env = "INPUT_PRESERVE_DOMAINS",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub preserve_domains: Option<bool>,

    /// Write the sanitized spec here instead of stdout.
    #[arg(long, env = "INPUT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format. Defaults to the format of the input spec.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl From<OutputFormat> for SpecFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Yaml => SpecFormat::Yaml,
            OutputFormat::Json => SpecFormat::Json,
        }
    }
}
