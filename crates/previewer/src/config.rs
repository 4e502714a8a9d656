use crate::cli::SanitizeArgs;
use previewer_config::PreviewerConfig;
use previewer_spec::SpecFormat;
use std::path::{Path, PathBuf};

/// Effective settings of a `sanitize` run, with command line and `INPUT_*`
/// values taking precedence over previewer.toml.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeSettings {
    pub spec_path: PathBuf,
    pub preserve_domains: bool,
    pub output: Option<PathBuf>,
    pub format: SpecFormat,
}

pub fn create_sanitize_settings(
    repo_dir: &Path,
    file: PreviewerConfig,
    args: SanitizeArgs,
) -> SanitizeSettings {
    let spec_path = repo_dir.join(args.spec.unwrap_or(file.app_spec_location));
    let format = args
        .format
        .map(SpecFormat::from)
        .unwrap_or_else(|| SpecFormat::from_path(&spec_path));

    SanitizeSettings {
        preserve_domains: args.preserve_domains.unwrap_or(file.preserve_domains),
        output: args.output,
        format,
        spec_path,
    }
}
