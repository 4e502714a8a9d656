use crate::constants;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PreviewerConfig {
    #[serde(default = "default_app_spec_location")]
    pub app_spec_location: PathBuf,

    #[serde(default)]
    pub preserve_domains: bool,
}

impl Default for PreviewerConfig {
    fn default() -> Self {
        Self {
            app_spec_location: default_app_spec_location(),
            preserve_domains: false,
        }
    }
}

fn default_app_spec_location() -> PathBuf {
    PathBuf::from(constants::DEFAULT_APP_SPEC_LOCATION)
}

pub fn parse_previewer_toml(repo_path: &Path) -> std::io::Result<PreviewerConfig> {
    let config_path = repo_path.join(constants::CONFIG_FILE_NAME);

    if !config_path.exists() {
        debug!("No {} found, using defaults", config_path.display());
        return Ok(PreviewerConfig::default());
    }

    let content = std::fs::read_to_string(&config_path)?;
    let config: PreviewerConfig = toml::from_str(&content)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_empty_config() {
        let config: PreviewerConfig = toml::from_str("").unwrap();
        assert_eq!(config, PreviewerConfig::default());
        assert_eq!(config.app_spec_location, PathBuf::from(".do/app.yaml"));
        assert!(!config.preserve_domains);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
app_spec_location = "deploy/preview.yaml"
preserve_domains = true
"#;
        let config: PreviewerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.app_spec_location, PathBuf::from("deploy/preview.yaml"));
        assert!(config.preserve_domains);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = parse_previewer_toml(temp_dir.path()).unwrap();
        assert_eq!(config, PreviewerConfig::default());
    }

    #[test]
    fn test_reads_file_from_repo_root() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("previewer.toml"),
            "preserve_domains = true\n",
        )
        .unwrap();

        let config = parse_previewer_toml(temp_dir.path()).unwrap();
        assert!(config.preserve_domains);
        assert_eq!(config.app_spec_location, PathBuf::from(".do/app.yaml"));
    }

    #[test]
    fn test_invalid_file_is_invalid_data() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("previewer.toml"),
            "preserve_domains = \"maybe\"\n",
        )
        .unwrap();

        let err = parse_previewer_toml(temp_dir.path()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
