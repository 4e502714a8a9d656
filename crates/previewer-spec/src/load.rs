use crate::app::AppSpec;
use crate::error::{Result, SpecError};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Yaml,
    Json,
}

impl SpecFormat {
    /// Picks the format from the file extension. Anything but `.json` is read
    /// as YAML, which also accepts JSON documents.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SpecFormat::Json,
            _ => SpecFormat::Yaml,
        }
    }

    pub fn parse(self, content: &str) -> Result<AppSpec> {
        match self {
            SpecFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            SpecFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }

    pub fn render(self, spec: &AppSpec) -> Result<String> {
        match self {
            SpecFormat::Yaml => spec.to_yaml(),
            SpecFormat::Json => spec.to_json(),
        }
    }
}

pub fn load_app_spec(path: &Path) -> Result<AppSpec> {
    let format = SpecFormat::from_path(path);
    debug!("Loading app spec from {} as {:?}", path.display(), format);

    let content = std::fs::read_to_string(path).map_err(|source| SpecError::Io {
        path: path.display().to_string(),
        source,
    })?;

    format.parse(&content)
}
