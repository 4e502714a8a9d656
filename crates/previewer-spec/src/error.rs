use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecError {
    #[error("failed to read app spec {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML app spec")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON app spec")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpecError>;
