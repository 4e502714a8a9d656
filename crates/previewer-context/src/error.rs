use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("missing required environment variable: {0}")]
    MissingVariable(&'static str),

    #[error("failed to read event payload {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid event payload: {0}")]
    InvalidPayload(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ContextError>;
