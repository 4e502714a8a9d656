use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("{0} field didn't exist on event")]
    MissingField(&'static str),

    #[error("missing pull request number")]
    MissingPrNumber,
}

pub type Result<T> = std::result::Result<T, NamingError>;
