use previewer_naming::NamingError;
use previewer_spec::ComponentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SanitizeError {
    #[error("failed to get PR number")]
    IdentityResolution(#[source] NamingError),

    #[error("failed to sanitize buildable components")]
    ComponentTraversal(#[source] ComponentError),

    #[error("failed to substitute domain tokens")]
    TokenSubstitution(#[source] TokenError),
}

/// Raised when a domain cannot be rewritten for a preview.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("domain '{domain}' could not be rewritten: {reason}")]
pub struct TokenError {
    pub domain: String,
    pub reason: String,
}

pub type Result<T> = std::result::Result<T, SanitizeError>;
