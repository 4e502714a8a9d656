//! Rewrites a production app spec into one that can be deployed as a
//! pull request preview next to it.

mod error;
mod sanitize;
mod tokens;

pub use error::{Result, SanitizeError, TokenError};
pub use sanitize::sanitize_spec_for_preview;
pub use tokens::{DomainTokens, substitute_domain_tokens};
