mod context;
mod error;
mod parse;

pub use context::GitHubContext;
pub use error::{ContextError, Result};
pub use parse::{event_object, number_field, parse_event_payload};
