//! Deterministic naming for preview apps.

mod branch;
mod error;
mod identity;
mod name;

pub use branch::sanitize_branch_for_domain;
pub use error::{NamingError, Result};
pub use identity::{Identity, pr_ref_from_event};
pub use name::generate_app_name;
