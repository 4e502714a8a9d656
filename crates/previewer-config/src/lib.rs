pub mod config;
pub mod constants;

pub use config::{PreviewerConfig, parse_previewer_toml};
