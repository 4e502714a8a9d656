/// Upper bound on the length of an app name accepted by the platform.
pub const APP_NAME_MAX_LEN: usize = 32;

/// Number of hex digits of the content hash kept in an app name suffix.
pub const APP_NAME_HASH_LEN: usize = 8;

/// Upper bound on a single DNS label.
pub const DNS_LABEL_MAX_LEN: usize = 63;

pub const DEFAULT_APP_SPEC_LOCATION: &str = ".do/app.yaml";
pub const CONFIG_FILE_NAME: &str = "previewer.toml";

pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const ENV_HEAD_REF: &str = "GITHUB_HEAD_REF";
pub const ENV_EVENT_NAME: &str = "GITHUB_EVENT_NAME";
pub const ENV_EVENT_PATH: &str = "GITHUB_EVENT_PATH";
pub const ENV_OUTPUT: &str = "GITHUB_OUTPUT";
pub const ENV_WORKSPACE: &str = "GITHUB_WORKSPACE";
