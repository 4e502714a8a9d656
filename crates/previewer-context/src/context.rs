use crate::error::{ContextError, Result};
use crate::parse::{event_object, number_field, parse_event_payload};
use previewer_config::constants;
use serde_json::{Map, Value};
use tracing::debug;

/// The subset of the GitHub Actions run context needed to build a preview.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GitHubContext {
    /// `owner/repo` of the repository the workflow runs in.
    pub repository: String,
    /// Source branch of the pull request. Empty outside pull request events.
    pub head_ref: String,
    pub event_name: String,
    /// Webhook payload of the triggering event.
    pub event: Value,
}

impl GitHubContext {
    /// Reads the context from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the context from an arbitrary variable lookup.
    ///
    /// `GITHUB_REPOSITORY` is required. A missing `GITHUB_EVENT_PATH` yields an
    /// empty event.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let repository = lookup(constants::ENV_REPOSITORY)
            .filter(|r| !r.is_empty())
            .ok_or(ContextError::MissingVariable(constants::ENV_REPOSITORY))?;
        let head_ref = lookup(constants::ENV_HEAD_REF).unwrap_or_default();
        let event_name = lookup(constants::ENV_EVENT_NAME).unwrap_or_default();

        let event = match lookup(constants::ENV_EVENT_PATH).filter(|p| !p.is_empty()) {
            Some(path) => {
                debug!("Loading event payload from {}", path);
                let body = std::fs::read(&path).map_err(|source| ContextError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_event_payload(&body)?
            }
            None => Value::Object(Map::new()),
        };

        Ok(Self {
            repository,
            head_ref,
            event_name,
            event,
        })
    }

    /// Splits the repository into owner and name on the first `/`.
    pub fn repo(&self) -> (&str, &str) {
        self.repository
            .split_once('/')
            .unwrap_or((self.repository.as_str(), ""))
    }

    /// Returns the top-level event field `key` if it is a JSON object.
    pub fn event_object(&self, key: &str) -> Option<&Map<String, Value>> {
        event_object(&self.event, key)
    }

    /// Number of the triggering pull request, if any.
    pub fn pull_request_number(&self) -> Option<i64> {
        number_field(self.event_object("pull_request")?, "number")
    }
}
