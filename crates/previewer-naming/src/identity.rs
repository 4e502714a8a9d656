use crate::error::{NamingError, Result};
use crate::name::generate_app_name;
use previewer_context::{GitHubContext, event_object, number_field};
use serde_json::Value;

/// Who and what a preview is built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub owner: String,
    pub repo: String,
    /// Merge ref of the pull request, e.g. `3/merge`.
    pub git_ref: String,
}

impl Identity {
    pub fn from_context(ctx: &GitHubContext) -> Result<Self> {
        let (owner, repo) = ctx.repo();
        let git_ref = pr_ref_from_event(&ctx.event)?;

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            git_ref,
        })
    }

    pub fn app_name(&self) -> String {
        generate_app_name(&self.owner, &self.repo, &self.git_ref)
    }

    /// `owner/repo`, the form used by component source references.
    pub fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Builds the `<number>/merge` ref of the pull request that triggered `event`.
///
/// Actions only exposes this ref for some triggers, so it is derived from the
/// payload instead.
pub fn pr_ref_from_event(event: &Value) -> Result<String> {
    let pull_request =
        event_object(event, "pull_request").ok_or(NamingError::MissingField("pull_request"))?;
    let number = number_field(pull_request, "number").ok_or(NamingError::MissingPrNumber)?;

    Ok(format!("{number}/merge"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pr_ref_from_event() {
        let event = json!({"pull_request": {"number": 3}});
        assert_eq!(pr_ref_from_event(&event).unwrap(), "3/merge");
    }

    #[test]
    fn test_pr_ref_truncates_float() {
        let event = json!({"pull_request": {"number": 42.0}});
        assert_eq!(pr_ref_from_event(&event).unwrap(), "42/merge");

        let event = json!({"pull_request": {"number": 5.7}});
        assert_eq!(pr_ref_from_event(&event).unwrap(), "5/merge");
    }

    #[test]
    fn test_missing_pull_request() {
        let event = json!({"ref": "refs/heads/main"});
        assert_eq!(
            pr_ref_from_event(&event),
            Err(NamingError::MissingField("pull_request"))
        );

        let event = json!({"pull_request": "not an object"});
        assert_eq!(
            pr_ref_from_event(&event),
            Err(NamingError::MissingField("pull_request"))
        );
    }

    #[test]
    fn test_missing_pr_number() {
        let event = json!({"pull_request": {}});
        assert_eq!(pr_ref_from_event(&event), Err(NamingError::MissingPrNumber));

        let event = json!({"pull_request": {"number": "3"}});
        assert_eq!(pr_ref_from_event(&event), Err(NamingError::MissingPrNumber));
    }

    #[test]
    fn test_pr_ref_agrees_with_context_number() {
        for number in [json!(3), json!(42.0), json!(5.7), json!(-1)] {
            let ctx = GitHubContext {
                event: json!({"pull_request": {"number": number}}),
                ..Default::default()
            };
            let expected = format!("{}/merge", ctx.pull_request_number().unwrap());

            assert_eq!(pr_ref_from_event(&ctx.event).unwrap(), expected);
        }
    }

    #[test]
    fn test_identity_from_context() {
        let ctx = GitHubContext {
            repository: "foo/bar".to_string(),
            head_ref: "feature-branch".to_string(),
            event: json!({"pull_request": {"number": 3}}),
            ..Default::default()
        };

        let identity = Identity::from_context(&ctx).unwrap();

        assert_eq!(identity.owner, "foo");
        assert_eq!(identity.repo, "bar");
        assert_eq!(identity.git_ref, "3/merge");
        assert_eq!(identity.repository(), "foo/bar");
        assert_eq!(identity.app_name(), generate_app_name("foo", "bar", "3/merge"));
    }

    #[test]
    fn test_identity_requires_pull_request() {
        let ctx = GitHubContext {
            repository: "foo/bar".to_string(),
            ..Default::default()
        };

        assert_eq!(
            Identity::from_context(&ctx),
            Err(NamingError::MissingField("pull_request"))
        );
    }
}
