use crate::error::TokenError;
use previewer_context::GitHubContext;
use previewer_naming::sanitize_branch_for_domain;
use previewer_spec::AppSpec;
use tracing::debug;

pub const BRANCH_TOKEN: &str = "{BRANCH}";
pub const PR_NUMBER_TOKEN: &str = "{PR_NUMBER}";
pub const REPO_TOKEN: &str = "{REPO}";
pub const OWNER_TOKEN: &str = "{OWNER}";

/// Values substituted for the tokens a domain may contain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainTokens {
    /// Head branch, already reduced to a DNS label.
    pub branch: String,
    /// Empty when the event carries no pull request number.
    pub pr_number: String,
    pub repo: String,
    pub owner: String,
}

impl DomainTokens {
    pub fn from_context(ctx: &GitHubContext) -> Self {
        let (owner, repo) = ctx.repo();

        Self {
            branch: sanitize_branch_for_domain(&ctx.head_ref),
            pr_number: ctx
                .pull_request_number()
                .map(|n| n.to_string())
                .unwrap_or_default(),
            repo: repo.to_string(),
            owner: owner.to_string(),
        }
    }

    /// Replaces every token in `input` in a single pass. Substituted values are
    /// never scanned for tokens themselves.
    pub fn replace(&self, input: &str) -> String {
        let pairs = [
            (BRANCH_TOKEN, self.branch.as_str()),
            (PR_NUMBER_TOKEN, self.pr_number.as_str()),
            (REPO_TOKEN, self.repo.as_str()),
            (OWNER_TOKEN, self.owner.as_str()),
        ];

        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let candidate = &rest[start..];

            match pairs.iter().find(|(token, _)| candidate.starts_with(token)) {
                Some((token, value)) => {
                    out.push_str(value);
                    rest = &candidate[token.len()..];
                }
                None => {
                    out.push('{');
                    rest = &candidate[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}

/// Replaces `{BRANCH}`, `{PR_NUMBER}`, `{REPO}` and `{OWNER}` in every domain
/// of `spec`.
pub fn substitute_domain_tokens(
    spec: &mut AppSpec,
    ctx: &GitHubContext,
) -> std::result::Result<(), TokenError> {
    if spec.domains.is_empty() {
        return Ok(());
    }

    let tokens = DomainTokens::from_context(ctx);

    for domain in &mut spec.domains {
        let replaced = tokens.replace(&domain.domain);
        if replaced != domain.domain {
            debug!("Rewrote domain {} to {}", domain.domain, replaced);
        }
        domain.domain = replaced;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use previewer_spec::AppDomainSpec;
    use serde_json::json;

    fn context(head_ref: &str, event: serde_json::Value) -> GitHubContext {
        GitHubContext {
            repository: "foo/bar".to_string(),
            head_ref: head_ref.to_string(),
            event,
            ..Default::default()
        }
    }

    fn spec_with_domains(domains: &[&str]) -> AppSpec {
        AppSpec {
            domains: domains
                .iter()
                .map(|d| AppDomainSpec {
                    domain: d.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_substitute_all_tokens() {
        let mut spec = spec_with_domains(&[
            "{BRANCH}.{OWNER}-{REPO}.example.com",
            "pr-{PR_NUMBER}.example.com",
            "static.example.com",
        ]);
        let ctx = context("Feature/Test_1.0", json!({"pull_request": {"number": 7}}));

        substitute_domain_tokens(&mut spec, &ctx).unwrap();

        assert_eq!(spec.domains[0].domain, "feature-test-1-0.foo-bar.example.com");
        assert_eq!(spec.domains[1].domain, "pr-7.example.com");
        assert_eq!(spec.domains[2].domain, "static.example.com");
    }

    #[test]
    fn test_missing_pr_number_is_empty() {
        let mut spec = spec_with_domains(&["pr-{PR_NUMBER}.example.com"]);
        let ctx = context("main", json!({}));

        substitute_domain_tokens(&mut spec, &ctx).unwrap();

        assert_eq!(spec.domains[0].domain, "pr-.example.com");
    }

    #[test]
    fn test_no_domains_is_noop() {
        let mut spec = AppSpec::default();
        substitute_domain_tokens(&mut spec, &context("main", json!({}))).unwrap();
        assert!(spec.domains.is_empty());
    }

    #[test]
    fn test_replacement_is_single_pass() {
        let tokens = DomainTokens {
            branch: "b".to_string(),
            pr_number: "1".to_string(),
            repo: "{OWNER}".to_string(),
            owner: "o".to_string(),
        };

        assert_eq!(tokens.replace("{REPO}.{OWNER}"), "{OWNER}.o");
    }

    #[test]
    fn test_unknown_and_partial_tokens_are_kept() {
        let tokens = DomainTokens {
            branch: "b".to_string(),
            ..Default::default()
        };

        assert_eq!(tokens.replace("{UNKNOWN}.{BRANCH"), "{UNKNOWN}.{BRANCH");
        assert_eq!(tokens.replace("{{BRANCH}}"), "{b}");
        assert_eq!(tokens.replace("{BRANCH}{BRANCH}"), "bb");
    }

    #[test]
    fn test_long_branch_is_truncated() {
        let branch = format!("{}-end", "x".repeat(70));
        let tokens = DomainTokens::from_context(&context(&branch, json!({})));

        assert_eq!(tokens.branch, "x".repeat(63));
        assert_eq!(tokens.owner, "foo");
        assert_eq!(tokens.repo, "bar");
        assert_eq!(tokens.pr_number, "");
    }
}
