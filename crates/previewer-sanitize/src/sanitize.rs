use crate::error::{Result, SanitizeError};
use crate::tokens::substitute_domain_tokens;
use previewer_context::GitHubContext;
use previewer_naming::Identity;
use previewer_spec::{AppSpec, BuildableComponent, ComponentError};
use tracing::{debug, info};

/// Modifies `spec` so it can be deployed as a preview of the pull request
/// described by `ctx`:
///
/// - the app gets a unique name derived from the repository and PR
/// - domains are dropped unless `preserve_domains` is set, in which case their
///   tokens are substituted
/// - alerts are dropped
/// - components built from this repository point at the PR's head branch and
///   no longer deploy on push
///
/// On error the spec may be partially modified and must not be deployed.
pub fn sanitize_spec_for_preview(
    spec: &mut AppSpec,
    ctx: &GitHubContext,
    preserve_domains: bool,
) -> Result<()> {
    let identity = Identity::from_context(ctx).map_err(SanitizeError::IdentityResolution)?;

    spec.name = identity.app_name();
    info!("Preview app name for {}: {}", identity.git_ref, spec.name);

    // Production domains would collide with the live app.
    if !preserve_domains {
        spec.domains.clear();
    }

    spec.alerts.clear();

    let repository = identity.repository();
    spec.for_each_component_mut(|component| {
        redirect_component(component, &repository, &ctx.head_ref)
    })
    .map_err(SanitizeError::ComponentTraversal)?;

    if preserve_domains && !spec.domains.is_empty() {
        substitute_domain_tokens(spec, ctx).map_err(SanitizeError::TokenSubstitution)?;
    }

    Ok(())
}

fn redirect_component(
    component: &mut dyn BuildableComponent,
    repository: &str,
    head_ref: &str,
) -> std::result::Result<(), ComponentError> {
    let kind = component.kind();
    let name = component.name().to_string();

    let Some(source) = component.github_mut() else {
        return Ok(());
    };

    if source.repo != repository {
        debug!("Skipping {} '{}' sourced from {}", kind, name, source.repo);
        return Ok(());
    }

    // Deployments are started explicitly so their status can be followed.
    source.deploy_on_push = false;
    source.branch = head_ref.to_string();

    debug!("Pointed {} '{}' at branch {}", kind, name, head_ref);
    Ok(())
}
