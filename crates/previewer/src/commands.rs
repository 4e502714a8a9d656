use crate::config::SanitizeSettings;
use anyhow::Context;
use previewer_context::GitHubContext;
use previewer_naming::Identity;
use previewer_sanitize::sanitize_spec_for_preview;
use previewer_spec::load_app_spec;
use tracing::info;

/// Result of sanitizing a spec, ready to be written out.
#[derive(Debug)]
pub struct SanitizeOutcome {
    pub app_name: String,
    pub rendered: String,
}

pub fn sanitize(
    settings: &SanitizeSettings,
    ctx: &GitHubContext,
) -> anyhow::Result<SanitizeOutcome> {
    let mut spec = load_app_spec(&settings.spec_path)?;

    info!(
        "Sanitizing {} for {} (preserve domains: {})",
        settings.spec_path.display(),
        ctx.repository,
        settings.preserve_domains
    );

    sanitize_spec_for_preview(&mut spec, ctx, settings.preserve_domains)
        .context("failed to sanitize spec for preview")?;

    let rendered = settings.format.render(&spec)?;

    Ok(SanitizeOutcome {
        app_name: spec.name,
        rendered,
    })
}

pub fn app_name(ctx: &GitHubContext) -> anyhow::Result<String> {
    let identity = Identity::from_context(ctx).context("failed to get PR number")?;
    Ok(identity.app_name())
}
