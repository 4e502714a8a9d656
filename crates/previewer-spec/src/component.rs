use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Reference to a branch of a GitHub repository a component is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubSourceSpec {
    /// `owner/name` of the source repository.
    #[serde(default)]
    pub repo: String,

    #[serde(default)]
    pub branch: String,

    #[serde(default)]
    pub deploy_on_push: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Service,
    Worker,
    Job,
    StaticSite,
    Function,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComponentKind::Service => "service",
            ComponentKind::Worker => "worker",
            ComponentKind::Job => "job",
            ComponentKind::StaticSite => "static site",
            ComponentKind::Function => "function",
        };
        f.write_str(s)
    }
}

/// Raised by a component visitor that refuses to update a component.
#[derive(Error, Debug)]
pub enum ComponentError {
    #[error("{kind} '{name}' rejected source update: {reason}")]
    Rejected {
        kind: ComponentKind,
        name: String,
        reason: String,
    },
}

/// A spec entry that can be built from a version-control source.
pub trait BuildableComponent {
    fn kind(&self) -> ComponentKind;

    fn name(&self) -> &str;

    fn github(&self) -> Option<&GitHubSourceSpec>;

    fn github_mut(&mut self) -> Option<&mut GitHubSourceSpec>;

    fn set_github(&mut self, source: Option<GitHubSourceSpec>);
}

macro_rules! buildable_component {
    ($(#[$meta:meta])* $ty:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct $ty {
            #[serde(default)]
            pub name: String,

            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub github: Option<GitHubSourceSpec>,

            /// Settings this crate does not interpret, kept as-is.
            #[serde(flatten)]
            pub extra: Map<String, Value>,
        }

        impl BuildableComponent for $ty {
            fn kind(&self) -> ComponentKind {
                $kind
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn github(&self) -> Option<&GitHubSourceSpec> {
                self.github.as_ref()
            }

            fn github_mut(&mut self) -> Option<&mut GitHubSourceSpec> {
                self.github.as_mut()
            }

            fn set_github(&mut self, source: Option<GitHubSourceSpec>) {
                self.github = source;
            }
        }
    };
}

buildable_component!(
    /// Long-running component serving HTTP traffic.
    AppServiceSpec,
    ComponentKind::Service
);
buildable_component!(
    /// Long-running component without public ingress.
    AppWorkerSpec,
    ComponentKind::Worker
);
buildable_component!(
    /// Component run to completion around deployments.
    AppJobSpec,
    ComponentKind::Job
);
buildable_component!(
    /// Static assets built once and served from a CDN.
    AppStaticSiteSpec,
    ComponentKind::StaticSite
);
buildable_component!(
    /// Serverless functions component.
    AppFunctionsSpec,
    ComponentKind::Function
);
