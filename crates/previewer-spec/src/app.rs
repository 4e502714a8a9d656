use crate::component::{
    AppFunctionsSpec, AppJobSpec, AppServiceSpec, AppStaticSiteSpec, AppWorkerSpec,
    BuildableComponent,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Deployment descriptor of an app and all of its components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSpec {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<AppDomainSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<AppAlertSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<AppServiceSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workers: Vec<AppWorkerSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<AppJobSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub static_sites: Vec<AppStaticSiteSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<AppFunctionsSpec>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppDomainSpec {
    pub domain: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppAlertSpec {
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl AppSpec {
    /// Iterates every buildable component: services, workers, jobs, static
    /// sites, then functions.
    pub fn components(&self) -> impl Iterator<Item = &dyn BuildableComponent> {
        let services = self.services.iter().map(|c| c as &dyn BuildableComponent);
        let workers = self.workers.iter().map(|c| c as &dyn BuildableComponent);
        let jobs = self.jobs.iter().map(|c| c as &dyn BuildableComponent);
        let static_sites = self
            .static_sites
            .iter()
            .map(|c| c as &dyn BuildableComponent);
        let functions = self.functions.iter().map(|c| c as &dyn BuildableComponent);

        services
            .chain(workers)
            .chain(jobs)
            .chain(static_sites)
            .chain(functions)
    }

    /// Calls `f` on every buildable component in the same order as
    /// [`AppSpec::components`], stopping at the first error.
    pub fn for_each_component_mut<E, F>(&mut self, mut f: F) -> std::result::Result<(), E>
    where
        F: FnMut(&mut dyn BuildableComponent) -> std::result::Result<(), E>,
    {
        let services = self
            .services
            .iter_mut()
            .map(|c| c as &mut dyn BuildableComponent);
        let workers = self
            .workers
            .iter_mut()
            .map(|c| c as &mut dyn BuildableComponent);
        let jobs = self.jobs.iter_mut().map(|c| c as &mut dyn BuildableComponent);
        let static_sites = self
            .static_sites
            .iter_mut()
            .map(|c| c as &mut dyn BuildableComponent);
        let functions = self
            .functions
            .iter_mut()
            .map(|c| c as &mut dyn BuildableComponent);

        let all = services
            .chain(workers)
            .chain(jobs)
            .chain(static_sites)
            .chain(functions);

        for component in all {
            f(component)?;
        }

        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
