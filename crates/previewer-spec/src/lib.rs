mod app;
mod component;
mod error;
mod load;

pub use app::{AppAlertSpec, AppDomainSpec, AppSpec};
pub use component::{
    AppFunctionsSpec, AppJobSpec, AppServiceSpec, AppStaticSiteSpec, AppWorkerSpec,
    BuildableComponent, ComponentError, ComponentKind, GitHubSourceSpec,
};
pub use error::{Result, SpecError};
pub use load::{SpecFormat, load_app_spec};
