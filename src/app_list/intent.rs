use crate::gateway::FetchFailure;
use crate::model::App;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AppListIntent {
    /// A fetch was issued (initial load or refetch).
    FetchStarted,
    /// The gateway returned records, in store order.
    FetchSucceeded { apps: Vec<App> },
    FetchFailed { failure: FetchFailure },
}

impl Intent for AppListIntent {}
