//! State of the app list.

use serde::Serialize;

use crate::model::App;
use crate::mvi::ViewState;

/// Fetch lifecycle of the app list.
///
/// Every variant carries the apps currently held; a failed or in-flight
/// fetch keeps whatever was there before.
#[derive(Debug, Clone, PartialEq)]
pub enum AppListState {
    /// A fetch is in flight.
    Loading { apps: Vec<App> },

    /// The last fetch succeeded.
    Ready { apps: Vec<App> },

    /// The last fetch failed.
    Errored {
        /// Apps from before the failed fetch, possibly empty.
        apps: Vec<App>,
        message: String,
    },
}

impl Default for AppListState {
    fn default() -> Self {
        Self::Loading { apps: Vec::new() }
    }
}

impl ViewState for AppListState {}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppListSnapshot {
    pub apps: Vec<App>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AppListState {
    pub fn apps(&self) -> &[App] {
        match self {
            Self::Loading { apps } | Self::Ready { apps } | Self::Errored { apps, .. } => apps,
        }
    }

    pub fn into_apps(self) -> Vec<App> {
        match self {
            Self::Loading { apps } | Self::Ready { apps } | Self::Errored { apps, .. } => apps,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Errored { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> AppListSnapshot {
        AppListSnapshot {
            apps: self.apps().to_vec(),
            loading: self.is_loading(),
            error: self.error_message().map(String::from),
        }
    }
}
