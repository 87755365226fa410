//! Owner of the app list lifecycle.
//!
//! The controller is the only writer of [`AppListState`]. It runs the
//! gateway query, folds the outcome through [`AppListReducer`] and
//! publishes a fresh [`AppListSnapshot`] to subscribers after every
//! transition.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::app_list::intent::AppListIntent;
use crate::app_list::reducer::AppListReducer;
use crate::app_list::state::{AppListSnapshot, AppListState};
use crate::config::ControllerConfig;
use crate::gateway::{AppGateway, FetchFailure};
use crate::model::{partition_by_status, App, StatusBuckets};
use crate::mvi::Reducer;

/// Behavior switches for [`AppListController`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerOptions {
    /// When false, overlapping fetches race and the one that completes
    /// last wins. When true, only the most recently started fetch may
    /// update state.
    pub discard_stale_responses: bool,
}

impl From<&ControllerConfig> for ControllerOptions {
    fn from(config: &ControllerConfig) -> Self {
        Self {
            discard_stale_responses: config.discard_stale_responses,
        }
    }
}

struct Inner {
    state: AppListState,
    /// Sequence number of the most recently started fetch.
    latest_request: u64,
}

pub struct AppListController {
    gateway: Arc<dyn AppGateway>,
    options: ControllerOptions,
    inner: Mutex<Inner>,
    notifier: watch::Sender<AppListSnapshot>,
}

impl AppListController {
    /// Create a controller in the initial `Loading` state without fetching.
    pub fn new(gateway: Arc<dyn AppGateway>, options: ControllerOptions) -> Self {
        let state = AppListState::default();
        let (notifier, _) = watch::channel(state.snapshot());

        Self {
            gateway,
            options,
            inner: Mutex::new(Inner {
                state,
                latest_request: 0,
            }),
            notifier,
        }
    }

    /// Create a controller and spawn its initial fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn launch(gateway: Arc<dyn AppGateway>, options: ControllerOptions) -> Arc<Self> {
        let controller = Arc::new(Self::new(gateway, options));
        controller.spawn_refetch();
        controller
    }

    /// Synchronous snapshot of `{apps, loading, error}`.
    pub fn state(&self) -> AppListSnapshot {
        self.inner.lock().state.snapshot()
    }

    /// Current apps split by status.
    pub fn buckets(&self) -> StatusBuckets {
        partition_by_status(self.inner.lock().state.apps())
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<AppListSnapshot> {
        self.notifier.subscribe()
    }

    /// Run one fetch and fold its result into state.
    ///
    /// Never fails: gateway errors end up in the `error` field. A refetch
    /// issued while another is in flight does not cancel it.
    pub async fn refetch(&self) {
        let request = self.begin_fetch();
        let result = self.gateway.fetch_all_apps().await;
        self.finish_fetch(request, result);
    }

    /// Refetch on a background task.
    pub fn spawn_refetch(self: &Arc<Self>) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        tokio::spawn(async move { controller.refetch().await })
    }

    fn begin_fetch(&self) -> u64 {
        let mut inner = self.inner.lock();
        inner.latest_request += 1;
        let request = inner.latest_request;
        tracing::debug!(request, "Fetch started");
        self.apply(&mut inner, AppListIntent::FetchStarted);
        request
    }

    fn finish_fetch(&self, request: u64, result: Result<Vec<App>, FetchFailure>) {
        let mut inner = self.inner.lock();

        if self.options.discard_stale_responses && request != inner.latest_request {
            tracing::debug!(
                request,
                latest = inner.latest_request,
                "Discarding superseded fetch result"
            );
            return;
        }

        let intent = match result {
            Ok(apps) => {
                tracing::info!(request, count = apps.len(), "App list loaded");
                AppListIntent::FetchSucceeded { apps }
            }
            Err(failure) => {
                tracing::warn!(request, error = %failure, "App list fetch failed");
                AppListIntent::FetchFailed { failure }
            }
        };
        self.apply(&mut inner, intent);
    }

    fn apply(&self, inner: &mut Inner, intent: AppListIntent) {
        let state = std::mem::take(&mut inner.state);
        inner.state = AppListReducer::reduce(state, intent);
        self.notifier.send_replace(inner.state.snapshot());
    }
}
