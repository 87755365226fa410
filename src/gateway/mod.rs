//! Data access to the remote record store.

mod error;
mod rest;

use async_trait::async_trait;

use crate::model::App;

pub use error::{FetchFailure, FALLBACK_MESSAGE};
pub use rest::RestGateway;

/// Read access to the `apps` collection.
///
/// Implementations are stateless between calls and never retry; retry
/// policy belongs to the caller.
#[async_trait]
pub trait AppGateway: Send + Sync {
    /// Fetch every app record, newest `created_at` first.
    ///
    /// The returned order is the store's order. Any failure (network,
    /// store, malformed body) is returned as-is.
    async fn fetch_all_apps(&self) -> Result<Vec<App>, FetchFailure>;
}
