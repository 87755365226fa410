//! App records and their status buckets.

mod app;
mod buckets;

pub use app::{App, AppStatus, AppType};
pub use buckets::{partition_by_status, Section, StatusBuckets};
