//! App list lifecycle: loading, ready, errored.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{AppListController, ControllerOptions};
pub use intent::AppListIntent;
pub use reducer::AppListReducer;
pub use state::{AppListSnapshot, AppListState};
