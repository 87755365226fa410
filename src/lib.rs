//! Fetch showcased app records from a hosted record store and expose them
//! as a loading / ready / errored list with status buckets.

pub mod app_list;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod report;
