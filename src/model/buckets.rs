use serde::Serialize;

use super::app::{App, AppStatus};

/// Apps grouped by status.
///
/// Each bucket keeps the relative order the apps had in the source
/// collection. Empty buckets are normal and say nothing about whether data
/// has been loaded yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatusBuckets {
    pub successful: Vec<App>,
    pub in_progress: Vec<App>,
    pub failed: Vec<App>,
}

/// A non-empty bucket together with its display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub status: AppStatus,
    pub title: &'static str,
    pub apps: &'a [App],
}

/// Split `apps` into one bucket per status.
pub fn partition_by_status(apps: &[App]) -> StatusBuckets {
    let mut buckets = StatusBuckets::default();
    for app in apps {
        buckets.bucket_mut(app.status).push(app.clone());
    }
    buckets
}

impl StatusBuckets {
    pub fn bucket(&self, status: AppStatus) -> &[App] {
        match status {
            AppStatus::Successful => &self.successful,
            AppStatus::InProgress => &self.in_progress,
            AppStatus::Failed => &self.failed,
        }
    }

    fn bucket_mut(&mut self, status: AppStatus) -> &mut Vec<App> {
        match status {
            AppStatus::Successful => &mut self.successful,
            AppStatus::InProgress => &mut self.in_progress,
            AppStatus::Failed => &mut self.failed,
        }
    }

    /// Non-empty buckets in display order.
    pub fn sections(&self) -> Vec<Section<'_>> {
        AppStatus::ALL
            .iter()
            .map(|&status| Section {
                status,
                title: status.section_title(),
                apps: self.bucket(status),
            })
            .filter(|section| !section.apps.is_empty())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.successful.len() + self.in_progress.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
