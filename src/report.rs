//! Plain-text rendering of the app list for the command line.

use std::fmt::Write;

use crate::app_list::AppListSnapshot;
use crate::model::{partition_by_status, App};

/// Descriptions longer than this are cut with an ellipsis.
pub const DESCRIPTION_MAX_CHARS: usize = 120;

pub fn render(snapshot: &AppListSnapshot) -> String {
    let mut out = String::new();

    if snapshot.loading {
        out.push_str("Loading…\n");
        return out;
    }

    if let Some(error) = &snapshot.error {
        let _ = writeln!(out, "Error: {}", error);
    }

    let buckets = partition_by_status(&snapshot.apps);
    if buckets.is_empty() {
        out.push_str("No apps to show.\n");
        return out;
    }

    for section in buckets.sections() {
        let _ = writeln!(out, "\n{} ({})", section.title, section.apps.len());
        for app in section.apps {
            render_app(&mut out, app);
        }
    }
    out
}

fn render_app(out: &mut String, app: &App) {
    let _ = writeln!(
        out,
        "  • {} [{}] - {}",
        app.name,
        app.app_type.label(),
        app.status.label()
    );
    if !app.description.trim().is_empty() {
        let _ = writeln!(
            out,
            "    {}",
            truncate_description(&app.description, DESCRIPTION_MAX_CHARS)
        );
    }
    if let Some(link) = app.external_link() {
        let _ = writeln!(out, "    {}", link);
    }
    if let Some(store) = app.app_store_url.as_deref().filter(|u| !u.is_empty()) {
        let _ = writeln!(out, "    App Store: {}", store);
    }
}

/// Collapse whitespace and cut to `max_chars` characters.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let cut: String = collapsed.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
