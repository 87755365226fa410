use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle status of a showcased app.
///
/// Closed set: any other wire value is rejected at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppStatus {
    Successful,
    InProgress,
    Failed,
}

impl AppStatus {
    /// All statuses in display order.
    pub const ALL: [AppStatus; 3] = [
        AppStatus::Successful,
        AppStatus::InProgress,
        AppStatus::Failed,
    ];

    /// Wire value as stored in the record store.
    pub fn as_str(self) -> &'static str {
        match self {
            AppStatus::Successful => "successful",
            AppStatus::InProgress => "in-progress",
            AppStatus::Failed => "failed",
        }
    }

    /// Human readable label ("In Progress" for `in-progress`).
    pub fn label(self) -> &'static str {
        match self {
            AppStatus::Successful => "Successful",
            AppStatus::InProgress => "In Progress",
            AppStatus::Failed => "Failed",
        }
    }

    /// Title of the section listing apps with this status.
    pub fn section_title(self) -> &'static str {
        match self {
            AppStatus::Successful => "Successful Apps",
            AppStatus::InProgress => "In Progress",
            AppStatus::Failed => "Failed Experiments",
        }
    }
}

/// Platform the app targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppType {
    Web,
    Ios,
}

impl AppType {
    pub fn label(self) -> &'static str {
        match self {
            AppType::Web => "Web App",
            AppType::Ios => "iOS App",
        }
    }
}

/// One record of the `apps` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub id: String,
    pub name: String,
    /// Missing and `null` both read as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub status: AppStatus,
    #[serde(rename = "type")]
    pub app_type: AppType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_store_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Timestamp string; only used for ordering.
    pub created_at: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl App {
    /// URL opened when the app's card is activated.
    ///
    /// Bare hosts like `example.com` are promoted to `https://example.com`.
    pub fn external_link(&self) -> Option<String> {
        let url = self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())?;
        if url.starts_with("http") {
            Some(url.to_string())
        } else {
            Some(format!("https://{}", url))
        }
    }

    pub fn has_external_link(&self) -> bool {
        self.external_link().is_some()
    }
}
