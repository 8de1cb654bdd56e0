use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-category report counts as returned by the statistics endpoint.
pub type CategoryStats = BTreeMap<String, u64>;

/// Whether a report describes a lost or a found item.
///
/// The backend stores the flag as a free-form string, so anything outside
/// the two known values is preserved in [`ReportKind::Other`] instead of
/// failing the whole result set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ReportKind {
    Lost,
    Found,
    Other(String),
}

impl ReportKind {
    /// Short label used when rendering result rows.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            ReportKind::Lost => "lost",
            ReportKind::Found => "found",
            ReportKind::Other(raw) => raw,
        }
    }
}

impl From<String> for ReportKind {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "lost" => ReportKind::Lost,
            "found" => ReportKind::Found,
            _ => ReportKind::Other(raw),
        }
    }
}

impl From<ReportKind> for String {
    fn from(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Lost => "lost".to_string(),
            ReportKind::Found => "found".to_string(),
            ReportKind::Other(raw) => raw,
        }
    }
}

/// One item report as the backend serializes it.
///
/// Field names follow the backend's camelCase JSON; only the identifier,
/// name and kind are guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Hex object identifier assigned by the backend.
    #[serde(rename = "_id")]
    pub id: String,
    /// Lost/found flag.
    pub item_type: ReportKind,
    /// Display name; the field the search endpoint matches against.
    pub item_name: String,
    #[serde(default)]
    pub item_category: Option<String>,
    #[serde(default)]
    pub item_location: Option<String>,
    /// User-entered date, free-form.
    #[serde(default)]
    pub item_date: Option<String>,
    #[serde(default)]
    pub item_description: Option<String>,
    /// Base64 thumbnail payload.
    #[serde(default)]
    pub item_photo: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Server-stamped creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ReportSummary {
    /// Build a summary with the mandatory fields set and everything else empty.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        item_name: impl Into<String>,
        item_type: ReportKind,
    ) -> Self {
        Self {
            id: id.into(),
            item_type,
            item_name: item_name.into(),
            item_category: None,
            item_location: None,
            item_date: None,
            item_description: None,
            item_photo: None,
            email: None,
            phone: None,
            created_at: None,
        }
    }
}
