//! Audit-history and journal records read by the "last 5" queries.
//!
//! Both collections are append-only and owned by external collaborators;
//! the core only reads and sorts them.

use serde::{Deserialize, Serialize};

/// One row of the app-wide action history (`@app_history`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub action: String,
    /// Screen name as recorded by the action logger, e.g. "RouteScreen".
    pub screen: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// ISO-8601 timestamp.
    pub timestamp: String,
}

/// One per-domain journal record (`@journal_entries_*`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// ISO-8601 timestamp.
    pub date: String,
}
