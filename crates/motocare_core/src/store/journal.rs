//! Append-only journal sink over key-value storage.
//!
//! # Invariants
//! - Entries are stored most-recent-first.
//! - Append is fire-and-forget: failures are logged and swallowed so a
//!   journal hiccup never surfaces in a user-facing answer.

use super::{get_json, put_json, KeyValueStore};
use crate::model::JournalEntry;
use chrono::Utc;
use log::warn;
use uuid::Uuid;

/// Sink for side-effect log lines emitted by the engines.
pub trait JournalSink {
    fn append(&self, text: &str);
}

/// Journal persisted as a JSON list under one storage key.
pub struct KvJournal<'a> {
    store: &'a dyn KeyValueStore,
    key: &'static str,
}

impl<'a> KvJournal<'a> {
    pub fn new(store: &'a dyn KeyValueStore, key: &'static str) -> Self {
        Self { store, key }
    }
}

impl JournalSink for KvJournal<'_> {
    fn append(&self, text: &str) {
        let mut entries: Vec<JournalEntry> = match get_json(self.store, self.key) {
            Ok(found) => found.unwrap_or_default(),
            Err(err) => {
                warn!(
                    "event=journal_append module=store status=error key={} error={}",
                    self.key, err
                );
                return;
            }
        };

        entries.insert(
            0,
            JournalEntry {
                id: Uuid::new_v4().to_string(),
                text: Some(text.to_string()),
                image: None,
                date: Utc::now().to_rfc3339(),
            },
        );

        if let Err(err) = put_json(self.store, self.key, &entries) {
            warn!(
                "event=journal_append module=store status=error key={} error={}",
                self.key, err
            );
        }
    }
}
