//! Key-value storage contract and implementations.
//!
//! # Responsibility
//! - Express the read/write contract the core needs from device storage.
//! - Provide a SQLite-backed implementation plus an in-memory one for tests.
//!
//! # Invariants
//! - Values are JSON (or plain scalar) strings; dates cross this boundary
//!   as ISO-8601 text.
//! - Every mutating caller writes its full updated collection in one `put`,
//!   so a read-modify-write cycle is never partially visible.

use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod journal;
mod kv;

pub use journal::{JournalSink, KvJournal};
pub use kv::{open_store, open_store_in_memory, SqliteKeyValueStore};

/// Storage keys preserved from the original app's data layout.
pub mod keys {
    pub const SCREEN_STATES: &str = "@screen_states";
    pub const TAB_DATA: &str = "@tabData";
    pub const APP_HISTORY: &str = "@app_history";
    pub const FUEL_PRICE: &str = "fuelPricePerGallonCOP";
    pub const FUEL_ENTRIES: &str = "fuelEntries";
    pub const JOURNAL_PREVENTIVE: &str = "@journal_entries_Preventive";
    pub const JOURNAL_GENERAL: &str = "@journal_entries_general";
    pub const JOURNAL_EMERGENCY: &str = "@journal_entries_emergency";
    pub const JOURNAL_ROUTE: &str = "@journal_entries_route";
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for key-value reads and writes.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid stored value: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Read/write contract against device key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;
    fn delete(&self, key: &str) -> StoreResult<()>;
}

/// In-memory store for tests and the CLI probe.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Reads and deserializes one JSON value, mapping "missing" to `None`.
///
/// Corrupt JSON is surfaced as [`StoreError::InvalidData`]; callers at the
/// query boundary downgrade it to "no data".
pub fn get_json<T: serde::de::DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> StoreResult<Option<T>> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| StoreError::InvalidData(format!("key `{key}`: {err}"))),
        None => Ok(None),
    }
}

/// Serializes and writes one JSON value under `key`.
pub fn put_json<T: serde::Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> StoreResult<()> {
    let raw = serde_json::to_string(value)
        .map_err(|err| StoreError::InvalidData(format!("key `{key}`: {err}")))?;
    store.put(key, &raw)
}
