//! Core domain logic for MotoCare.
//! This crate is the single source of truth for business invariants.

pub mod assistant;
pub mod catalog;
pub mod format;
pub mod fuel;
pub mod handlers;
pub mod intent;
pub mod logging;
pub mod model;
pub mod store;
pub mod temporal;

pub use assistant::Assistant;
pub use fuel::{FuelError, FuelService, FuelState};
pub use intent::classify;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{FuelEntry, Intent, ScreenDomain, ScreenStateSnapshot};
pub use store::{
    open_store, open_store_in_memory, JournalSink, KeyValueStore, KvJournal,
    MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
