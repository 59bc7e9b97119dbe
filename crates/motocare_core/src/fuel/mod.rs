//! Fuel-economy engine.
//!
//! # Responsibility
//! - Maintain the fuel ledger (one optional baseline plus fillups) and the
//!   configured price per gallon.
//! - Produce consumption reports and answer the quick text commands.
//!
//! # Invariants
//! - State transitions are pure: they consume a state and return the next
//!   state with the user-facing message, leaving persistence to the service.
//! - A failed transition leaves both the in-memory state and the stored data
//!   untouched.

mod service;
mod state;

pub use service::FuelService;
pub use state::{FuelError, FuelResult, FuelState, Transition};
