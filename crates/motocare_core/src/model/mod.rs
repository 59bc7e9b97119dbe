//! Domain model shared by the query engine and the fuel-economy engine.

pub mod fuel;
pub mod history;
pub mod intent;
pub mod snapshot;

pub use fuel::{FuelEntry, FuelEntryKind, LITRES_PER_GALLON};
pub use history::{HistoryItem, JournalEntry};
pub use intent::{
    HistoryDomain, Intent, PreventiveQuery, ProfileQuery, ScheduleQuery, ScheduleScreen,
};
pub use snapshot::{
    Appointment, DocumentsExpiry, EmergencyState, GeneralState, PreventiveState, PreventiveTask,
    ProfileState, RouteState, ScheduleState, ScreenDomain, ScreenStateSnapshot,
};
