//! Typed intent model produced by the classifier.
//!
//! # Invariants
//! - An operation can only be paired with its declared domain: the nesting
//!   of per-domain query enums makes a mismatched pair unrepresentable.

use crate::temporal::DateRange;
use chrono::NaiveDate;

/// One classified user request: a domain plus a domain-scoped operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Preventive(PreventiveQuery),
    Profile(ProfileQuery),
    Schedule {
        screen: ScheduleScreen,
        query: ScheduleQuery,
    },
    /// "last 5 records" lookups against per-domain journals.
    History(HistoryDomain),
}

/// Queries against the preventive-maintenance task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreventiveQuery {
    LastDone,
    NextDue,
    Overdue,
    ListByDate(NaiveDate),
    Summary,
}

/// Document-field lookups on the rider profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileQuery {
    SoatDue,
    TechDue,
    PicoPlaca,
    DocsStatus,
}

/// The two appointment screens sharing one query shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleScreen {
    Agenda,
    Daily,
}

impl ScheduleScreen {
    pub fn name(self) -> &'static str {
        match self {
            Self::Agenda => "Agenda",
            Self::Daily => "Daily",
        }
    }
}

/// Date-scoped appointment queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleQuery {
    ListByDate(NaiveDate),
    ListRange {
        range: DateRange,
        /// Spanish label echoed back in the answer ("hoy", "esta semana", ...).
        label: &'static str,
    },
    Summary,
}

/// Domains whose journals answer "últimos 5 registros".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDomain {
    Preventive,
    General,
    Emergency,
    Route,
}
