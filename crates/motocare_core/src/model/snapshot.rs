//! Read-only per-screen state snapshot.
//!
//! # Responsibility
//! - Mirror the JSON shape the screens persist under `@screen_states`.
//! - Convert stored date strings into calendar values on demand.
//!
//! # Invariants
//! - The query engine never mutates a snapshot; it is rebuilt from storage
//!   before each query.
//! - Unknown fields in stored records are ignored, missing ones default,
//!   so older app data always deserializes.

use crate::temporal::{parse_loose_date, parse_loose_datetime};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The seven functional areas of the companion app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenDomain {
    Daily,
    Agenda,
    General,
    Preventive,
    Emergency,
    Profile,
    Route,
}

impl ScreenDomain {
    /// Fixed iteration order used by the cross-domain summary.
    pub const ALL: [ScreenDomain; 7] = [
        ScreenDomain::Daily,
        ScreenDomain::Agenda,
        ScreenDomain::General,
        ScreenDomain::Preventive,
        ScreenDomain::Emergency,
        ScreenDomain::Profile,
        ScreenDomain::Route,
    ];

    /// Stable key used in stored records and summary bullets.
    pub fn name(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Agenda => "Agenda",
            Self::General => "General",
            Self::Preventive => "Preventive",
            Self::Emergency => "Emergency",
            Self::Profile => "Profile",
            Self::Route => "Route",
        }
    }
}

/// Snapshot of every screen's persisted state, keyed as the screens store it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenStateSnapshot {
    #[serde(rename = "Daily", default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<ScheduleState>,
    #[serde(rename = "Agenda", default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<ScheduleState>,
    #[serde(rename = "General", default, skip_serializing_if = "Option::is_none")]
    pub general: Option<GeneralState>,
    #[serde(rename = "Preventive", default, skip_serializing_if = "Option::is_none")]
    pub preventive: Option<PreventiveState>,
    #[serde(rename = "Emergency", default, skip_serializing_if = "Option::is_none")]
    pub emergency: Option<EmergencyState>,
    #[serde(rename = "Profile", default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileState>,
    #[serde(rename = "Route", default, skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteState>,
}

impl ScreenStateSnapshot {
    /// Returns the schedule record for one of the two appointment screens.
    pub fn schedule(&self, screen: crate::model::intent::ScheduleScreen) -> Option<&ScheduleState> {
        match screen {
            crate::model::intent::ScheduleScreen::Agenda => self.agenda.as_ref(),
            crate::model::intent::ScheduleScreen::Daily => self.daily.as_ref(),
        }
    }
}

/// State shared by the Agenda and Daily screens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleState {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

/// One appointment as the screens persist it; `date` stays a raw string
/// until queried.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: String,
    #[serde(default)]
    pub completed: bool,
}

impl Appointment {
    /// Stored date converted to a calendar value; `None` for unreadable data.
    pub fn when(&self) -> Option<NaiveDateTime> {
        parse_loose_datetime(&self.date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralState {
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_service: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreventiveState {
    #[serde(default)]
    pub tasks: Vec<PreventiveTask>,
}

/// One preventive-maintenance task, owned by the maintenance screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreventiveTask {
    pub id: String,
    pub description: String,
    /// ISO-8601 or legacy `DD/MM/YYYY`.
    pub due_date: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl PreventiveTask {
    pub fn due(&self) -> Option<NaiveDate> {
        parse_loose_date(&self.due_date)
    }

    pub fn completed_on(&self) -> Option<NaiveDate> {
        self.completed_at.as_deref().and_then(parse_loose_date)
    }

    /// Completion date falling back to the due date; drives "last done".
    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.completed_on().or_else(|| self.due())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyState {
    #[serde(default)]
    pub contacts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_expiry: Option<DocumentsExpiry>,
}

/// Expiry dates for the rider's legal documents, as ISO date strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentsExpiry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tecnico: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pico_placa_day: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteState {
    #[serde(default)]
    pub routes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<String>,
}
