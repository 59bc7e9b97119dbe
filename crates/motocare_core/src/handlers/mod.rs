//! Per-domain query handlers.
//!
//! # Responsibility
//! - Turn one typed intent plus a read-only snapshot into formatted text.
//! - Provide the per-domain overview lines and the cross-domain summary.
//!
//! # Invariants
//! - Handlers never fail: missing or empty domain state is a normal branch
//!   with a fixed "no data" message.
//! - Date-scoped queries compare calendar days, not timestamps.
//! - Listings cap displayed lines while reporting the true total count.

pub mod history;
pub mod preventive;
pub mod profile;
pub mod schedule;

use crate::model::{ProfileQuery, ScheduleScreen, ScreenDomain, ScreenStateSnapshot};
use crate::temporal::{format_date_es, parse_loose_date};
use chrono::NaiveDate;

/// Maximum detail lines shown for range listings.
pub const MAX_RANGE_LINES: usize = 20;
/// Maximum detail lines shown for the overdue listing.
pub const MAX_OVERDUE_LINES: usize = 5;

/// One-line overview of a domain, used by alias fallback and the summary.
pub fn overview(domain: ScreenDomain, snapshot: &ScreenStateSnapshot, today: NaiveDate) -> String {
    match domain {
        ScreenDomain::Daily => schedule::summary(ScheduleScreen::Daily, snapshot, today),
        ScreenDomain::Agenda => schedule::summary(ScheduleScreen::Agenda, snapshot, today),
        ScreenDomain::General => {
            let services = snapshot
                .general
                .as_ref()
                .map(|st| st.services.len())
                .unwrap_or(0);
            let last = snapshot
                .general
                .as_ref()
                .and_then(|st| st.last_service.as_deref())
                .and_then(parse_loose_date)
                .map(format_date_es)
                .unwrap_or_else(|| "N/D".to_string());
            format!("General: {services} servicios. Último: {last}.")
        }
        ScreenDomain::Preventive => preventive::summary(snapshot, today),
        ScreenDomain::Emergency => {
            let state = snapshot.emergency.clone().unwrap_or_default();
            let mut line = format!("Emergencia: {} contacto(s).", state.contacts.len());
            if let Some(count) = state.entries_count.filter(|count| *count > 0) {
                line.push_str(&format!(" Entradas: {count}."));
            }
            line
        }
        ScreenDomain::Profile => profile::handle(ProfileQuery::DocsStatus, snapshot),
        ScreenDomain::Route => {
            let state = snapshot.route.clone().unwrap_or_default();
            let favorite = state.favorite.as_deref().unwrap_or("N/D");
            format!("Rutas: {}. Favorita: {favorite}.", state.routes.len())
        }
    }
}

/// Cross-domain summary block, one bullet per domain in fixed order.
pub fn context_summary(snapshot: &ScreenStateSnapshot, today: NaiveDate) -> String {
    let lines: Vec<String> = ScreenDomain::ALL
        .iter()
        .map(|domain| format!("• {}: {}", domain.name(), overview(*domain, snapshot, today)))
        .collect();
    format!("Resumen de tu aplicación:\n{}", lines.join("\n"))
}
