//! Agenda/Daily appointment queries.

use super::MAX_RANGE_LINES;
use crate::format::bullets;
use crate::model::{Appointment, ScheduleQuery, ScheduleScreen, ScreenStateSnapshot};
use crate::temporal::{format_date_es, DateRange};
use chrono::{NaiveDate, NaiveDateTime};

/// Answers one schedule query for the given screen.
pub fn handle(
    screen: ScheduleScreen,
    query: &ScheduleQuery,
    snapshot: &ScreenStateSnapshot,
    today: NaiveDate,
) -> String {
    let appointments = dated_appointments(screen, snapshot);

    match query {
        ScheduleQuery::ListByDate(date) => list_by_date(screen, &appointments, *date),
        ScheduleQuery::ListRange { range, label } => {
            list_range(screen, &appointments, *range, label)
        }
        ScheduleQuery::Summary => summary_of(screen, &appointments, today),
    }
}

/// Summary line, also used by the cross-domain overview.
pub fn summary(screen: ScheduleScreen, snapshot: &ScreenStateSnapshot, today: NaiveDate) -> String {
    summary_of(screen, &dated_appointments(screen, snapshot), today)
}

/// Appointments with a readable date, paired with it for sorting.
fn dated_appointments<'s>(
    screen: ScheduleScreen,
    snapshot: &'s ScreenStateSnapshot,
) -> Vec<(&'s Appointment, NaiveDateTime)> {
    snapshot
        .schedule(screen)
        .map(|state| {
            state
                .appointments
                .iter()
                .filter_map(|appointment| appointment.when().map(|when| (appointment, when)))
                .collect()
        })
        .unwrap_or_default()
}

fn describe(appointment: &Appointment) -> String {
    match appointment.description.as_deref().filter(|d| !d.is_empty()) {
        Some(description) => format!("{} — {description}", appointment.title),
        None => appointment.title.clone(),
    }
}

fn list_by_date(
    screen: ScheduleScreen,
    appointments: &[(&Appointment, NaiveDateTime)],
    date: NaiveDate,
) -> String {
    let mut hits: Vec<&(&Appointment, NaiveDateTime)> = appointments
        .iter()
        .filter(|(_, when)| when.date() == date)
        .collect();
    if hits.is_empty() {
        return format!(
            "No encuentro eventos en {} para {}.",
            screen.name(),
            format_date_es(date)
        );
    }

    hits.sort_by_key(|(_, when)| *when);
    let lines: Vec<String> = hits
        .iter()
        .map(|(appointment, _)| describe(appointment))
        .collect();
    format!(
        "{} — {}:\n{}",
        screen.name(),
        format_date_es(date),
        bullets(lines)
    )
}

fn list_range(
    screen: ScheduleScreen,
    appointments: &[(&Appointment, NaiveDateTime)],
    range: DateRange,
    label: &str,
) -> String {
    let mut hits: Vec<&(&Appointment, NaiveDateTime)> = appointments
        .iter()
        .filter(|(_, when)| range.contains(when.date()))
        .collect();
    hits.sort_by_key(|(_, when)| *when);

    let suffix = if label.is_empty() {
        String::new()
    } else {
        format!(" ({label})")
    };
    if hits.is_empty() {
        return format!("{}{suffix}: sin eventos.", screen.name());
    }

    let total = hits.len();
    let lines: Vec<String> = hits
        .iter()
        .take(MAX_RANGE_LINES)
        .map(|(appointment, _)| describe(appointment))
        .collect();
    format!(
        "{}{suffix}: {total} evento(s).\n{}",
        screen.name(),
        bullets(lines)
    )
}

fn summary_of(
    screen: ScheduleScreen,
    appointments: &[(&Appointment, NaiveDateTime)],
    today: NaiveDate,
) -> String {
    let total = appointments.len();
    let today_count = appointments
        .iter()
        .filter(|(_, when)| when.date() == today)
        .count();
    let upcoming = appointments
        .iter()
        .filter(|(_, when)| when.date() > today)
        .count();
    format!(
        "{}: {total} en total, {today_count} hoy, {upcoming} próximas.",
        screen.name()
    )
}
