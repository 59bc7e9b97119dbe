//! Utterance-to-intent classification.
//!
//! # Responsibility
//! - Map one lower-cased Spanish utterance to a typed [`Intent`].
//! - Delegate date extraction to the temporal parser.
//!
//! # Invariants
//! - Domain rules are an explicit ordered list evaluated top-to-bottom;
//!   the first rule producing an intent wins. More specific phrasings are
//!   tested before generic domain-only matches.
//! - `classify` is pure for a fixed `today`: same text, same intent.

use crate::model::{
    HistoryDomain, Intent, PreventiveQuery, ProfileQuery, ScheduleQuery, ScheduleScreen,
};
use crate::temporal::{date_range, parse_date_text, RangeLabel};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static HISTORY_PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(últim[oa]s?\s*\d*\s*registros?)|(lo\s+último\s+que\s+registr[ée]?)")
        .expect("valid history phrase regex")
});
static PREVENTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"preventiv").expect("valid preventive regex"));
static LAST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"últim|ultimo|último").expect("valid last regex"));
static MAINTENANCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"manten|servici").expect("valid maintenance regex"));
static NEXT_DUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"próxim|proxim|siguient|vence|por vencer").expect("valid due regex"));
static OVERDUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"vencid|atrasad").expect("valid overdue regex"));
static GENERAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"general").expect("valid general regex"));
static EMERGENCY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"emergenc").expect("valid emergency regex"));
static ROUTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\brutas?\b").expect("valid route regex"));
static SOAT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"soat").expect("valid soat regex"));
static TECH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"t[eé]cnic|tecnomec").expect("valid tech regex"));
static PICO_PLACA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"pico\s*y\s*placa|picoyplaca").expect("valid pico y placa regex"));
static DOCS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"document|estado de mis documento").expect("valid documents regex"));
static SCHEDULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"agenda|calendari|daily").expect("valid schedule regex"));
static THIS_WEEK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"esta\s+semana").expect("valid week regex"));
static THIS_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"este\s+mes").expect("valid month regex"));
static NEXT_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"pr[óo]ximo\s+mes").expect("valid next month regex"));

type Rule = fn(&str, NaiveDate) -> Option<Intent>;

/// Domain rules in their fixed priority order. The order is part of the
/// classification contract: the first matching rule commits the domain.
const RULES: &[Rule] = &[
    preventive_rule,
    general_rule,
    emergency_rule,
    route_rule,
    profile_rule,
    schedule_rule,
];

/// Classifies one utterance into a typed intent.
///
/// Returns `None` when no domain keyword is present; the orchestrator then
/// falls back to catalog lookup, keyword aliases or the generic response.
pub fn classify(text: &str, today: NaiveDate) -> Option<Intent> {
    let lowered = text.to_lowercase();
    RULES.iter().find_map(|rule| rule(&lowered, today))
}

/// Preventive: the domain keyword always commits; sub-rules go from the
/// most specific phrasing down to the summary fallback.
fn preventive_rule(text: &str, today: NaiveDate) -> Option<Intent> {
    if !PREVENTIVE_RE.is_match(text) {
        return None;
    }
    if HISTORY_PHRASE_RE.is_match(text) {
        return Some(Intent::History(HistoryDomain::Preventive));
    }
    if LAST_RE.is_match(text) && MAINTENANCE_RE.is_match(text) {
        return Some(Intent::Preventive(PreventiveQuery::LastDone));
    }
    if NEXT_DUE_RE.is_match(text) {
        return Some(Intent::Preventive(PreventiveQuery::NextDue));
    }
    if OVERDUE_RE.is_match(text) {
        return Some(Intent::Preventive(PreventiveQuery::Overdue));
    }
    if let Some(date) = parse_date_text(text, today) {
        return Some(Intent::Preventive(PreventiveQuery::ListByDate(date)));
    }
    Some(Intent::Preventive(PreventiveQuery::Summary))
}

/// General/Emergency/Route only claim the history phrasing; a bare domain
/// keyword declines here and resolves through the alias fallback instead.
fn general_rule(text: &str, _today: NaiveDate) -> Option<Intent> {
    (GENERAL_RE.is_match(text) && HISTORY_PHRASE_RE.is_match(text))
        .then_some(Intent::History(HistoryDomain::General))
}

fn emergency_rule(text: &str, _today: NaiveDate) -> Option<Intent> {
    (EMERGENCY_RE.is_match(text) && HISTORY_PHRASE_RE.is_match(text))
        .then_some(Intent::History(HistoryDomain::Emergency))
}

fn route_rule(text: &str, _today: NaiveDate) -> Option<Intent> {
    (ROUTE_RE.is_match(text) && HISTORY_PHRASE_RE.is_match(text))
        .then_some(Intent::History(HistoryDomain::Route))
}

fn profile_rule(text: &str, _today: NaiveDate) -> Option<Intent> {
    if SOAT_RE.is_match(text) {
        return Some(Intent::Profile(ProfileQuery::SoatDue));
    }
    if TECH_RE.is_match(text) {
        return Some(Intent::Profile(ProfileQuery::TechDue));
    }
    if PICO_PLACA_RE.is_match(text) {
        return Some(Intent::Profile(ProfileQuery::PicoPlaca));
    }
    if DOCS_RE.is_match(text) {
        return Some(Intent::Profile(ProfileQuery::DocsStatus));
    }
    None
}

fn schedule_rule(text: &str, today: NaiveDate) -> Option<Intent> {
    if !SCHEDULE_RE.is_match(text) {
        return None;
    }

    let screen = if text.contains("daily") {
        ScheduleScreen::Daily
    } else {
        ScheduleScreen::Agenda
    };

    let labeled_range = |label: RangeLabel, spanish: &'static str| Intent::Schedule {
        screen,
        query: ScheduleQuery::ListRange {
            range: date_range(label, today),
            label: spanish,
        },
    };

    if text.contains("hoy") {
        return Some(labeled_range(RangeLabel::Today, "hoy"));
    }
    if text.contains("mañana") {
        return Some(labeled_range(RangeLabel::Tomorrow, "mañana"));
    }
    if THIS_WEEK_RE.is_match(text) {
        return Some(labeled_range(RangeLabel::ThisWeek, "esta semana"));
    }
    if THIS_MONTH_RE.is_match(text) {
        return Some(labeled_range(RangeLabel::ThisMonth, "este mes"));
    }
    if NEXT_MONTH_RE.is_match(text) {
        return Some(labeled_range(RangeLabel::NextMonth, "próximo mes"));
    }
    if let Some(date) = parse_date_text(text, today) {
        return Some(Intent::Schedule {
            screen,
            query: ScheduleQuery::ListByDate(date),
        });
    }
    // Summary is always attributed to the Agenda screen.
    Some(Intent::Schedule {
        screen: ScheduleScreen::Agenda,
        query: ScheduleQuery::Summary,
    })
}
