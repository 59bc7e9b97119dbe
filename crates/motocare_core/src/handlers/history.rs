//! Recent-records lookups backed by the journal and the app history log.

use crate::format::bullets;
use crate::model::{HistoryDomain, HistoryItem, JournalEntry};
use crate::store::{self, keys, KeyValueStore};
use crate::temporal::{parse_loose_datetime, short_datetime};
use log::warn;

const MAX_RECORDS: usize = 5;

/// Answers a "últimos registros" request for one domain.
///
/// Store failures degrade to an empty listing; the caller always gets text.
pub fn handle(domain: HistoryDomain, store: &dyn KeyValueStore) -> String {
    let (label, key) = match domain {
        HistoryDomain::Preventive => ("Preventivo", keys::JOURNAL_PREVENTIVE),
        HistoryDomain::General => ("General", keys::JOURNAL_GENERAL),
        HistoryDomain::Emergency => ("Emergencia", keys::JOURNAL_EMERGENCY),
        HistoryDomain::Route => ("Rutas", keys::JOURNAL_ROUTE),
    };

    let mut lines = journal_lines(store, key);
    if lines.is_empty() && matches!(domain, HistoryDomain::Route) {
        lines = app_history_lines(store, "route");
    }

    if lines.is_empty() {
        return format!("{label} — No encuentro registros recientes.");
    }
    format!(
        "{label} — Últimos {} registros:\n{}",
        lines.len(),
        bullets(lines)
    )
}

fn journal_lines(store: &dyn KeyValueStore, key: &str) -> Vec<String> {
    let mut entries: Vec<JournalEntry> = match store::get_json(store, key) {
        Ok(entries) => entries.unwrap_or_default(),
        Err(err) => {
            warn!("event=history_read module=handlers status=error key={key} err={err}");
            Vec::new()
        }
    };

    entries.sort_by(|a, b| sort_key(&b.date).cmp(&sort_key(&a.date)));
    entries
        .into_iter()
        .take(MAX_RECORDS)
        .map(|entry| {
            let mut line = stamp(&entry.date);
            if let Some(text) = entry.text.as_deref().filter(|t| !t.is_empty()) {
                line.push_str(" — ");
                line.push_str(text);
            }
            if entry.image.is_some() {
                line.push_str(" — [imagen adjunta]");
            }
            line
        })
        .collect()
}

fn app_history_lines(store: &dyn KeyValueStore, screen_needle: &str) -> Vec<String> {
    let mut items: Vec<HistoryItem> = match store::get_json(store, keys::APP_HISTORY) {
        Ok(items) => items.unwrap_or_default(),
        Err(err) => {
            warn!(
                "event=history_read module=handlers status=error key={} err={err}",
                keys::APP_HISTORY
            );
            Vec::new()
        }
    };

    items.retain(|item| item.screen.to_lowercase().contains(screen_needle));
    items.sort_by(|a, b| sort_key(&b.timestamp).cmp(&sort_key(&a.timestamp)));
    items
        .into_iter()
        .take(MAX_RECORDS)
        .map(|item| {
            let when = stamp(&item.timestamp);
            match &item.data {
                Some(data) => format!("{when} — {} — {data}", item.action),
                None => format!("{when} — {}", item.action),
            }
        })
        .collect()
}

/// Ordering key for stored date strings. Legacy entries mix `DD/MM/YYYY`
/// with RFC 3339 forms, so a lexicographic sort would misorder them; compare
/// parsed datetimes first and fall back to the raw string for the rest.
fn sort_key(raw: &str) -> (Option<chrono::NaiveDateTime>, String) {
    (parse_loose_datetime(raw), raw.to_string())
}

/// Readable timestamp, falling back to the raw stored value.
fn stamp(raw: &str) -> String {
    parse_loose_datetime(raw)
        .map(short_datetime)
        .unwrap_or_else(|| raw.to_string())
}
