use motocare_core::handlers::history;
use motocare_core::model::HistoryDomain;
use motocare_core::store::{keys, KeyValueStore, MemoryKeyValueStore};

#[test]
fn empty_journal_reports_no_recent_records() {
    let store = MemoryKeyValueStore::new();
    assert_eq!(
        history::handle(HistoryDomain::Emergency, &store),
        "Emergencia — No encuentro registros recientes."
    );
}

#[test]
fn journal_lists_most_recent_first_capped_at_five() {
    let entries: Vec<String> = (1..=7)
        .map(|day| {
            format!(
                r#"{{"id": "e{day}", "text": "Nota {day}", "date": "2025-06-0{day}T10:30:00"}}"#
            )
        })
        .collect();
    let store = MemoryKeyValueStore::new();
    store
        .put(keys::JOURNAL_GENERAL, &format!("[{}]", entries.join(",")))
        .expect("memory put should succeed");

    let answer = history::handle(HistoryDomain::General, &store);
    assert!(answer.starts_with("General — Últimos 5 registros:"));
    assert!(answer.contains("07/06/2025 10:30 — Nota 7"));
    assert!(!answer.contains("Nota 2"));
    // Most recent entry leads the listing.
    let first_bullet = answer.lines().nth(1).expect("first bullet");
    assert!(first_bullet.contains("Nota 7"));
}

#[test]
fn mixed_date_forms_sort_by_parsed_date() {
    // Legacy entries carry `DD/MM/YYYY` next to RFC 3339 values; a raw
    // string comparison would push the legacy form below every ISO one.
    let store = MemoryKeyValueStore::new();
    store
        .put(
            keys::JOURNAL_GENERAL,
            r#"[
                {"id": "e1", "text": "Cambio de aceite", "date": "2025-06-05T08:00:00"},
                {"id": "e2", "text": "Ajuste de cadena", "date": "10/06/2025"},
                {"id": "e3", "text": "Revisión de frenos", "date": "2025-06-07T12:00:00Z"}
            ]"#,
        )
        .expect("memory put should succeed");

    let answer = history::handle(HistoryDomain::General, &store);
    let bullets: Vec<&str> = answer.lines().skip(1).collect();
    assert_eq!(bullets.len(), 3);
    assert!(bullets[0].contains("Ajuste de cadena"));
    assert!(bullets[1].contains("Revisión de frenos"));
    assert!(bullets[2].contains("Cambio de aceite"));
}

#[test]
fn image_only_entries_are_flagged_as_attachments() {
    let store = MemoryKeyValueStore::new();
    store
        .put(
            keys::JOURNAL_PREVENTIVE,
            r#"[{"id": "e1", "image": "file:///cadena.jpg", "date": "2025-06-01T08:00:00"}]"#,
        )
        .expect("memory put should succeed");

    let answer = history::handle(HistoryDomain::Preventive, &store);
    assert!(answer.contains("01/06/2025 08:00 — [imagen adjunta]"));
}

#[test]
fn route_falls_back_to_the_app_history() {
    let store = MemoryKeyValueStore::new();
    store
        .put(
            keys::APP_HISTORY,
            r#"[
                {"id": "h1", "action": "Ruta guardada", "screen": "RouteScreen",
                 "data": {"km": 42}, "timestamp": "2025-06-02T07:15:00"},
                {"id": "h2", "action": "Contacto agregado", "screen": "EmergencyScreen",
                 "timestamp": "2025-06-03T09:00:00"}
            ]"#,
        )
        .expect("memory put should succeed");

    let answer = history::handle(HistoryDomain::Route, &store);
    assert!(answer.starts_with("Rutas — Últimos 1 registros:"));
    assert!(answer.contains("02/06/2025 07:15 — Ruta guardada — {\"km\":42}"));
    assert!(!answer.contains("Contacto agregado"));
}

#[test]
fn corrupt_journal_degrades_to_no_records() {
    let store = MemoryKeyValueStore::new();
    store
        .put(keys::JOURNAL_ROUTE, "not json")
        .expect("memory put should succeed");
    store
        .put(keys::APP_HISTORY, "also not json")
        .expect("memory put should succeed");

    assert_eq!(
        history::handle(HistoryDomain::Route, &store),
        "Rutas — No encuentro registros recientes."
    );
}
