use motocare_core::model::JournalEntry;
use motocare_core::store::{keys, KeyValueStore, KvJournal, MemoryKeyValueStore};
use motocare_core::{FuelError, FuelService};

fn service(store: &MemoryKeyValueStore) -> FuelService<'_, MemoryKeyValueStore, KvJournal<'_>> {
    FuelService::load(store, KvJournal::new(store, keys::JOURNAL_EMERGENCY))
}

#[test]
fn second_baseline_is_rejected_without_touching_storage() {
    let store = MemoryKeyValueStore::new();
    let mut fuel = service(&store);

    fuel.add_baseline(10000.0).expect("first baseline");
    let stored = store
        .get(keys::FUEL_ENTRIES)
        .expect("memory get")
        .expect("entries persisted");

    let err = fuel.add_baseline(10500.0).expect_err("second baseline");
    assert_eq!(err, FuelError::BaselineExists);
    assert_eq!(err.to_string(), "Ya existe una primera tanqueada registrada.");

    assert_eq!(fuel.entries().len(), 1);
    let after = store
        .get(keys::FUEL_ENTRIES)
        .expect("memory get")
        .expect("entries persisted");
    assert_eq!(stored, after);
}

#[test]
fn fillup_rejects_any_non_positive_input() {
    let store = MemoryKeyValueStore::new();
    let mut fuel = service(&store);

    assert_eq!(
        fuel.add_fillup(0.0, 16000.0, 10300.0).expect_err("amount"),
        FuelError::InvalidFillup
    );
    assert_eq!(
        fuel.add_fillup(128000.0, 16000.0, f64::NAN)
            .expect_err("odometer"),
        FuelError::InvalidFillup
    );
    assert!(fuel.entries().is_empty());
    assert!(store.get(keys::FUEL_ENTRIES).expect("memory get").is_none());
}

#[test]
fn single_entry_report_runs_from_the_baseline() {
    let store = MemoryKeyValueStore::new();
    let mut fuel = service(&store);

    fuel.add_baseline(10000.0).expect("baseline");
    let message = fuel
        .add_fillup(128000.0, 16000.0, 10300.0)
        .expect("fillup");
    assert_eq!(
        message,
        "Tanqueada registrada: $ 128.000 (8.00 galones) — Velocímetro 10300 kilómetros."
    );

    let report = fuel.report_last_n(1).expect("report");
    assert!(report.starts_with("📊 Informe de Combustible"));
    assert!(report.contains("• Velocímetro inicial: 10000 kilómetros"));
    assert!(report.contains("• Kilómetros recorridos: 300 kilómetros"));
    assert!(report.contains("• Rendimiento: 9.91 kilómetros por litro"));
    assert!(report.contains("• Total gastado: $ 128.000"));
}

#[test]
fn report_without_a_ledger_or_baseline_fails() {
    let store = MemoryKeyValueStore::new();
    let mut fuel = service(&store);

    assert_eq!(fuel.report_last_n(1).expect_err("empty"), FuelError::NoLedger);

    fuel.add_fillup(64000.0, 16000.0, 10100.0).expect("fillup");
    assert_eq!(
        fuel.report_last_n(1).expect_err("no baseline"),
        FuelError::NoBaselineOdometer
    );
}

#[test]
fn clear_all_is_idempotent_and_keeps_the_price() {
    let store = MemoryKeyValueStore::new();
    let mut fuel = service(&store);

    fuel.set_price(18000.0).expect("price");
    fuel.add_baseline(10000.0).expect("baseline");

    let first = fuel.clear_all();
    let second = fuel.clear_all();
    assert_eq!(first, second);
    assert!(fuel.entries().is_empty());
    assert_eq!(fuel.price(), 18000.0);
    assert_eq!(
        store.get(keys::FUEL_PRICE).expect("memory get").as_deref(),
        Some("18000")
    );
}

#[test]
fn baseline_stays_protected_while_fillups_exist() {
    let store = MemoryKeyValueStore::new();
    let mut fuel = service(&store);

    fuel.add_baseline(10000.0).expect("baseline");
    fuel.add_fillup(32000.0, 16000.0, 10100.0).expect("fillup");
    let baseline_id = fuel
        .entries()
        .iter()
        .find(|entry| entry.is_baseline())
        .expect("baseline entry")
        .id
        .clone();

    let err = fuel.delete_entry(&baseline_id).expect_err("protected");
    assert_eq!(err, FuelError::BaselineProtected);
    assert_eq!(fuel.entries().len(), 2);
}

#[test]
fn quick_commands_answer_in_place() {
    let store = MemoryKeyValueStore::new();
    let mut fuel = service(&store);

    assert_eq!(
        fuel.handle("ver precio del galón"),
        "El precio por galón actual es $ 16.000."
    );
    assert_eq!(fuel.handle("últimos 5"), "Aún no tengo registros de tanqueo.");

    let summary = fuel.handle("resumen");
    assert!(summary.starts_with("Resumen:"));
    assert!(summary.contains("Sugerencia: registra velocímetro para calcular distancias."));

    fuel.add_baseline(10000.0).expect("baseline");
    fuel.add_fillup(64000.0, 16000.0, 10200.0).expect("fillup");
    let listing = fuel.handle("muéstrame los últimos 5");
    assert!(listing.starts_with("Últimos 2 registros:"));
    assert!(listing.contains(" — baseline"));

    assert_eq!(
        fuel.handle("algo sin sentido"),
        "Usa \"Acciones rápidas\" para gestionar tu combustible."
    );
}

#[test]
fn transitions_are_journaled_most_recent_first() {
    let store = MemoryKeyValueStore::new();
    let mut fuel = service(&store);

    fuel.add_baseline(10000.0).expect("baseline");
    fuel.add_fillup(64000.0, 16000.0, 10200.0).expect("fillup");

    let raw = store
        .get(keys::JOURNAL_EMERGENCY)
        .expect("memory get")
        .expect("journal persisted");
    let entries: Vec<JournalEntry> = serde_json::from_str(&raw).expect("journal json");
    assert_eq!(entries.len(), 2);
    assert!(entries[0]
        .text
        .as_deref()
        .expect("journal text")
        .starts_with("⛽ Última tanqueada"));
    assert!(entries[1]
        .text
        .as_deref()
        .expect("journal text")
        .starts_with("⛽ Primera tanqueada"));
}
