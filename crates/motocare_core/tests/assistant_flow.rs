use chrono::NaiveDate;
use motocare_core::store::{keys, KeyValueStore, MemoryKeyValueStore};
use motocare_core::Assistant;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 11).expect("valid date")
}

fn store_with_snapshot(snapshot: &str) -> MemoryKeyValueStore {
    let store = MemoryKeyValueStore::new();
    store
        .put(keys::SCREEN_STATES, snapshot)
        .expect("memory put should succeed");
    store
}

#[test]
fn catalog_question_answers_before_anything_else() {
    let store = MemoryKeyValueStore::new();
    let mut assistant = Assistant::new(&store);

    let answer = assistant.answer_on("  ¿Cada cuánto debo CAMBIAR el aceite de mi moto?  ", today());
    assert!(answer.contains("2.000-3.000 km"));
}

#[test]
fn agenda_today_lists_only_todays_events() {
    let store = store_with_snapshot(
        r#"{
            "Agenda": {
                "appointments": [
                    {"title": "Cita taller", "description": "Cambio de aceite",
                     "date": "2025-06-11T09:00:00", "completed": false},
                    {"title": "Recoger casco", "date": "2025-06-12T10:00:00", "completed": false}
                ]
            }
        }"#,
    );
    let mut assistant = Assistant::new(&store);

    let answer = assistant.answer_on("agenda hoy", today());
    assert!(answer.starts_with("Agenda (hoy): 1 evento(s)."));
    assert!(answer.contains("• Cita taller — Cambio de aceite"));
    assert!(!answer.contains("Recoger casco"));
}

#[test]
fn soat_expiry_is_read_from_the_profile() {
    let store = store_with_snapshot(
        r#"{"Profile": {"documents": ["SOAT"], "documentsExpiry": {"soat": "2025-06-01"}}}"#,
    );
    let mut assistant = Assistant::new(&store);

    let answer = assistant.answer_on("¿Cuándo vence el SOAT?", today());
    assert_eq!(answer, "SOAT vence: 1 de junio de 2025.");
}

#[test]
fn legacy_tab_data_backfills_document_dates() {
    let store = MemoryKeyValueStore::new();
    store
        .put(
            keys::TAB_DATA,
            r#"{"soat": "01/06/2025", "tecnico": "15/08/2025", "picoyplaca": "Martes"}"#,
        )
        .expect("memory put should succeed");
    let mut assistant = Assistant::new(&store);

    assert_eq!(
        assistant.answer_on("¿Cuándo vence el SOAT?", today()),
        "SOAT vence: 1 de junio de 2025."
    );
    assert_eq!(
        assistant.answer_on("pico y placa", today()),
        "Pico y Placa: Martes."
    );
}

#[test]
fn screen_keyword_falls_back_to_the_domain_overview() {
    let store = store_with_snapshot(
        r#"{"Profile": {"documents": ["SOAT", "Técnico Mecánica"], "documentsStatus": "Al día"}}"#,
    );
    let mut assistant = Assistant::new(&store);

    let answer = assistant.answer_on("cuéntame del perfil", today());
    assert_eq!(answer, "Perfil — Documentos: 2. Estado: Al día.");
}

#[test]
fn greeting_help_and_fallback_have_their_fixed_shapes() {
    let store = MemoryKeyValueStore::new();
    let mut assistant = Assistant::new(&store);

    let greeting = assistant.answer_on("hola", today());
    assert!(greeting.starts_with("¡Hola! 👋"));
    assert!(greeting.contains("Resumen de tu aplicación:"));
    assert!(greeting.ends_with("¿Sobre qué quieres saber más?"));

    let help = assistant.answer_on("ayuda", today());
    assert!(help.starts_with("Puedo responder con lo que haya en cada pantalla"));
    assert!(help.contains("• Perfil: SOAT, Técnico, Pico y Placa"));

    let fallback = assistant.answer_on("abc xyz", today());
    assert!(fallback.starts_with("Entiendo: \"abc xyz\"."));
    assert!(fallback.contains("Prueba: \"Agenda hoy\""));
}

#[test]
fn status_request_returns_the_seven_domain_summary() {
    let store = MemoryKeyValueStore::new();
    let mut assistant = Assistant::new(&store);

    let summary = assistant.answer_on("¿cómo va todo?", today());
    assert!(summary.starts_with("Resumen de tu aplicación:"));
    for domain in [
        "Daily", "Agenda", "General", "Preventive", "Emergency", "Profile", "Route",
    ] {
        assert!(summary.contains(&format!("• {domain}: ")), "{domain}");
    }
}

#[test]
fn response_history_keeps_at_most_five() {
    let store = MemoryKeyValueStore::new();
    let mut assistant = Assistant::new(&store);

    for i in 0..8 {
        assistant.answer_on(&format!("mensaje {i}"), today());
    }
    assert_eq!(assistant.last_responses().len(), 5);
    // Oldest entries were dropped first.
    assert!(assistant.last_responses()[0].contains("mensaje 3"));
}

#[test]
fn corrupt_snapshot_degrades_to_no_data_answers() {
    let store = store_with_snapshot("this is not json");
    let mut assistant = Assistant::new(&store);

    let answer = assistant.answer_on("preventivo", today());
    assert_eq!(answer, "Preventivo: no tengo tareas registradas aún.");
}

#[test]
fn overdue_listing_caps_at_five_but_reports_the_total() {
    let tasks: Vec<String> = (0..7)
        .map(|i| {
            format!(
                r#"{{"id": "t{i}", "description": "Tarea {i}", "dueDate": "2025-05-0{}", "completed": false}}"#,
                i + 1
            )
        })
        .collect();
    let snapshot = format!(r#"{{"Preventive": {{"tasks": [{}]}}}}"#, tasks.join(","));
    let store = store_with_snapshot(&snapshot);
    let mut assistant = Assistant::new(&store);

    let answer = assistant.answer_on("tareas preventivas vencidas", today());
    assert!(answer.starts_with("Tareas preventivas vencidas (7):"));
    assert_eq!(answer.matches("• ").count(), 5);
}
