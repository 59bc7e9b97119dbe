use chrono::NaiveDate;
use motocare_core::intent::classify;
use motocare_core::model::{
    HistoryDomain, Intent, PreventiveQuery, ProfileQuery, ScheduleQuery, ScheduleScreen,
};
use motocare_core::temporal::{date_range, RangeLabel};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 11).expect("valid date")
}

#[test]
fn classification_is_pure_for_fixed_today() {
    let first = classify("Agenda hoy", today());
    let second = classify("Agenda hoy", today());
    assert_eq!(first, second);
}

#[test]
fn preventive_history_phrase_wins_over_other_preventive_queries() {
    let intent = classify("últimos 5 registros de preventivo", today());
    assert_eq!(intent, Some(Intent::History(HistoryDomain::Preventive)));

    // The history phrasing outranks the "último mantenimiento" reading.
    let intent = classify("lo último que registré en preventivo", today());
    assert_eq!(intent, Some(Intent::History(HistoryDomain::Preventive)));
}

#[test]
fn preventive_sub_rules_resolve_in_order() {
    assert_eq!(
        classify("¿cuál fue el último mantenimiento preventivo?", today()),
        Some(Intent::Preventive(PreventiveQuery::LastDone))
    );
    assert_eq!(
        classify("próximo mantenimiento preventivo", today()),
        Some(Intent::Preventive(PreventiveQuery::NextDue))
    );
    assert_eq!(
        classify("tareas preventivas vencidas", today()),
        Some(Intent::Preventive(PreventiveQuery::Overdue))
    );
    assert_eq!(
        classify("preventivo 15/07/2025", today()),
        Some(Intent::Preventive(PreventiveQuery::ListByDate(
            NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid date")
        )))
    );
    assert_eq!(
        classify("cómo va preventivo", today()),
        Some(Intent::Preventive(PreventiveQuery::Summary))
    );
}

#[test]
fn bare_domain_keywords_decline_and_fall_to_aliases() {
    assert_eq!(classify("general", today()), None);
    assert_eq!(classify("emergencia", today()), None);
    assert_eq!(classify("rutas", today()), None);

    assert_eq!(
        classify("últimos 5 registros en emergencia", today()),
        Some(Intent::History(HistoryDomain::Emergency))
    );
    assert_eq!(
        classify("últimos registros de rutas", today()),
        Some(Intent::History(HistoryDomain::Route))
    );
    assert_eq!(
        classify("últimos 5 registros en general", today()),
        Some(Intent::History(HistoryDomain::General))
    );
}

#[test]
fn profile_queries_resolve_by_document() {
    assert_eq!(
        classify("¿cuándo vence el soat?", today()),
        Some(Intent::Profile(ProfileQuery::SoatDue))
    );
    assert_eq!(
        classify("vencimiento de la técnico mecánica", today()),
        Some(Intent::Profile(ProfileQuery::TechDue))
    );
    assert_eq!(
        classify("¿qué día tengo pico y placa?", today()),
        Some(Intent::Profile(ProfileQuery::PicoPlaca))
    );
    assert_eq!(
        classify("estado de mis documentos", today()),
        Some(Intent::Profile(ProfileQuery::DocsStatus))
    );
}

#[test]
fn schedule_ranges_carry_their_label() {
    assert_eq!(
        classify("agenda hoy", today()),
        Some(Intent::Schedule {
            screen: ScheduleScreen::Agenda,
            query: ScheduleQuery::ListRange {
                range: date_range(RangeLabel::Today, today()),
                label: "hoy",
            },
        })
    );
    assert_eq!(
        classify("daily mañana", today()),
        Some(Intent::Schedule {
            screen: ScheduleScreen::Daily,
            query: ScheduleQuery::ListRange {
                range: date_range(RangeLabel::Tomorrow, today()),
                label: "mañana",
            },
        })
    );
    assert_eq!(
        classify("agenda esta semana", today()),
        Some(Intent::Schedule {
            screen: ScheduleScreen::Agenda,
            query: ScheduleQuery::ListRange {
                range: date_range(RangeLabel::ThisWeek, today()),
                label: "esta semana",
            },
        })
    );
    assert_eq!(
        classify("agenda próximo mes", today()),
        Some(Intent::Schedule {
            screen: ScheduleScreen::Agenda,
            query: ScheduleQuery::ListRange {
                range: date_range(RangeLabel::NextMonth, today()),
                label: "próximo mes",
            },
        })
    );
}

#[test]
fn schedule_explicit_date_and_summary() {
    assert_eq!(
        classify("agenda 15/07/2025", today()),
        Some(Intent::Schedule {
            screen: ScheduleScreen::Agenda,
            query: ScheduleQuery::ListByDate(
                NaiveDate::from_ymd_opt(2025, 7, 15).expect("valid date")
            ),
        })
    );
    // A bare screen mention summarizes, always attributed to Agenda.
    assert_eq!(
        classify("daily", today()),
        Some(Intent::Schedule {
            screen: ScheduleScreen::Agenda,
            query: ScheduleQuery::Summary,
        })
    );
}

#[test]
fn unrelated_text_is_unclassified() {
    assert_eq!(classify("hola", today()), None);
    assert_eq!(classify("¿qué hora es?", today()), None);
}
