//! Preventive-maintenance query handler.

use super::{MAX_OVERDUE_LINES, MAX_RANGE_LINES};
use crate::format::bullets;
use crate::model::{PreventiveQuery, PreventiveTask, ScreenStateSnapshot};
use crate::temporal::format_date_es;
use chrono::NaiveDate;

/// Answers one preventive query against the snapshot.
pub fn handle(query: PreventiveQuery, snapshot: &ScreenStateSnapshot, today: NaiveDate) -> String {
    let tasks: &[PreventiveTask] = snapshot
        .preventive
        .as_ref()
        .map(|state| state.tasks.as_slice())
        .unwrap_or(&[]);

    if tasks.is_empty() {
        return match query {
            PreventiveQuery::ListByDate(date) => format!(
                "No encuentro tareas preventivas para {}.",
                format_date_es(date)
            ),
            _ => "Preventivo: no tengo tareas registradas aún.".to_string(),
        };
    }

    match query {
        PreventiveQuery::LastDone => last_done(tasks),
        PreventiveQuery::NextDue => next_due(tasks, today),
        PreventiveQuery::Overdue => overdue(tasks, today),
        PreventiveQuery::ListByDate(date) => list_by_date(tasks, date),
        PreventiveQuery::Summary => summary_of(tasks, today),
    }
}

/// Summary line, also used by the cross-domain overview.
pub fn summary(snapshot: &ScreenStateSnapshot, today: NaiveDate) -> String {
    let tasks: &[PreventiveTask] = snapshot
        .preventive
        .as_ref()
        .map(|state| state.tasks.as_slice())
        .unwrap_or(&[]);
    if tasks.is_empty() {
        return "Preventivo: no tengo tareas registradas aún.".to_string();
    }
    summary_of(tasks, today)
}

fn last_done(tasks: &[PreventiveTask]) -> String {
    let mut done: Vec<(&PreventiveTask, NaiveDate)> = tasks
        .iter()
        .filter(|task| task.completed)
        .filter_map(|task| task.effective_date().map(|date| (task, date)))
        .collect();
    if done.is_empty() {
        return "Aún no veo mantenimientos preventivos completados.".to_string();
    }
    // Stable sort keeps input order among same-day completions.
    done.sort_by(|a, b| b.1.cmp(&a.1));
    let (task, date) = &done[0];
    format!(
        "Último mantenimiento preventivo: {} — {}.",
        format_date_es(*date),
        task.description
    )
}

fn next_due(tasks: &[PreventiveTask], today: NaiveDate) -> String {
    let mut pending: Vec<(&PreventiveTask, NaiveDate)> = tasks
        .iter()
        .filter(|task| !task.completed)
        .filter_map(|task| task.due().map(|due| (task, due)))
        .collect();
    pending.sort_by(|a, b| a.1.cmp(&b.1));

    match pending.iter().find(|(_, due)| *due >= today) {
        Some((task, due)) => format!(
            "Próximo mantenimiento preventivo: {} — {}.",
            format_date_es(*due),
            task.description
        ),
        None => "No encuentro próximos mantenimientos preventivos programados.".to_string(),
    }
}

fn overdue(tasks: &[PreventiveTask], today: NaiveDate) -> String {
    let mut overdue: Vec<(&PreventiveTask, NaiveDate)> = tasks
        .iter()
        .filter(|task| !task.completed)
        .filter_map(|task| task.due().map(|due| (task, due)))
        .filter(|(_, due)| *due < today)
        .collect();
    if overdue.is_empty() {
        return "No tienes tareas preventivas vencidas. ✅".to_string();
    }

    overdue.sort_by(|a, b| a.1.cmp(&b.1));
    let total = overdue.len();
    let lines: Vec<String> = overdue
        .iter()
        .take(MAX_OVERDUE_LINES)
        .map(|(task, due)| format!("{} — vencía {}.", task.description, format_date_es(*due)))
        .collect();
    format!("Tareas preventivas vencidas ({total}):\n{}", bullets(lines))
}

fn list_by_date(tasks: &[PreventiveTask], date: NaiveDate) -> String {
    let hits: Vec<&PreventiveTask> = tasks
        .iter()
        .filter(|task| {
            task.due() == Some(date) || task.completed_on() == Some(date)
        })
        .collect();
    if hits.is_empty() {
        return format!("Sin tareas preventivas para {}.", format_date_es(date));
    }

    let lines: Vec<String> = hits
        .iter()
        .take(MAX_RANGE_LINES)
        .map(|task| {
            let (tag, label) = if task.completed {
                ("✅", "completada")
            } else {
                ("⏳", "programada")
            };
            let reference = if task.completed {
                task.effective_date()
            } else {
                task.due()
            }
            .unwrap_or(date);
            format!(
                "{tag} {} — {label} el {}.",
                task.description,
                format_date_es(reference)
            )
        })
        .collect();
    format!("Preventivo — {}:\n{}", format_date_es(date), bullets(lines))
}

fn summary_of(tasks: &[PreventiveTask], today: NaiveDate) -> String {
    let total = tasks.len();
    let done = tasks.iter().filter(|task| task.completed).count();
    let overdue = tasks
        .iter()
        .filter(|task| !task.completed)
        .filter_map(|task| task.due())
        .filter(|due| *due < today)
        .count();
    format!("Preventivo: {total} tareas, {done} completadas, {overdue} vencidas.")
}
