//! Rider-profile document queries.

use crate::model::{ProfileQuery, ScreenStateSnapshot};
use crate::temporal::{format_date_es, parse_loose_date};

/// Answers one profile query against the snapshot.
pub fn handle(query: ProfileQuery, snapshot: &ScreenStateSnapshot) -> String {
    let state = snapshot.profile.clone().unwrap_or_default();
    let expiry = state.documents_expiry.clone().unwrap_or_default();

    match query {
        ProfileQuery::SoatDue => match expiry.soat.as_deref() {
            Some(stored) => format!("SOAT vence: {}.", long_date_or_nd(stored)),
            None => "No tengo la fecha de vencimiento del SOAT.".to_string(),
        },
        ProfileQuery::TechDue => match expiry.tecnico.as_deref() {
            Some(stored) => format!("Técnico Mecánica vence: {}.", long_date_or_nd(stored)),
            None => "No tengo la fecha de vencimiento de la Técnico Mecánica.".to_string(),
        },
        ProfileQuery::PicoPlaca => format!(
            "Pico y Placa: {}.",
            expiry.pico_placa_day.as_deref().unwrap_or("N/D")
        ),
        ProfileQuery::DocsStatus => format!(
            "Perfil — Documentos: {}. Estado: {}.",
            state.documents.len(),
            state.documents_status.as_deref().unwrap_or("N/D")
        ),
    }
}

fn long_date_or_nd(stored: &str) -> String {
    parse_loose_date(stored)
        .map(format_date_es)
        .unwrap_or_else(|| "N/D".to_string())
}
