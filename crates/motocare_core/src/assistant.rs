//! Conversational assistant over the app's stored state.
//!
//! # Responsibility
//! - Resolve one free-text Spanish message to one answer, in a fixed order:
//!   catalog exact match, typed intent, screen-keyword alias, greeting, help,
//!   status summary, generic fallback.
//! - Load the screen snapshot on demand, merging legacy document dates from
//!   the tab data when the profile carries none.
//!
//! # Invariants
//! - Answering never fails: storage errors degrade to empty state and the
//!   pipeline always ends in the generic fallback.
//! - The response history keeps at most the last five answers.
//!
//! # See also
//! - [`crate::intent`] for the classification rules.
//! - [`crate::handlers`] for per-domain answer formatting.

use crate::catalog;
use crate::handlers;
use crate::intent::classify;
use crate::model::{Intent, ScreenDomain, ScreenStateSnapshot};
use crate::store::{self, keys, KeyValueStore};
use crate::temporal::parse_date_text;
use chrono::{Local, NaiveDate};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

const MAX_RESPONSE_HISTORY: usize = 5;

static GREETING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(^|\s)(hola|buenas|saludos)(\s|$)").expect("valid greeting regex")
});
static HELP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)ayuda|qué puedes|como me puedes ayudar").expect("valid help regex")
});
static STATUS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)resumen|estado|cómo va|como va").expect("valid status regex"));

/// Alias fallback when no typed intent matched. Order matters: earlier
/// aliases win on multi-keyword messages.
const SCREEN_KEYWORDS: &[(&str, ScreenDomain)] = &[
    ("perfil", ScreenDomain::Profile),
    ("daily", ScreenDomain::Daily),
    ("agenda", ScreenDomain::Agenda),
    ("calendario", ScreenDomain::Agenda),
    ("general", ScreenDomain::General),
    ("preventivo", ScreenDomain::Preventive),
    ("preventiva", ScreenDomain::Preventive),
    ("emergencia", ScreenDomain::Emergency),
    ("ruta", ScreenDomain::Route),
    ("rutas", ScreenDomain::Route),
    ("profile", ScreenDomain::Profile),
    ("route", ScreenDomain::Route),
    ("emergency", ScreenDomain::Emergency),
    ("preventive", ScreenDomain::Preventive),
];

/// Legacy document dates kept under the tab data key.
#[derive(Debug, Default, Deserialize)]
struct TabData {
    soat: Option<String>,
    tecnico: Option<String>,
    picoyplaca: Option<String>,
}

/// The query assistant, generic over the backing store.
pub struct Assistant<'a, S: KeyValueStore> {
    store: &'a S,
    last_responses: Vec<String>,
}

impl<'a, S: KeyValueStore> Assistant<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            last_responses: Vec::new(),
        }
    }

    /// Answers one message against today's local date.
    pub fn answer(&mut self, message: &str) -> String {
        self.answer_on(message, Local::now().date_naive())
    }

    /// Answers one message with an explicit reference date.
    pub fn answer_on(&mut self, message: &str, today: NaiveDate) -> String {
        let text = message.trim();
        let lowered = text.to_lowercase();

        if let Some(answer) = catalog::answer_for(&lowered) {
            return self.remember(answer.to_string());
        }

        if let Some(intent) = classify(&lowered, today) {
            debug!("event=intent module=assistant status=ok intent={intent:?}");
            let snapshot = self.load_snapshot(today);
            let answer = match intent {
                Intent::Preventive(query) => handlers::preventive::handle(query, &snapshot, today),
                Intent::Profile(query) => handlers::profile::handle(query, &snapshot),
                Intent::Schedule { screen, query } => {
                    handlers::schedule::handle(screen, &query, &snapshot, today)
                }
                Intent::History(domain) => handlers::history::handle(domain, self.store),
            };
            return self.remember(answer);
        }

        for (keyword, domain) in SCREEN_KEYWORDS {
            if lowered.contains(keyword) {
                let snapshot = self.load_snapshot(today);
                let answer = handlers::overview(*domain, &snapshot, today);
                return self.remember(answer);
            }
        }

        if GREETING_RE.is_match(&lowered) {
            let summary = handlers::context_summary(&self.load_snapshot(today), today);
            return self.remember(format!(
                "¡Hola! 👋 Tengo Preguntas Frecuentes (Perfil/Agenda/Otras) y Preguntas \
                 Informativas (predefinidas en código). También puedo listar los últimos 5 \
                 registros de Preventivo, General, Emergencia y Rutas. \n\n{summary}\n\n\
                 ¿Sobre qué quieres saber más?"
            ));
        }
        if HELP_RE.is_match(&lowered) {
            return self.remember(
                "Puedo responder con lo que haya en cada pantalla (sin abrirla):\n\
                 • Perfil: SOAT, Técnico, Pico y Placa\n\
                 • Agenda/Daily: hoy, mañana, semana, mes, próximo mes o una fecha concreta\n\
                 • Preventivo/General/Emergencia/Rutas: \"últimos 5 registros\"\n\
                 • Además: Preguntas Informativas (motos bajo y medio cilindraje) predefinidas \
                 en el código."
                    .to_string(),
            );
        }
        if STATUS_RE.is_match(&lowered) {
            let summary = handlers::context_summary(&self.load_snapshot(today), today);
            return self.remember(summary);
        }

        let summary = handlers::context_summary(&self.load_snapshot(today), today);
        self.remember(format!(
            "Entiendo: \"{text}\".\n\n{summary}\n\nPrueba: \"Agenda hoy\", \"¿Cuándo vence el \
             SOAT?\", \"Últimos 5 registros en emergencia\", o \"Últimos 5 registros en rutas\"."
        ))
    }

    /// The most recent answers, oldest first, at most five.
    pub fn last_responses(&self) -> &[String] {
        &self.last_responses
    }

    fn remember(&mut self, response: String) -> String {
        self.last_responses.push(response.clone());
        if self.last_responses.len() > MAX_RESPONSE_HISTORY {
            self.last_responses.remove(0);
        }
        response
    }

    /// Loads the screen snapshot, falling back to defaults on any error.
    fn load_snapshot(&self, today: NaiveDate) -> ScreenStateSnapshot {
        let mut snapshot: ScreenStateSnapshot =
            match store::get_json(self.store, keys::SCREEN_STATES) {
                Ok(snapshot) => snapshot.unwrap_or_default(),
                Err(err) => {
                    warn!(
                        "event=snapshot_read module=assistant status=error key={} err={err}",
                        keys::SCREEN_STATES
                    );
                    ScreenStateSnapshot::default()
                }
            };
        self.merge_tab_data(&mut snapshot, today);
        snapshot
    }

    /// Backfills document expiry dates from the legacy tab data when the
    /// profile carries none.
    fn merge_tab_data(&self, snapshot: &mut ScreenStateSnapshot, today: NaiveDate) {
        let has_expiry = snapshot
            .profile
            .as_ref()
            .map(|profile| profile.documents_expiry.is_some())
            .unwrap_or(false);
        if has_expiry {
            return;
        }

        let tab_data: TabData = match store::get_json(self.store, keys::TAB_DATA) {
            Ok(Some(tab_data)) => tab_data,
            Ok(None) => return,
            Err(err) => {
                warn!(
                    "event=snapshot_read module=assistant status=error key={} err={err}",
                    keys::TAB_DATA
                );
                return;
            }
        };

        let as_iso = |value: &Option<String>| {
            value
                .as_deref()
                .and_then(|text| parse_date_text(&text.to_lowercase(), today))
                .map(|date| date.to_string())
        };

        let profile = snapshot.profile.get_or_insert_with(Default::default);
        let expiry = profile.documents_expiry.get_or_insert_with(Default::default);
        expiry.soat = as_iso(&tab_data.soat);
        expiry.tecnico = as_iso(&tab_data.tecnico);
        expiry.pico_placa_day = tab_data.picoyplaca.filter(|day| !day.is_empty());
        if profile.documents.is_empty() {
            profile.documents = vec!["SOAT".to_string(), "Técnico Mecánica".to_string()];
        }
    }
}
