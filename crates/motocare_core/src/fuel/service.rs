//! Fuel service: persistence and quick commands around the pure state.

use super::state::{FuelResult, FuelState, Transition, DEFAULT_PRICE_PER_GALLON_COP};
use crate::format::format_cop;
use crate::model::FuelEntry;
use crate::store::{self, keys, JournalSink, KeyValueStore};
use crate::temporal::short_date;
use chrono::Utc;
use log::{info, warn};

/// Persisting wrapper over [`FuelState`].
///
/// Every successful transition writes the full price and ledger back to the
/// store; a persist failure is logged and the in-memory state kept, matching
/// the fire-and-forget journal.
pub struct FuelService<'a, S: KeyValueStore, J: JournalSink> {
    store: &'a S,
    journal: J,
    state: FuelState,
}

impl<'a, S: KeyValueStore, J: JournalSink> FuelService<'a, S, J> {
    /// Loads the persisted state, falling back to defaults on missing or
    /// corrupt data.
    pub fn load(store: &'a S, journal: J) -> Self {
        let price = match store.get(keys::FUEL_PRICE) {
            Ok(Some(raw)) => raw.parse::<f64>().unwrap_or_else(|_| {
                warn!(
                    "event=fuel_load module=fuel status=error key={} raw={raw}",
                    keys::FUEL_PRICE
                );
                DEFAULT_PRICE_PER_GALLON_COP
            }),
            Ok(None) => DEFAULT_PRICE_PER_GALLON_COP,
            Err(err) => {
                warn!(
                    "event=fuel_load module=fuel status=error key={} err={err}",
                    keys::FUEL_PRICE
                );
                DEFAULT_PRICE_PER_GALLON_COP
            }
        };

        let entries: Vec<FuelEntry> = match store::get_json(store, keys::FUEL_ENTRIES) {
            Ok(entries) => entries.unwrap_or_default(),
            Err(err) => {
                warn!(
                    "event=fuel_load module=fuel status=error key={} err={err}",
                    keys::FUEL_ENTRIES
                );
                Vec::new()
            }
        };

        info!(
            "event=fuel_load module=fuel status=ok entries={} price={price}",
            entries.len()
        );
        Self {
            store,
            journal,
            state: FuelState::new(entries, price),
        }
    }

    pub fn entries(&self) -> &[FuelEntry] {
        &self.state.ledger
    }

    pub fn price(&self) -> f64 {
        self.state.price_per_gallon_cop
    }

    pub fn has_baseline(&self) -> bool {
        self.state.has_baseline()
    }

    pub fn set_price(&mut self, price: f64) -> FuelResult<String> {
        let transition = self.state.set_price(price)?;
        Ok(self.commit(transition))
    }

    pub fn add_baseline(&mut self, odometer_km: f64) -> FuelResult<String> {
        let transition = self.state.add_baseline(odometer_km, Utc::now())?;
        Ok(self.commit(transition))
    }

    pub fn add_fillup(
        &mut self,
        amount_cop: f64,
        price_per_gallon_cop: f64,
        odometer_km: f64,
    ) -> FuelResult<String> {
        let transition =
            self.state
                .add_fillup(amount_cop, price_per_gallon_cop, odometer_km, Utc::now())?;
        Ok(self.commit(transition))
    }

    pub fn delete_entry(&mut self, entry_id: &str) -> FuelResult<String> {
        let transition = self.state.delete_entry(entry_id)?;
        Ok(self.commit(transition))
    }

    pub fn clear_all(&mut self) -> String {
        let transition = self.state.clear_all();
        self.commit(transition)
    }

    /// Generates the last-N report and journals it.
    pub fn report_last_n(&self, n: usize) -> FuelResult<String> {
        let report = self.state.report_last_n(n)?;
        self.journal.append(&report);
        Ok(report)
    }

    /// Quick text commands from the chat surface.
    pub fn handle(&self, text: &str) -> String {
        let lowered = text.to_lowercase();

        if lowered.contains("ver precio") {
            return format!(
                "El precio por galón actual es {}.",
                format_cop(self.state.price_per_gallon_cop)
            );
        }

        if lowered.contains("resumen") {
            return self.state.summary_text();
        }

        if lowered.contains("últimos 5") {
            if self.state.ledger.is_empty() {
                return "Aún no tengo registros de tanqueo.".to_string();
            }
            let mut recent: Vec<&FuelEntry> = self.state.ledger.iter().collect();
            recent.sort_by(|a, b| b.date.cmp(&a.date));
            let lines: Vec<String> = recent
                .iter()
                .take(5)
                .enumerate()
                .map(|(i, entry)| {
                    let mut line = format!(
                        "{}. {} — {} ({:.2} galones)",
                        i + 1,
                        short_date(entry.date.date_naive()),
                        format_cop(entry.amount_cop),
                        entry.gallons
                    );
                    if let Some(odometer) = entry.odometer_km {
                        line.push_str(&format!(" — {odometer} kilómetros"));
                    }
                    if entry.is_baseline() {
                        line.push_str(" — baseline");
                    }
                    line
                })
                .collect();
            return format!("Últimos {} registros:\n{}", lines.len(), lines.join("\n"));
        }

        "Usa \"Acciones rápidas\" para gestionar tu combustible.".to_string()
    }

    fn commit(&mut self, transition: Transition) -> String {
        self.state = transition.state;
        self.persist();
        if let Some(line) = transition.journal_line {
            self.journal.append(&line);
        }
        transition.message
    }

    fn persist(&self) {
        let price = format!("{}", self.state.price_per_gallon_cop.round() as i64);
        if let Err(err) = self.store.put(keys::FUEL_PRICE, &price) {
            warn!(
                "event=fuel_persist module=fuel status=error key={} err={err}",
                keys::FUEL_PRICE
            );
        }
        if let Err(err) = store::put_json(self.store, keys::FUEL_ENTRIES, &self.state.ledger) {
            warn!(
                "event=fuel_persist module=fuel status=error key={} err={err}",
                keys::FUEL_ENTRIES
            );
        }
    }
}
