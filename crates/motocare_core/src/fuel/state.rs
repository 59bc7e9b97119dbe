//! Pure fuel-ledger state and its transitions.

use crate::format::format_cop;
use crate::model::{FuelEntry, LITRES_PER_GALLON};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_PRICE_PER_GALLON_COP: f64 = 16000.0;

pub type FuelResult<T> = Result<T, FuelError>;

/// Rejection reasons; the display text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FuelError {
    InvalidPrice,
    BaselineExists,
    InvalidBaseline,
    InvalidFillup,
    EntryNotFound,
    BaselineProtected,
    NoLedger,
    NoBaselineOdometer,
    InsufficientData,
}

impl Display for FuelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::InvalidPrice => "Precio inválido.",
            Self::BaselineExists => "Ya existe una primera tanqueada registrada.",
            Self::InvalidBaseline => "Datos inválidos para la primera tanqueada.",
            Self::InvalidFillup => "Datos inválidos para la tanqueada.",
            Self::EntryNotFound => "No se encontró el registro a eliminar.",
            Self::BaselineProtected => {
                "No puedes eliminar el registro baseline mientras tengas otras tanqueadas \
                 registradas. Usa \"Borrar todos los datos\" para comenzar de nuevo."
            }
            Self::NoLedger => "Necesitas al menos un registro con velocímetro.",
            Self::NoBaselineOdometer => {
                "No hay registro baseline con velocímetro para calcular."
            }
            Self::InsufficientData => {
                "No hay suficiente información para calcular el rendimiento."
            }
        };
        f.write_str(message)
    }
}

impl Error for FuelError {}

/// Result of a successful transition: the next state plus its messaging.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: FuelState,
    pub message: String,
    pub journal_line: Option<String>,
    pub entry_id: Option<String>,
}

/// Aggregates over a ledger slice, used by the summary and the N>1 report.
#[derive(Debug, Clone, Copy)]
struct SliceSummary {
    total_cop: f64,
    total_gallons: f64,
    km_total: f64,
    avg_efficiency: Option<f64>,
}

/// The fuel ledger plus the configured price, sorted ascending by date.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelState {
    pub ledger: Vec<FuelEntry>,
    pub price_per_gallon_cop: f64,
}

impl Default for FuelState {
    fn default() -> Self {
        Self {
            ledger: Vec::new(),
            price_per_gallon_cop: DEFAULT_PRICE_PER_GALLON_COP,
        }
    }
}

impl FuelState {
    pub fn new(mut ledger: Vec<FuelEntry>, price_per_gallon_cop: f64) -> Self {
        ledger.sort_by_key(|entry| entry.date);
        Self {
            ledger,
            price_per_gallon_cop,
        }
    }

    pub fn has_baseline(&self) -> bool {
        self.ledger.iter().any(FuelEntry::is_baseline)
    }

    /// Sets a new price per gallon, rounded to whole pesos.
    pub fn set_price(&self, price: f64) -> FuelResult<Transition> {
        if !price.is_finite() || price <= 0.0 {
            return Err(FuelError::InvalidPrice);
        }
        let mut state = self.clone();
        state.price_per_gallon_cop = price.round();
        let message = format!(
            "Precio por galón actualizado a {}.",
            format_cop(state.price_per_gallon_cop)
        );
        Ok(Transition {
            state,
            message,
            journal_line: None,
            entry_id: None,
        })
    }

    /// Records the single starting-odometer entry.
    pub fn add_baseline(&self, odometer_km: f64, now: DateTime<Utc>) -> FuelResult<Transition> {
        if self.has_baseline() {
            return Err(FuelError::BaselineExists);
        }
        if !odometer_km.is_finite() || odometer_km <= 0.0 {
            return Err(FuelError::InvalidBaseline);
        }

        let entry = FuelEntry::baseline(odometer_km, self.price_per_gallon_cop, now);
        let entry_id = entry.id.clone();
        let mut state = self.clone();
        state.ledger.push(entry);
        state.ledger.sort_by_key(|entry| entry.date);

        Ok(Transition {
            state,
            message: format!(
                "Primera tanqueada registrada: Velocímetro inicial {odometer_km} kilómetros."
            ),
            journal_line: Some(format!(
                "⛽ Primera tanqueada — Velocímetro inicial: {odometer_km} kilómetros"
            )),
            entry_id: Some(entry_id),
        })
    }

    /// Records a fuel purchase. All three inputs must be positive and finite.
    pub fn add_fillup(
        &self,
        amount_cop: f64,
        price_per_gallon_cop: f64,
        odometer_km: f64,
        now: DateTime<Utc>,
    ) -> FuelResult<Transition> {
        let valid = |value: f64| value.is_finite() && value > 0.0;
        if !valid(amount_cop) || !valid(price_per_gallon_cop) || !valid(odometer_km) {
            return Err(FuelError::InvalidFillup);
        }

        let entry = FuelEntry::fillup(amount_cop, price_per_gallon_cop, odometer_km, now);
        let entry_id = entry.id.clone();
        let gallons = entry.gallons;
        let mut state = self.clone();
        state.ledger.push(entry);
        state.ledger.sort_by_key(|entry| entry.date);

        Ok(Transition {
            state,
            message: format!(
                "Tanqueada registrada: {} ({gallons:.2} galones) — Velocímetro {odometer_km} kilómetros.",
                format_cop(amount_cop)
            ),
            journal_line: Some(format!(
                "⛽ Última tanqueada — Valor: {} | Precio/galón: {} | Velocímetro: {odometer_km} kilómetros",
                format_cop(amount_cop),
                format_cop(price_per_gallon_cop)
            )),
            entry_id: Some(entry_id),
        })
    }

    /// Removes one entry by id. The baseline stays protected while any other
    /// entry remains.
    pub fn delete_entry(&self, entry_id: &str) -> FuelResult<Transition> {
        let entry = self
            .ledger
            .iter()
            .find(|entry| entry.id == entry_id)
            .ok_or(FuelError::EntryNotFound)?;
        if entry.is_baseline() && self.ledger.len() > 1 {
            return Err(FuelError::BaselineProtected);
        }

        let label = if entry.is_baseline() {
            "Primera tanqueada"
        } else {
            "Tanqueada"
        };
        let odometer = entry.odometer_km.unwrap_or(0.0);
        let details = if entry.is_baseline() {
            format!("Velocímetro: {odometer} kilómetros")
        } else {
            format!(
                "Valor: {} | Velocímetro: {odometer} kilómetros",
                format_cop(entry.amount_cop)
            )
        };

        let mut state = self.clone();
        state.ledger.retain(|entry| entry.id != entry_id);

        Ok(Transition {
            state,
            message: format!("{label} eliminada correctamente."),
            journal_line: Some(format!("🗑️ {label} eliminada — {details}")),
            entry_id: None,
        })
    }

    /// Empties the ledger. Idempotent; the configured price survives.
    pub fn clear_all(&self) -> Transition {
        let mut state = self.clone();
        state.ledger.clear();
        Transition {
            state,
            message: "Todos los datos de combustible han sido borrados correctamente. \
                      Puedes comenzar de nuevo."
                .to_string(),
            journal_line: Some("🗑️ Todos los datos de combustible han sido borrados".to_string()),
            entry_id: None,
        }
    }

    /// Consumption report over the last `n` entries.
    ///
    /// With `n == 1` the distance runs from the baseline odometer to that
    /// single entry; with more, adjacent odometer pairs are averaged.
    pub fn report_last_n(&self, n: usize) -> FuelResult<String> {
        let n = n.max(1);
        if self.ledger.is_empty() {
            return Err(FuelError::NoLedger);
        }

        let start = self.ledger.len().saturating_sub(n);
        let slice = &self.ledger[start..];

        if slice.len() == 1 {
            return self.report_from_baseline(&slice[0]);
        }

        let summary = compute_summary(slice);
        let litres = summary.total_gallons * LITRES_PER_GALLON;
        let km_line = if summary.km_total > 0.0 {
            format!(
                "Kilómetros recorridos (velocímetro): {:.0} kilómetros",
                summary.km_total
            )
        } else {
            "Kilómetros recorridos: insuficiente información (faltan velocímetros).".to_string()
        };
        let efficiency_line = match summary.avg_efficiency {
            Some(avg) => format!("Rendimiento promedio: {avg:.2} kilómetros por litro"),
            None => "Rendimiento: insuficiente información (faltan velocímetros).".to_string(),
        };

        Ok(format!(
            "📊 Informe de Combustible\n\
             • Período: últimas {} tanqueadas\n\
             • Total gastado: {}\n\
             • Abastecido: {:.2} galones ({litres:.1} litros)\n\
             • {km_line}\n\
             • {efficiency_line}",
            slice.len(),
            format_cop(summary.total_cop),
            summary.total_gallons
        ))
    }

    fn report_from_baseline(&self, entry: &FuelEntry) -> FuelResult<String> {
        let baseline_odometer = self
            .ledger
            .iter()
            .find(|entry| entry.is_baseline())
            .and_then(|entry| entry.odometer_km)
            .ok_or(FuelError::NoBaselineOdometer)?;
        let odometer = entry.odometer_km.unwrap_or(0.0);

        let delta_km = odometer - baseline_odometer;
        let litres = entry.litres();
        if delta_km <= 0.0 || litres <= 0.0 {
            return Err(FuelError::InsufficientData);
        }
        let efficiency = delta_km / litres;

        Ok(format!(
            "📊 Informe de Combustible\n\
             • Período: desde velocímetro inicial hasta última tanqueada\n\
             • Velocímetro inicial: {baseline_odometer} kilómetros\n\
             • Velocímetro actual: {odometer} kilómetros\n\
             • Kilómetros recorridos: {delta_km:.0} kilómetros\n\
             • Combustible usado: {:.2} galones ({litres:.1} litros)\n\
             • Rendimiento: {efficiency:.2} kilómetros por litro\n\
             • Total gastado: {}",
            entry.gallons,
            format_cop(entry.amount_cop)
        ))
    }

    /// Whole-ledger summary for the "resumen" quick command.
    pub(super) fn summary_text(&self) -> String {
        let summary = compute_summary(&self.ledger);
        let litres = summary.total_gallons * LITRES_PER_GALLON;
        let km_line = if summary.km_total > 0.0 {
            format!(
                "Kilómetros recorridos estimados: {:.0} kilómetros",
                summary.km_total
            )
        } else {
            "Sugerencia: registra velocímetro para calcular distancias.".to_string()
        };
        let efficiency_line = match summary.avg_efficiency {
            Some(avg) => format!("Rendimiento promedio: {avg:.2} kilómetros por litro"),
            None => "Rendimiento: insuficiente información (faltan velocímetros).".to_string(),
        };

        format!(
            "Resumen:\n\
             • Total gastado: {}\n\
             • Abastecido: {:.2} galones ({litres:.1} litros)\n\
             • {km_line}\n\
             • {efficiency_line}",
            format_cop(summary.total_cop),
            summary.total_gallons
        )
    }
}

/// Pairs up consecutive odometer readings and averages the per-pair
/// efficiencies; pairs with a non-positive distance or volume are skipped.
fn compute_summary(entries: &[FuelEntry]) -> SliceSummary {
    let with_odometer: Vec<&FuelEntry> = entries
        .iter()
        .filter(|entry| entry.odometer_km.is_some())
        .collect();

    let mut efficiencies = Vec::new();
    let mut km_total = 0.0;
    for pair in with_odometer.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        let delta_km = curr.odometer_km.unwrap_or(0.0) - prev.odometer_km.unwrap_or(0.0);
        let litres = curr.litres();
        if delta_km > 0.0 && litres > 0.0 {
            efficiencies.push(delta_km / litres);
            km_total += delta_km;
        }
    }

    let avg_efficiency = if efficiencies.is_empty() {
        None
    } else {
        Some(efficiencies.iter().sum::<f64>() / efficiencies.len() as f64)
    };

    SliceSummary {
        total_cop: entries.iter().map(|entry| entry.amount_cop).sum(),
        total_gallons: entries.iter().map(|entry| entry.gallons).sum(),
        km_total,
        avg_efficiency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn second_baseline_is_rejected() {
        let state = FuelState::default();
        let first = state.add_baseline(10000.0, at(8)).unwrap();
        let err = first.state.add_baseline(10500.0, at(9)).unwrap_err();
        assert_eq!(err, FuelError::BaselineExists);
        assert_eq!(first.state.ledger.len(), 1);
    }

    #[test]
    fn fillup_requires_all_inputs_positive() {
        let state = FuelState::default();
        assert_eq!(
            state.add_fillup(0.0, 16000.0, 10300.0, at(8)).unwrap_err(),
            FuelError::InvalidFillup
        );
        assert_eq!(
            state
                .add_fillup(128000.0, 16000.0, f64::NAN, at(8))
                .unwrap_err(),
            FuelError::InvalidFillup
        );
        assert_eq!(
            state
                .add_fillup(128000.0, -1.0, 10300.0, at(8))
                .unwrap_err(),
            FuelError::InvalidFillup
        );
    }

    #[test]
    fn single_entry_report_uses_baseline_distance() {
        let state = FuelState::default();
        let state = state.add_baseline(10000.0, at(8)).unwrap().state;
        let state = state
            .add_fillup(128000.0, 16000.0, 10300.0, at(9))
            .unwrap()
            .state;

        let report = state.report_last_n(1).unwrap();
        assert!(report.contains("Velocímetro inicial: 10000 kilómetros"));
        assert!(report.contains("Kilómetros recorridos: 300 kilómetros"));
        // 300 km / (8 gal * 3.78541 L/gal) = 9.91 km/L
        assert!(report.contains("Rendimiento: 9.91 kilómetros por litro"));
        assert!(report.contains("Total gastado: $ 128.000"));
    }

    #[test]
    fn report_without_baseline_odometer_fails() {
        let state = FuelState::default();
        let state = state
            .add_fillup(64000.0, 16000.0, 10100.0, at(8))
            .unwrap()
            .state;
        assert_eq!(
            state.report_last_n(1).unwrap_err(),
            FuelError::NoBaselineOdometer
        );
    }

    #[test]
    fn average_efficiency_is_mean_of_pairs() {
        let state = FuelState::default();
        let state = state.add_baseline(10000.0, at(8)).unwrap().state;
        // 100 km on 1 gallon, then 200 km on 1 gallon.
        let state = state
            .add_fillup(16000.0, 16000.0, 10100.0, at(9))
            .unwrap()
            .state;
        let state = state
            .add_fillup(16000.0, 16000.0, 10300.0, at(10))
            .unwrap()
            .state;

        let report = state.report_last_n(3).unwrap();
        // mean(100/3.78541, 200/3.78541) = 39.63, not distance-weighted
        assert!(report.contains("Rendimiento promedio: 39.63 kilómetros por litro"));
        assert!(report.contains("Kilómetros recorridos (velocímetro): 300 kilómetros"));
    }

    #[test]
    fn baseline_is_protected_while_fillups_exist() {
        let state = FuelState::default();
        let baseline = state.add_baseline(10000.0, at(8)).unwrap();
        let baseline_id = baseline.entry_id.clone().unwrap();
        let state = baseline
            .state
            .add_fillup(32000.0, 16000.0, 10100.0, at(9))
            .unwrap()
            .state;

        assert_eq!(
            state.delete_entry(&baseline_id).unwrap_err(),
            FuelError::BaselineProtected
        );
        assert_eq!(
            state.delete_entry("missing").unwrap_err(),
            FuelError::EntryNotFound
        );
    }

    #[test]
    fn clear_all_is_idempotent_and_keeps_price() {
        let state = FuelState::default();
        let state = state.set_price(18000.0).unwrap().state;
        let state = state.add_baseline(10000.0, at(8)).unwrap().state;

        let cleared = state.clear_all();
        assert!(cleared.state.ledger.is_empty());
        assert_eq!(cleared.state.price_per_gallon_cop, 18000.0);

        let again = cleared.state.clear_all();
        assert!(again.state.ledger.is_empty());
        assert_eq!(again.message, cleared.message);
    }
}
