//! Fuel-ledger records.
//!
//! # Invariants
//! - At most one `Baseline` entry exists in a ledger at a time.
//! - `gallons = amount_cop / price_per_gallon_cop` for fillups, `0.0` for
//!   the baseline entry.
//! - Ledgers are kept sorted ascending by `date`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed unit conversion applied on every computation path.
pub const LITRES_PER_GALLON: f64 = 3.78541;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelEntryKind {
    /// The single starting-odometer record; zero cost, zero volume.
    Baseline,
    /// A fuel purchase with derived volume.
    Fillup,
}

/// One fuel-ledger record, persisted with the original app's field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelEntry {
    pub id: String,
    #[serde(rename = "dateISO")]
    pub date: DateTime<Utc>,
    #[serde(rename = "amountCOP")]
    pub amount_cop: f64,
    #[serde(rename = "pricePerGallonCOP")]
    pub price_per_gallon_cop: f64,
    pub gallons: f64,
    #[serde(rename = "odometerKm", default, skip_serializing_if = "Option::is_none")]
    pub odometer_km: Option<f64>,
    #[serde(rename = "type")]
    pub kind: FuelEntryKind,
}

impl FuelEntry {
    pub fn baseline(odometer_km: f64, price_per_gallon_cop: f64, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            amount_cop: 0.0,
            price_per_gallon_cop: price_per_gallon_cop.round(),
            gallons: 0.0,
            odometer_km: Some(odometer_km),
            kind: FuelEntryKind::Baseline,
        }
    }

    pub fn fillup(
        amount_cop: f64,
        price_per_gallon_cop: f64,
        odometer_km: f64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            amount_cop: amount_cop.round(),
            price_per_gallon_cop: price_per_gallon_cop.round(),
            gallons: amount_cop / price_per_gallon_cop,
            odometer_km: Some(odometer_km),
            kind: FuelEntryKind::Fillup,
        }
    }

    /// Purchased volume in litres.
    pub fn litres(&self) -> f64 {
        self.gallons * LITRES_PER_GALLON
    }

    pub fn is_baseline(&self) -> bool {
        self.kind == FuelEntryKind::Baseline
    }
}
