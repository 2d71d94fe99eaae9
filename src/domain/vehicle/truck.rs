use super::{Vehicle, VehicleBase};
use crate::domain::ports::SystemClock;
use crate::utils::error::{LabError, Result};
use crate::utils::validation::{expect_integer, expect_numeric, validate_min, Numeric};
use serde_json::Value;
use std::fmt;

/// Per-unit cargo handling fee applied when none is given.
pub const DEFAULT_CARGO_HANDLING_FEE: f64 = 1.0;

/// Cargo truck with a bounded load.
#[derive(Clone, PartialEq)]
pub struct Truck {
    base: VehicleBase,
    cargo_capacity: i64,
    cargo_weight: Numeric,
}

impl Truck {
    pub const CATEGORY: &'static str = "Cargo";

    pub fn new(
        brand: impl Into<Value>,
        year_release: impl Into<Value>,
        cargo_capacity: impl Into<Value>,
    ) -> Result<Self> {
        let base = VehicleBase::new(Some(Self::CATEGORY), brand, year_release)?;
        let cargo_capacity = expect_integer("cargo_capacity", &cargo_capacity.into())?;
        validate_min("cargo_capacity", cargo_capacity, 0)?;

        Ok(Self {
            base,
            cargo_capacity,
            cargo_weight: Numeric::default(),
        })
    }

    pub fn cargo_capacity(&self) -> i64 {
        self.cargo_capacity
    }

    pub fn cargo_weight(&self) -> Numeric {
        self.cargo_weight
    }

    /// Replaces the cargo weight if the truck can carry it; otherwise nothing changes.
    pub fn set_cargo_weight(&mut self, cargo_weight: impl Into<Value>) -> Result<()> {
        let weight = expect_numeric("cargo_weight", &cargo_weight.into())?;
        validate_min("cargo_weight", weight.as_f64(), 0.0)?;
        if weight.as_f64() > self.cargo_capacity as f64 {
            return Err(LabError::out_of_range(
                "cargo_weight",
                weight,
                format!("exceeds cargo capacity {}", self.cargo_capacity),
            ));
        }

        tracing::debug!(brand = %self.base.brand, weight = %weight, "cargo weight updated");
        self.cargo_weight = weight;
        Ok(())
    }

    /// Share of the capacity in use, as a percentage rounded half-to-even to two decimals.
    pub fn load_capacity_utilization(&self) -> f64 {
        if self.cargo_capacity == 0 {
            return 0.0;
        }
        let percent = self.cargo_weight.as_f64() / self.cargo_capacity as f64 * 100.0;
        (percent * 100.0).round_ties_even() / 100.0
    }

    /// Maintenance cost including a per-unit fee for handling the current cargo.
    pub fn maintenance_cost_with_fee(
        &self,
        distance: f64,
        cost_per_km: f64,
        cargo_handling_fee: f64,
    ) -> f64 {
        let base_cost = distance * cost_per_km;
        base_cost + self.cargo_weight.as_f64() * cargo_handling_fee
    }
}

impl Vehicle for Truck {
    fn base(&self) -> &VehicleBase {
        &self.base
    }

    fn maintenance_cost(&self, distance: f64, cost_per_km: f64) -> f64 {
        self.maintenance_cost_with_fee(distance, cost_per_km, DEFAULT_CARGO_HANDLING_FEE)
    }
}

impl fmt::Display for Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary_at(&SystemClock))
    }
}

impl fmt::Debug for Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, cargo_capacity={}, cargo_weight={})",
            self.base.repr_head("Truck"),
            self.cargo_capacity,
            self.cargo_weight
        )
    }
}
