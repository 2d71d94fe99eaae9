//! Vehicles: a shared validated base and the concrete passenger and cargo variants.

mod car;
mod truck;

pub use car::Car;
pub use truck::Truck;

use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{LabError, Result};
use crate::utils::validation::{expect_integer, expect_text, quoted, validate_range};
use serde_json::Value;
use std::fmt;

/// Earliest accepted release year.
pub const MIN_YEAR_RELEASE: i64 = 1900;
/// Latest accepted release year.
pub const MAX_YEAR_RELEASE: i64 = 2024;

/// State shared by every vehicle: the category label, brand and release year.
#[derive(Clone, PartialEq)]
pub struct VehicleBase {
    category: String,
    brand: String,
    year_release: i32,
}

impl VehicleBase {
    /// Validates and builds the base part of a vehicle.
    ///
    /// Checks run in order: category label, brand kind, year kind, year range.
    pub fn new(
        category: Option<&str>,
        brand: impl Into<Value>,
        year_release: impl Into<Value>,
    ) -> Result<Self> {
        let category = category.ok_or(LabError::MissingCategory)?;
        let brand = expect_text("brand", &brand.into())?;
        let year = expect_integer("year_release", &year_release.into())?;
        validate_range("year_release", year, MIN_YEAR_RELEASE, MAX_YEAR_RELEASE)?;

        Ok(Self {
            category: category.to_string(),
            brand,
            // within [1900, 2024] after the range check
            year_release: year as i32,
        })
    }

    /// Opening part of the debug representation, without the closing parenthesis.
    pub(crate) fn repr_head(&self, class_name: &str) -> String {
        format!(
            "{}(type={}, brand={}, year_release={}",
            class_name,
            quoted(&self.category),
            quoted(&self.brand),
            self.year_release
        )
    }
}

/// Behaviour common to all vehicles.
pub trait Vehicle {
    fn base(&self) -> &VehicleBase;

    fn category(&self) -> &str {
        &self.base().category
    }

    fn brand(&self) -> &str {
        &self.base().brand
    }

    fn year_release(&self) -> i32 {
        self.base().year_release
    }

    /// Age in years according to the system clock.
    fn age(&self) -> i32 {
        self.age_at(&SystemClock)
    }

    fn age_at(&self, clock: &dyn Clock) -> i32 {
        clock.current_year() - self.year_release()
    }

    /// Cost of servicing the vehicle over `distance` kilometres.
    fn maintenance_cost(&self, distance: f64, cost_per_km: f64) -> f64 {
        distance * cost_per_km
    }

    /// Two-line human readable summary using the given clock for the age.
    fn summary_at(&self, clock: &dyn Clock) -> String {
        format!(
            "{} vehicle: {}, released {}\nVehicle age: {}",
            self.category(),
            self.brand(),
            self.year_release(),
            self.age_at(clock)
        )
    }
}

impl Vehicle for VehicleBase {
    fn base(&self) -> &VehicleBase {
        self
    }
}

impl fmt::Display for VehicleBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary_at(&SystemClock))
    }
}

impl fmt::Debug for VehicleBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{})", self.repr_head("Vehicle"))
    }
}
