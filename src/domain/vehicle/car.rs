use super::{Vehicle, VehicleBase};
use crate::domain::ports::SystemClock;
use crate::utils::error::{LabError, Result};
use crate::utils::validation::{expect_integer, validate_min};
use serde_json::Value;
use std::fmt;

/// Passenger car with a bounded passenger counter.
#[derive(Clone, PartialEq)]
pub struct Car {
    base: VehicleBase,
    seating_capacity: i64,
    passenger_count: i64,
}

impl Car {
    pub const CATEGORY: &'static str = "Passenger";

    pub fn new(
        brand: impl Into<Value>,
        year_release: impl Into<Value>,
        seating_capacity: impl Into<Value>,
    ) -> Result<Self> {
        let base = VehicleBase::new(Some(Self::CATEGORY), brand, year_release)?;
        let seating_capacity = expect_integer("seating_capacity", &seating_capacity.into())?;
        validate_min("seating_capacity", seating_capacity, 0)?;

        Ok(Self {
            base,
            seating_capacity,
            passenger_count: 0,
        })
    }

    pub fn seating_capacity(&self) -> i64 {
        self.seating_capacity
    }

    pub fn passenger_count(&self) -> i64 {
        self.passenger_count
    }

    /// Replaces the passenger count if it fits into the car; otherwise nothing changes.
    pub fn set_passenger_count(&mut self, passenger_count: impl Into<Value>) -> Result<()> {
        let count = expect_integer("passenger_count", &passenger_count.into())?;
        validate_min("passenger_count", count, 0)?;
        if count > self.seating_capacity {
            return Err(LabError::out_of_range(
                "passenger_count",
                count,
                format!("exceeds seating capacity {}", self.seating_capacity),
            ));
        }

        tracing::debug!(brand = %self.base.brand, count, "passenger count updated");
        self.passenger_count = count;
        Ok(())
    }
}

impl Vehicle for Car {
    fn base(&self) -> &VehicleBase {
        &self.base
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary_at(&SystemClock))
    }
}

impl fmt::Debug for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, seating_capacity={}, passenger_count={})",
            self.base.repr_head("Car"),
            self.seating_capacity,
            self.passenger_count
        )
    }
}
