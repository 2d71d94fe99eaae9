use crate::utils::error::{LabError, Result};
use crate::utils::validation::{expect_integer, validate_min, validate_range};
use serde_json::Value;

/// Highest battery charge in percent.
pub const FULL_BATTERY: i64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Smartphone {
    brand: String,
    battery_percentage: i64,
}

impl Smartphone {
    /// A phone must hold some charge: the battery level is in `1..=100`.
    pub fn new(brand: impl Into<String>, battery_percentage: impl Into<Value>) -> Result<Self> {
        let battery = expect_integer("battery_percentage", &battery_percentage.into())?;
        validate_range("battery_percentage", battery, 1, FULL_BATTERY)?;

        Ok(Self {
            brand: brand.into(),
            battery_percentage: battery,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn battery_percentage(&self) -> i64 {
        self.battery_percentage
    }

    /// Places a call lasting `duration` seconds. Only the duration is checked.
    pub fn make_call(&self, contact: &str, duration: impl Into<Value>) -> Result<()> {
        let duration = expect_integer("duration", &duration.into())?;
        validate_min("duration", duration, 0)?;

        tracing::debug!(brand = %self.brand, contact, duration, "call placed");
        Ok(())
    }

    /// Adds `charging_percentage` to the battery without going over full.
    pub fn charge(&mut self, charging_percentage: impl Into<Value>) -> Result<()> {
        let amount = expect_integer("charging_percentage", &charging_percentage.into())?;
        if amount.saturating_add(self.battery_percentage) > FULL_BATTERY {
            return Err(LabError::out_of_range(
                "charging_percentage",
                amount,
                format!(
                    "battery at {}% cannot exceed {}%",
                    self.battery_percentage, FULL_BATTERY
                ),
            ));
        }
        validate_min("charging_percentage", amount, 0)?;

        self.battery_percentage += amount;
        tracing::debug!(brand = %self.brand, battery = self.battery_percentage, "battery charged");
        Ok(())
    }
}
