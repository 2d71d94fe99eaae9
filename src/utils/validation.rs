use crate::utils::error::{LabError, Result};
use serde_json::Value;
use std::fmt;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A number that remembers whether it was given as an integer or a real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integer(i64),
    Real(f64),
}

impl Numeric {
    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Integer(value) => value as f64,
            Numeric::Real(value) => value,
        }
    }
}

impl Default for Numeric {
    fn default() -> Self {
        Numeric::Integer(0)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Integer(value) => write!(f, "{}", value),
            Numeric::Real(value) => write!(f, "{}", format_real(*value)),
        }
    }
}

/// Formats a real so that whole values keep a trailing `.0`.
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Quotes text the way the debug representations of the lab types show it:
/// single quotes, or double quotes when the text holds a `'` but no `"`.
pub fn quoted(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\");
    if text.contains('\'') && !text.contains('"') {
        format!("\"{}\"", escaped)
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}

pub fn expect_integer(field_name: &str, value: &Value) -> Result<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| LabError::type_mismatch(field_name, "an integer", value)),
        _ => Err(LabError::type_mismatch(field_name, "an integer", value)),
    }
}

pub fn expect_real(field_name: &str, value: &Value) -> Result<f64> {
    match value {
        Value::Number(number) if number.is_f64() => number
            .as_f64()
            .ok_or_else(|| LabError::type_mismatch(field_name, "a real number", value)),
        _ => Err(LabError::type_mismatch(field_name, "a real number", value)),
    }
}

pub fn expect_numeric(field_name: &str, value: &Value) -> Result<Numeric> {
    match value {
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                Ok(Numeric::Integer(integer))
            } else if number.is_f64() {
                number
                    .as_f64()
                    .map(Numeric::Real)
                    .ok_or_else(|| LabError::type_mismatch(field_name, "a number", value))
            } else {
                Err(LabError::type_mismatch(field_name, "a number", value))
            }
        }
        _ => Err(LabError::type_mismatch(field_name, "a number", value)),
    }
}

pub fn expect_text(field_name: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| LabError::type_mismatch(field_name, "a string", value))
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LabError::out_of_range(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_min<T: PartialOrd + fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
) -> Result<()> {
    if value < min {
        return Err(LabError::out_of_range(
            field_name,
            value,
            format!("Value must be at least {}", min),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(LabError::out_of_range(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}
