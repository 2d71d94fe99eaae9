//! Usage examples of every lab, runnable as a self-test.

mod catalog_lab;
mod peers_lab;
mod vehicles_lab;

pub use catalog_lab::CatalogExercise;
pub use peers_lab::PeersExercise;
pub use vehicles_lab::VehiclesExercise;

use crate::domain::ports::Exercise;
use crate::utils::error::{ErrorCategory, LabError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Lab {
    /// Hero, smartphone and book.
    Lab1,
    /// Paper and audio books.
    Lab3,
    /// Vehicles, cars and trucks.
    Lab4,
}

impl Lab {
    pub const ALL: [Lab; 3] = [Lab::Lab1, Lab::Lab3, Lab::Lab4];

    pub fn exercise(self) -> Box<dyn Exercise> {
        match self {
            Lab::Lab1 => Box::new(PeersExercise),
            Lab::Lab3 => Box::new(CatalogExercise),
            Lab::Lab4 => Box::new(VehiclesExercise),
        }
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Lab::Lab1 => "lab1",
            Lab::Lab3 => "lab3",
            Lab::Lab4 => "lab4",
        };
        f.write_str(name)
    }
}

impl FromStr for Lab {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self> {
        Lab::ALL
            .into_iter()
            .find(|lab| lab.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LabError::ConfigError {
                message: format!("Unknown lab '{}', expected one of lab1, lab3, lab4", s),
            })
    }
}

/// Exercises for the given labs, in the order given; all labs when empty.
pub fn exercises_for(labs: &[Lab]) -> Vec<Box<dyn Exercise>> {
    let selected: &[Lab] = if labs.is_empty() { &Lab::ALL } else { labs };
    selected.iter().map(|lab| lab.exercise()).collect()
}

/// Counts checks and turns a failed expectation into a self-test error.
pub(crate) struct Checks<'a> {
    exercise: &'a str,
    count: usize,
}

impl<'a> Checks<'a> {
    pub(crate) fn new(exercise: &'a str) -> Self {
        Self { exercise, count: 0 }
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    fn failure(&self, message: String) -> LabError {
        LabError::SelfTestError {
            exercise: self.exercise.to_string(),
            message,
        }
    }

    pub(crate) fn ok<T>(&mut self, label: &str, result: Result<T>) -> Result<T> {
        self.count += 1;
        result.map_err(|e| self.failure(format!("{}: unexpected error: {}", label, e)))
    }

    pub(crate) fn equal<T: PartialEq + fmt::Debug>(
        &mut self,
        label: &str,
        actual: T,
        expected: T,
    ) -> Result<()> {
        self.count += 1;
        if actual != expected {
            return Err(self.failure(format!(
                "{}: expected {:?}, got {:?}",
                label, expected, actual
            )));
        }
        tracing::debug!("{} ok", label);
        Ok(())
    }

    pub(crate) fn fails_with<T: fmt::Debug>(
        &mut self,
        label: &str,
        result: Result<T>,
        category: ErrorCategory,
    ) -> Result<()> {
        self.count += 1;
        match result {
            Err(e) if e.category() == category => {
                tracing::debug!("{} rejected as expected: {}", label, e);
                Ok(())
            }
            Err(e) => Err(self.failure(format!(
                "{}: expected {:?} error, got {:?}",
                label,
                category,
                e.category()
            ))),
            Ok(value) => Err(self.failure(format!(
                "{}: expected {:?} error, got {:?}",
                label, category, value
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lab_from_str() {
        assert_eq!("lab4".parse::<Lab>().unwrap(), Lab::Lab4);
        assert_eq!(" LAB1 ".parse::<Lab>().unwrap(), Lab::Lab1);
        assert!("lab2".parse::<Lab>().is_err());
    }

    #[test]
    fn test_exercises_for() {
        assert_eq!(exercises_for(&[]).len(), 3);
        let only = exercises_for(&[Lab::Lab4]);
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].name(), "lab4: vehicles");
    }

    #[test]
    fn test_checks_counting() {
        let mut checks = Checks::new("demo");
        checks.equal("one", 1, 1).unwrap();
        checks
            .fails_with(
                "bad",
                Err::<(), _>(LabError::MissingCategory),
                ErrorCategory::Invariant,
            )
            .unwrap();
        assert!(checks.equal("two", 1, 2).is_err());
        assert!(checks
            .fails_with("accepted", Ok(5), ErrorCategory::TypeMismatch)
            .is_err());
        assert_eq!(checks.count(), 4);
    }
}
