use crate::utils::error::{LabError, Result};
use crate::utils::validation::{expect_integer, validate_min};
use serde_json::Value;
use std::fmt;

/// A game character that can only level up.
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    race: String,
    level: i64,
    health: i64,
}

impl Hero {
    pub fn new(race: impl Into<String>, level: impl Into<Value>, health: i64) -> Result<Self> {
        let level = expect_integer("level", &level.into())?;
        validate_min("level", level, 1)?;

        Ok(Self {
            race: race.into(),
            level,
            health,
        })
    }

    pub fn race(&self) -> &str {
        &self.race
    }

    pub fn level(&self) -> i64 {
        self.level
    }

    pub fn health(&self) -> i64 {
        self.health
    }

    /// Adds `level_add` levels; negative progress is rejected.
    pub fn progress_level(&mut self, level_add: impl Into<Value>) -> Result<()> {
        let level_add = expect_integer("level_add", &level_add.into())?;
        validate_min("level_add", level_add, 0)?;

        self.level = self.level.checked_add(level_add).ok_or_else(|| {
            LabError::out_of_range("level_add", level_add, "level would overflow")
        })?;
        tracing::debug!(race = %self.race, level = self.level, "hero levelled up");
        Ok(())
    }

    pub fn info(&self) -> String {
        format!(
            "Race {}, Level {}, Health {} hp",
            self.race, self.level, self.health
        )
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;

    #[test]
    fn test_new_hero() {
        let hero = Hero::new("Human", 10, 100).unwrap();
        assert_eq!(hero.level(), 10);

        let err = Hero::new("Human", 0, 100).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Invariant);
        let err = Hero::new("Human", "ten", 100).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::TypeMismatch);
    }

    #[test]
    fn test_progress_level() {
        let mut hero = Hero::new("Human", 15, 100).unwrap();
        hero.progress_level(5).unwrap();
        assert_eq!(hero.level(), 20);
        hero.progress_level(0).unwrap();
        assert_eq!(hero.level(), 20);

        let err = hero.progress_level(-1).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Invariant);
        let err = hero.progress_level(1.5).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::TypeMismatch);
        assert_eq!(hero.level(), 20);
    }

    #[test]
    fn test_info() {
        let hero = Hero::new("Human", 20, 100).unwrap();
        assert_eq!(hero.info(), "Race Human, Level 20, Health 100 hp");
        assert_eq!(hero.to_string(), hero.info());
    }
}
