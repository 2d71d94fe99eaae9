use crate::utils::error::Result;
use chrono::Datelike;

/// Source of the current calendar year.
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Reads the year from the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// The runnable usage examples of one lab.
pub trait Exercise {
    fn name(&self) -> &str;

    /// Runs every example and returns the number of checks performed.
    fn run(&self, clock: &dyn Clock) -> Result<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(2024).current_year(), 2024);
    }

    #[test]
    fn test_system_clock_is_plausible() {
        assert!(SystemClock.current_year() >= 2024);
    }
}
