use crate::domain::ports::{Clock, Exercise};
use crate::utils::error::LabError;
use std::time::{Duration, Instant};

/// Outcome of running one exercise.
#[derive(Debug)]
pub struct ExerciseOutcome {
    pub name: String,
    pub checks: usize,
    pub elapsed: Duration,
    pub error: Option<LabError>,
}

impl ExerciseOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Default)]
pub struct SelfTestReport {
    pub outcomes: Vec<ExerciseOutcome>,
}

impl SelfTestReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(ExerciseOutcome::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExerciseOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed())
    }

    pub fn total_checks(&self) -> usize {
        self.outcomes.iter().map(|outcome| outcome.checks).sum()
    }
}

pub struct SelfTestRunner {
    exercises: Vec<Box<dyn Exercise>>,
    fail_fast: bool,
}

impl SelfTestRunner {
    pub fn new(exercises: Vec<Box<dyn Exercise>>) -> Self {
        Self {
            exercises,
            fail_fast: false,
        }
    }

    /// Stop after the first failing exercise.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn run(&self, clock: &dyn Clock) -> SelfTestReport {
        tracing::info!(
            "Running {} exercise(s) for year {}",
            self.exercises.len(),
            clock.current_year()
        );

        let mut report = SelfTestReport::default();
        for exercise in &self.exercises {
            let started = Instant::now();
            let result = exercise.run(clock);
            let elapsed = started.elapsed();

            let outcome = match result {
                Ok(checks) => {
                    tracing::info!(
                        "✅ {}: {} checks passed in {:?}",
                        exercise.name(),
                        checks,
                        elapsed
                    );
                    ExerciseOutcome {
                        name: exercise.name().to_string(),
                        checks,
                        elapsed,
                        error: None,
                    }
                }
                Err(e) => {
                    tracing::error!("❌ {}: {}", exercise.name(), e);
                    ExerciseOutcome {
                        name: exercise.name().to_string(),
                        checks: 0,
                        elapsed,
                        error: Some(e),
                    }
                }
            };

            let failed = !outcome.passed();
            report.outcomes.push(outcome);
            if failed && self.fail_fast {
                tracing::warn!("Stopping after first failure");
                break;
            }
        }

        tracing::info!(
            "Self-test finished: {} checks, {} failure(s)",
            report.total_checks(),
            report.failures().count()
        );
        report
    }
}
