use super::Checks;
use crate::domain::catalog::{AudioBook, Listing, PaperBook};
use crate::domain::ports::{Clock, Exercise};
use crate::utils::error::{ErrorCategory, Result};

pub struct CatalogExercise;

impl Exercise for CatalogExercise {
    fn name(&self) -> &str {
        "lab3: paper and audio books"
    }

    fn run(&self, _clock: &dyn Clock) -> Result<usize> {
        let mut checks = Checks::new(self.name());

        let mut paper = checks.ok("paper", PaperBook::new("Oblomov", "Goncharov", 640))?;
        checks.equal(
            "paper description",
            paper.description(),
            "Book Oblomov. Author Goncharov".to_string(),
        )?;
        checks.equal(
            "paper repr",
            format!("{:?}", paper),
            "PaperBook(name='Oblomov', author='Goncharov', pages=640)".to_string(),
        )?;
        checks.fails_with("zero pages", paper.set_pages(0), ErrorCategory::Invariant)?;
        checks.fails_with("textual pages", paper.set_pages("10"), ErrorCategory::TypeMismatch)?;
        checks.equal("pages kept", paper.pages(), 640)?;

        let mut audio = checks.ok("audio", AudioBook::new("Oblomov", "Goncharov", 12.5))?;
        checks.equal(
            "audio repr",
            format!("{:?}", audio),
            "AudioBook(name='Oblomov', author='Goncharov', duration=12.5)".to_string(),
        )?;
        checks.fails_with(
            "integer duration",
            audio.set_duration(12),
            ErrorCategory::TypeMismatch,
        )?;
        checks.fails_with(
            "negative duration",
            audio.set_duration(-1.5),
            ErrorCategory::Invariant,
        )?;
        checks.equal("duration kept", audio.duration(), 12.5)?;

        Ok(checks.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedClock;

    #[test]
    fn test_catalog_exercise_passes() {
        assert!(CatalogExercise.run(&FixedClock(2024)).unwrap() > 5);
    }
}
