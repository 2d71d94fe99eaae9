use super::Checks;
use crate::domain::book::Book;
use crate::domain::hero::Hero;
use crate::domain::ports::{Clock, Exercise};
use crate::domain::smartphone::Smartphone;
use crate::utils::error::{ErrorCategory, Result};

pub struct PeersExercise;

impl Exercise for PeersExercise {
    fn name(&self) -> &str {
        "lab1: hero, smartphone, book"
    }

    fn run(&self, _clock: &dyn Clock) -> Result<usize> {
        let mut checks = Checks::new(self.name());

        let mut hero = checks.ok("hero", Hero::new("Human", 15, 100))?;
        checks.ok("progress", hero.progress_level(5))?;
        checks.equal("hero level", hero.level(), 20)?;
        checks.fails_with("negative progress", hero.progress_level(-1), ErrorCategory::Invariant)?;
        checks.fails_with("level zero", Hero::new("Human", 0, 100), ErrorCategory::Invariant)?;
        checks.equal(
            "hero info",
            hero.info(),
            "Race Human, Level 20, Health 100 hp".to_string(),
        )?;

        let mut phone = checks.ok("phone", Smartphone::new("Samsung", 50))?;
        checks.ok("call", phone.make_call("Ivan Petrov", 260))?;
        checks.fails_with(
            "negative call",
            phone.make_call("Ivan Petrov", -5),
            ErrorCategory::Invariant,
        )?;
        checks.ok("charge", phone.charge(20))?;
        checks.equal("battery", phone.battery_percentage(), 70)?;
        checks.fails_with("overcharge", phone.charge(31), ErrorCategory::Invariant)?;
        checks.fails_with(
            "textual charge",
            phone.charge("10"),
            ErrorCategory::TypeMismatch,
        )?;
        checks.fails_with("empty battery", Smartphone::new("Samsung", 0), ErrorCategory::Invariant)?;

        let mut book = checks.ok("book", Book::new("Oblomov", 640))?;
        checks.ok("open", book.open_book(50))?;
        checks.equal("opened page", book.opened_page(), Some(50))?;
        checks.fails_with("page past end", book.open_book(641), ErrorCategory::Invariant)?;
        checks.fails_with("no pages", Book::new("Portrait", 0), ErrorCategory::Invariant)?;
        let eden = checks.ok("martin eden", Book::new("Martin Eden", 450))?;
        checks.equal("book info", eden.info(), "Martin Eden - 450 pp.".to_string())?;

        Ok(checks.count())
    }
}
