pub mod runner;

pub use crate::domain::ports::{Clock, Exercise};
pub use crate::utils::error::Result;
pub use runner::{ExerciseOutcome, SelfTestReport, SelfTestRunner};
