pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::TomlConfig;
#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, RunSettings};

pub use crate::app::exercises::{exercises_for, Lab};
pub use crate::core::{ExerciseOutcome, SelfTestReport, SelfTestRunner};
pub use crate::domain::{
    AudioBook, Book, BookListing, Car, Clock, Exercise, FixedClock, Hero, Listing, PaperBook,
    Smartphone, SystemClock, Truck, Vehicle, VehicleBase,
};
pub use crate::utils::error::{ErrorCategory, LabError, Result};
