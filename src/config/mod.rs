pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::app::exercises::Lab;
#[cfg(feature = "cli")]
use crate::domain::ports::{Clock, FixedClock, SystemClock};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_range, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "oop-labs")]
#[command(about = "Runs the usage examples of every lab as a self-test")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Labs to run (repeatable); all labs when omitted
    #[arg(long, value_enum)]
    pub lab: Vec<Lab>,

    /// Pin the current year used for vehicle ages
    #[arg(long)]
    pub year: Option<i32>,

    /// Stop at the first failing lab
    #[arg(long)]
    pub fail_fast: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Settings after merging the config file with command line overrides.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub labs: Vec<Lab>,
    pub reference_year: Option<i32>,
    pub fail_fast: bool,
    pub log_directive: Option<String>,
    pub json_logs: bool,
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl RunSettings {
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.reference_year {
            Some(year) => Box::new(FixedClock(year)),
            None => Box::new(SystemClock),
        }
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    fn load_file(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Ok(file)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// Loads the config file, if any, and applies the command line on top.
    pub fn resolve(&self) -> Result<RunSettings> {
        self.validate()?;
        let file = self.load_file()?;

        let labs = if self.lab.is_empty() {
            file.labs()?
        } else {
            self.lab.clone()
        };

        Ok(RunSettings {
            labs,
            reference_year: self.year.or(file.reference_year()),
            fail_fast: self.fail_fast || file.fail_fast(),
            log_directive: file.log_directive().map(str::to_string),
            json_logs: self.json_logs || file.json_logs(),
            verbose: self.verbose,
        })
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(year) = self.year {
            validate_range("--year", year, 1900, 9999)?;
        }
        Ok(())
    }
}
