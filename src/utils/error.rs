use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabError {
    #[error("{field} must be {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("{field} is out of range ({value}): {reason}")]
    OutOfRange {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Vehicle category label is not set")]
    MissingCategory,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Self-test '{exercise}' failed: {message}")]
    SelfTestError { exercise: String, message: String },
}

/// Coarse grouping used by callers that need to tell error kinds apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The value is not of the required kind.
    TypeMismatch,
    /// The value has the right kind but violates a range or invariant.
    Invariant,
    Configuration,
    SelfTest,
}

impl LabError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LabError::TypeMismatch { .. } => ErrorCategory::TypeMismatch,
            LabError::OutOfRange { .. } | LabError::MissingCategory => ErrorCategory::Invariant,
            LabError::IoError(_) | LabError::ConfigError { .. } => ErrorCategory::Configuration,
            LabError::SelfTestError { .. } => ErrorCategory::SelfTest,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::TypeMismatch => format!("Invalid value type: {}", self),
            ErrorCategory::Invariant => format!("Invalid value: {}", self),
            ErrorCategory::Configuration => format!("Could not load configuration: {}", self),
            ErrorCategory::SelfTest => format!("Usage example failed: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::TypeMismatch | ErrorCategory::Invariant => {
                "Check the argument against the documented domain of the field"
            }
            ErrorCategory::Configuration => {
                "Make sure the config file exists and is valid TOML"
            }
            ErrorCategory::SelfTest => "Run with --verbose to see every check",
        }
    }

    pub(crate) fn type_mismatch(
        field: &str,
        expected: &'static str,
        found: &serde_json::Value,
    ) -> Self {
        LabError::TypeMismatch {
            field: field.to_string(),
            expected,
            found: found.to_string(),
        }
    }

    pub(crate) fn out_of_range(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        LabError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LabError>;
