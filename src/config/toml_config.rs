use crate::app::exercises::Lab;
use crate::utils::error::{LabError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Year bounds accepted for a pinned reference year.
const MIN_REFERENCE_YEAR: i32 = 1900;
const MAX_REFERENCE_YEAR: i32 = 9999;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub self_test: SelfTestConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Pins the current year used for vehicle ages.
    pub reference_year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfTestConfig {
    pub labs: Option<Vec<String>>,
    pub fail_fast: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `oop_labs=debug`.
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LabError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LabError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LAB_YEAR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LabError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn reference_year(&self) -> Option<i32> {
        self.clock.reference_year
    }

    /// Parsed lab selection; empty means every lab.
    pub fn labs(&self) -> Result<Vec<Lab>> {
        self.self_test
            .labs
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|name| name.parse())
            .collect()
    }

    pub fn fail_fast(&self) -> bool {
        self.self_test.fail_fast.unwrap_or(false)
    }

    pub fn log_directive(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(year) = self.clock.reference_year {
            validate_range(
                "clock.reference_year",
                year,
                MIN_REFERENCE_YEAR,
                MAX_REFERENCE_YEAR,
            )?;
        }

        if let Some(level) = &self.logging.level {
            validate_non_empty_string("logging.level", level)?;
        }

        self.labs()?;
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[clock]
reference_year = 2024

[self_test]
labs = ["lab1", "lab4"]
fail_fast = true

[logging]
level = "oop_labs=debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.reference_year(), Some(2024));
        assert_eq!(config.labs().unwrap(), vec![Lab::Lab1, Lab::Lab4]);
        assert!(config.fail_fast());
        assert_eq!(config.log_directive(), Some("oop_labs=debug"));
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.reference_year(), None);
        assert!(config.labs().unwrap().is_empty());
        assert!(!config.fail_fast());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("OOP_LABS_TEST_YEAR", "2030");

        let toml_content = r#"
[clock]
reference_year = ${OOP_LABS_TEST_YEAR}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.reference_year(), Some(2030));

        std::env::remove_var("OOP_LABS_TEST_YEAR");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[clock]\nreference_year = 1500\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[self_test]\nlabs = [\"lab2\"]\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[clock\nreference_year = 1").unwrap_err();
        assert!(matches!(err, LabError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[self_test]\nlabs = [\"lab3\"]\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.labs().unwrap(), vec![Lab::Lab3]);
    }
}
