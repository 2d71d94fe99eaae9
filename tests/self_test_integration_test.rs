use anyhow::Result;
use oop_labs::{exercises_for, FixedClock, Lab, SelfTestRunner, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_every_lab_passes() {
    let runner = SelfTestRunner::new(exercises_for(&[]));
    assert_eq!(runner.len(), 3);

    let report = runner.run(&FixedClock(2024));
    assert!(report.passed(), "failures: {:?}", report.failures().collect::<Vec<_>>());
    assert!(report.total_checks() > 40);
}

#[test]
fn test_labs_pass_for_other_years() {
    for year in [2024, 2026, 2100] {
        let report = SelfTestRunner::new(exercises_for(&[Lab::Lab4])).run(&FixedClock(year));
        assert!(report.passed(), "year {}", year);
    }
}

/// The TOML file picks the labs and pins the year.
#[test]
fn test_config_file_selects_labs() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    write!(
        temp_file,
        r#"
[clock]
reference_year = 2024

[self_test]
labs = ["lab3", "lab4"]
fail_fast = true
"#
    )?;

    let config = TomlConfig::from_file(temp_file.path())?;
    let labs = config.labs()?;
    let runner = SelfTestRunner::new(exercises_for(&labs)).with_fail_fast(config.fail_fast());
    let clock = FixedClock(config.reference_year().unwrap_or(2024));
    let report = runner.run(&clock);

    let names: Vec<&str> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["lab3: paper and audio books", "lab4: vehicles"]);
    assert!(report.passed());
    Ok(())
}
