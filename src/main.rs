use clap::Parser;
use oop_labs::utils::logger;
use oop_labs::{exercises_for, CliConfig, SelfTestRunner};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(config.verbose, None);
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(settings.log_directive.as_deref());
    } else {
        logger::init_cli_logger(settings.verbose, settings.log_directive.as_deref());
    }

    tracing::info!("Starting oop-labs self-test");
    tracing::debug!("Run settings: {:?}", settings);

    let runner =
        SelfTestRunner::new(exercises_for(&settings.labs)).with_fail_fast(settings.fail_fast);
    let clock = settings.clock();
    let report = runner.run(clock.as_ref());

    for outcome in &report.outcomes {
        match &outcome.error {
            None => println!("✅ {} ({} checks)", outcome.name, outcome.checks),
            Some(e) => {
                println!("❌ {}", outcome.name);
                eprintln!("   {}", e.user_friendly_message());
            }
        }
    }

    if !report.passed() {
        eprintln!("💡 Run with --verbose to see every check");
        std::process::exit(1);
    }

    println!("All {} checks passed", report.total_checks());
    Ok(())
}
