use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter: `RUST_LOG` wins, then an explicit directive, then the verbosity default.
fn build_filter(verbose: bool, directive: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match directive {
        Some(directive) => EnvFilter::new(directive),
        None if verbose => EnvFilter::new("oop_labs=debug,info"),
        None => EnvFilter::new("oop_labs=info"),
    })
}

pub fn init_cli_logger(verbose: bool, directive: Option<&str>) {
    let installed = tracing_subscriber::registry()
        .with(build_filter(verbose, directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
    if let Err(e) = installed {
        tracing::debug!("tracing subscriber already installed: {}", e);
    }
}

pub fn init_json_logger(directive: Option<&str>) {
    let installed = tracing_subscriber::registry()
        .with(build_filter(false, directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init();
    if let Err(e) = installed {
        tracing::debug!("tracing subscriber already installed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_tolerated() {
        init_cli_logger(false, None);
        init_cli_logger(true, Some("oop_labs=trace"));
        init_json_logger(None);
        tracing::info!("logger still usable");
    }
}
