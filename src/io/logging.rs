use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter directive for a given verbosity. `RUST_LOG` always wins.
pub fn filter_directive(default_filter: &str, verbose: u8) -> String {
    match verbose {
        0 => default_filter.to_string(),
        1 => "tasksink=debug".to_string(),
        _ => "tasksink=trace".to_string(),
    }
}

/// Install the stderr subscriber. Returns false when one is already set.
pub fn init_logging(default_filter: &str, verbose: u8) -> bool {
    let directive = filter_directive(default_filter, verbose);
    let env_filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive)),
        _ => EnvFilter::new(&directive),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(filter_directive("warn", 0), "warn");
        assert_eq!(filter_directive("warn", 1), "tasksink=debug");
        assert_eq!(filter_directive("info", 3), "tasksink=trace");
    }
}
