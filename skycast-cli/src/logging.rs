use tracing_subscriber::EnvFilter;

/// Map `-v` repetitions to a filter directive for our own crates.
pub fn filter_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,skycast={level},skycast_core={level}")
}

/// Install the global subscriber. Logs go to stderr; stdout carries the report.
pub fn init(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directive(verbosity)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(filter_directive(0), "warn,skycast=warn,skycast_core=warn");
        assert!(filter_directive(1).ends_with("skycast_core=info"));
        assert!(filter_directive(2).ends_with("skycast_core=debug"));
        assert!(filter_directive(9).ends_with("skycast_core=trace"));
    }

    #[test]
    fn directives_parse() {
        for v in 0..4 {
            assert!(EnvFilter::try_new(filter_directive(v)).is_ok());
        }
    }
}
