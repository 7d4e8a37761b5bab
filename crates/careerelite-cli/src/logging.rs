//! Tracing initialisation for the binary.

use tracing_subscriber::EnvFilter;

/// Filter directive for the configured level and the `-v` count.
///
/// One `-v` raises logging to `debug`, two or more to `trace`.
pub fn directive(log_level: &str, verbose: u8) -> String {
    match verbose {
        0 => log_level.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber, logging to stderr.
///
/// `RUST_LOG` wins over the configured level unless `-v` was given.
pub fn init(log_level: &str, verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        _ => EnvFilter::new(directive(log_level, verbose)),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive() {
        assert_eq!(directive("warn", 0), "warn");
        assert_eq!(directive("warn", 1), "debug");
        assert_eq!(directive("error", 3), "trace");
    }
}
