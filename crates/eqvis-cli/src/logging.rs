//! Log output for the `eqvis` binary.
//!
//! Library crates log through the `log` facade; the subscriber installed here
//! picks those records up alongside `tracing` events. Output goes to stderr
//! so rendered markdown on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(5), "debug");
    }
}
