//! Diagnostic logging for the command-line tool
//!
//! Events go to stderr so PNG paths and JSON listings on stdout stay
//! machine-readable. `SPRITEFX_LOG` accepts any `EnvFilter` directive; the
//! `-v` and `-q` flags replace it.

use tracing_subscriber::EnvFilter;

/// Environment variable read for the default filter.
pub const LOG_ENV: &str = "SPRITEFX_LOG";

/// Filter directive for a verbosity level.
///
/// `quiet` wins over any number of `-v`.
pub fn filter_directive(verbose: u8, quiet: bool) -> Option<&'static str> {
    if quiet {
        return Some("error");
    }
    match verbose {
        0 => None,
        1 => Some("spritefx=info"),
        2 => Some("spritefx=debug"),
        _ => Some("spritefx=trace"),
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: u8, quiet: bool) {
    let filter = match filter_directive(verbose, quiet) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(filter_directive(0, false), None);
        assert_eq!(filter_directive(1, false), Some("spritefx=info"));
        assert_eq!(filter_directive(2, false), Some("spritefx=debug"));
        assert_eq!(filter_directive(5, false), Some("spritefx=trace"));
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        assert_eq!(filter_directive(3, true), Some("error"));
    }
}
