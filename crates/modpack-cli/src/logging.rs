//! Diagnostic logging setup.
//!
//! User-facing output goes through the formatters; tracing events go to
//! stderr. Warnings are always shown; debug events need `--verbose`.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "warn";
const VERBOSE_DIRECTIVE: &str = "warn,modpack=debug,modpack_core=debug";

/// Returns the filter directive for the requested verbosity.
pub fn directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive(verbose)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_selection() {
        assert_eq!(directive(false), "warn");
        assert!(directive(true).contains("modpack_core=debug"));
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
