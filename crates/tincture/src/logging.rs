//! Tracing subscriber setup.
//!
//! Logs go to standard error so generated CSS on standard output stays
//! clean. `TINCTURE_LOG` takes `EnvFilter` directives and overrides the
//! verbosity flag.

use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "TINCTURE_LOG";

/// Default filter for a verbosity level.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "tincture=debug,tincture_style=debug,info"
    } else {
        "info"
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
