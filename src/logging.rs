//! Diagnostic logging for the demo binaries.
//!
//! Events go to stderr so they never interleave with the lines a demo prints
//! to stdout. Filtering follows `RUST_LOG`, falling back to `warn`.

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init();
        init();
        tracing::debug!("logging initialised");
    }
}
