//! Console logging setup.
//!
//! ```ignore
//! scholarlink_core::logging::init("info");
//! tracing::info!("ready");
//! ```
//!
//! `RUST_LOG` takes precedence over the filter passed in.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` if set and valid, otherwise `default_filter`,
/// otherwise `info`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global fmt subscriber. Returns false if one was already set.
pub fn init(default_filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_harmless() {
        init("debug");
        assert!(!init("debug"));
    }

    #[test]
    fn invalid_filter_falls_back() {
        // Must not panic on garbage directives
        let _ = env_filter("[[[not a filter");
    }
}
