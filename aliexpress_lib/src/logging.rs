//! Tracing setup for applications embedding the SDK.

use tracing_subscriber::EnvFilter;

use crate::config::is_truthy;

pub const ENV_DEBUG: &str = "ALIEXPRESS_API_DEBUG";

/// Installs a global `fmt` subscriber. `RUST_LOG` wins when set; otherwise
/// the SDK crates log at `debug` or `info`.
///
/// Returns false when a global subscriber was already installed.
pub fn init(debug: bool) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(debug));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Like [`init`], with debug output controlled by `ALIEXPRESS_API_DEBUG`.
pub fn init_from_env() -> bool {
    init(debug_from_env())
}

pub fn debug_from_env() -> bool {
    std::env::var(ENV_DEBUG)
        .map(|v| is_truthy(&v))
        .unwrap_or(false)
}

fn default_filter(debug: bool) -> EnvFilter {
    let level = if debug { "debug" } else { "info" };
    EnvFilter::new(format!("aliexpress_api={level},aliexpress_lib={level}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_levels() {
        let debug = default_filter(true).to_string();
        assert!(debug.contains("aliexpress_api=debug"));
        assert!(debug.contains("aliexpress_lib=debug"));
        assert!(default_filter(false).to_string().contains("aliexpress_lib=info"));
    }
}
