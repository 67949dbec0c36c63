//! Logging setup for the provider process.
//!
//! Logs go to **stderr**; stdout belongs to the host that launched the
//! provider.
//!
//! # Quick Start
//!
//! ```ignore
//! use gpcore_provider::{init_logging, GpcoreProvider};
//!
//! fn main() {
//!     init_logging();
//!     tracing::info!("starting gpcore provider");
//!     let provider = GpcoreProvider::new();
//!     // hand `provider` to the host runtime
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives, e.g. `info` or `gpcore_provider=debug`.
//!
//! ```bash
//! # Debug logs for node polling and API calls
//! RUST_LOG=gpcore_provider::resource=debug ./terraform-provider-gpcore
//! ```

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// The level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LEVEL: &str = "info";

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn subscriber(default_level: &str) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry().with(env_filter(default_level)).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    )
}

/// Install the stderr subscriber, filtered by `RUST_LOG` or `info`.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging() {
    init_logging_with_default(DEFAULT_LEVEL);
}

/// Like [`init_logging`], with `default_level` used when `RUST_LOG` is not set.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging_with_default(default_level: &str) {
    subscriber(default_level).init();
}

/// Try to install the subscriber.
///
/// Returns `false` instead of panicking when one is already installed,
/// which happens when several tests share a process.
pub fn try_init_logging() -> bool {
    subscriber(DEFAULT_LEVEL).try_init().is_ok()
}

#[cfg(test)]
mod tests {
    // The global subscriber can only be set once per process.

    use super::*;

    #[test]
    fn test_env_filter_parsing() {
        assert!(EnvFilter::try_new(DEFAULT_LEVEL).is_ok());
        assert!(EnvFilter::try_new("gpcore_provider=debug").is_ok());
        assert!(EnvFilter::try_new("warn,gpcore_provider::resource::node=debug").is_ok());
    }

    #[test]
    fn test_try_init_is_idempotent() {
        let _ = try_init_logging();
        assert!(!try_init_logging());
    }
}
