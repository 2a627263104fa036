//! Subscriber initialization for the logging facility.
//!
//! Call [`init`] once at process startup with the desired [`Profile`].
//! Subsequent calls are no-ops, so libraries and tests can call it
//! without coordinating.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INIT_ONCE: Once = Once::new();

/// Logging profile selecting the output format and default filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Pretty, human-readable output with debug-level default filter.
    Development,
    /// JSON lines with info-level default filter.
    Production,
    /// No output installed here. Tests install a capture layer instead.
    Test,
}

/// Initialize the global tracing subscriber for the given profile.
///
/// Honors `RUST_LOG` when set; otherwise falls back to a profile
/// default. Safe to call more than once.
///
/// # Example
///
/// ```
/// use confdiff_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("confdiff=debug"));
            fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_level(true)
                .pretty()
                .init();
        }
        Profile::Production => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("confdiff=info"));
            fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_level(true)
                .json()
                .init();
        }
        Profile::Test => {
            // Tests that want event assertions call init_test_capture()
            // instead, which installs the capture layer.
            use tracing_subscriber::util::SubscriberInitExt;
            tracing_subscriber::registry().init();
        }
    });
}
