//! Opt-in `tracing` setup for binaries and hosts without a subscriber of
//! their own. Library code only emits events; it never installs anything.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// [`init_tracing`] with [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Installs a compact fmt subscriber writing to stderr, so stdout stays free
/// for command output. `RUST_LOG` takes precedence over `fallback_filter`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
