//! Log output for `render_dotplot` and other hosts.
//!
//! The library only emits `tracing` events: data loading and grouping at
//! `debug`, tooltip show/hide at `trace`, load failures at `error`. Nothing is
//! printed unless a subscriber is installed, either by the host or through
//! [`init_default_tracing`] with the `telemetry` feature.

/// Installs a compact stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` when the `telemetry` feature is off or another global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
