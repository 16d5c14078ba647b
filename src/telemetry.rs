//! Opt-in log output for the bridge's `tracing` events.
//!
//! The bridge emits `debug!` when an instance is attached, rebuilt or
//! detached and when a listener is bound, `trace!` for unchanged updates and
//! for every forwarded click/hover payload, and `warn!` when a listener
//! cannot be released. Nothing is printed unless the host installs a
//! subscriber, either its own or the one from `init_default_tracing`.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back
/// to `chart_bridge=info`. The bridge logs nothing at `info`, so that default
/// shows only listener-release warnings.
///
/// Returns `false` without the `telemetry` feature, or when the host already
/// set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chart_bridge=info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
