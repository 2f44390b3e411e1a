use tracing_subscriber::EnvFilter;

/// Request spans from `tower_http` stay off unless `RUST_LOG` enables them,
/// so liveness probes write nothing.
pub const DEFAULT_LOG_FILTER: &str = "info,retail_health=debug";

/// Structured logging. `RUST_LOG` wins over the default filter.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_tracing();
        init_tracing();
        tracing::debug!("subscriber installed");
    }
}
