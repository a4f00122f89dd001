use tracing_subscriber::{EnvFilter, fmt};

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,pocketbot=info"));
    fmt().with_env_filter(filter).with_target(true).init();
}
