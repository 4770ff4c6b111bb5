// src/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

/// Install the stdout subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_target(false)
        .init();

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));
}
