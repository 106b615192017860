use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used (e.g. the
/// `log_filter` of [`SystemConfig`](super::SystemConfig)). Uptime timestamps
/// and the compact format keep per-request spans readable:
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=order_composer::order_store=debug,info cargo run
/// ```
///
/// Calling it a second time is a no-op.
pub fn setup_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
