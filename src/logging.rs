use tracing_subscriber::EnvFilter;

/// Sets up tracing on stderr.
///
/// Uses `RUST_LOG` if set, otherwise only warnings are shown so the stdout
/// tally stays readable.
pub fn init_logging() {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("warn")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
