use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber shared by all tools.
///
/// `INFO` by default, `DEBUG` with `--debug`; `RUST_LOG` wins when set.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // a second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
