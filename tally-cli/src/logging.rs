use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` wins; otherwise `level` from
/// the config, raised to `debug` by `--verbose`. Output goes to stderr so
/// CSV/JSON on stdout stay clean.
pub fn setup_logging(level: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { level };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("logging initialised");
}
