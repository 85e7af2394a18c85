use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug output for
/// the solver crates.
pub fn init_logger(verbose: bool) {
    let default = if verbose {
        "ces_consumer=debug,ces_cli=debug,warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
