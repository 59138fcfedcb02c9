use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the CLI subscriber. Logs go to stderr so stdout only carries command output.
///
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose {
        "toy_robot=debug"
    } else {
        "toy_robot=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
