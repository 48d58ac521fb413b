use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Stderr logging. `RUST_LOG` wins; otherwise `info`, or `debug` with
/// `--verbose`. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
