use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Sets up tracing to stderr, WARN and above unless `RUST_LOG` says otherwise.
///
/// Stdout and the output file stay free of log lines. The returned guard must be
/// held until the program exits so buffered events are flushed.
pub fn setup_tracing() -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());

    let filter = EnvFilter::builder()
        .with_default_directive("warn".parse()?)
        .from_env_lossy();

    let console_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_timer(ChronoLocal::rfc_3339())
        .with_ansi(false)
        .with_level(true)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_filter(filter);

    let subscriber = Registry::default().with(console_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("Tracing initialized.");

    Ok(guard)
}
