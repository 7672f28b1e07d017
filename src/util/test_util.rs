use tracing::{info, subscriber::set_default};
use tracing_subscriber::fmt;

pub struct TracingGuard {
    _subscriber_guard: tracing::subscriber::DefaultGuard,
}

/// Routes DEBUG+ events for the current test thread through the test writer.
pub fn setup_test_tracing(test_name: &str) -> TracingGuard {
    let subscriber = fmt::Subscriber::builder()
        .with_test_writer()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    let subscriber_guard = set_default(subscriber);
    info!("-----------------");
    info!("Test: {}", test_name);
    info!("-----------------");

    TracingGuard {
        _subscriber_guard: subscriber_guard,
    }
}
