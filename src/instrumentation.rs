//! Span timing output for builds with the `instrumentation` feature.
//!
//! Every function marked with `instrument` reports its busy and idle time when
//! its span closes. The filter is read from `RUST_TRACE` and defaults to
//! `connect_four=info`.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_env("RUST_TRACE")
        .unwrap_or_else(|_| EnvFilter::new("connect_four=info"));
    let subscriber = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .finish();

    // `log` output stays with env_logger, so no LogTracer is installed here.
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {}", error);
    }
}
