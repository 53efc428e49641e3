//! Structured logging setup

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_DIRECTIVES: &str = "info,service_status_api=info,actix_web=info";

pub fn filter_from(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// JSON subscriber writing flattened events with their target, so actix
/// request lines show up under `actix_web::middleware::logger`.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(writer)
        .json()
        .flatten_event(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer)
}

/// Install the stdout subscriber as the global default.
pub fn init() {
    let filter = filter_from(std::env::var("RUST_LOG").ok());
    subscriber(filter, std::io::stdout).init();
}
