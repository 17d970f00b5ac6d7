//! Shared tracing/logging initialization.
//!
//! The server logs to stdout; the CLI passes a stderr writer so that log
//! lines never land inside the terminal UI.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the global tracing subscriber writing to stdout.
///
/// * `default_filter` -- default `RUST_LOG` value when the env-var is not set
///   (e.g. `"flashdeck_server=info"`).
/// * `log_json` -- when `true`, emit structured JSON log lines instead of the
///   human-readable format.
pub fn init_tracing(default_filter: &str, log_json: bool) {
    init_tracing_with_writer(default_filter, log_json, std::io::stdout);
}

/// Same as [`init_tracing`], with an explicit writer.
pub fn init_tracing_with_writer<W>(default_filter: &str, log_json: bool, writer: W)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
    );
    if log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .init();
    }
}
