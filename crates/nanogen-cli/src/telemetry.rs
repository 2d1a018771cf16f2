//! Logging setup.
//!
//! A single `tracing_subscriber` registry is installed for the process:
//!
//! - an `EnvFilter` whose default directive comes from `LOG_LEVEL`; any
//!   `RUST_LOG` directives are applied on top
//! - a `fmt` layer writing to stderr in either text or JSON, optionally with
//!   source file and line
//!
//! Identifiers are attached to a span as `trace_id`. In text output every
//! event inside that span is prefixed with `unit{trace_id=...}`; in JSON the
//! current span's fields are emitted under `span`.

use crate::config::{LogConfig, LogFormat};
use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry(config: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env()
        .context("invalid `RUST_LOG` directives")?;

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_thread_ids(true)
        .with_target(false)
        .with_file(config.source)
        .with_line_number(config.source)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339());

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry.with(layer).try_init(),
        LogFormat::Json => registry
            .with(layer.json().with_current_span(true).with_span_list(false))
            .try_init(),
    }
    .context("failed to install the global subscriber")
}
