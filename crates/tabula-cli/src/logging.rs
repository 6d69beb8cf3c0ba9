//! Subscriber setup for the `tabula` binary.

use std::env;
use std::io;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Result<Self, String> {
        if value.eq_ignore_ascii_case("pretty") {
            Ok(Self::Pretty)
        } else if value.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(format!(
                "Invalid TABULA_LOG_FORMAT '{value}' (expected 'json' or 'pretty')"
            ))
        }
    }
}

/// Build the event filter for a `TABULA_TRACE`-style directive string.
pub fn build_filter(level: Option<&str>) -> Result<EnvFilter, String> {
    let level = level.unwrap_or("off");
    if level.eq_ignore_ascii_case("off") {
        return Ok(EnvFilter::default().add_directive(LevelFilter::OFF.into()));
    }
    EnvFilter::try_new(level).map_err(|err| format!("Invalid log filter: {err}"))
}

/// Install a stderr subscriber configured from `TABULA_TRACE` and
/// `TABULA_LOG_FORMAT`.
///
/// Returns `false` if a subscriber was already set.
pub fn init_from_env() -> Result<bool, String> {
    if tracing::dispatcher::has_been_set() {
        return Ok(false);
    }

    let level = env::var("TABULA_TRACE").ok();
    let filter = build_filter(level.as_deref())?;
    let format = match env::var("TABULA_LOG_FORMAT") {
        Ok(value) => LogFormat::parse(&value)?,
        Err(_) => LogFormat::Pretty,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .json(),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .pretty(),
            )
            .try_init(),
    };
    result.map_err(|err| format!("Failed to initialize logging: {err}"))?;
    Ok(true)
}
