//! Log output for harness runs.
//!
//! The library itself only emits `tracing` events. Test binaries and examples
//! call [`init_logging`] once (or from every test) to see them on stderr.

use std::io;

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event, for log aggregation in CI.
    Json,
}

impl LogFormat {
    /// Reads `LOG_FORMAT`: `json` selects [`LogFormat::Json`], anything else
    /// (or unset) selects [`LogFormat::Pretty`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default())
    }

    /// Case-insensitive parse with the same fallback as [`LogFormat::from_env`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") { Self::Json } else { Self::Pretty }
    }
}

/// Installs the global subscriber.
///
/// Filtering follows `RUST_LOG` (default `info`); output goes to stderr with
/// span close events, so each request's duration is visible.
///
/// Returns `false` without changing anything if a global subscriber is
/// already installed.
///
/// # Examples
///
/// ```no_run
/// use dif_api_harness::observability::{LogFormat, init_logging};
///
/// init_logging(LogFormat::from_env());
/// ```
pub fn init_logging(format: LogFormat) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Pretty => subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Json => subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(io::stderr),
            )
            .try_init(),
    };

    installed.is_ok()
}
