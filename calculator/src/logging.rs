//! Log sink for calculator records.
//!
//! The library only emits `tracing` events. Binaries call [`init`] once at
//! startup to print them to standard error as timestamped, leveled lines:
//!
//! ```text
//! 2026-10-19T08:15:02.123456Z  INFO Addition: 5 + 3 = 8
//! ```

use std::io;
use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

static INIT: Once = Once::new();

/// Builds the formatting layer used for calculator logs, writing to `writer`.
///
/// Exposed separately from [`init`] so tests can capture the output.
pub fn layer<S, W>(writer: W) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(LevelFilter::INFO)
}

/// Installs the global subscriber at `INFO` level.
///
/// Safe to call multiple times, only the first call takes effect.
pub fn init() {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(layer(io::stderr))
            .init();
    });
}
