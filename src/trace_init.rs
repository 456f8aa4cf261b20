use std::path::Path;
use std::sync::Once;

use tracing_subscriber::filter::{Directive, EnvFilter, LevelFilter};
use tracing_subscriber::fmt::format::FmtSpan;

/// Crates whose spans are recorded when `RUST_LOG` is unset.
const TRACED_CRATES: &[&str] = &["keydrill", "keydrill_core", "keydrill_session"];
const TRACE_FILE: &str = "keydrill-trace.jsonl";

static INIT: Once = Once::new();

fn default_filter() -> EnvFilter {
    TRACED_CRATES
        .iter()
        .filter_map(|name| format!("{name}=debug").parse::<Directive>().ok())
        .fold(EnvFilter::new(LevelFilter::WARN.to_string()), EnvFilter::add_directive)
}

/// Write lesson and session spans as JSON lines to `keydrill-trace.jsonl`
/// under `log_dir`. `RUST_LOG` replaces the default filter. Only the first
/// call has effect.
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, TRACE_FILE));
        // The writer must outlive every session in the process.
        std::mem::forget(guard);

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());
        tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_current_span(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();
    });
}
