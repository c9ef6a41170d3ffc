use once_cell::sync::OnceCell;
use plumb_core::{Error, Result, PLUMB_LOG_VAR};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export the tracing macros plumb logs with
pub use ::tracing::{debug, error, span, warn, Level, Span};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize the tracing system
///
/// The filter comes from `PLUMB_LOG`, then `RUST_LOG`, then defaults to
/// `info`. Output goes to stderr in compact form, with ANSI colours only when
/// stderr is a terminal. Calling this more than once is a no-op.
pub fn init() -> Result<()> {
    INITIALIZED
        .get_or_try_init(|| {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(is_tty())
                .compact()
                .with_target(false)
                .with_thread_names(true)
                .with_level(true);

            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt_layer)
                .try_init()
                .map_err(|e| Error::configuration(format!("failed to install tracing subscriber: {e}")))
        })
        .map(|_| ())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(PLUMB_LOG_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Create a span around one producer run on a dispatch worker
pub fn handoff_span(worker: &str, seq: u64) -> Span {
    span!(Level::DEBUG, "handoff", worker = %worker, seq = seq)
}
