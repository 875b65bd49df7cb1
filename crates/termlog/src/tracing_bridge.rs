//! crates/termlog/src/tracing_bridge.rs
//! Bridge between the tracing crate and the console logger.
//!
//! This module provides a tracing-subscriber layer that maps tracing events
//! to [`Severity`] values and renders them through the console path. It
//! enables using standard tracing macros (trace!, debug!, info!, warn!,
//! error!) while keeping this crate's threshold filtering, tag colors, and
//! stream routing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use termlog::{Severity, init_tracing};
//!
//! termlog::set_level(Severity::Info);
//! init_tracing();
//!
//! // Now standard tracing macros emit level-tagged console lines.
//! tracing::info!("application started");
//! tracing::debug!("suppressed below the threshold");
//! ```

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::severity::Severity;
use crate::threshold;

/// A tracing layer that routes events through the console logger.
///
/// Events are filtered against the process-wide threshold before their
/// fields are visited, so suppressed events cost no formatting work.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleLayer;

impl ConsoleLayer {
    /// Creates a new layer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a tracing level to a console severity.
    const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG => Severity::Debug,
            Level::TRACE => Severity::Trace,
        }
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let severity = Self::severity_for(event.metadata().level());
        if !threshold::enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            threshold::log(severity, format_args!("{message}"));
        }
    }
}

/// Visitor to extract the message field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber backed by the console logger.
///
/// Events at or above the process-wide threshold render as level-tagged
/// console lines; everything else is dropped.
///
/// # Example
///
/// ```rust,ignore
/// use termlog::{Severity, init_tracing};
///
/// termlog::set_level(Severity::Debug);
/// init_tracing();
///
/// tracing::warn!("low disk space");
/// ```
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(ConsoleLayer::new()).init();
}

/// Installs the console layer together with a custom filter layer.
///
/// This allows combining the threshold-based console output with standard
/// tracing filters for finer-grained control.
///
/// # Example
///
/// ```rust,ignore
/// use termlog::init_tracing_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(EnvFilter::from_default_env());
/// ```
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::new())
        .init();
}
