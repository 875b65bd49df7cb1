//! Routes standard tracing macros through the console logger.
//!
//! Run with `cargo run --example tracing_demo --features tracing`. Events at
//! or above the threshold render as the same level-tagged lines the crate's
//! own macros produce.

use termlog::Severity;

fn main() {
    termlog::set_level(Severity::Info);
    termlog::init_tracing();

    tracing::trace!("suppressed below the threshold");
    tracing::debug!("also suppressed");
    tracing::info!("application started");
    tracing::warn!("low disk space");
    tracing::error!("failed to open file: config.txt");
}
