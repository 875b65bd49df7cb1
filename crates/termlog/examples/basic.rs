//! The classic demo caller: pick a threshold, then log at every level.
//!
//! Run with `cargo run --example basic`. The trace line is suppressed by the
//! DEBUG threshold; the error line lands on standard error.

use termlog::Severity;

fn main() {
    termlog::set_level(Severity::Debug);

    termlog::trace!("this is a trace message and will not be shown");
    termlog::debug!("debugging value: {}", 42);
    termlog::info!("application started");
    termlog::warning!("low disk space");
    termlog::error!("failed to open file: {}", "config.txt");
}
