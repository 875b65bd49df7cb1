//! Walks the threshold through every severity to show how filtering narrows.
//!
//! Run with `cargo run --example thresholds`. Each pass emits one fewer
//! level than the pass before it.

use termlog::Severity;

fn main() {
    for threshold in Severity::ALL {
        println!("-- threshold: {threshold} --");
        termlog::set_level(threshold);

        termlog::trace!("trace message");
        termlog::debug!("debug message");
        termlog::info!("info message");
        termlog::warning!("warning message");
        termlog::error!("error message");
    }
}
