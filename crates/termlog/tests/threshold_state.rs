//! Integration tests for the process-wide threshold.
//!
//! This file runs as its own process, so the startup default is observable
//! before any setter runs. The lifecycle test below is the only test here
//! that mutates the global threshold.

use termlog::Severity;

/// Verifies the startup default, setter/getter agreement, and the
/// permissive rank setter in one ordered sequence.
#[test]
fn threshold_lifecycle_follows_contract() {
    // Startup default is the most permissive level.
    assert_eq!(termlog::get_level(), Severity::Trace);
    for severity in Severity::ALL {
        assert!(termlog::enabled(severity));
    }

    // The getter reflects the most recent valid set.
    termlog::set_level(Severity::Debug);
    assert_eq!(termlog::get_level(), Severity::Debug);
    assert!(!termlog::enabled(Severity::Trace));
    assert!(termlog::enabled(Severity::Debug));

    // Out-of-range ranks are ignored without an error.
    termlog::set_level_rank(5);
    termlog::set_level_rank(77);
    termlog::set_level_rank(u8::MAX);
    assert_eq!(termlog::get_level(), Severity::Debug);

    // In-range ranks behave like the typed setter.
    termlog::set_level_rank(Severity::Error.rank());
    assert_eq!(termlog::get_level(), Severity::Error);
    assert!(!termlog::enabled(Severity::Warning));
    assert!(termlog::enabled(Severity::Error));

    // The threshold transitions freely back down.
    termlog::set_level(Severity::Trace);
    assert_eq!(termlog::get_level(), Severity::Trace);
}

/// Exercises the five convenience macros end to end; their console output is
/// not asserted here (byte-exact rendering is covered against in-memory
/// writers in line_format.rs).
#[test]
fn convenience_macros_forward_format_arguments() {
    termlog::trace!("this is a trace message");
    termlog::debug!("debugging value: {}", 42);
    termlog::info!("application started");
    termlog::warning!("low disk space");
    termlog::error!("failed to open file: {}", "config.txt");
}
