//! crates/termlog/src/threshold.rs
//! Process-wide severity threshold and the global emission path.

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::console;
use crate::severity::Severity;

/// Global storage for the current threshold (encoded as the severity rank).
///
/// Starts at [`Severity::Trace`], the most permissive level. Mutated only by
/// [`set_level`] and [`set_level_rank`]; read by [`get_level`] and the
/// emission path. The cell is a single scalar, so concurrent callers see at
/// worst a stale filtering decision.
static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(Severity::Trace as u8);

/// Sets the process-wide minimum severity.
///
/// Messages below `level` are suppressed by subsequent [`log`] calls.
///
/// # Examples
///
/// ```
/// use termlog::Severity;
///
/// termlog::set_level(Severity::Info);
/// assert_eq!(termlog::get_level(), Severity::Info);
/// ```
#[inline]
pub fn set_level(level: Severity) {
    CURRENT_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Sets the process-wide minimum severity from a numeric rank.
///
/// Ranks outside the valid range select nothing: the threshold keeps its
/// previous value and no error is surfaced.
///
/// # Examples
///
/// ```
/// use termlog::Severity;
///
/// termlog::set_level(Severity::Debug);
/// termlog::set_level_rank(250);
/// assert_eq!(termlog::get_level(), Severity::Debug);
///
/// termlog::set_level_rank(4);
/// assert_eq!(termlog::get_level(), Severity::Error);
/// ```
#[inline]
pub fn set_level_rank(rank: u8) {
    if let Some(level) = Severity::from_rank(rank) {
        set_level(level);
    }
}

/// Returns the current process-wide minimum severity.
#[inline]
#[must_use]
pub fn get_level() -> Severity {
    // The stored rank always originates from a valid severity.
    Severity::from_rank(CURRENT_LEVEL.load(Ordering::Relaxed)).unwrap_or(Severity::Trace)
}

/// Reports whether a message at `level` would be emitted by [`log`].
///
/// # Examples
///
/// ```
/// use termlog::Severity;
///
/// termlog::set_level(Severity::Warning);
/// assert!(!termlog::enabled(Severity::Info));
/// assert!(termlog::enabled(Severity::Error));
/// ```
#[inline]
#[must_use]
pub fn enabled(level: Severity) -> bool {
    level >= get_level()
}

/// Emits one line through the process-wide logger.
///
/// Messages below the threshold are dropped without side effects.
/// [`Severity::Error`] renders to standard error; every other severity
/// renders to standard output. Failures of the underlying write are not
/// detected or reported.
///
/// The [`trace!`](crate::trace), [`debug!`](crate::debug),
/// [`info!`](crate::info), [`warning!`](crate::warning), and
/// [`error!`](crate::error) macros forward here with the severity fixed.
pub fn log(level: Severity, message: fmt::Arguments<'_>) {
    if !enabled(level) {
        return;
    }
    if matches!(level, Severity::Error) {
        let mut stream = io::stderr().lock();
        let _ = console::write_line(&mut stream, level, message);
    } else {
        let mut stream = io::stdout().lock();
        let _ = console::write_line(&mut stream, level, message);
    }
}
