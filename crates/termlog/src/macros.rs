//! crates/termlog/src/macros.rs
//! Per-severity convenience macros forwarding to the global emission path.
//!
//! Each macro fixes the severity and forwards a format template plus
//! arguments to [`log`](crate::log), so filtering and stream routing follow
//! the process-wide threshold.

/// Logs a message at [`Severity::Trace`](crate::Severity::Trace).
///
/// # Example
/// ```
/// termlog::trace!("entering scan, {} entries", 3);
/// ```
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::log($crate::Severity::Trace, ::core::format_args!($($arg)*));
    };
}

/// Logs a message at [`Severity::Debug`](crate::Severity::Debug).
///
/// # Example
/// ```
/// termlog::debug!("debugging value: {}", 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log($crate::Severity::Debug, ::core::format_args!($($arg)*));
    };
}

/// Logs a message at [`Severity::Info`](crate::Severity::Info).
///
/// # Example
/// ```
/// termlog::info!("application started");
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log($crate::Severity::Info, ::core::format_args!($($arg)*));
    };
}

/// Logs a message at [`Severity::Warning`](crate::Severity::Warning).
///
/// # Example
/// ```
/// termlog::warning!("low disk space: {} MiB left", 512);
/// ```
#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {
        $crate::log($crate::Severity::Warning, ::core::format_args!($($arg)*));
    };
}

/// Logs a message at [`Severity::Error`](crate::Severity::Error).
///
/// Renders to standard error rather than standard output.
///
/// # Example
/// ```
/// termlog::error!("failed to open file: {}", "config.txt");
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log($crate::Severity::Error, ::core::format_args!($($arg)*));
    };
}
