#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `termlog` is a small leveled console logger: five ordered severities, one
//! process-wide minimum-severity threshold, and an emission path that renders
//! colorized, level-tagged lines to standard output or standard error
//! depending on severity. There is no queueing, no file sink, and no
//! configuration beyond selecting the threshold.
//!
//! # Design
//!
//! The crate exposes the logger in two forms. [`ConsoleLogger`] is an
//! explicitly owned value pairing an output writer, an error writer, and a
//! [`Severity`] threshold; it is generic over [`io::Write`](std::io::Write)
//! implementors so tests and embedders can drive it with in-memory buffers.
//! The free functions [`set_level`], [`get_level`], and [`log`] operate on a
//! process-wide threshold instead and write to the real standard streams;
//! the [`trace!`], [`debug!`], [`info!`], [`warning!`], and [`error!`]
//! macros forward a format template plus arguments to that global path with
//! the severity fixed.
//!
//! # Invariants
//!
//! - Severity ordering is total and fixed: `Trace < Debug < Info < Warning <
//!   Error`, with ranks 0 through 4 as part of the observable contract.
//! - A message is emitted if and only if its severity is at or above the
//!   governing threshold.
//! - `Error` lines go to the error stream; every other severity goes to the
//!   output stream.
//! - Each emitted line has the shape `[<color><NAME><reset>] <message>\n`,
//!   with the tag additionally rendered bold for `Error`. Labels are padded
//!   to a fixed five-byte width.
//!
//! # Errors
//!
//! [`ConsoleLogger`] operations surface [`std::io::Error`] values from the
//! underlying writers unchanged. The global emission path mirrors unbuffered
//! console semantics instead: write failures are discarded, never reported.
//!
//! # Examples
//!
//! Drive an owned logger with in-memory sinks:
//!
//! ```
//! use termlog::{ConsoleLogger, Severity};
//!
//! let mut logger = ConsoleLogger::with_threshold(Vec::new(), Vec::new(), Severity::Debug);
//! logger.log(Severity::Trace, format_args!("not rendered"))?;
//! logger.log(Severity::Debug, format_args!("v={}", 42))?;
//! logger.log(Severity::Error, format_args!("boom"))?;
//!
//! let (out, err, _) = logger.into_parts();
//! assert_eq!(out, b"[\x1b[34mDEBUG\x1b[0m] v=42\n".to_vec());
//! assert_eq!(err, b"[\x1b[1m\x1b[31mERROR\x1b[0m] boom\n".to_vec());
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! Use the process-wide threshold and the per-severity macros:
//!
//! ```
//! use termlog::Severity;
//!
//! termlog::set_level(Severity::Warning);
//! termlog::info!("suppressed below the threshold");
//! termlog::warning!("low disk space: {} MiB left", 512);
//! assert_eq!(termlog::get_level(), Severity::Warning);
//! ```
//!
//! # See also
//!
//! - [`style`] for the ANSI escape sequences the renderer emits.
//! - The `tracing_bridge` module (feature `tracing`) to route `tracing`
//!   events through this logger.

mod console;
mod macros;
mod severity;
pub mod style;
mod threshold;

#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use console::ConsoleLogger;
pub use severity::Severity;
pub use threshold::{enabled, get_level, log, set_level, set_level_rank};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{ConsoleLayer, init_tracing, init_tracing_with_filter};
