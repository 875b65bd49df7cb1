//! crates/termlog/src/console.rs
//! Owned console logger: a pair of writers, a threshold, and line rendering.

use std::fmt;
use std::io::{self, Write};

use crate::severity::Severity;
use crate::style;

/// Renders one level-tagged line into `writer`.
///
/// The tag is colorized for every severity and additionally bold for
/// [`Severity::Error`]; the formatted message follows the tag and the line
/// ends with a newline. Both the owned [`ConsoleLogger`] and the global
/// emission path funnel through here so the rendered bytes are identical.
pub(crate) fn write_line<W>(
    writer: &mut W,
    level: Severity,
    message: fmt::Arguments<'_>,
) -> io::Result<()>
where
    W: Write,
{
    if matches!(level, Severity::Error) {
        write!(
            writer,
            "[{}{}{}{}] ",
            style::BOLD,
            level.color(),
            level.label(),
            style::RESET
        )?;
    } else {
        write!(
            writer,
            "[{}{}{}] ",
            level.color(),
            level.label(),
            style::RESET
        )?;
    }
    writer.write_fmt(message)?;
    writer.write_all(b"\n")
}

/// Leveled logger over an explicitly owned pair of writers.
///
/// The logger owns an output writer, an error writer, and the
/// [`Severity`] threshold that governs filtering. [`Severity::Error`] lines
/// render to the error writer; every other severity renders to the output
/// writer. Messages below the threshold are dropped without touching either
/// writer.
///
/// Being generic over [`io::Write`] implementors keeps the logger testable:
/// integration tests drive it with `Vec<u8>` sinks and assert the exact
/// bytes, while callers wanting real console output can hand it locked
/// standard streams.
///
/// # Examples
///
/// Filter below the threshold and route by severity:
///
/// ```
/// use termlog::{ConsoleLogger, Severity};
///
/// let mut logger = ConsoleLogger::with_threshold(Vec::new(), Vec::new(), Severity::Info);
/// logger.log(Severity::Debug, format_args!("dropped"))?;
/// logger.log(Severity::Info, format_args!("ready"))?;
/// logger.log(Severity::Error, format_args!("boom"))?;
///
/// let (out, err, _) = logger.into_parts();
/// assert_eq!(out, b"[\x1b[32mINFO \x1b[0m] ready\n".to_vec());
/// assert_eq!(err, b"[\x1b[1m\x1b[31mERROR\x1b[0m] boom\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ConsoleLogger<O, E> {
    out: O,
    err: E,
    threshold: Severity,
}

impl<O, E> ConsoleLogger<O, E> {
    /// Creates a logger that emits every severity.
    ///
    /// The threshold starts at [`Severity::Trace`], the most permissive
    /// level, matching the process-wide default at startup.
    #[must_use]
    pub fn new(out: O, err: E) -> Self {
        Self::with_threshold(out, err, Severity::Trace)
    }

    /// Creates a logger with an explicit filtering threshold.
    #[must_use]
    pub fn with_threshold(out: O, err: E, threshold: Severity) -> Self {
        Self {
            out,
            err,
            threshold,
        }
    }

    /// Returns the current filtering threshold.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Updates the filtering threshold for subsequent messages.
    pub fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    /// Reports whether a message at `level` would be emitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use termlog::{ConsoleLogger, Severity};
    ///
    /// let logger: ConsoleLogger<Vec<u8>, Vec<u8>> =
    ///     ConsoleLogger::with_threshold(Vec::new(), Vec::new(), Severity::Warning);
    /// assert!(!logger.enabled(Severity::Info));
    /// assert!(logger.enabled(Severity::Warning));
    /// assert!(logger.enabled(Severity::Error));
    /// ```
    #[must_use]
    pub const fn enabled(&self, level: Severity) -> bool {
        level.rank() >= self.threshold.rank()
    }

    /// Borrows the output writer.
    #[must_use]
    pub fn out_ref(&self) -> &O {
        &self.out
    }

    /// Borrows the error writer.
    #[must_use]
    pub fn err_ref(&self) -> &E {
        &self.err
    }

    /// Consumes the logger and returns the writers and threshold.
    #[must_use]
    pub fn into_parts(self) -> (O, E, Severity) {
        (self.out, self.err, self.threshold)
    }
}

impl<O, E> Default for ConsoleLogger<O, E>
where
    O: Default,
    E: Default,
{
    fn default() -> Self {
        Self::new(O::default(), E::default())
    }
}

impl<O, E> ConsoleLogger<O, E>
where
    O: Write,
    E: Write,
{
    /// Renders one message, subject to filtering and stream routing.
    ///
    /// Messages below the threshold return `Ok(())` without writing any
    /// bytes. [`Severity::Error`] messages render to the error writer; all
    /// other severities render to the output writer.
    pub fn log(&mut self, level: Severity, message: fmt::Arguments<'_>) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        if matches!(level, Severity::Error) {
            write_line(&mut self.err, level, message)
        } else {
            write_line(&mut self.out, level, message)
        }
    }

    /// Flushes both writers.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drained(logger: ConsoleLogger<Vec<u8>, Vec<u8>>) -> (String, String) {
        let (out, err, _) = logger.into_parts();
        (
            String::from_utf8(out).expect("utf-8"),
            String::from_utf8(err).expect("utf-8"),
        )
    }

    #[test]
    fn default_threshold_is_trace() {
        let logger: ConsoleLogger<Vec<u8>, Vec<u8>> = ConsoleLogger::new(Vec::new(), Vec::new());
        assert_eq!(logger.threshold(), Severity::Trace);
    }

    #[test]
    fn filtered_message_writes_nothing() {
        let mut logger =
            ConsoleLogger::with_threshold(Vec::new(), Vec::new(), Severity::Warning);
        logger
            .log(Severity::Info, format_args!("dropped"))
            .expect("write succeeds");

        let (out, err) = drained(logger);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn error_renders_to_error_writer_only() {
        let mut logger = ConsoleLogger::new(Vec::new(), Vec::new());
        logger
            .log(Severity::Error, format_args!("boom"))
            .expect("write succeeds");

        let (out, err) = drained(logger);
        assert!(out.is_empty());
        assert_eq!(err, "[\x1b[1m\x1b[31mERROR\x1b[0m] boom\n");
    }

    #[test]
    fn non_error_renders_to_output_writer_only() {
        let mut logger = ConsoleLogger::new(Vec::new(), Vec::new());
        logger
            .log(Severity::Warning, format_args!("low disk space"))
            .expect("write succeeds");

        let (out, err) = drained(logger);
        assert_eq!(out, "[\x1b[33mWARN \x1b[0m] low disk space\n");
        assert!(err.is_empty());
    }

    #[test]
    fn set_threshold_takes_effect_immediately() {
        let mut logger = ConsoleLogger::new(Vec::new(), Vec::new());
        logger.set_threshold(Severity::Error);
        logger
            .log(Severity::Warning, format_args!("dropped"))
            .expect("write succeeds");
        logger.set_threshold(Severity::Trace);
        logger
            .log(Severity::Trace, format_args!("kept"))
            .expect("write succeeds");

        let (out, _) = drained(logger);
        assert_eq!(out, "[\x1b[36mTRACE\x1b[0m] kept\n");
    }

    #[test]
    fn into_parts_returns_configured_threshold() {
        let logger: ConsoleLogger<Vec<u8>, Vec<u8>> =
            ConsoleLogger::with_threshold(Vec::new(), Vec::new(), Severity::Debug);
        let (_, _, threshold) = logger.into_parts();
        assert_eq!(threshold, Severity::Debug);
    }

    #[test]
    fn format_arguments_are_rendered() {
        let mut logger = ConsoleLogger::new(Vec::new(), Vec::new());
        logger
            .log(Severity::Debug, format_args!("v={}", 42))
            .expect("write succeeds");

        let (out, _) = drained(logger);
        assert_eq!(out, "[\x1b[34mDEBUG\x1b[0m] v=42\n");
    }
}
