//! crates/termlog/src/severity.rs
//! Ordered severity levels and their display metadata.

use std::fmt;
use std::str::FromStr;

use crate::style;

/// Logging severity, ordered by increasing urgency.
///
/// The numeric rank of each level (0 through 4) is part of the crate's
/// observable contract: threshold filtering compares ranks, and
/// [`Severity::from_rank`] round-trips them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Severity {
    /// Fine-grained execution tracing.
    Trace = 0,
    /// Diagnostic information useful during development.
    Debug = 1,
    /// General informational messages.
    Info = 2,
    /// Conditions that deserve attention but do not stop execution.
    Warning = 3,
    /// Failures; routed to the error stream.
    Error = 4,
}

impl Severity {
    /// All severities in ascending order of urgency.
    pub const ALL: [Self; 5] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
    ];

    /// Returns the fixed-width label rendered inside the bracketed tag.
    ///
    /// Every label is exactly five bytes; `INFO` and `WARN` carry a trailing
    /// space so tags line up across severities.
    ///
    /// # Examples
    ///
    /// ```
    /// use termlog::Severity;
    ///
    /// assert_eq!(Severity::Info.label(), "INFO ");
    /// assert_eq!(Severity::Error.label(), "ERROR");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO ",
            Self::Warning => "WARN ",
            Self::Error => "ERROR",
        }
    }

    /// Returns the ANSI color escape used for this severity's tag.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Trace => style::CYAN,
            Self::Debug => style::BLUE,
            Self::Info => style::GREEN,
            Self::Warning => style::YELLOW,
            Self::Error => style::RED,
        }
    }

    /// Returns the numeric rank of the severity.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Converts a numeric rank back into a severity.
    ///
    /// Returns `None` for ranks outside `0..=4`. This is the single place
    /// out-of-range input is decided; no lookup indexes a table by rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use termlog::Severity;
    ///
    /// assert_eq!(Severity::from_rank(3), Some(Severity::Warning));
    /// assert_eq!(Severity::from_rank(9), None);
    /// ```
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warning),
            4 => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    /// Writes the trimmed label (`WARN` rather than `WARN `).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end())
    }
}

impl FromStr for Severity {
    type Err = String;

    /// Parses a severity name, case-insensitively.
    ///
    /// Both `warn` and `warning` select [`Severity::Warning`], matching the
    /// padded and spelled-out forms of the level name.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(format!("unknown severity: {token}")),
        }
    }
}
