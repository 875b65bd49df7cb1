//! crates/termlog/src/style.rs
//! ANSI escape sequences used when rendering level tags.
//!
//! These are process-wide immutable constants; the renderer emits them
//! byte-for-byte. Terminals without ANSI support are out of scope.

/// Switches the terminal to bold rendition. Applied to the `ERROR` tag only.
pub const BOLD: &str = "\x1b[1m";

/// Resets all rendition attributes to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// Red foreground; the `ERROR` tag color.
pub const RED: &str = "\x1b[31m";

/// Green foreground; the `INFO` tag color.
pub const GREEN: &str = "\x1b[32m";

/// Yellow foreground; the `WARN` tag color.
pub const YELLOW: &str = "\x1b[33m";

/// Blue foreground; the `DEBUG` tag color.
pub const BLUE: &str = "\x1b[34m";

/// Cyan foreground; the `TRACE` tag color.
pub const CYAN: &str = "\x1b[36m";
