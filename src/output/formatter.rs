//! Message formatting and display.
//!
//! Every user-facing line goes to stdout through [`OutputFormatter`], which
//! applies the quiet/verbose settings. Informational and error lines are
//! printed as-is; warnings and verbose lines carry a prefix that is coloured
//! when stdout is a terminal.
//!
//! # Examples
//!
//! ```
//! use pdfimg::output::formatter::{MessageLevel, OutputFormatter};
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.info("Scanning PDF for extractable images...");
//! formatter.error("Error: file not found");
//!
//! let quiet = OutputFormatter::new(true, false);
//! assert_eq!(quiet.line(MessageLevel::Info, "hidden"), None);
//! ```

use crate::config::Config;
use std::io;

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message. Suppressed in quiet mode.
    Info,
    /// Warning message. Always displayed.
    Warning,
    /// Error message. Always displayed.
    Error,
    /// Per-item message. Only displayed in verbose mode.
    Debug,
    /// Indented detail line. Only displayed in verbose mode.
    Detail,
}

impl MessageLevel {
    /// Prefix and ANSI colour for this level.
    fn style(&self) -> (&'static str, &'static str) {
        match self {
            Self::Info | Self::Error => ("", ""),
            Self::Detail => ("  ", ""),
            Self::Warning => ("⚠ ", "\x1b[33m"), // Yellow
            Self::Debug => ("→ ", "\x1b[36m"),   // Cyan
        }
    }
}

/// Output formatter with configurable verbosity.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    /// Whether to suppress non-error output.
    quiet: bool,
    /// Whether to show verbose output.
    verbose: bool,
    /// Whether to use colored output.
    colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    ///
    /// # Arguments
    ///
    /// * `quiet` - Suppress non-error output
    /// * `verbose` - Show verbose output
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: Self::should_use_color(),
        }
    }

    /// Create a formatter from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.quiet, config.verbose)
    }

    /// Create a quiet formatter (only warnings and errors).
    pub fn quiet() -> Self {
        Self::new(true, false)
    }

    /// Returns true if stdout is a TTY and TERM is set.
    fn should_use_color() -> bool {
        use std::io::IsTerminal;
        io::stdout().is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Print an informational message. Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        self.emit(MessageLevel::Info, message);
    }

    /// Print a warning message. Always displayed.
    pub fn warning(&self, message: &str) {
        self.emit(MessageLevel::Warning, message);
    }

    /// Print an error message. Always displayed.
    pub fn error(&self, message: &str) {
        self.emit(MessageLevel::Error, message);
    }

    /// Print a debug message. Only displayed in verbose mode.
    pub fn debug(&self, message: &str) {
        self.emit(MessageLevel::Debug, message);
    }

    /// Print a labelled detail line. Only shown in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        self.emit(MessageLevel::Detail, &format!("{label}: {value}"));
    }

    /// Print a progress line such as `[2/5] holiday.jpg`. Only shown in verbose mode.
    pub fn progress(&self, current: usize, total: usize, message: &str) {
        self.emit(MessageLevel::Detail, &format!("[{current}/{total}] {message}"));
    }

    /// Print `message` at `level` if the current mode shows that level.
    pub fn emit(&self, level: MessageLevel, message: &str) {
        if let Some(line) = self.line(level, message) {
            println!("{line}");
        }
    }

    /// The line printed for `message` at `level`, or `None` if the current
    /// mode hides that level.
    pub fn line(&self, level: MessageLevel, message: &str) -> Option<String> {
        let shown = match level {
            MessageLevel::Info => !self.quiet,
            MessageLevel::Warning | MessageLevel::Error => true,
            MessageLevel::Debug | MessageLevel::Detail => self.verbose,
        };

        shown.then(|| self.render(level, message))
    }

    fn render(&self, level: MessageLevel, message: &str) -> String {
        let (prefix, color_code) = level.style();

        if self.colored && !color_code.is_empty() {
            format!("{color_code}{prefix}{message}\x1b[0m")
        } else {
            format!("{prefix}{message}")
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}
