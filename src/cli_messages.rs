//! One-line status messages for the one-shot commands
//!
//! `fetch`, `health` and `start --save` report through the `print_cmd_*!`
//! macros. Each message is `[TAG] title` followed by optional details on the
//! same line. Warnings and errors go to stderr so `fetch --json` output stays
//! parseable. Colour is only emitted when the target stream is a terminal.

use std::io::{self, IsTerminal, Write};

/// Severity of a command message
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warn,
    Error,
    Success,
}

impl Tone {
    fn tag(self) -> &'static str {
        match self {
            Tone::Info => "INFO",
            Tone::Warn => "WARN",
            Tone::Error => "ERROR",
            Tone::Success => "OK",
        }
    }

    /// ANSI SGR code for the tag
    fn sgr(self) -> &'static str {
        match self {
            Tone::Info => "1;36",
            Tone::Warn => "1;33",
            Tone::Error => "1;31",
            Tone::Success => "1;32",
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Tone::Warn | Tone::Error)
    }
}

/// Build the text of one message, without a trailing newline.
pub fn format_message(tone: Tone, title: &str, details: Option<&str>, colored: bool) -> String {
    let tag = if colored {
        format!("\x1b[{}m[{}]\x1b[0m", tone.sgr(), tone.tag())
    } else {
        format!("[{}]", tone.tag())
    };
    match details.map(str::trim).filter(|d| !d.is_empty()) {
        Some(details) => format!("{} {}: {}", tag, title, details),
        None => format!("{} {}", tag, title),
    }
}

/// Write one message to stdout or stderr depending on its tone.
pub fn print_message(tone: Tone, title: &str, details: Option<&str>) {
    // A closed pipe is not worth failing a command over
    let _ = if tone.to_stderr() {
        let stderr = io::stderr();
        let line = format_message(tone, title, details, stderr.is_terminal());
        writeln!(stderr.lock(), "{}", line)
    } else {
        let stdout = io::stdout();
        let line = format_message(tone, title, details, stdout.is_terminal());
        writeln!(stdout.lock(), "{}", line)
    };
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::Tone::Info,
            $title,
            Some(&format!($($details)*)),
        )
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::Tone::Warn,
            $title,
            Some(&format!($($details)*)),
        )
    };
}

/// Error with an optional, already formatted detail string
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Error, $title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::Tone::Error,
            $title,
            Some($details),
        )
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::Tone::Success,
            $title,
            Some(&format!($($details)*)),
        )
    };
}
