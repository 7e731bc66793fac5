//! Console messaging for the non-interactive paths
//!
//! `summary`, `init-config` and start-up problems print through here so the
//! output looks the same everywhere.

/// Prefix and ANSI color of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warn,
    Error,
    Success,
}

impl Tone {
    fn prefix(&self) -> &'static str {
        match self {
            Tone::Info => "\x1b[1;33m[INFO]\x1b[0m",
            Tone::Warn => "\x1b[1;91m[WARN]\x1b[0m",
            Tone::Error => "\x1b[1;31m[ERROR]\x1b[0m",
            Tone::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
        }
    }
}

/// `[TONE] title<TAB> details`, details omitted when empty.
pub fn format_line(tone: Tone, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tone.prefix(), title)
    } else {
        format!("{} {}\t {}", tone.prefix(), title, details)
    }
}

pub fn print_line(tone: Tone, title: &str, details: &str) {
    println!("{}", format_line(tone, title, details));
}

/// Prints a titled block of plain lines, as used by the summary mode.
pub fn print_section(title: &str, lines: &[String]) {
    println!("\x1b[1;36m== {} ==\x1b[0m", title);
    for line in lines {
        println!("{}", line);
    }
    println!();
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Info, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Warn, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Error, $title, "")
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Error, $title, $details)
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Success, $title, &format!($($details)*))
    };
}
