//! ANSI styling for diagnostic output.

use std::io::IsTerminal;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colour codes, or empty strings when colour is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub green: &'static str,
    pub red: &'static str,
    pub blue: &'static str,
    pub bold: &'static str,
    pub reset: &'static str,
}

impl Style {
    pub const PLAIN: Self = Self {
        green: "",
        red: "",
        blue: "",
        bold: "",
        reset: "",
    };

    pub const COLOR: Self = Self {
        green: GREEN,
        red: RED,
        blue: BLUE,
        bold: BOLD,
        reset: RESET,
    };

    /// Colour only when stderr is an interactive terminal.
    pub fn for_stderr() -> Self {
        if std::io::stderr().is_terminal() {
            Self::COLOR
        } else {
            Self::PLAIN
        }
    }
}
