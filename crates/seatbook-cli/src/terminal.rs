//! Terminal styling and number formatting.
//!
//! Colour is used for menu headings and status lines only. Detection
//! honours the `NO_COLOR` and `TERM=dumb` conventions.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for headings.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Green for successful actions.
    pub const GREEN: &str = "\x1b[32m";
    /// Red for rejected actions.
    pub const RED: &str = "\x1b[31m";
    /// Cyan for the banner border.
    pub const CYAN: &str = "\x1b[36m";
}

/// Resolved colour codes, or empty strings when colour is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub heading: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub border: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            heading: colors::WHITE_BOLD,
            success: colors::GREEN,
            error: colors::RED,
            border: colors::CYAN,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            heading: "",
            success: "",
            error: "",
            border: "",
        }
    }

    /// Palette matching the current terminal's capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Format an amount with thousand separators, e.g. `-1,234,567`.
///
/// ```
/// # use seatbook_cli::terminal::format_amount;
/// assert_eq!(format_amount(999), "999");
/// assert_eq!(format_amount(1100), "1,100");
/// assert_eq!(format_amount(-100), "-100");
/// ```
#[must_use]
pub fn format_amount(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}
