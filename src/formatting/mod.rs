use std::env;
use std::io::IsTerminal;

/// Placeholder glyph for values that are not finite after formatting.
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // NO_COLOR per no-color.org standard
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Plain output configuration: no colors.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

/// Format a funnel count or monetary total: nearest integer, thousands
/// grouping, placeholder for non-finite values.
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    group_thousands(value.round())
}

/// Format an efficiency ratio: zero fractional digits, thousands grouping,
/// placeholder for non-finite values. Ratios can be signed and very large.
pub fn format_ratio(value: f64) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }
    group_thousands(value.round())
}

/// Group an already-integral value's digits in threes, space-separated.
/// Works on the float's own decimal rendering so magnitudes beyond the
/// integer range keep their full digit string.
fn group_thousands(n: f64) -> String {
    let digits = format!("{:.0}", n.abs());
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(std::str::from_utf8)
        .collect::<Result<Vec<&str>, _>>()
        .unwrap()
        .join(" ");
    if n < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
