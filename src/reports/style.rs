//! Display styling shared by the terminal reporters.

use crate::config::{ColorsConfig, SymbolsConfig};
use crate::diff::ChangeType;
use unicode_width::UnicodeWidthStr;

/// Symbol and color for one change type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStyle {
    pub symbol: String,
    pub color: String,
}

/// Symbol and color for every change type, seeded once from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStyles {
    increased: ChangeStyle,
    decreased: ChangeStyle,
    unchanged: ChangeStyle,
    new: ChangeStyle,
    removed: ChangeStyle,
}

impl ChangeStyles {
    #[must_use]
    pub fn from_config(symbols: &SymbolsConfig, colors: &ColorsConfig) -> Self {
        let style = |ct: ChangeType| ChangeStyle {
            symbol: symbols.get(ct).to_string(),
            color: colors.get(ct).to_string(),
        };
        Self {
            increased: style(ChangeType::Increased),
            decreased: style(ChangeType::Decreased),
            unchanged: style(ChangeType::Unchanged),
            new: style(ChangeType::New),
            removed: style(ChangeType::Removed),
        }
    }

    #[must_use]
    pub const fn get(&self, change_type: ChangeType) -> &ChangeStyle {
        match change_type {
            ChangeType::Increased => &self.increased,
            ChangeType::Decreased => &self.decreased,
            ChangeType::Unchanged => &self.unchanged,
            ChangeType::New => &self.new,
            ChangeType::Removed => &self.removed,
        }
    }

    #[must_use]
    pub fn symbol(&self, change_type: ChangeType) -> &str {
        &self.get(change_type).symbol
    }

    #[must_use]
    pub fn color(&self, change_type: ChangeType) -> &str {
        &self.get(change_type).color
    }

    /// `symbol Title`, as shown in status columns
    #[must_use]
    pub fn status_label(&self, change_type: ChangeType) -> String {
        format!("{} {}", self.symbol(change_type), change_type.title())
    }
}

impl Default for ChangeStyles {
    fn default() -> Self {
        Self::from_config(&SymbolsConfig::default(), &ColorsConfig::default())
    }
}

/// Apply ANSI color formatting if colored output is enabled.
pub fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if !colored {
        return text.to_string();
    }
    let code = match color {
        "red" => "31",
        "green" => "32",
        "yellow" => "33",
        "blue" => "34",
        "magenta" => "35",
        "cyan" => "36",
        "white" => "37",
        "bold" => "1",
        "dim" => "2",
        _ => return text.to_string(),
    };
    format!("\x1b[{code}m{text}\x1b[0m")
}

/// Format a value for display: `N/A` when absent, integral values without
/// decimals, anything else with up to six decimals.
#[must_use]
pub fn format_value(value: Option<f64>) -> String {
    let Some(v) = value else {
        return "N/A".to_string();
    };
    if v.fract() == 0.0 {
        // `{:.0}` prints -0.0 as "-0"
        return if v == 0.0 {
            "0".to_string()
        } else {
            format!("{v:.0}")
        };
    }
    let fixed = format!("{v:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Format a percentage as ` (+12.34%)`, or nothing when absent or below
/// the display threshold.
#[must_use]
pub fn format_percentage(percentage: Option<f64>, min_percentage_change: f64) -> String {
    match percentage {
        Some(p) if p.abs() >= min_percentage_change => format!(" ({p:+.2}%)"),
        _ => String::new(),
    }
}

/// Column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Pad `text` to `width` terminal columns.
#[must_use]
pub fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}

/// Truncate a string to fit within `max_width` terminal columns.
#[must_use]
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max_width > 3 {
        out.push_str("...");
    }
    out
}
