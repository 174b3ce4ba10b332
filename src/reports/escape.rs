//! Escaping utilities for safe report generation.
//!
//! Metric names, field names and metadata come straight from the input
//! documents. They are escaped before being embedded in HTML and stripped of
//! control characters before being written to a terminal.

/// Escape a string for safe inclusion in HTML content.
///
/// # Examples
///
/// ```
/// use metrics_diff::reports::escape::escape_html;
///
/// assert_eq!(escape_html("<script>alert('xss')</script>"),
///     "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;");
///
/// assert_eq!(escape_html("safe text"), "safe text");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Helper to escape an `Option<&str>` for HTML, returning `N/A` for None.
#[must_use]
pub fn escape_html_opt(s: Option<&str>) -> String {
    s.map_or_else(|| "N/A".to_string(), escape_html)
}

/// Remove control characters (escape sequences included) before terminal output.
///
/// Newlines and tabs become spaces so a single name cannot break a row.
#[must_use]
pub fn sanitize_terminal(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}
