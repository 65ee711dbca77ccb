//! Small utility helpers for config parsing, timestamps and terminal column layout.
//!
//! The functions in this module are intentionally lightweight and dependency-free
//! beyond `chrono` and `unicode-width`, to keep hot paths fast and reduce compile times.

pub mod config;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Current local time formatted for log lines: `YYYY-MM-DD-T HH:MM:SS`.
#[must_use]
pub fn log_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string()
}

/// What: Shorten a topic creation date for table display.
///
/// Inputs:
/// - `raw`: Creation date as sent by the backend
///
/// Output:
/// - `YYYY-MM-DD` when the value parses; otherwise the input unchanged.
#[must_use]
pub fn short_date(raw: &str) -> String {
    crate::logic::parse_creation_date(raw)
        .map_or_else(|| raw.to_string(), |dt| dt.format("%Y-%m-%d").to_string())
}

/// What: Cut a string so it occupies at most `max` terminal columns.
///
/// Inputs:
/// - `s`: Text to truncate
/// - `max`: Column budget
///
/// Output:
/// - The input unchanged when it fits; otherwise a prefix ending in `…`.
///
/// Details:
/// - Uses display width, so wide CJK glyphs count as two columns.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Truncate to `width` columns, then right-pad with spaces to exactly `width`.
#[must_use]
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let used = UnicodeWidthStr::width(out.as_str());
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}
