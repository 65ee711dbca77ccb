//! Configuration file parsing utilities.
//!
//! This module provides helpers for parsing `key = value` configuration files
//! with common patterns like comment skipping and inline comment removal.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Key is lowercased with `.`, `-` and spaces folded to `_`
/// - Value has inline comments removed
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val).to_string()))
}

/// What: Remove inline comments from a configuration value.
///
/// Inputs:
/// - `s`: Raw value that may include inline comments.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - Strips trailing `#` sections. A `//` only starts a comment when it is not
///   part of a URL scheme (`http://`).
#[must_use]
pub fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find('#') {
        s = &s[..i];
    }
    let mut search_from = 0;
    while let Some(rel) = s[search_from..].find("//") {
        let i = search_from + rel;
        if i > 0 && s.as_bytes()[i - 1] == b':' {
            search_from = i + 2;
            continue;
        }
        s = &s[..i];
        break;
    }
    s.trim()
}

/// What: Interpret a config value as a boolean flag.
///
/// Inputs:
/// - `val`: Value text
///
/// Output:
/// - `Some(true)` for `true`/`1`/`yes`/`on`, `Some(false)` for `false`/`0`/`no`/`off`,
///   `None` for anything else.
#[must_use]
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
