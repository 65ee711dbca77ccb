use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use super::paths::settings_path;
use super::settings::Settings;
use crate::util::config::{parse_key_value, skip_comment_or_empty};

/// Content written to a fresh `settings.conf`.
pub const SETTINGS_SKELETON_CONTENT: &str = "# diploma-teams settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments. Inline comments after # are ignored.\n\
#\n\
# Root of the topics REST API. DIPLOMA_TEAMS_API_URL overrides this value.\n\
api_url = http://localhost:5000/api\n\
#\n\
# Backend timeouts in seconds\n\
request_timeout_secs = 30\n\
connect_timeout_secs = 10\n\
#\n\
# Default topic list order: title-asc, title-desc, members-asc, members-desc,\n\
# created-asc, created-desc. Leave empty to keep backend order.\n\
default_sort =\n\
#\n\
# Default list filters\n\
show_open_only = false\n\
show_approved_only = false\n\
#\n\
# Role this client acts as: student, teacher, kpk, admin, coordinator\n\
user_role = student\n";

/// What: Make sure `settings.conf` exists and carries every known key.
///
/// Inputs:
/// - None
///
/// Output:
/// - Path of the settings file.
///
/// Details:
/// - Creates the file from the skeleton when it is missing or empty.
/// - Appends absent keys with default values, preserving existing lines and comments.
/// - Write failures are logged; the caller then runs on defaults.
#[must_use]
pub fn ensure_settings_file() -> PathBuf {
    let path = settings_path();
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let existing = fs::read_to_string(&path).unwrap_or_default();
    if existing.trim().is_empty() {
        match fs::write(&path, SETTINGS_SKELETON_CONTENT) {
            Ok(()) => info!(path = %path.display(), "created settings skeleton"),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to write settings skeleton"),
        }
        return path;
    }

    let have: HashSet<String> = existing
        .lines()
        .filter(|l| !skip_comment_or_empty(l))
        .filter_map(parse_key_value)
        .map(|(k, _)| k)
        .collect();
    let missing = missing_key_lines(&have, &Settings::default());
    if missing.is_empty() {
        return path;
    }
    let mut content = existing;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    for line in &missing {
        content.push_str(line);
        content.push('\n');
    }
    if let Err(e) = fs::write(&path, content) {
        warn!(path = %path.display(), error = %e, "failed to append settings keys");
    } else {
        info!(path = %path.display(), added = missing.len(), "appended missing settings keys");
    }
    path
}

/// `key = value` lines for every known key not present in `have`.
fn missing_key_lines(have: &HashSet<String>, prefs: &Settings) -> Vec<String> {
    let pairs: [(&str, String); 7] = [
        ("api_url", prefs.api_url.clone()),
        ("request_timeout_secs", prefs.request_timeout_secs.to_string()),
        ("connect_timeout_secs", prefs.connect_timeout_secs.to_string()),
        (
            "default_sort",
            prefs
                .default_sort
                .map_or_else(String::new, |k| k.as_config_key().to_string()),
        ),
        ("show_open_only", prefs.show_open_only.to_string()),
        ("show_approved_only", prefs.show_approved_only.to_string()),
        ("user_role", prefs.user_role.as_config_key().to_string()),
    ];
    pairs
        .into_iter()
        .filter(|(k, _)| !have.contains(*k))
        .map(|(k, v)| format!("{k} = {v}"))
        .collect()
}
