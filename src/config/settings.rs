use std::env;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::state::{CurrentUser, FilterCriteria, Role, SortKey};
use crate::util::config::{parse_bool, parse_key_value, skip_comment_or_empty};

/// Environment variable that overrides `api_url` from `settings.conf`.
pub const API_URL_ENV: &str = "DIPLOMA_TEAMS_API_URL";

/// User preferences loaded from `settings.conf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Root of the topics REST API.
    pub api_url: String,
    /// Whole-request timeout for backend calls.
    pub request_timeout_secs: u64,
    /// TCP connect timeout for backend calls.
    pub connect_timeout_secs: u64,
    /// Sort applied to `list` when no `--sort` is given.
    pub default_sort: Option<SortKey>,
    /// Default for the open-only filter.
    pub show_open_only: bool,
    /// Default for the approved-only filter.
    pub show_approved_only: bool,
    /// Role the client acts as.
    pub user_role: Role,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000/api".to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            default_sort: None,
            show_open_only: false,
            show_approved_only: false,
            user_role: Role::Student,
        }
    }
}

impl Settings {
    /// Filter criteria seeded from the configured defaults.
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            sort_by: self.default_sort,
            show_open_only: self.show_open_only,
            show_approved_only: self.show_approved_only,
            ..FilterCriteria::default()
        }
    }

    /// The user this client acts for.
    #[must_use]
    pub const fn current_user(&self) -> CurrentUser {
        CurrentUser::with_role(self.user_role)
    }
}

/// What: Apply `settings.conf` content onto `settings`.
///
/// Inputs:
/// - `content`: File content
/// - `settings`: Settings to update in place
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unknown keys and unparsable values are ignored with a debug log, keeping the previous value.
/// - An empty `default_sort` clears the sort.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        let applied = match key.as_str() {
            "api_url" | "backend_url" => {
                if val.is_empty() {
                    false
                } else {
                    settings.api_url = val.clone();
                    true
                }
            }
            "request_timeout_secs" => val
                .parse::<u64>()
                .map(|v| settings.request_timeout_secs = v)
                .is_ok(),
            "connect_timeout_secs" => val
                .parse::<u64>()
                .map(|v| settings.connect_timeout_secs = v)
                .is_ok(),
            "default_sort" | "sort_by" => {
                if val.is_empty() {
                    settings.default_sort = None;
                    true
                } else if let Some(key) = SortKey::from_config_key(&val) {
                    settings.default_sort = Some(key);
                    true
                } else {
                    false
                }
            }
            "show_open_only" => parse_bool(&val)
                .map(|v| settings.show_open_only = v)
                .is_some(),
            "show_approved_only" => parse_bool(&val)
                .map(|v| settings.show_approved_only = v)
                .is_some(),
            "user_role" | "role" => Role::from_config_key(&val)
                .map(|r| settings.user_role = r)
                .is_some(),
            _ => {
                debug!(key = %key, "ignoring unknown settings key");
                continue;
            }
        };
        if !applied {
            warn!(key = %key, value = %val, "ignoring invalid settings value");
        }
    }
}

/// What: Load settings from `path`, falling back to defaults.
///
/// Inputs:
/// - `path`: Settings file location
///
/// Output:
/// - Parsed settings; defaults when the file is missing or unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(&content, &mut out),
        Err(e) => debug!(path = %path.display(), error = %e, "settings file not readable; using defaults"),
    }
    out
}

/// Override `api_url` from the environment when the variable is set and non-empty.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(url) = env::var(API_URL_ENV)
        && !url.trim().is_empty()
    {
        debug!(api_url = %url, "api_url overridden from environment");
        settings.api_url = url.trim().to_string();
    }
}

/// What: Load user settings from the config directory.
///
/// Inputs:
/// - None (reads `settings.conf` under HOME/XDG, creating it from the skeleton when missing)
///
/// Output:
/// - A `Settings` value with environment overrides applied.
#[must_use]
pub fn settings() -> Settings {
    let path = super::skeleton::ensure_settings_file();
    let mut out = load_settings_from(&path);
    apply_env_overrides(&mut out);
    out
}
