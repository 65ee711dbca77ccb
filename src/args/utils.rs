//! Shared utilities for argument processing.

use diploma_teams::config::Settings;
use diploma_teams::state::{CurrentUser, FilterCriteria};

use crate::args::definition::ListArgs;

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides log_level argument.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// Apply `--api-url` and `--role` on top of loaded settings.
pub fn apply_cli_overrides(args: &crate::args::Args, settings: &mut Settings) {
    if let Some(url) = args.api_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        settings.api_url = url.to_string();
    }
    if let Some(role) = args.role {
        settings.user_role = role;
    }
}

/// What: Merge `list` flags into the configured default criteria.
///
/// Inputs:
/// - `flags`: Parsed `list` flags
/// - `defaults`: Criteria from settings
///
/// Output:
/// - Criteria where every given flag wins over the default.
pub fn criteria_from_flags(flags: &ListArgs, mut defaults: FilterCriteria) -> FilterCriteria {
    if let Some(q) = &flags.search {
        defaults.set_search_query(q.clone());
    }
    if flags.sort.is_some() {
        defaults.set_sort_by(flags.sort);
    }
    if flags.open_only {
        defaults.set_show_open_only(true);
    }
    if flags.approved_only {
        defaults.set_show_approved_only(true);
    }
    if flags.min_members.is_some() {
        defaults.set_min_members(flags.min_members);
    }
    if flags.max_members.is_some() {
        defaults.set_max_members(flags.max_members);
    }
    defaults
}

/// What: Refuse review commands for users without review rights.
///
/// # Errors
/// - The user's role may not approve or reject topics.
pub fn ensure_reviewer(user: &CurrentUser) -> Result<(), String> {
    if user.can_review_topics() {
        Ok(())
    } else {
        tracing::warn!(role = ?user.role, "review command refused");
        Err(format!(
            "role '{}' may not review topics (requires kpk or admin)",
            user.role.as_config_key()
        ))
    }
}

/// Refuse `create` for users without topic-creation rights.
///
/// # Errors
/// - The user's role may not create topics.
pub fn ensure_creator(user: &CurrentUser) -> Result<(), String> {
    if user.can_create_topics() {
        Ok(())
    } else {
        tracing::warn!(role = ?user.role, "create command refused");
        Err(format!(
            "role '{}' may not create topics (requires teacher or admin)",
            user.role.as_config_key()
        ))
    }
}
