//! Command-line argument definition and processing.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use diploma_teams::logic::STANDARD_TEAM_SIZE;
use diploma_teams::sources::TopicBackend;
use diploma_teams::state::{CurrentUser, Role, SortKey};

/// diploma-teams - Browse diploma-project topics and review pending approvals
#[derive(Parser, Debug)]
#[command(name = "diploma-teams")]
#[command(version)]
#[command(about = "Browse diploma-project topics and review pending approvals", long_about = None)]
pub struct Args {
    /// Topics API root (overrides settings.conf and DIPLOMA_TEAMS_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Act as this role (student, teacher, kpk, admin, coordinator)
    #[arg(long, global = true, value_parser = parse_role)]
    pub role: Option<Role>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List topics with optional filters and sorting
    List(ListArgs),
    /// Show one topic with its team
    Show {
        /// Topic id
        id: String,
    },
    /// Show the approval queue split into standard and non-standard topics
    Pending,
    /// Approve one pending topic
    Approve {
        /// Topic id
        id: String,
    },
    /// Reject one pending topic with a reason
    Reject {
        /// Topic id
        id: String,
        /// Why the topic is rejected (must not be blank)
        #[arg(short, long)]
        reason: String,
    },
    /// Approve several standard pending topics at once
    ApproveBulk {
        /// Topic ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
    /// Propose a new topic
    Create {
        /// Topic title
        #[arg(short, long)]
        title: String,
        /// Topic description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Team capacity
        #[arg(short, long, default_value_t = STANDARD_TEAM_SIZE)]
        max_members: u32,
    },
    /// List accounts and their roles
    Users,
}

/// Filter flags for `list`.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// Case-insensitive text matched against title and supervisor
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order (title-asc, title-desc, members-asc, members-desc, created-asc, created-desc)
    #[arg(long, value_parser = parse_sort)]
    pub sort: Option<SortKey>,

    /// Only topics still accepting members
    #[arg(long)]
    pub open_only: bool,

    /// Only approved topics
    #[arg(long)]
    pub approved_only: bool,

    /// Minimum team size (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub min_members: Option<i64>,

    /// Maximum team size (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub max_members: Option<i64>,
}

/// Parse a `--sort` value.
fn parse_sort(s: &str) -> Result<SortKey, String> {
    SortKey::from_config_key(s).ok_or_else(|| format!("unknown sort order: {s}"))
}

/// Parse a `--role` value.
fn parse_role(s: &str) -> Result<Role, String> {
    Role::from_config_key(s).ok_or_else(|| format!("unknown role: {s}"))
}

/// What: Run the selected subcommand.
///
/// Inputs:
/// - `command`: Parsed subcommand
/// - `backend`: Topic backend
/// - `user`: Acting user
/// - `defaults`: Filter criteria from settings, refined by `list` flags
///
/// Output:
/// - Text to print on success.
///
/// # Errors
/// - Permission, validation or backend failures as one-line messages.
pub async fn process_command<B: TopicBackend + Send + Sync + 'static>(
    command: &Command,
    backend: &Arc<B>,
    user: &CurrentUser,
    defaults: diploma_teams::state::FilterCriteria,
) -> Result<String, String> {
    use crate::args::{list, review, users};
    tracing::info!(command = ?command, role = ?user.role, "processing command");
    match command {
        Command::List(flags) => list::handle_list(backend.as_ref(), flags, defaults).await,
        Command::Show { id } => list::handle_show(backend.as_ref(), id).await,
        Command::Pending => review::handle_pending(backend.as_ref(), user).await,
        Command::Approve { id } => review::handle_approve(backend, user, id).await,
        Command::Reject { id, reason } => review::handle_reject(backend, user, id, reason).await,
        Command::ApproveBulk { ids } => review::handle_approve_bulk(backend, user, ids).await,
        Command::Create {
            title,
            description,
            max_members,
        } => list::handle_create(backend.as_ref(), user, title, description, *max_members).await,
        Command::Users => users::handle_users(backend.as_ref()).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Global flags and list filters parse from a realistic command line
    ///
    /// - Input: `--role kpk list --sort members-desc --open-only --min-members -1`
    /// - Output: Matching fields
    fn parses_list_flags() {
        let args = Args::try_parse_from([
            "diploma-teams",
            "--role",
            "kpk",
            "list",
            "--sort",
            "members-desc",
            "--open-only",
            "--min-members",
            "-1",
        ])
        .unwrap();
        assert_eq!(args.role, Some(Role::Kpk));
        let Command::List(flags) = args.command else {
            panic!("expected list");
        };
        assert_eq!(flags.sort, Some(SortKey::MembersDesc));
        assert!(flags.open_only);
        assert_eq!(flags.min_members, Some(-1));
    }

    #[test]
    /// What: Bad values and missing required arguments are parse errors
    ///
    /// - Input: Unknown sort, reject without reason, approve-bulk without ids
    /// - Output: Err each time
    fn rejects_bad_arguments() {
        assert!(Args::try_parse_from(["diploma-teams", "list", "--sort", "random"]).is_err());
        assert!(Args::try_parse_from(["diploma-teams", "reject", "7"]).is_err());
        assert!(Args::try_parse_from(["diploma-teams", "approve-bulk"]).is_err());
        assert!(Args::try_parse_from(["diploma-teams", "--role", "dean", "pending"]).is_err());
    }

    #[test]
    /// What: Create defaults to the standard team size
    fn create_defaults() {
        let args = Args::try_parse_from(["diploma-teams", "create", "--title", "Compilers"]).unwrap();
        assert_eq!(
            args.command,
            Command::Create {
                title: "Compilers".into(),
                description: String::new(),
                max_members: STANDARD_TEAM_SIZE,
            }
        );
    }
}
