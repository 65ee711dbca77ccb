//! `users` subcommand.

use diploma_teams::sources::TopicBackend;

use crate::args::table::render_users;

/// Handle `users`: list accounts with their mapped roles.
///
/// # Errors
/// - Backend failure.
pub async fn handle_users<B: TopicBackend>(backend: &B) -> Result<String, String> {
    let users = backend
        .list_users()
        .await
        .map_err(|e| format!("failed to load users: {e}"))?;
    tracing::info!(count = users.len(), "users loaded");
    Ok(render_users(&users))
}
