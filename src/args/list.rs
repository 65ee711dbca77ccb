//! Topic browsing and creation subcommands.

use diploma_teams::sources::TopicBackend;
use diploma_teams::state::{CurrentUser, FilterCriteria, NewTopic, TopicId, TopicListState};
use diploma_teams::workers::load_topic_list;

use crate::args::definition::ListArgs;
use crate::args::table::{render_topic_detail, render_topics};
use crate::args::utils::{criteria_from_flags, ensure_creator};

/// What: Handle `list` by loading all topics and applying filters.
///
/// Inputs:
/// - `backend`: Topic backend
/// - `flags`: Parsed filter flags
/// - `defaults`: Criteria from settings
///
/// Output:
/// - Rendered table followed by a summary line.
///
/// # Errors
/// - Backend failure.
pub async fn handle_list<B: TopicBackend>(
    backend: &B,
    flags: &ListArgs,
    defaults: FilterCriteria,
) -> Result<String, String> {
    let criteria = criteria_from_flags(flags, defaults);
    let state = load_topic_list(backend, criteria).await?;
    Ok(format!(
        "{}\n\n{}",
        render_topics(&state.results),
        summary_line(&state)
    ))
}

/// Total count when nothing narrows the list, `shown of total` otherwise.
fn summary_line(state: &TopicListState) -> String {
    if state.criteria.is_identity() {
        format!("{} topics", state.all_topics.len())
    } else {
        format!(
            "{} of {} topics shown",
            state.results.len(),
            state.all_topics.len()
        )
    }
}

/// Handle `show <id>`.
///
/// # Errors
/// - Unknown topic or backend failure.
pub async fn handle_show<B: TopicBackend>(backend: &B, id: &str) -> Result<String, String> {
    let id = TopicId::from(id);
    match backend.get_topic(&id).await {
        Ok(Some(topic)) => Ok(render_topic_detail(&topic)),
        Ok(None) => Err(format!("topic {id} not found")),
        Err(e) => Err(format!("failed to load topic {id}: {e}")),
    }
}

/// What: Handle `create` for teachers and administrators.
///
/// Inputs:
/// - `backend`: Topic backend
/// - `user`: Acting user
/// - `title`, `description`, `max_members`: New topic fields
///
/// Output:
/// - Confirmation naming the stored topic.
///
/// # Errors
/// - Missing rights, blank title, zero capacity, or backend failure.
pub async fn handle_create<B: TopicBackend>(
    backend: &B,
    user: &CurrentUser,
    title: &str,
    description: &str,
    max_members: u32,
) -> Result<String, String> {
    ensure_creator(user)?;
    let title = title.trim();
    if title.is_empty() {
        return Err("topic title must not be blank".to_string());
    }
    if max_members == 0 {
        return Err("max members must be at least 1".to_string());
    }
    let new_topic = NewTopic::new(title, description.trim(), max_members);
    let created = backend
        .create_topic(&new_topic)
        .await
        .map_err(|e| format!("failed to create topic: {e}"))?;
    Ok(format!(
        "Created topic #{} \"{}\" ({})",
        created.id,
        created.title,
        if new_topic.is_standard {
            "standard team"
        } else {
            "non-standard team, needs justification during review"
        }
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::table::tests::topic;

    #[test]
    /// What: The summary only mentions filtering when criteria narrow the list
    ///
    /// - Input: Two topics with default criteria, then a search for one title
    /// - Output: "2 topics", then "1 of 2 topics shown"
    fn summary_reflects_criteria() {
        let topics = vec![topic("1", "Sieci neuronowe"), topic("2", "Systemy wbudowane")];
        let state = TopicListState::new(topics.clone(), FilterCriteria::default());
        assert_eq!(summary_line(&state), "2 topics");

        let mut criteria = FilterCriteria::default();
        criteria.set_search_query("sieci");
        let state = TopicListState::new(topics, criteria);
        assert_eq!(summary_line(&state), "1 of 2 topics shown");
    }
}
