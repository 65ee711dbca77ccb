use tracing::{info, warn};

use crate::events::{bulk, review};
use crate::sources::TopicBackend;
use crate::state::{FilterCriteria, PendingState, ReloadPending, TopicListState};

/// What: Reload the approval queue into `state`.
///
/// Inputs:
/// - `backend`: Topic backend
/// - `state`: Pending state to refresh
///
/// Output:
/// - `Ok(())` after the queue was replaced; `Err` with the message also stored in `state.error`.
///
/// # Errors
/// - Backend failure; the previous queue is kept.
pub async fn reload_pending<B: TopicBackend + ?Sized>(
    backend: &B,
    state: &mut PendingState,
) -> Result<(), String> {
    match backend.list_pending_topics().await {
        Ok(topics) => {
            info!(count = topics.len(), "pending queue reloaded");
            state.replace_topics(topics);
            Ok(())
        }
        Err(e) => {
            let message = format!("failed to load pending topics: {e}");
            warn!(error = %e, "pending reload failed");
            state.error = Some(message.clone());
            Err(message)
        }
    }
}

/// What: Build a fresh pending view from the backend.
///
/// # Errors
/// - Backend failure, as a one-line message.
pub async fn load_pending<B: TopicBackend + ?Sized>(backend: &B) -> Result<PendingState, String> {
    let mut state = PendingState::default();
    reload_pending(backend, &mut state).await?;
    Ok(state)
}

/// What: Fetch all topics and apply `criteria`.
///
/// Inputs:
/// - `backend`: Topic backend
/// - `criteria`: Filter and sort criteria
///
/// Output:
/// - List state with filtered results and the cursor on the first row.
///
/// # Errors
/// - Backend failure, as a one-line message.
pub async fn load_topic_list<B: TopicBackend + ?Sized>(
    backend: &B,
    criteria: FilterCriteria,
) -> Result<TopicListState, String> {
    let topics = backend
        .list_topics()
        .await
        .map_err(|e| format!("failed to load topics: {e}"))?;
    let state = TopicListState::new(topics, criteria);
    info!(
        total = state.all_topics.len(),
        shown = state.results.len(),
        "topic list loaded"
    );
    Ok(state)
}

/// Honor a reload marker by refreshing the queue.
async fn honor<B: TopicBackend + ?Sized>(
    backend: &B,
    state: &mut PendingState,
    marker: Option<ReloadPending>,
) -> bool {
    match marker {
        Some(ReloadPending) => {
            let _ = reload_pending(backend, state).await;
            true
        }
        None => false,
    }
}

/// What: Acknowledge a review success and reload the queue.
///
/// Output:
/// - `true` when the dialog closed and a reload was issued.
pub async fn acknowledge_review_and_reload<B: TopicBackend + ?Sized>(
    backend: &B,
    state: &mut PendingState,
) -> bool {
    let marker = review::acknowledge_review(state);
    honor(backend, state, marker).await
}

/// Acknowledge a bulk success, clear the selection and reload the queue.
pub async fn acknowledge_bulk_and_reload<B: TopicBackend + ?Sized>(
    backend: &B,
    state: &mut PendingState,
) -> bool {
    let marker = bulk::acknowledge_bulk(state);
    honor(backend, state, marker).await
}
