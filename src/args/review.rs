//! Approval-queue subcommands driving the review and bulk workflows.

use std::sync::Arc;

use diploma_teams::events::{bulk, review};
use diploma_teams::sources::TopicBackend;
use diploma_teams::state::{
    BulkPhase, CurrentUser, MutationRequest, PendingState, ReviewPhase, TopicId,
};
use diploma_teams::workers::{
    MutationWorker, acknowledge_bulk_and_reload, acknowledge_review_and_reload, load_pending,
};

use crate::args::table::render_pending;
use crate::args::utils::ensure_reviewer;

/// Handle `pending`: print both buckets of the approval queue.
///
/// # Errors
/// - Missing review rights or backend failure.
pub async fn handle_pending<B: TopicBackend>(
    backend: &B,
    user: &CurrentUser,
) -> Result<String, String> {
    ensure_reviewer(user)?;
    let state = load_pending(backend).await?;
    Ok(render_pending(&state.topics))
}

/// What: Open `id` for review, reporting why it could not be opened.
///
/// # Errors
/// - The id is not in the loaded queue.
fn open(state: &mut PendingState, id: &TopicId) -> Result<(), String> {
    if review::open_topic(state, id) {
        Ok(())
    } else {
        Err(format!("topic {id} is not waiting for approval"))
    }
}

/// Queue size after the reload, for the success line.
fn remaining(state: &PendingState) -> String {
    match state.error.as_deref() {
        Some(e) => format!("queue not refreshed: {e}"),
        None => format!("{} topics still pending", state.topics.len()),
    }
}

/// Run one confirmed mutation on a fresh worker and wait for its outcome.
async fn run_mutation<B>(backend: &Arc<B>, state: &mut PendingState, request: MutationRequest)
where
    B: TopicBackend + Send + Sync + 'static,
{
    let mut worker = MutationWorker::spawn(Arc::clone(backend));
    worker.submit(state, request).await;
    worker.shutdown().await;
}

/// What: Handle `approve <id>` through the single-review dialog.
///
/// Inputs:
/// - `backend`: Topic backend
/// - `user`: Acting user
/// - `id`: Topic to approve
///
/// Output:
/// - Success line with the refreshed queue size.
///
/// # Errors
/// - Missing rights, unknown id, or backend failure.
pub async fn handle_approve<B: TopicBackend + Send + Sync + 'static>(
    backend: &Arc<B>,
    user: &CurrentUser,
    id: &str,
) -> Result<String, String> {
    ensure_reviewer(user)?;
    let id = TopicId::from(id);
    let mut state = load_pending(backend.as_ref()).await?;
    open(&mut state, &id)?;
    review::start_approval(&mut state);
    let request = review::confirm_approval(&mut state)
        .ok_or_else(|| format!("approval of topic {id} could not be submitted"))?;
    run_mutation(backend, &mut state, request).await;
    if state.review != ReviewPhase::ApproveSuccess {
        return Err(state.error.unwrap_or_else(|| "approval failed".to_string()));
    }
    acknowledge_review_and_reload(backend.as_ref(), &mut state).await;
    Ok(format!("Approved topic {id}; {}", remaining(&state)))
}

/// What: Handle `reject <id> --reason`.
///
/// Details:
/// - A blank reason is refused locally without contacting the backend for the mutation.
///
/// # Errors
/// - Missing rights, unknown id, blank reason, or backend failure.
pub async fn handle_reject<B: TopicBackend + Send + Sync + 'static>(
    backend: &Arc<B>,
    user: &CurrentUser,
    id: &str,
    reason: &str,
) -> Result<String, String> {
    ensure_reviewer(user)?;
    let id = TopicId::from(id);
    let mut state = load_pending(backend.as_ref()).await?;
    open(&mut state, &id)?;
    review::start_rejection(&mut state);
    review::edit_reason(&mut state, reason);
    let Some(request) = review::confirm_rejection(&mut state) else {
        return Err("rejection reason must not be blank".to_string());
    };
    run_mutation(backend, &mut state, request).await;
    if state.review != ReviewPhase::RejectSuccess {
        return Err(state.error.unwrap_or_else(|| "rejection failed".to_string()));
    }
    acknowledge_review_and_reload(backend.as_ref(), &mut state).await;
    Ok(format!("Rejected topic {id}; {}", remaining(&state)))
}

/// What: Handle `approve-bulk <ids...>` through the bulk dialog.
///
/// Inputs:
/// - `backend`: Topic backend
/// - `user`: Acting user
/// - `ids`: Topics to approve; each must be a standard pending topic
///
/// Output:
/// - Success line naming how many topics were approved.
///
/// # Errors
/// - Missing rights, an id outside the standard bucket, or backend failure.
pub async fn handle_approve_bulk<B: TopicBackend + Send + Sync + 'static>(
    backend: &Arc<B>,
    user: &CurrentUser,
    ids: &[String],
) -> Result<String, String> {
    ensure_reviewer(user)?;
    let mut state = load_pending(backend.as_ref()).await?;
    for raw in ids {
        let id = TopicId::from(raw.as_str());
        if state.is_selected(&id) {
            continue;
        }
        if !bulk::toggle(&mut state, &id) {
            return Err(format!(
                "topic {id} is not a standard pending topic; review it individually"
            ));
        }
    }
    let count = state.selected_ids.len();
    if !bulk::request_bulk_approve(&mut state) {
        return Err("nothing selected for bulk approval".to_string());
    }
    let request = bulk::confirm_bulk(&mut state)
        .ok_or_else(|| "bulk approval could not be submitted".to_string())?;
    run_mutation(backend, &mut state, request).await;
    if state.bulk != BulkPhase::BulkSuccess {
        return Err(state.error.unwrap_or_else(|| "bulk approval failed".to_string()));
    }
    acknowledge_bulk_and_reload(backend.as_ref(), &mut state).await;
    Ok(format!("Approved {count} topics; {}", remaining(&state)))
}
