//! Bulk-approval selection and dialog transitions.

use tracing::{debug, info, warn};

use crate::logic::{Bucket, bucket_of};
use crate::state::{BulkPhase, MutationRequest, PendingState, ReloadPending, ReviewPhase, TopicId};

/// What: Check or uncheck a standard topic for bulk approval.
///
/// Inputs:
/// - `state`: Pending view state
/// - `id`: Topic to toggle
///
/// Output:
/// - `true` when the selection changed.
///
/// Details:
/// - Symmetric: a checked id is removed, an unchecked id is added.
/// - Only standard-bucket topics can be checked, and only while no bulk dialog is open.
pub fn toggle(state: &mut PendingState, id: &TopicId) -> bool {
    if state.bulk != BulkPhase::Idle {
        debug!(topic = %id, bulk = ?state.bulk, "toggle ignored: bulk dialog open");
        return false;
    }
    let canonical = match state.find(id) {
        Some(topic) if bucket_of(topic) == Bucket::Standard => topic.id.clone(),
        Some(_) => {
            debug!(topic = %id, "toggle ignored: non-standard topic");
            return false;
        }
        None => {
            warn!(topic = %id, "toggle ignored: topic not in pending queue");
            return false;
        }
    };
    // Selection holds the queue's own id, which carries its wire form.
    if !state.selected_ids.remove(&canonical) {
        state.selected_ids.insert(canonical);
    }
    true
}

/// What: Open the bulk confirmation dialog.
///
/// Inputs:
/// - `state`: Pending view state
///
/// Output:
/// - `true` when the phase moved `Idle` -> `Confirming`.
///
/// Details:
/// - No-op on an empty selection or while a single review is open.
pub fn request_bulk_approve(state: &mut PendingState) -> bool {
    if state.bulk != BulkPhase::Idle || state.selected_ids.is_empty() {
        return false;
    }
    if state.review != ReviewPhase::Closed {
        debug!(phase = ?state.review, "bulk request ignored: single review open");
        return false;
    }
    state.bulk = BulkPhase::Confirming;
    state.error = None;
    true
}

/// `Confirming` -> `Idle`, leaving the selection untouched.
pub fn cancel_bulk(state: &mut PendingState) -> bool {
    if state.bulk_submitting || state.bulk != BulkPhase::Confirming {
        return false;
    }
    state.bulk = BulkPhase::Idle;
    true
}

/// Commit the bulk approval of every selected id; ignored while a request is in flight.
pub fn confirm_bulk(state: &mut PendingState) -> Option<MutationRequest> {
    if state.bulk_submitting || state.bulk != BulkPhase::Confirming {
        return None;
    }
    let ids: Vec<TopicId> = state.selected_ids.iter().cloned().collect();
    state.bulk_submitting = true;
    info!(count = ids.len(), "submitting bulk approval");
    Some(MutationRequest::ApproveBulk { ids })
}

/// What: Apply the outcome of a bulk approval request.
///
/// Inputs:
/// - `state`: Pending view state with a bulk request in flight
/// - `outcome`: `Ok(())` on success, `Err(message)` on failure
///
/// Output:
/// - `BulkSuccess` on success; `Idle` with `state.error` set on failure (selection kept).
pub fn finish_bulk(state: &mut PendingState, outcome: Result<(), String>) {
    if !state.bulk_submitting {
        return;
    }
    state.bulk_submitting = false;
    match outcome {
        Ok(()) => {
            state.bulk = BulkPhase::BulkSuccess;
            state.error = None;
        }
        Err(message) => {
            warn!(error = %message, "bulk approval failed");
            state.bulk = BulkPhase::Idle;
            state.error = Some(message);
        }
    }
}

/// `BulkSuccess` -> `Idle`: clears the selection and asks for a reload.
pub fn acknowledge_bulk(state: &mut PendingState) -> Option<ReloadPending> {
    if state.bulk != BulkPhase::BulkSuccess {
        return None;
    }
    state.bulk = BulkPhase::Idle;
    state.selected_ids.clear();
    Some(ReloadPending)
}
