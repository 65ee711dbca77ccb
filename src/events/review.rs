//! Single-topic review dialog transitions.

use tracing::{debug, info, warn};

use crate::state::{BulkPhase, MutationRequest, PendingState, ReloadPending, ReviewPhase, TopicId};

/// What: Open a topic from either bucket for detailed review.
///
/// Inputs:
/// - `state`: Pending view state
/// - `id`: Topic to review
///
/// Output:
/// - `true` when the review moved to `Detail`.
///
/// Details:
/// - Only valid from `Closed`. Refused while a bulk dialog is open so the two
///   flows never commit at the same time.
/// - Clears transient flags and the last error.
pub fn open_topic(state: &mut PendingState, id: &TopicId) -> bool {
    if state.review != ReviewPhase::Closed {
        debug!(topic = %id, phase = ?state.review, "open ignored: review already open");
        return false;
    }
    if state.bulk != BulkPhase::Idle {
        debug!(topic = %id, bulk = ?state.bulk, "open ignored: bulk approval in progress");
        return false;
    }
    let Some(topic) = state.find(id).cloned() else {
        warn!(topic = %id, "open ignored: topic not in pending queue");
        return false;
    };
    state.active_topic = Some(topic);
    state.review = ReviewPhase::Detail;
    state.review_submitting = false;
    state.error = None;
    true
}

/// Leave `Detail` without a decision.
pub fn close_review(state: &mut PendingState) -> bool {
    if state.review != ReviewPhase::Detail {
        return false;
    }
    state.review = ReviewPhase::Closed;
    state.active_topic = None;
    true
}

/// `Detail` -> `Rejecting` with an empty reason.
pub fn start_rejection(state: &mut PendingState) -> bool {
    if state.review != ReviewPhase::Detail {
        return false;
    }
    state.review = ReviewPhase::Rejecting {
        reason: String::new(),
        reason_invalid: false,
    };
    true
}

/// Replace the rejection reason; clears the blank-reason flag.
pub fn edit_reason(state: &mut PendingState, text: &str) -> bool {
    if state.review_submitting {
        return false;
    }
    if let ReviewPhase::Rejecting {
        reason,
        reason_invalid,
    } = &mut state.review
    {
        text.clone_into(reason);
        *reason_invalid = false;
        true
    } else {
        false
    }
}

/// `Rejecting` -> `Detail`, discarding the reason.
pub fn cancel_rejection(state: &mut PendingState) -> bool {
    if state.review_submitting || !matches!(state.review, ReviewPhase::Rejecting { .. }) {
        return false;
    }
    state.review = ReviewPhase::Detail;
    true
}

/// What: Commit the rejection of the active topic.
///
/// Inputs:
/// - `state`: Pending view state in `Rejecting`
///
/// Output:
/// - `Some(MutationRequest::Reject)` to execute; `None` when nothing is sent.
///
/// Details:
/// - A blank or whitespace-only reason sets `reason_invalid` and sends nothing.
/// - While a request is in flight further confirms are ignored.
pub fn confirm_rejection(state: &mut PendingState) -> Option<MutationRequest> {
    if state.review_submitting {
        return None;
    }
    let id = state.active_topic.as_ref()?.id.clone();
    let ReviewPhase::Rejecting {
        reason,
        reason_invalid,
    } = &mut state.review
    else {
        return None;
    };
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        *reason_invalid = true;
        debug!(topic = %id, "rejection blocked: blank reason");
        return None;
    }
    let reason = trimmed.to_string();
    state.review_submitting = true;
    info!(topic = %id, "submitting rejection");
    Some(MutationRequest::Reject { id, reason })
}

/// `Detail` -> `Approving`.
pub fn start_approval(state: &mut PendingState) -> bool {
    if state.review != ReviewPhase::Detail {
        return false;
    }
    state.review = ReviewPhase::Approving;
    true
}

/// `Approving` -> `Detail`.
pub fn cancel_approval(state: &mut PendingState) -> bool {
    if state.review_submitting || state.review != ReviewPhase::Approving {
        return false;
    }
    state.review = ReviewPhase::Detail;
    true
}

/// Commit the approval of the active topic; ignored while a request is in flight.
pub fn confirm_approval(state: &mut PendingState) -> Option<MutationRequest> {
    if state.review_submitting || state.review != ReviewPhase::Approving {
        return None;
    }
    let id = state.active_topic.as_ref()?.id.clone();
    state.review_submitting = true;
    info!(topic = %id, "submitting approval");
    Some(MutationRequest::Approve { id })
}

/// What: Apply the outcome of an approve/reject request.
///
/// Inputs:
/// - `state`: Pending view state with a request in flight
/// - `outcome`: `Ok(())` on success, `Err(message)` on transport/backend failure
///
/// Output:
/// - Moves to the matching success phase, or back to `Detail` with `state.error` set.
///
/// Details:
/// - Ignored when no review request is in flight.
pub fn finish_review(state: &mut PendingState, outcome: Result<(), String>) {
    if !state.review_submitting {
        return;
    }
    state.review_submitting = false;
    match outcome {
        Ok(()) => {
            let next = match &state.review {
                ReviewPhase::Rejecting { .. } => ReviewPhase::RejectSuccess,
                ReviewPhase::Approving => ReviewPhase::ApproveSuccess,
                other => other.clone(),
            };
            state.review = next;
            state.error = None;
        }
        Err(message) => {
            warn!(error = %message, phase = ?state.review, "review request failed");
            state.review = ReviewPhase::Detail;
            state.error = Some(message);
        }
    }
}

/// What: Acknowledge a success phase and close the review.
///
/// Inputs:
/// - `state`: Pending view state in `RejectSuccess` or `ApproveSuccess`
///
/// Output:
/// - `Some(ReloadPending)` when the dialog closed; the host must reload the queue.
pub fn acknowledge_review(state: &mut PendingState) -> Option<ReloadPending> {
    match state.review {
        ReviewPhase::RejectSuccess | ReviewPhase::ApproveSuccess => {
            state.review = ReviewPhase::Closed;
            state.active_topic = None;
            Some(ReloadPending)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::pending_queue;

    fn opened() -> PendingState {
        let mut state = PendingState::new(pending_queue());
        assert!(open_topic(&mut state, &TopicId::from("10")));
        state
    }

    #[test]
    /// What: Opening stores the active topic and enters Detail
    ///
    /// - Input: Closed review, existing and unknown ids
    /// - Output: Detail with active topic; unknown id and second open refused
    fn open_topic_enters_detail() {
        let mut state = PendingState::new(pending_queue());
        assert!(!open_topic(&mut state, &TopicId::from("404")));
        assert_eq!(state.review, ReviewPhase::Closed);

        assert!(open_topic(&mut state, &TopicId::from("13")));
        assert_eq!(state.review, ReviewPhase::Detail);
        assert_eq!(state.active_topic.as_ref().map(|t| t.id.as_str()), Some("13"));
        assert!(!open_topic(&mut state, &TopicId::from("10")));

        assert!(close_review(&mut state));
        assert_eq!(state.review, ReviewPhase::Closed);
        assert!(state.active_topic.is_none());
    }

    #[test]
    /// What: Blank rejection reasons never produce a request
    ///
    /// - Input: Empty and whitespace-only reasons
    /// - Output: Still Rejecting with `reason_invalid`; editing clears the flag
    fn blank_reason_is_rejected_locally() {
        let mut state = opened();
        assert!(start_rejection(&mut state));
        assert!(confirm_rejection(&mut state).is_none());
        assert!(matches!(
            state.review,
            ReviewPhase::Rejecting { reason_invalid: true, .. }
        ));

        assert!(edit_reason(&mut state, "   \t "));
        assert!(matches!(
            state.review,
            ReviewPhase::Rejecting { reason_invalid: false, .. }
        ));
        assert!(confirm_rejection(&mut state).is_none());
        assert!(matches!(
            state.review,
            ReviewPhase::Rejecting { reason_invalid: true, .. }
        ));
        assert!(!state.review_submitting);
    }

    #[test]
    /// What: Full rejection path with a trimmed reason
    ///
    /// - Input: Reason "  too broad  ", success outcome, acknowledge
    /// - Output: Reject request with trimmed text; RejectSuccess; Closed with reload
    fn rejection_success_path() {
        let mut state = opened();
        start_rejection(&mut state);
        edit_reason(&mut state, "  too broad  ");
        let req = confirm_rejection(&mut state);
        assert_eq!(
            req,
            Some(MutationRequest::Reject {
                id: TopicId::from("10"),
                reason: "too broad".into()
            })
        );
        assert!(state.review_submitting);
        assert!(confirm_rejection(&mut state).is_none());
        assert!(!cancel_rejection(&mut state));

        finish_review(&mut state, Ok(()));
        assert_eq!(state.review, ReviewPhase::RejectSuccess);
        assert_eq!(acknowledge_review(&mut state), Some(ReloadPending));
        assert_eq!(state.review, ReviewPhase::Closed);
        assert!(acknowledge_review(&mut state).is_none());
    }

    #[test]
    /// What: Cancelling a rejection discards the reason
    ///
    /// - Input: Typed reason then cancel, then start again
    /// - Output: Back in Detail; new rejection starts empty
    fn cancel_rejection_discards_reason() {
        let mut state = opened();
        start_rejection(&mut state);
        edit_reason(&mut state, "draft");
        assert!(cancel_rejection(&mut state));
        assert_eq!(state.review, ReviewPhase::Detail);
        start_rejection(&mut state);
        assert_eq!(
            state.review,
            ReviewPhase::Rejecting {
                reason: String::new(),
                reason_invalid: false
            }
        );
    }

    #[test]
    /// What: Approval failure falls back to Detail with an error
    ///
    /// - Input: Approve confirm, failing outcome
    /// - Output: Detail, error message set, no longer submitting
    fn approval_failure_returns_to_detail() {
        let mut state = opened();
        assert!(start_approval(&mut state));
        assert_eq!(
            confirm_approval(&mut state),
            Some(MutationRequest::Approve {
                id: TopicId::from("10")
            })
        );
        finish_review(&mut state, Err("backend status 500".into()));
        assert_eq!(state.review, ReviewPhase::Detail);
        assert_eq!(state.error.as_deref(), Some("backend status 500"));
        assert!(!state.review_submitting);
        assert!(acknowledge_review(&mut state).is_none());
    }

    #[test]
    /// What: Invalid transitions are refused
    ///
    /// - Input: Closed state actions; Approving close attempt
    /// - Output: No phase change, no request
    fn invalid_transitions_are_noops() {
        let mut state = PendingState::new(pending_queue());
        assert!(!start_approval(&mut state));
        assert!(!start_rejection(&mut state));
        assert!(confirm_approval(&mut state).is_none());
        assert!(!close_review(&mut state));

        let mut state = opened();
        start_approval(&mut state);
        assert!(!close_review(&mut state));
        assert!(cancel_approval(&mut state));
        assert_eq!(state.review, ReviewPhase::Detail);
    }

    #[test]
    /// What: Single review cannot open while a bulk dialog is active
    ///
    /// - Input: Bulk phase Confirming
    /// - Output: open_topic refused
    fn open_blocked_during_bulk() {
        let mut state = PendingState::new(pending_queue());
        state.bulk = BulkPhase::Confirming;
        assert!(!open_topic(&mut state, &TopicId::from("10")));
        assert_eq!(state.review, ReviewPhase::Closed);
    }
}
