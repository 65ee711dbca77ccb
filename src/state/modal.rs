//! Dialog phases for the pending-topic review flows.
//!
//! Single-topic review and bulk approval are two independent state
//! machines: one works on a single topic, the other on a set of ids.

use crate::state::types::TopicId;

/// What: Phase of the single-topic review dialog.
///
/// - Input: Advanced by the handlers in `events::review`.
/// - Output: Tells the host which dialog (if any) to show.
/// - Details: `Closed` is reached from `Detail` (cancel) or from one of the
///   success phases (acknowledge). Submitting never leaves a dialog stuck:
///   failures fall back to `Detail`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReviewPhase {
    /// No topic under review.
    #[default]
    Closed,
    /// Topic details shown with approve/reject actions.
    Detail,
    /// Rejection dialog collecting a reason.
    Rejecting {
        /// Reason text typed so far.
        reason: String,
        /// Set when a blank reason was submitted; cleared on the next edit.
        reason_invalid: bool,
    },
    /// Approval confirmation dialog.
    Approving,
    /// Rejection committed; waiting for acknowledgement.
    RejectSuccess,
    /// Approval committed; waiting for acknowledgement.
    ApproveSuccess,
}

/// Phase of the bulk-approval dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BulkPhase {
    /// No bulk dialog shown.
    #[default]
    Idle,
    /// Confirmation dialog listing the selected topics.
    Confirming,
    /// Bulk approval committed; waiting for acknowledgement.
    BulkSuccess,
}

/// Mutation issued by a confirm transition and executed by a worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationRequest {
    /// Approve one topic.
    Approve {
        /// Topic under review.
        id: TopicId,
    },
    /// Reject one topic with a reason.
    Reject {
        /// Topic under review.
        id: TopicId,
        /// Trimmed, non-blank reason.
        reason: String,
    },
    /// Approve all selected standard topics.
    ApproveBulk {
        /// Selected ids in ascending order.
        ids: Vec<TopicId>,
    },
}

impl MutationRequest {
    /// Short name used in log lines.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Approve { .. } => "approve",
            Self::Reject { .. } => "reject",
            Self::ApproveBulk { .. } => "approve-bulk",
        }
    }
}

/// Marker returned when an acknowledgement requires reloading the pending list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the pending list must be reloaded after acknowledging a success"]
pub struct ReloadPending;
