//! State of the pending-approval queue view.

use std::collections::BTreeSet;

use crate::state::modal::{BulkPhase, ReviewPhase};
use crate::state::types::{PendingTopic, TopicId};

/// Pending topics plus the review and bulk-approval dialog state.
#[derive(Debug, Clone, Default)]
pub struct PendingState {
    /// Last loaded queue, in backend order.
    pub topics: Vec<PendingTopic>,
    /// Standard topics checked for bulk approval.
    pub selected_ids: BTreeSet<TopicId>,
    /// Topic under single review.
    pub active_topic: Option<PendingTopic>,
    /// Single-review dialog phase.
    pub review: ReviewPhase,
    /// Bulk-approval dialog phase.
    pub bulk: BulkPhase,
    /// A single-review request is in flight.
    pub review_submitting: bool,
    /// A bulk request is in flight.
    pub bulk_submitting: bool,
    /// One-line message from the last failed request.
    pub error: Option<String>,
}

impl PendingState {
    /// Fresh state holding `topics`.
    #[must_use]
    pub fn new(topics: Vec<PendingTopic>) -> Self {
        Self {
            topics,
            ..Self::default()
        }
    }

    /// What: Replace the queue after a reload.
    ///
    /// Inputs:
    /// - `topics`: Freshly loaded pending topics
    ///
    /// Output:
    /// - Updates `topics`; drops selected ids that are no longer standard topics.
    pub fn replace_topics(&mut self, topics: Vec<PendingTopic>) {
        self.topics = topics;
        let standard: BTreeSet<&TopicId> = crate::logic::standard_topics(&self.topics)
            .map(|t| &t.id)
            .collect();
        self.selected_ids.retain(|id| standard.contains(id));
    }

    /// Find a topic in the current queue by id.
    #[must_use]
    pub fn find(&self, id: &TopicId) -> Option<&PendingTopic> {
        self.topics.iter().find(|t| &t.id == id)
    }

    /// Whether `id` is checked for bulk approval.
    #[must_use]
    pub fn is_selected(&self, id: &TopicId) -> bool {
        self.selected_ids.contains(id)
    }
}
