use crate::state::PendingTopic;

/// Default team size. Topics declaring any other size need a justification.
pub const STANDARD_TEAM_SIZE: u32 = 4;

/// Approval-queue bucket of a pending topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Default team size; eligible for bulk approval.
    Standard,
    /// Any other team size; reviewed one at a time.
    NonStandard,
}

/// Classify by declared student count only; the justification text is ignored.
#[must_use]
pub const fn bucket_of(topic: &PendingTopic) -> Bucket {
    if topic.student_count == STANDARD_TEAM_SIZE {
        Bucket::Standard
    } else {
        Bucket::NonStandard
    }
}

/// Standard-bucket topics in queue order.
pub fn standard_topics(topics: &[PendingTopic]) -> impl Iterator<Item = &PendingTopic> {
    topics
        .iter()
        .filter(|t| bucket_of(t) == Bucket::Standard)
}

/// Non-standard-bucket topics in queue order.
pub fn non_standard_topics(topics: &[PendingTopic]) -> impl Iterator<Item = &PendingTopic> {
    topics
        .iter()
        .filter(|t| bucket_of(t) == Bucket::NonStandard)
}
