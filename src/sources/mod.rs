//! Backend access: the `TopicBackend` seam and its HTTP implementation.

use std::future::Future;

use crate::state::{BackendUser, NewTopic, PendingTopic, Topic, TopicId};

mod http;

pub use http::HttpBackend;

/// Result type alias for backend operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Operations the core consumes from the topic backend.
///
/// Inputs:
/// - Implemented by [`HttpBackend`] for the REST API and by test doubles.
///
/// Output:
/// - Each call resolves to `Ok` or an error describing the transport/backend failure.
///
/// Details:
/// - Mutations are fire-and-confirm: success carries no payload, callers
///   reload the affected list afterwards.
pub trait TopicBackend {
    /// Full topic list.
    fn list_topics(&self) -> impl Future<Output = Result<Vec<Topic>>> + Send;

    /// Approval queue.
    fn list_pending_topics(&self) -> impl Future<Output = Result<Vec<PendingTopic>>> + Send;

    /// Approve one topic.
    fn approve_topic(&self, id: &TopicId) -> impl Future<Output = Result<()>> + Send;

    /// Approve several topics in one call.
    fn approve_topics_bulk(&self, ids: &[TopicId]) -> impl Future<Output = Result<()>> + Send;

    /// Reject one topic with a reason.
    fn reject_topic(&self, id: &TopicId, reason: &str)
    -> impl Future<Output = Result<()>> + Send;

    /// One topic by id; `Ok(None)` when the backend does not know it.
    fn get_topic(&self, id: &TopicId) -> impl Future<Output = Result<Option<Topic>>> + Send;

    /// Create a topic; returns the stored record.
    fn create_topic(&self, topic: &NewTopic) -> impl Future<Output = Result<Topic>> + Send;

    /// All accounts with their raw backend roles.
    fn list_users(&self) -> impl Future<Output = Result<Vec<BackendUser>>> + Send;
}
