//! Application state split into small files.
//!
//! Public items are re-exported so callers can use `crate::state::*`.

pub mod filters;
pub mod list;
pub mod modal;
pub mod pending;
pub mod types;
pub mod user;

pub use filters::FilterCriteria;
pub use list::TopicListState;
pub use modal::{BulkPhase, MutationRequest, ReloadPending, ReviewPhase};
pub use pending::PendingState;
pub use types::{
    BackendUser, NewTopic, PendingTopic, RecordId, SortKey, Student, Supervisor, Topic, TopicId,
    TopicStatus,
};
pub use user::{CurrentUser, Role};
