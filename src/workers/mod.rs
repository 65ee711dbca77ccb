//! Async glue between workflow transitions and the backend.
//!
//! Confirm transitions emit a [`crate::state::MutationRequest`]. A
//! [`MutationWorker`] executes it and feeds the outcome back into the state
//! machine; the reload helpers honor markers returned by acknowledgements.

mod mutations;
mod reload;

pub use mutations::{MutationWorker, apply_outcome, execute};
pub use reload::{
    acknowledge_bulk_and_reload, acknowledge_review_and_reload, load_pending, load_topic_list,
    reload_pending,
};
