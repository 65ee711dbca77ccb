//! Event handlers for the pending-approval dialogs.
//!
//! Each handler takes the view state, applies one user action and reports
//! whether anything changed. Confirm handlers return the mutation to run;
//! the host executes it (see `workers`) and feeds the outcome back.

pub mod bulk;
pub mod review;
