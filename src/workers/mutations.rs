use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::events::{bulk, review};
use crate::sources::TopicBackend;
use crate::state::{MutationRequest, PendingState};

/// What: Execute one mutation against the backend.
///
/// Inputs:
/// - `backend`: Topic backend
/// - `request`: Mutation emitted by a confirm transition
///
/// Output:
/// - `Ok(())` on success; `Err` with a one-line message suitable for `PendingState::error`.
///
/// # Errors
/// - Any transport or backend failure, flattened to its display text.
pub async fn execute<B: TopicBackend + ?Sized>(
    backend: &B,
    request: &MutationRequest,
) -> Result<(), String> {
    let kind = request.kind();
    let outcome = match request {
        MutationRequest::Approve { id } => backend.approve_topic(id).await,
        MutationRequest::Reject { id, reason } => backend.reject_topic(id, reason).await,
        MutationRequest::ApproveBulk { ids } => backend.approve_topics_bulk(ids).await,
    };
    match outcome {
        Ok(()) => {
            info!(kind, "mutation succeeded");
            Ok(())
        }
        Err(e) => {
            let message = one_line(&format!("{kind} failed: {e}"));
            error!(kind, error = %e, "mutation failed");
            Err(message)
        }
    }
}

/// Collapse whitespace runs (including newlines) so errors fit one status line.
fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Result pair reported by the mutation worker.
type Outcome = (MutationRequest, Result<(), String>);

/// Handle to a background task that executes mutations in arrival order.
///
/// Confirm transitions hand their request to [`MutationWorker::submit`], which
/// waits for the worker's answer and applies it to the issuing dialog.
#[derive(Debug)]
pub struct MutationWorker {
    /// Requests to execute.
    req_tx: mpsc::UnboundedSender<MutationRequest>,
    /// Executed requests with their outcomes.
    res_rx: mpsc::UnboundedReceiver<Outcome>,
    /// Worker task.
    handle: JoinHandle<()>,
}

impl MutationWorker {
    /// What: Spawn the worker task for `backend`.
    ///
    /// Inputs:
    /// - `backend`: Shared backend
    ///
    /// Output:
    /// - Worker handle; the task exits once the handle is shut down or dropped.
    ///
    /// Details:
    /// - Requests are executed one at a time.
    /// - A closed result channel is ignored so in-flight work still completes.
    #[must_use]
    pub fn spawn<B>(backend: Arc<B>) -> Self
    where
        B: TopicBackend + Send + Sync + 'static,
    {
        let (req_tx, mut req_rx) = mpsc::unbounded_channel::<MutationRequest>();
        let (res_tx, res_rx) = mpsc::unbounded_channel::<Outcome>();
        let handle = tokio::spawn(async move {
            while let Some(request) = req_rx.recv().await {
                let outcome = execute(backend.as_ref(), &request).await;
                let _ = res_tx.send((request, outcome));
            }
            debug!("mutation worker stopped");
        });
        Self {
            req_tx,
            res_rx,
            handle,
        }
    }

    /// What: Execute `request` on the worker and apply the outcome to `state`.
    ///
    /// Inputs:
    /// - `state`: Pending state whose confirm transition produced `request`
    /// - `request`: Mutation to run
    ///
    /// Output:
    /// - None; the issuing dialog moves to its success phase or reverts with an error.
    pub async fn submit(&mut self, state: &mut PendingState, request: MutationRequest) {
        if let Err(mpsc::error::SendError(request)) = self.req_tx.send(request) {
            apply_outcome(state, &request, Err(WORKER_STOPPED.to_string()));
            return;
        }
        match self.res_rx.recv().await {
            Some((request, outcome)) => apply_outcome(state, &request, outcome),
            None => {
                error!("mutation worker exited without answering");
                review::finish_review(state, Err(WORKER_STOPPED.to_string()));
                bulk::finish_bulk(state, Err(WORKER_STOPPED.to_string()));
            }
        }
    }

    /// Close the request channel and wait for the task to finish.
    pub async fn shutdown(self) {
        let Self {
            req_tx, handle, ..
        } = self;
        drop(req_tx);
        if let Err(e) = handle.await {
            error!(error = %e, "mutation worker panicked");
        }
    }
}

/// Message applied when the worker task is gone.
const WORKER_STOPPED: &str = "mutation worker stopped";

/// What: Apply a worker result to the dialog that issued it.
///
/// Inputs:
/// - `state`: Pending state
/// - `request`: The executed request
/// - `outcome`: Its result
///
/// Output:
/// - None; routes bulk results to the bulk dialog and the rest to the review dialog.
pub fn apply_outcome(state: &mut PendingState, request: &MutationRequest, outcome: Result<(), String>) {
    match request {
        MutationRequest::ApproveBulk { .. } => bulk::finish_bulk(state, outcome),
        MutationRequest::Approve { .. } | MutationRequest::Reject { .. } => {
            review::finish_review(state, outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BulkPhase, ReviewPhase, TopicId};
    use crate::test_utils::{MockBackend, pending_queue};

    #[tokio::test]
    /// What: Backend errors become one-line messages
    ///
    /// - Input: Failing backend with a multi-line error
    /// - Output: Err containing the kind and the flattened message
    async fn execute_flattens_errors() {
        let backend = MockBackend::failing("connection\nrefused");
        let err = execute(
            &backend,
            &MutationRequest::Approve {
                id: TopicId::from("10"),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err, "approve failed: connection refused");
    }

    #[tokio::test]
    /// What: Submitting a review through the worker calls the backend once
    ///
    /// - Input: Reject request from the dialog
    /// - Output: One reject call with the trimmed reason; RejectSuccess
    async fn worker_applies_review_outcome() {
        let backend = Arc::new(MockBackend::new(pending_queue()));
        let mut worker = MutationWorker::spawn(Arc::clone(&backend));
        let mut state = PendingState::new(pending_queue());
        review::open_topic(&mut state, &TopicId::from("12"));
        review::start_rejection(&mut state);
        review::edit_reason(&mut state, " out of scope ");
        let req = review::confirm_rejection(&mut state).unwrap();
        worker.submit(&mut state, req).await;
        assert_eq!(state.review, ReviewPhase::RejectSuccess);
        assert!(!state.review_submitting);
        assert_eq!(backend.calls(), vec!["reject 12 out of scope".to_string()]);
        worker.shutdown().await;
    }

    #[tokio::test]
    /// What: Bulk results are routed to the bulk dialog, failures keep the selection
    ///
    /// - Input: Bulk request against a working and a failing backend
    /// - Output: BulkSuccess; then Idle with error and selection intact
    async fn worker_routes_bulk_outcomes() {
        let backend = Arc::new(MockBackend::new(pending_queue()));
        let mut worker = MutationWorker::spawn(Arc::clone(&backend));
        let mut state = PendingState::new(pending_queue());
        bulk::toggle(&mut state, &TopicId::from("14"));
        bulk::request_bulk_approve(&mut state);
        let req = bulk::confirm_bulk(&mut state).unwrap();
        worker.submit(&mut state, req).await;
        assert_eq!(state.bulk, BulkPhase::BulkSuccess);
        assert_eq!(backend.calls(), vec!["approve-bulk 14".to_string()]);
        worker.shutdown().await;

        let mut worker = MutationWorker::spawn(Arc::new(MockBackend::failing("down")));
        let mut state = PendingState::new(pending_queue());
        bulk::toggle(&mut state, &TopicId::from("14"));
        bulk::request_bulk_approve(&mut state);
        let req = bulk::confirm_bulk(&mut state).unwrap();
        worker.submit(&mut state, req).await;
        assert_eq!(state.bulk, BulkPhase::Idle);
        assert!(state.is_selected(&TopicId::from("14")));
        assert_eq!(state.error.as_deref(), Some("approve-bulk failed: down"));
        worker.shutdown().await;
    }
}
