use crate::{Error, Result, Segment, SegmentMultiplier};
use num_bigint::BigUint;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Message protocol between the coordinator and a pooled worker.
///
/// Exactly one result travels back per `Multiply` dispatch, on the
/// dispatch's own `oneshot` channel; a worker cannot emit a result before
/// receiving a dispatch, and cannot emit two for the same round.
pub(crate) enum WorkRequest {
    /// Dispatch: compute the partial product for one segment.
    Multiply {
        segment: Segment,
        result_tx: oneshot::Sender<Result<BigUint>>,
    },
    /// Teardown: stop after acknowledging.
    Shutdown { response: oneshot::Sender<()> },
}

/// Worker task responsible for processing [`WorkRequest`] messages.
///
/// The worker first signals that it is online via `ready_tx` (pool creation
/// blocks on this), then processes requests until a shutdown message arrives
/// or its channel closes. Each `Multiply` runs the shared
/// [`SegmentMultiplier`] on the dispatched segment and sends back exactly
/// one result.
///
/// Designed to be spawned as a Tokio task, one per pool slot.
pub(crate) async fn worker_loop<M: SegmentMultiplier>(
    worker_id: usize,
    mut rx: mpsc::Receiver<WorkRequest>,
    multiplier: Arc<M>,
    ready_tx: oneshot::Sender<()>,
) {
    if ready_tx.send(()).is_err() {
        // Pool creation was abandoned before this worker came online.
        return;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("Worker {worker_id} online");

    while let Some(work) = rx.recv().await {
        match work {
            WorkRequest::Multiply { segment, result_tx } => {
                let partial = multiplier.multiply(&segment).map_err(|e| {
                    Error::WorkerExecution {
                        worker_id,
                        reason: e.to_string(),
                    }
                });
                if result_tx.send(partial).is_err() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Worker {worker_id} failed to send result");
                }
            }
            WorkRequest::Shutdown { response } => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Worker {worker_id} received shutdown signal");

                if response.send(()).is_err() {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Worker {worker_id} failed to acknowledge shutdown");
                }
                break;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("Worker {worker_id} stopped");
}
