//! Spawn-per-call strategy: one fresh worker per segment per invocation.
//!
//! Each call to [`run_segmented`] fans the segments of `[1..=n]` out to
//! newly spawned worker tasks, each preloaded with its segment. Every worker
//! computes immediately, emits exactly one result, and exits; nothing
//! outlives the call. The coordinator then folds the partial products in
//! segment order.

use crate::{Error, ProductMultiplier, Result, Segment, SegmentMultiplier, combine, segment};
use num_bigint::BigUint;
use std::sync::Arc;
use tokio::sync::oneshot;

/// One-shot worker: created with its segment already attached, computes
/// once, sends one result, then terminates on its own.
async fn ephemeral_worker<M: SegmentMultiplier>(
    worker_id: usize,
    segment: Segment,
    multiplier: Arc<M>,
    result_tx: oneshot::Sender<Result<BigUint>>,
) {
    let partial = multiplier
        .multiply(&segment)
        .map_err(|e| Error::WorkerExecution {
            worker_id,
            reason: e.to_string(),
        });
    if result_tx.send(partial).is_err() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Ephemeral worker {worker_id} failed to send result");
    }
}

/// Computes `n!` with one ephemeral worker per segment, sized to the number
/// of available CPU cores.
///
/// See [`run_segmented_with`].
pub async fn run_segmented(n: u64) -> Result<BigUint> {
    run_segmented_with(n, num_cpus::get(), ProductMultiplier).await
}

/// Computes `n!` with the spawn-per-call strategy.
///
/// All workers start essentially simultaneously; the call suspends until
/// every one has returned a result or failed. Partial products are consumed
/// in segment order and folded via [`combine`].
///
/// # Errors
///
/// - [`Error::InvalidInput`] if `n < 1` or `concurrency < 1`.
/// - [`Error::WorkerExecution`] if a worker's multiplication failed or
///   panicked.
/// - [`Error::WorkerExit`] if a worker terminated without sending a result.
///
/// The first failure observed aborts the whole call. Outstanding workers are
/// not cancelled, but their results are dropped unread.
pub async fn run_segmented_with<M>(n: u64, concurrency: usize, multiplier: M) -> Result<BigUint>
where
    M: SegmentMultiplier,
{
    let segments = segment(n, concurrency)?;
    let multiplier = Arc::new(multiplier);

    // Fan out: every segment gets its own fresh worker task, preloaded with
    // its payload.
    let mut pending = Vec::with_capacity(segments.len());
    for (worker_id, seg) in segments.into_iter().enumerate() {
        let (result_tx, result_rx) = oneshot::channel();
        let handle = tokio::spawn(ephemeral_worker(
            worker_id,
            seg,
            Arc::clone(&multiplier),
            result_tx,
        ));
        pending.push((worker_id, handle, result_rx));
    }

    // Fan in, in segment order. No timeout on the join: a hung worker
    // stalls the call indefinitely. A cancellation hook would attach here.
    let mut partials = Vec::with_capacity(pending.len());
    for (worker_id, handle, result_rx) in pending {
        match result_rx.await {
            Ok(Ok(partial)) => partials.push(partial),
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                // The worker dropped its sender without a result; classify
                // the failure from how the task exited.
                return Err(match handle.await {
                    Err(join_err) if join_err.is_panic() => Error::WorkerExecution {
                        worker_id,
                        reason: join_err.to_string(),
                    },
                    _ => Error::WorkerExit { worker_id },
                });
            }
        }
    }

    Ok(combine(partials))
}
