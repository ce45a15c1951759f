//! Worker pool manager for the reuse strategy.
//!
//! This module defines the [`WorkerPool`] struct, which spawns a fixed set of
//! idle workers once and dispatches one segment to each of them per round.
//! Each worker listens on its own bounded [`mpsc::Receiver`] and executes
//! dispatches independently. Workers share no mutable state; segments and
//! partial products move by message passing only, so no locking is needed.

use super::worker::{WorkRequest, worker_loop};
use crate::{Error, ProductMultiplier, Result, SegmentMultiplier, combine, segment};
use core::time::Duration;
use num_bigint::BigUint;
use std::sync::Arc;
use tokio::{
    sync::{mpsc, oneshot},
    time::timeout,
};
use tokio_util::sync::CancellationToken;

/// A persistent pool of worker tasks reused across dispatch rounds.
///
/// The pool is sized from the segment count of the `n` it is created for and
/// stays that size for its lifetime. Dispatch is index-aligned: segment `i`
/// always goes to pool worker `i`. This is the defining difference from the
/// spawn-per-call strategy in [`run_segmented`](crate::run_segmented): no
/// worker teardown or respawn happens between rounds.
pub struct WorkerPool {
    workers: Vec<mpsc::Sender<WorkRequest>>,
    shutdown_token: CancellationToken,
}

impl WorkerPool {
    /// Creates a pool sized for `n` using the default [`ProductMultiplier`].
    ///
    /// See [`WorkerPool::create_with`].
    pub async fn create(n: u64, concurrency: usize) -> Result<Self> {
        Self::create_with(n, concurrency, ProductMultiplier).await
    }

    /// Creates a pool with one idle worker per segment of `n`, then blocks
    /// until every worker has reported online.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if `n < 1` or `concurrency < 1`.
    /// - [`Error::WorkerStartup`] if any worker never comes online; the
    ///   whole creation call fails.
    pub async fn create_with<M>(n: u64, concurrency: usize, multiplier: M) -> Result<Self>
    where
        M: SegmentMultiplier,
    {
        let pool_size = segment(n, concurrency)?.len();
        let multiplier = Arc::new(multiplier);

        let mut workers = Vec::with_capacity(pool_size);
        let mut pending_ready = Vec::with_capacity(pool_size);
        for worker_id in 0..pool_size {
            // Buffer of one: a worker holds at most a single in-flight
            // dispatch, and each round sends it exactly one.
            let (tx, rx) = mpsc::channel(1);
            let (ready_tx, ready_rx) = oneshot::channel();
            tokio::spawn(worker_loop(worker_id, rx, Arc::clone(&multiplier), ready_tx));
            workers.push(tx);
            pending_ready.push((worker_id, ready_rx));
        }

        for (worker_id, ready_rx) in pending_ready {
            ready_rx
                .await
                .map_err(|_| Error::WorkerStartup { worker_id })?;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Worker pool online with {} workers", workers.len());

        Ok(Self {
            workers,
            shutdown_token: CancellationToken::new(),
        })
    }

    /// Number of workers in the pool.
    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Runs one dispatch round: segments `n`, sends segment `i` to worker
    /// `i`, awaits every partial product, and folds them into `n!`.
    ///
    /// Re-segmenting with the pool's own size keeps the segment count within
    /// the pool by construction; when `n` is small, surplus workers simply
    /// idle for the round. Workers stay online afterwards, ready for the
    /// next round.
    ///
    /// # Errors
    ///
    /// - [`Error::PoolShutdown`] if [`WorkerPool::shutdown`] was called.
    /// - [`Error::InvalidInput`] if `n < 1`.
    /// - [`Error::WorkerExecution`] if a worker's multiplication failed.
    /// - [`Error::WorkerExit`] / [`Error::Channel`] if a worker died before
    ///   or during the round.
    ///
    /// Any single failure aborts the whole round; results from workers still
    /// in flight are dropped unread.
    pub async fn run(&self, n: u64) -> Result<BigUint> {
        if self.shutdown_token.is_cancelled() {
            return Err(Error::PoolShutdown);
        }

        let segments = segment(n, self.workers.len())?;

        let mut pending = Vec::with_capacity(segments.len());
        for (worker_id, seg) in segments.into_iter().enumerate() {
            let (result_tx, result_rx) = oneshot::channel();
            self.workers[worker_id]
                .send(WorkRequest::Multiply {
                    segment: seg,
                    result_tx,
                })
                .await
                .map_err(|_| Error::Channel {
                    context: format!("Worker {worker_id} channel closed"),
                })?;
            pending.push((worker_id, result_rx));
        }

        // No timeout on the join: a hung worker stalls the round
        // indefinitely. A cancellation hook would attach here.
        let mut partials = Vec::with_capacity(pending.len());
        for (worker_id, result_rx) in pending {
            match result_rx.await {
                Ok(Ok(partial)) => partials.push(partial),
                Ok(Err(e)) => return Err(e),
                Err(_) => return Err(Error::WorkerExit { worker_id }),
            }
        }

        Ok(combine(partials))
    }

    /// Gracefully shuts down all workers in the pool.
    ///
    /// - Cancels the shutdown token so subsequent [`WorkerPool::run`] calls
    ///   fail fast.
    /// - Sends a [`WorkRequest::Shutdown`] to each worker.
    /// - Waits up to 3 seconds per worker for the acknowledgement, so
    ///   teardown can never hang the caller.
    pub async fn shutdown(&self) -> Result<()> {
        self.shutdown_token.cancel();

        let mut shutdown_handles = Vec::with_capacity(self.workers.len());
        for (worker_id, worker) in self.workers.iter().enumerate() {
            let (tx, rx) = oneshot::channel();
            if worker
                .send(WorkRequest::Shutdown { response: tx })
                .await
                .is_err()
            {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send shutdown to worker {worker_id}");
            } else {
                shutdown_handles.push((worker_id, rx));
            }
        }

        let acks = shutdown_handles.into_iter().map(|(_worker_id, rx)| async move {
            match timeout(Duration::from_secs(3), rx).await {
                Ok(Ok(())) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!("Worker {_worker_id} shutdown acknowledged");
                }
                Ok(Err(_e)) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Worker {_worker_id} dropped its shutdown ack: {_e}");
                }
                Err(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!("Worker {_worker_id} shutdown timed out");
                }
            }
        });
        futures::future::join_all(acks).await;

        #[cfg(feature = "tracing")]
        tracing::debug!("Worker pool shutdown complete");

        Ok(())
    }
}
