//! Error types for the segmented factorial engine.
//!
//! This module defines the central `Error` enum, which captures all
//! reportable failure cases in the engine. Any single worker failure aborts
//! the enclosing batch: the first failure observed is the one surfaced, and
//! no partial factorial is ever returned.
//!
//! ## Error Cases
//! - `InvalidInput`: N or the concurrency level is out of range; rejected
//!   before any segmentation or dispatch occurs.
//! - `WorkerStartup`: a pooled worker never reported online; fails the
//!   entire pool-creation call.
//! - `WorkerExecution`: a worker raised an error (or panicked) while
//!   multiplying its segment.
//! - `WorkerExit`: a worker terminated without having sent a result or an
//!   error.
//! - `Channel`: an internal communication failure between the coordinator
//!   and a worker.
//! - `PoolShutdown`: a dispatch arrived after the pool began shutting down.

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the segmented factorial engine.
#[derive(Clone, thiserror::Error, Debug)]
pub enum Error {
    /// The input was invalid or out of range.
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A worker failed to come online during pool creation.
    #[error("Worker {worker_id} failed to come online")]
    WorkerStartup { worker_id: usize },

    /// A worker raised an error while computing its partial product.
    #[error("Worker {worker_id} failed while multiplying: {reason}")]
    WorkerExecution { worker_id: usize, reason: String },

    /// A worker exited without emitting a result for its dispatch.
    #[error("Worker {worker_id} exited without sending a result")]
    WorkerExit { worker_id: usize },

    /// Internal channel send/receive failure (e.g., closed channel).
    #[error("Channel error: {context}")]
    Channel { context: String },

    /// The pool is in the process of shutting down.
    #[error("Worker pool is shutting down")]
    PoolShutdown,
}
