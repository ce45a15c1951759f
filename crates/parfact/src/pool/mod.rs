//! Persistent worker pool: create-once, dispatch-per-round.
//!
//! This module contains the pooled worker lifecycle. Workers are spawned
//! once by [`WorkerPool::create`](manager::WorkerPool::create), report
//! online, then idle on their own bounded channel until a dispatch round
//! sends each of them one segment.
//!
//! ## Structure
//!
//! - `manager` - the [`WorkerPool`](manager::WorkerPool) coordinator.
//! - `worker` - the per-worker receive loop and message protocol.

mod manager;
mod worker;

pub use manager::*;
