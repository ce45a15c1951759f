//! Range partitioning for the segmented factorial computation.
//!
//! The [`segment`] function splits `[1..=N]` into at most `concurrency`
//! contiguous chunks of size `ceil(N / concurrency)`. The chunks are ordered,
//! pairwise disjoint, and concatenate back to exactly `1..=N`; the last chunk
//! may be shorter. Each chunk is handed to exactly one worker for the
//! duration of one round.

use crate::{Error, Result};

/// A contiguous, non-empty slice of the range `[1..=N]`.
///
/// Segments are only constructed by [`segment`], which guarantees
/// `start <= end` and that consecutive segments abut (`segment[i].end() + 1
/// == segment[i + 1].start()`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    start: u64,
    end: u64,
}

impl Segment {
    /// First integer in the segment (inclusive).
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// Last integer in the segment (inclusive).
    pub const fn end(&self) -> u64 {
        self.end
    }

    /// Number of integers in the segment. Always at least 1.
    pub const fn count(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Iterates the segment's integers in ascending order.
    pub fn iter(&self) -> core::ops::RangeInclusive<u64> {
        self.start..=self.end
    }
}

/// Partitions `[1..=n]` into at most `concurrency` ordered segments.
///
/// Chunk size is `ceil(n / concurrency)`, so fewer (never empty) segments
/// result when `n < concurrency`. The partition is deterministic: identical
/// arguments always yield the identical sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `n < 1` or `concurrency < 1`.
pub fn segment(n: u64, concurrency: usize) -> Result<Vec<Segment>> {
    if n < 1 {
        return Err(Error::InvalidInput {
            reason: "N must be a positive integer".to_string(),
        });
    }
    if concurrency < 1 {
        return Err(Error::InvalidInput {
            reason: "concurrency must be at least 1".to_string(),
        });
    }

    let chunk = n.div_ceil(concurrency as u64);
    let mut segments = Vec::with_capacity(concurrency);
    let mut start: u64 = 1;
    loop {
        // `chunk >= 1`, so `end` advances every iteration.
        let end = n.min(start.saturating_add(chunk - 1));
        segments.push(Segment { start, end });
        if end == n {
            break;
        }
        start = end + 1;
    }

    Ok(segments)
}
