//! Segment multiplication.
//!
//! [`SegmentMultiplier`] is the one capability both worker lifecycles share:
//! fold a [`Segment`] into its partial product. Ephemeral workers run it once
//! on a preloaded segment; pooled workers run it for every dispatch message
//! they receive.

use crate::{Error, Result, Segment};
use num_bigint::BigUint;

/// Computes the product of one [`Segment`]'s integers.
///
/// Implementations must be pure with respect to the segment: no shared
/// mutable state, safe to run concurrently from any worker task.
pub trait SegmentMultiplier: Send + Sync + 'static {
    /// Folds the segment's integers into a single arbitrary-precision
    /// product.
    fn multiply(&self, segment: &Segment) -> Result<BigUint>;
}

/// The default multiplier: a sequential fold seeded at 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProductMultiplier;

impl SegmentMultiplier for ProductMultiplier {
    fn multiply(&self, segment: &Segment) -> Result<BigUint> {
        Ok(segment
            .iter()
            .fold(BigUint::from(1_u32), |acc, value| acc * value))
    }
}

/// Non-parallel reference computation: folds `1..=n` on the calling thread.
///
/// This is the baseline the two worker strategies are compared against; all
/// three produce identical results for the same `n`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `n < 1`.
pub fn factorial_sequential(n: u64) -> Result<BigUint> {
    if n < 1 {
        return Err(Error::InvalidInput {
            reason: "N must be a positive integer".to_string(),
        });
    }
    Ok((1..=n).fold(BigUint::from(1_u32), |acc, value| acc * value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment;

    #[test]
    fn multiplies_a_single_segment() {
        let segments = segment(5, 1).unwrap();
        let product = ProductMultiplier.multiply(&segments[0]).unwrap();
        assert_eq!(product, BigUint::from(120_u32));
    }

    #[test]
    fn sequential_factorial_matches_known_values() {
        assert_eq!(factorial_sequential(1).unwrap(), BigUint::from(1_u32));
        assert_eq!(factorial_sequential(10).unwrap(), BigUint::from(3_628_800_u32));
        assert_eq!(
            factorial_sequential(20).unwrap(),
            BigUint::from(2_432_902_008_176_640_000_u64)
        );
    }

    #[test]
    fn sequential_factorial_rejects_zero() {
        assert!(matches!(
            factorial_sequential(0),
            Err(Error::InvalidInput { .. })
        ));
    }
}
