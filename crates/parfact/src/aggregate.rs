//! Aggregation of partial products into the final factorial.

use num_bigint::BigUint;

/// Folds ordered partial products into the final product.
///
/// Multiplication is commutative, so the numeric result does not depend on
/// the order; callers still pass partials in segment order so a result is
/// always attributable to its originating segment when tracing a failure.
pub fn combine<I>(partials: I) -> BigUint
where
    I: IntoIterator<Item = BigUint>,
{
    partials
        .into_iter()
        .fold(BigUint::from(1_u32), |acc, partial| acc * partial)
}
