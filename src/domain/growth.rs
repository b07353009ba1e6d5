//! Growth models: exhaustive permutation count vs. tree-search cost
//!
//! Both are pure functions of the base. `naive` is exact, `tree` is an
//! approximate real number (double precision), since the recurrence divides
//! by a factorial at every step.

use crate::domain::error::{DomainError, DomainResult};

/// Largest base whose factorial fits in a `u128` (34! ~ 2.95e38).
pub const MAX_FACTORIAL_BASE: u32 = 34;

/// Exact factorial, `0! = 1`.
///
/// Returns `FactorialOverflow` instead of wrapping for `n > MAX_FACTORIAL_BASE`.
pub fn factorial(n: u32) -> DomainResult<u128> {
    (1..=u128::from(n))
        .try_fold(1u128, |acc, k| acc.checked_mul(k))
        .ok_or(DomainError::FactorialOverflow {
            base: n,
            max: MAX_FACTORIAL_BASE,
        })
}

/// Number of tests needed to try all permutations of `base` digits.
pub fn naive(base: u32) -> DomainResult<u128> {
    factorial(base)
}

/// Cost of a pruned tree search over `base` digits.
///
/// ```text
/// tree(b) = sum_{n=1..b} [ (b-1)(b-2)...(b-n) / (n-1)! ]
/// ```
///
/// The product is accumulated left to right in `f64`; the divisor is the
/// exact factorial rounded once. Once `n == base` the product contains a
/// zero factor and every remaining term vanishes.
pub fn tree(base: u32) -> f64 {
    let mut value = 0.0;
    let mut product = 1.0_f64;
    for n in 1..=base {
        product *= f64::from(base - n);
        value += product / factorial_f64(n - 1);
    }
    value
}

/// `n!` as `f64`: exact value rounded once while it fits, running product after.
fn factorial_f64(n: u32) -> f64 {
    match factorial(n) {
        Ok(exact) => exact as f64,
        Err(_) => (1..=n).map(f64::from).product(),
    }
}
