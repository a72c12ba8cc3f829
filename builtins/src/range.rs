//! Ranges and sums
//!
//! Inclusive integer ranges in either direction, and a sum over any
//! summable slice.
//!
//! ```
//! use builtins::range::{range, sum};
//! assert_eq!(sum(&range(1, 10)), 55);
//! ```

use std::iter::{Sum, successors};

use builtins_common::Chain;
use tracing::debug;

use crate::error::BuiltinsError;

/// Inclusive range from `start` to `end`, counting down when `end < start`.
///
/// # Example
/// ```
/// use builtins::range::range;
/// assert_eq!(range(1, 4), vec![1, 2, 3, 4]);
/// assert_eq!(range(3, 1), vec![3, 2, 1]);
/// assert_eq!(range(7, 7), vec![7]);
/// ```
pub fn range(start: i64, end: i64) -> Vec<i64> {
    let step = if start <= end { 1 } else { -1 };
    stepped(start, end, step)
}

/// Range from `start` towards `end` in increments of `step`, including `end`
/// when a step lands on it. A step pointing away from `end` yields only an
/// empty range.
///
/// # Errors
/// [`BuiltinsError::ZeroStep`] when `step == 0`.
///
/// # Example
/// ```
/// use builtins::range::range_step;
/// assert_eq!(range_step(1, 10, 2), Ok(vec![1, 3, 5, 7, 9]));
/// assert_eq!(range_step(5, 2, -1), Ok(vec![5, 4, 3, 2]));
/// assert_eq!(range_step(1, 5, -1), Ok(vec![]));
/// assert!(range_step(1, 5, 0).is_err());
/// ```
pub fn range_step(start: i64, end: i64, step: i64) -> Result<Vec<i64>, BuiltinsError> {
    if step == 0 {
        debug!(start, end, "rejected range with zero step");
        return Err(BuiltinsError::ZeroStep { start, end });
    }
    Ok(stepped(start, end, step))
}

/// Same values as [`range_step`], as a persistent [`Chain`].
pub fn range_chain(start: i64, end: i64, step: i64) -> Result<Chain<i64>, BuiltinsError> {
    Ok(Chain::from_sequence(range_step(start, end, step)?))
}

// step must be non-zero; checked_add stops the walk at the integer bounds
fn stepped(start: i64, end: i64, step: i64) -> Vec<i64> {
    successors(Some(start), |current| current.checked_add(step))
        .take_while(|&value| if step > 0 { value <= end } else { value >= end })
        .collect()
}

/// Adds up every element; an empty slice sums to zero.
pub fn sum<'a, T>(items: &'a [T]) -> T
where
    T: Sum<&'a T>,
{
    items.iter().sum()
}
