//! Array utilities
//!
//! Iteration, mapping, filtering, membership and reduction written as
//! single passes over a slice. Every callback receives the element, its
//! index and the whole slice, in that order, so a callback can look at
//! neighbours or the length while it runs.
//!
//! Each function has a direct counterpart among the slice and iterator
//! methods of the standard library; the tests check they agree.

use tracing::debug;

use crate::error::BuiltinsError;

// =============================================================================
// Iteration and mapping
// =============================================================================

/// Calls `f` once per element, in order.
///
/// # Example
/// ```
/// use builtins::array::for_each;
/// let mut seen = Vec::new();
/// for_each(&[1, 2, 3, 4], |x, index, items| seen.push(x + items.len() + index));
/// assert_eq!(seen, vec![5, 7, 9, 11]);
/// ```
pub fn for_each<T, F>(items: &[T], mut f: F)
where
    F: FnMut(&T, usize, &[T]),
{
    for (index, item) in items.iter().enumerate() {
        f(item, index, items);
    }
}

/// Collects the result of `f` for every element.
///
/// # Example
/// ```
/// use builtins::array::map;
/// assert_eq!(map(&[1, 2, 3], |x, i, _| x * 10 + i), vec![10, 21, 32]);
/// ```
pub fn map<T, U, F>(items: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    items
        .iter()
        .enumerate()
        .map(|(index, item)| f(item, index, items))
        .collect()
}

/// Keeps the elements for which `predicate` holds, preserving order.
///
/// # Example
/// ```
/// use builtins::array::filter;
/// assert_eq!(filter(&[1, 2, 3, 4], |x, _, _| x % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> bool,
{
    items
        .iter()
        .enumerate()
        .filter(|(index, item)| predicate(*item, *index, items))
        .map(|(_, item)| item.clone())
        .collect()
}

// =============================================================================
// Predicates and search
// =============================================================================

/// True when any element satisfies `predicate`. Stops at the first match.
pub fn some<T, F>(items: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    items
        .iter()
        .enumerate()
        .any(|(index, item)| predicate(item, index, items))
}

/// True when every element satisfies `predicate`. Vacuously true on an empty slice.
pub fn every<T, F>(items: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    items
        .iter()
        .enumerate()
        .all(|(index, item)| predicate(item, index, items))
}

/// First element satisfying `predicate`.
pub fn find<T, F>(items: &[T], mut predicate: F) -> Option<&T>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    items
        .iter()
        .enumerate()
        .find(|(index, item)| predicate(*item, *index, items))
        .map(|(_, item)| item)
}

/// Index of the first element satisfying `predicate`.
pub fn find_index<T, F>(items: &[T], mut predicate: F) -> Option<usize>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    items
        .iter()
        .enumerate()
        .find_map(|(index, item)| predicate(item, index, items).then_some(index))
}

/// SameValueZero: ordinary equality, except that two values which are each
/// unequal to themselves (NaN) count as the same.
#[allow(clippy::eq_op)]
fn same_value_zero<T: PartialEq>(a: &T, b: &T) -> bool {
    a == b || (a != a && b != b)
}

/// Membership test using SameValueZero, so `NaN` is found.
///
/// # Example
/// ```
/// use builtins::array::{includes, index_of};
/// let xs = [1.0, f64::NAN, 3.0];
/// assert!(includes(&xs, &f64::NAN));
/// assert_eq!(index_of(&xs, &f64::NAN), None);
/// ```
pub fn includes<T: PartialEq>(items: &[T], item: &T) -> bool {
    includes_from(items, item, 0)
}

/// Membership test starting at `from`.
///
/// A negative `from` counts back from the end; out-of-range values clamp to the slice.
///
/// # Example
/// ```
/// use builtins::array::includes_from;
/// let xs = [1, 2, 3];
/// assert!(includes_from(&xs, &3, -1));
/// assert!(!includes_from(&xs, &1, -2));
/// assert!(!includes_from(&xs, &3, 10));
/// assert!(includes_from(&xs, &1, -10));
/// ```
pub fn includes_from<T: PartialEq>(items: &[T], item: &T, from: isize) -> bool {
    let len = items.len();
    let offset = from.unsigned_abs().min(len);
    let start = if from < 0 { len - offset } else { offset };
    items[start..].iter().any(|x| same_value_zero(x, item))
}

/// Index of the first element equal to `item`.
pub fn index_of<T: PartialEq>(items: &[T], item: &T) -> Option<usize> {
    items.iter().position(|x| x == item)
}

/// Index of the last element equal to `item`.
pub fn last_index_of<T: PartialEq>(items: &[T], item: &T) -> Option<usize> {
    items.iter().rposition(|x| x == item)
}

// =============================================================================
// Reduction
// =============================================================================

/// Left fold with an initial accumulator.
///
/// # Example
/// ```
/// use builtins::array::reduce;
/// let joined = reduce(&["a", "b", "c"], |acc, x, i, _| format!("{acc}{i}{x}"), String::new());
/// assert_eq!(joined, "0a1b2c");
/// ```
pub fn reduce<T, U, F>(items: &[T], mut f: F, init: U) -> U
where
    F: FnMut(U, &T, usize, &[T]) -> U,
{
    items
        .iter()
        .enumerate()
        .fold(init, |acc, (index, item)| f(acc, item, index, items))
}

/// Left fold seeded with the first element; the callback starts at index 1.
///
/// # Errors
/// [`BuiltinsError::EmptyReduce`] when `items` is empty.
///
/// # Example
/// ```
/// use builtins::{BuiltinsError, array::reduce_first};
/// assert_eq!(reduce_first(&[1, 2, 3, 4], |acc, x, _, _| acc + x), Ok(10));
/// assert_eq!(reduce_first::<i32, _>(&[], |acc, x, _, _| acc + x), Err(BuiltinsError::EmptyReduce));
/// ```
pub fn reduce_first<T, F>(items: &[T], mut f: F) -> Result<T, BuiltinsError>
where
    T: Clone,
    F: FnMut(T, &T, usize, &[T]) -> T,
{
    let Some((first, rest)) = items.split_first() else {
        debug!("reduce called on an empty slice without an initial value");
        return Err(BuiltinsError::EmptyReduce);
    };
    Ok(rest
        .iter()
        .enumerate()
        .fold(first.clone(), |acc, (offset, item)| {
            f(acc, item, offset + 1, items)
        }))
}

/// Right fold with an initial accumulator; visits the last element first.
pub fn reduce_right<T, U, F>(items: &[T], mut f: F, init: U) -> U
where
    F: FnMut(U, &T, usize, &[T]) -> U,
{
    items
        .iter()
        .enumerate()
        .rfold(init, |acc, (index, item)| f(acc, item, index, items))
}

// =============================================================================
// Construction
// =============================================================================

/// Appends `values` in place and returns the new length.
pub fn push<T, I>(items: &mut Vec<T>, values: I) -> usize
where
    I: IntoIterator<Item = T>,
{
    items.extend(values);
    items.len()
}

/// New vector holding `first` followed by `second`.
pub fn concat<T: Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(first.len() + second.len());
    result.extend_from_slice(first);
    result.extend_from_slice(second);
    result
}

/// New vector with the elements in reverse order; the input is untouched.
pub fn reverse<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARRAY: [usize; 4] = [1, 2, 3, 4];

    #[test]
    fn test_for_each_matches_std() {
        let mut native = Vec::new();
        ARRAY
            .iter()
            .enumerate()
            .for_each(|(index, x)| native.push(x + ARRAY.len() + index));

        let mut custom = Vec::new();
        for_each(&ARRAY, |x, index, items| custom.push(x + items.len() + index));

        assert_eq!(custom, native);
        assert_eq!(custom, vec![5, 7, 9, 11]);
    }

    #[test]
    fn test_for_each_empty() {
        let mut calls = 0;
        for_each::<i32, _>(&[], |_, _, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_map_uses_index_and_slice() {
        let result = map(&ARRAY, |x, index, items| x * items.len() + index);
        assert_eq!(result, vec![4, 9, 14, 19]);
        assert!(map::<i32, i32, _>(&[], |x, _, _| *x).is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let words = ["spray", "elite", "exuberant", "destruction", "present"];
        let long = filter(&words, |w, _, _| w.len() > 6);
        assert_eq!(long, vec!["exuberant", "destruction", "present"]);

        // Keep elements larger than their successor.
        let peaks = filter(&[5, 1, 4, 2, 3], |x, i, items| {
            items.get(i + 1).is_some_and(|next| x > next)
        });
        assert_eq!(peaks, vec![5, 4]);
    }

    #[test]
    fn test_some_and_every() {
        assert!(some(&ARRAY, |x, _, _| x % 2 == 0));
        assert!(!some(&ARRAY, |x, _, _| *x > 10));
        assert!(!some::<i32, _>(&[], |_, _, _| true));

        assert!(every(&ARRAY, |x, _, _| *x > 0));
        assert!(!every(&ARRAY, |x, _, _| *x < 4));
        assert!(every::<i32, _>(&[], |_, _, _| false));
    }

    #[test]
    fn test_some_short_circuits() {
        let mut visited = 0;
        assert!(some(&ARRAY, |x, _, _| {
            visited += 1;
            *x == 2
        }));
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_find_and_find_index() {
        assert_eq!(find(&ARRAY, |x, _, _| *x > 2), Some(&3));
        assert_eq!(find(&ARRAY, |x, _, _| *x > 9), None);
        assert_eq!(find_index(&ARRAY, |x, _, _| *x > 2), Some(2));
        assert_eq!(find_index(&ARRAY, |_, i, items| i == items.len()), None);
    }

    #[test]
    fn test_includes() {
        assert!(includes(&ARRAY, &3));
        assert!(!includes(&ARRAY, &7));
        assert!(!includes::<i32>(&[], &1));
        assert!(includes(&[1.0, f64::NAN], &f64::NAN));
    }

    #[test]
    fn test_includes_from() {
        assert!(includes_from(&ARRAY, &1, 0));
        assert!(!includes_from(&ARRAY, &1, 1));
        assert!(includes_from(&ARRAY, &4, -1));
        assert!(!includes_from(&ARRAY, &3, -1));
        assert!(includes_from(&ARRAY, &1, -100));
        assert!(!includes_from(&ARRAY, &4, 4));
        assert!(!includes_from(&ARRAY, &4, 100));
    }

    #[test]
    fn test_index_of() {
        let xs = ['a', 'b', 'a', 'c'];
        assert_eq!(index_of(&xs, &'a'), Some(0));
        assert_eq!(last_index_of(&xs, &'a'), Some(2));
        assert_eq!(index_of(&xs, &'z'), None);
        assert_eq!(last_index_of(&xs, &'z'), None);
        assert_eq!(index_of(&[f64::NAN], &f64::NAN), None);
    }

    #[test]
    fn test_reduce_with_init() {
        let native: usize = ARRAY.iter().sum();
        assert_eq!(reduce(&ARRAY, |acc, x, _, _| acc + x, 0usize), native);
        assert_eq!(reduce::<usize, usize, _>(&[], |acc, x, _, _| acc + x, 7), 7);

        let indices = reduce(
            &ARRAY,
            |mut acc: Vec<usize>, _, i, _| {
                acc.push(i);
                acc
            },
            Vec::new(),
        );
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_reduce_first() {
        let mut indices = Vec::new();
        let result = reduce_first(&ARRAY, |acc, x, i, _| {
            indices.push(i);
            acc * x
        });
        assert_eq!(result, Ok(24));
        assert_eq!(indices, vec![1, 2, 3]);

        assert_eq!(reduce_first(&[42], |acc, x, _, _| acc + x), Ok(42));
        assert_eq!(
            reduce_first::<i32, _>(&[], |acc, x, _, _| acc + x),
            Err(BuiltinsError::EmptyReduce)
        );
    }

    #[test]
    fn test_reduce_right() {
        let result = reduce_right(&["a", "b", "c"], |acc, x, _, _| acc + *x, String::new());
        assert_eq!(result, "cba");

        let indices = reduce_right(
            &ARRAY,
            |mut acc: Vec<usize>, _, i, _| {
                acc.push(i);
                acc
            },
            Vec::new(),
        );
        assert_eq!(indices, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_push_concat_reverse() {
        let mut xs = vec![1, 2];
        assert_eq!(push(&mut xs, [3, 4]), 4);
        assert_eq!(xs, vec![1, 2, 3, 4]);
        assert_eq!(push(&mut xs, []), 4);

        assert_eq!(concat(&[1, 2], &[3]), vec![1, 2, 3]);
        assert_eq!(reverse(&xs), vec![4, 3, 2, 1]);
        assert_eq!(xs, vec![1, 2, 3, 4]);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_map_agrees_with_iter(xs in prop::collection::vec(-1000i64..1000, 0..32)) {
            let native: Vec<i64> = xs.iter().map(|x| x * 3).collect();
            prop_assert_eq!(map(&xs, |x, _, _| x * 3), native);
        }

        #[test]
        fn test_filter_agrees_with_iter(xs in prop::collection::vec(any::<i32>(), 0..32)) {
            let native: Vec<i32> = xs.iter().copied().filter(|x| x % 3 == 0).collect();
            prop_assert_eq!(filter(&xs, |x, _, _| x % 3 == 0), native);
        }

        #[test]
        fn test_includes_agrees_with_contains(
            xs in prop::collection::vec(0u8..16, 0..32),
            needle in 0u8..16,
        ) {
            prop_assert_eq!(includes(&xs, &needle), xs.contains(&needle));
            prop_assert_eq!(index_of(&xs, &needle), xs.iter().position(|x| *x == needle));
        }

        #[test]
        fn test_reduce_agrees_with_sum(xs in prop::collection::vec(-1000i64..1000, 0..32)) {
            let native: i64 = xs.iter().sum();
            prop_assert_eq!(reduce(&xs, |acc, x, _, _| acc + x, 0i64), native);
            if !xs.is_empty() {
                prop_assert_eq!(reduce_first(&xs, |acc, x, _, _| acc + x), Ok(native));
            }
        }
    }
}
