//! # Persistent Chains
//!
//! An immutable singly-linked list in the style of Scheme's cons cells.
//!
//! ## Philosophy
//!
//! A [`Chain`] is either [`Chain::Empty`] or a node holding a value and
//! the rest of the chain. Nodes are never mutated once built:
//!
//! - `prepend` allocates exactly one node and shares the existing chain as its tail
//! - `from_sequence` is a right fold of `prepend`, so the head holds the first element
//! - `to_sequence` walks head to tail collecting values
//! - `nth` walks `index` links and reports an error past the end
//!
//! ## Example
//!
//! ```
//! use builtins_common::list::{from_sequence, nth, prepend, to_sequence, Chain};
//!
//! // Scheme: (list 10 20 30)
//! let chain = from_sequence(&[10, 20, 30]);
//! assert_eq!(to_sequence(&chain), vec![10, 20, 30]);
//!
//! // Scheme: (cons 5 chain), the old chain is untouched
//! let longer = prepend(5, &chain);
//! assert_eq!(to_sequence(&longer), vec![5, 10, 20, 30]);
//! assert_eq!(to_sequence(&chain), vec![10, 20, 30]);
//!
//! // Scheme: (list-ref chain 1)
//! assert_eq!(nth(&chain, 1), Ok(&20));
//! assert!(nth(&chain, 5).is_err());
//!
//! let empty: Chain<i32> = Chain::new();
//! assert!(to_sequence(&empty).is_empty());
//! ```

use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::error::ChainError;

/// An immutable singly-linked list.
///
/// Cloning a chain is O(1): it copies the handle to the head node, not the nodes.
pub enum Chain<T> {
    /// The terminal marker.
    Empty,
    /// A value-holding link, shared between every chain that ends with it.
    Node(Rc<Node<T>>),
}

/// One link of a [`Chain`].
pub struct Node<T> {
    value: T,
    rest: Chain<T>,
}

impl<T> Node<T> {
    /// The value stored in this link.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The chain following this link.
    #[must_use]
    pub fn rest(&self) -> &Chain<T> {
        &self.rest
    }
}

// Unlink uniquely owned tails one at a time; the default recursive drop
// would use one stack frame per node.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut rest = std::mem::replace(&mut self.rest, Chain::Empty);
        loop {
            let node = match rest {
                Chain::Node(node) => node,
                Chain::Empty => break,
            };
            match Rc::try_unwrap(node) {
                Ok(mut owned) => rest = std::mem::replace(&mut owned.rest, Chain::Empty),
                // Still referenced by another chain; releasing our handle is enough.
                Err(_) => break,
            }
        }
    }
}

impl<T> Chain<T> {
    /// Creates the empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Chain::Empty
    }

    fn cons(value: T, rest: Chain<T>) -> Self {
        Chain::Node(Rc::new(Node { value, rest }))
    }

    /// Returns a new chain with `value` at the head and `self` as the rest.
    ///
    /// `self` is not modified; the new head points at the same nodes.
    ///
    /// # Example
    /// ```
    /// use builtins_common::Chain;
    /// let tail = Chain::from_sequence([20]);
    /// let chain = tail.prepend(10);
    /// assert_eq!(chain.to_vec(), vec![10, 20]);
    /// assert!(chain.rest().is_some_and(|rest| rest.ptr_eq(&tail)));
    /// ```
    #[must_use]
    pub fn prepend(&self, value: T) -> Self {
        Self::cons(value, self.clone())
    }

    /// Builds a chain holding `elements` in order.
    ///
    /// Folds from the last element backward so every prepend lands at the front.
    pub fn from_sequence<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut len = 0usize;
        let chain = elements.into_iter().rfold(Chain::Empty, |rest, value| {
            len += 1;
            Self::cons(value, rest)
        });
        trace!(len, "built chain from sequence");
        chain
    }

    /// Returns true for the terminal marker.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Chain::Empty)
    }

    /// Counts the links. O(n).
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the head value (car).
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        match self {
            Chain::Empty => None,
            Chain::Node(node) => Some(&node.value),
        }
    }

    /// Returns the chain after the head (cdr), or `None` for the empty chain.
    #[must_use]
    pub fn rest(&self) -> Option<&Chain<T>> {
        match self {
            Chain::Empty => None,
            Chain::Node(node) => Some(&node.rest),
        }
    }

    /// Returns the value at zero-based `index`.
    ///
    /// # Errors
    /// [`ChainError::IndexOutOfRange`] when `index` is not below the chain length.
    pub fn nth(&self, index: usize) -> Result<&T, ChainError> {
        let mut current = self;
        let mut walked = 0;
        loop {
            match current {
                Chain::Node(node) if walked == index => return Ok(&node.value),
                Chain::Node(node) => {
                    current = &node.rest;
                    walked += 1;
                }
                Chain::Empty => {
                    debug!(index, len = walked, "chain index out of range");
                    return Err(ChainError::IndexOutOfRange { index, len: walked });
                }
            }
        }
    }

    /// Returns the value at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.nth(index).ok()
    }

    /// Returns true when both chains start at the same node (or are both empty).
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Chain::Empty, Chain::Empty) => true,
            (Chain::Node(a), Chain::Node(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Iterates over the values head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self }
    }
}

impl<T: Clone> Chain<T> {
    /// Collects the values head to tail.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for Chain<T> {
    fn clone(&self) -> Self {
        match self {
            Chain::Empty => Chain::Empty,
            Chain::Node(node) => Chain::Node(Rc::clone(node)),
        }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Chain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Chain<T> {}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Scheme list notation: `(10 20 30)`, `()` when empty.
impl<T: fmt::Display> fmt::Display for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        Self::from_sequence(items)
    }
}

/// Borrowing iterator over a [`Chain`].
pub struct Iter<'a, T> {
    next: &'a Chain<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current: &'a Chain<T> = self.next;
        match current {
            Chain::Empty => None,
            Chain::Node(node) => {
                self.next = &node.rest;
                Some(&node.value)
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a chain from a slice.
///
/// # Scheme equivalent
/// ```scheme
/// (list 10 20) => (10 20)
/// ```
///
/// # Example
/// ```
/// use builtins_common::list::from_sequence;
/// let chain = from_sequence(&[10, 20]);
/// assert_eq!(chain.head(), Some(&10));
/// assert_eq!(chain.rest().and_then(|rest| rest.head()), Some(&20));
/// ```
pub fn from_sequence<T: Clone>(elements: &[T]) -> Chain<T> {
    Chain::from_sequence(elements.iter().cloned())
}

/// Converts a chain back into a vector, head first.
///
/// # Example
/// ```
/// use builtins_common::list::{from_sequence, to_sequence};
/// assert_eq!(to_sequence(&from_sequence(&[10, 20, 30])), vec![10, 20, 30]);
/// ```
pub fn to_sequence<T: Clone>(chain: &Chain<T>) -> Vec<T> {
    chain.to_vec()
}

/// Creates a new chain with `value` in front of `chain` (cons).
///
/// # Scheme equivalent
/// ```scheme
/// (cons 10 (cons 20 '())) => (10 20)
/// ```
///
/// # Example
/// ```
/// use builtins_common::list::{from_sequence, prepend, Chain};
/// let chain = prepend(10, &prepend(20, &Chain::new()));
/// assert_eq!(chain, from_sequence(&[10, 20]));
/// ```
pub fn prepend<T>(value: T, chain: &Chain<T>) -> Chain<T> {
    chain.prepend(value)
}

/// Returns the element at `index` (list-ref).
///
/// # Errors
/// [`ChainError::IndexOutOfRange`] when `index >= chain.len()`.
///
/// # Example
/// ```
/// use builtins_common::{ChainError, list::{from_sequence, nth}};
/// let chain = from_sequence(&[10, 20, 30]);
/// assert_eq!(nth(&chain, 1), Ok(&20));
/// assert_eq!(nth(&chain, 5), Err(ChainError::IndexOutOfRange { index: 5, len: 3 }));
/// ```
pub fn nth<T>(chain: &Chain<T>, index: usize) -> Result<&T, ChainError> {
    chain.nth(index)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_round_trip_law(items in prop::collection::vec(any::<i32>(), 0..64)) {
            prop_assert_eq!(to_sequence(&from_sequence(&items)), items);
        }

        #[test]
        fn test_prepend_law(
            value in any::<i32>(),
            items in prop::collection::vec(any::<i32>(), 0..64),
        ) {
            let chain = from_sequence(&items);
            let mut expected = vec![value];
            expected.extend_from_slice(&items);
            prop_assert_eq!(to_sequence(&prepend(value, &chain)), expected);
            prop_assert_eq!(to_sequence(&chain), items);
        }

        #[test]
        fn test_nth_agrees_with_sequence(
            items in prop::collection::vec(any::<i32>(), 0..64),
            index in 0usize..80,
        ) {
            let chain = from_sequence(&items);
            match items.get(index) {
                Some(expected) => prop_assert_eq!(nth(&chain, index), Ok(expected)),
                None => prop_assert_eq!(
                    nth(&chain, index),
                    Err(ChainError::IndexOutOfRange { index, len: items.len() })
                ),
            }
        }
    }
}
