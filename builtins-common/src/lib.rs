//! # Built-ins Common
//!
//! Shared pieces for the built-in reimplementations: an immutable,
//! structurally shared singly-linked list and its error type.
//!
//! ## Modules
//!
//! - [`list`]: The persistent [`Chain`] and its four core operations
//!   (`from_sequence`, `to_sequence`, `prepend`, `nth`)
//! - [`error`]: [`ChainError`], the single failure mode of chain access
//!
//! ## Design Principles
//!
//! 1. **Persistent**: prepend builds a new head and never touches the chain it extends
//! 2. **Shared tails**: the rest of a chain is reference counted, not copied
//! 3. **Explicit terminal**: the end of a chain is a variant, not a null reference
//! 4. **Checked access**: out-of-range indexing is an error value, not a panic

pub mod error;
pub mod list;

// Re-export main types for convenience
pub use error::ChainError;
pub use list::{Chain, from_sequence, nth, prepend, to_sequence};
