//! Errors raised by chain access.

use thiserror::Error;

/// Failure modes of [`Chain`](crate::Chain) operations.
///
/// Construction, conversion and prepend are total; only indexed access can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("index {index} is out of range for a chain of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
