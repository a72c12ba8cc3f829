use builtins_common::ChainError;
use thiserror::Error;

/// Errors from the reimplemented built-ins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuiltinsError {
    /// Reducing an empty slice without an initial value.
    #[error("reduce of empty array with no initial value")]
    EmptyReduce,

    #[error("range step must not be zero (range {start}..={end})")]
    ZeroStep { start: i64, end: i64 },

    #[error(transparent)]
    Chain(#[from] ChainError),
}
