//! Built-ins, reimplemented
//!
//! Each module restates a family of standard collection operations as
//! plain functions over slices, records and chains:
//! - Array iteration, mapping, filtering, membership and reduction
//! - Object key and value extraction over persistent records
//! - Inclusive ranges and sums
//!
//! The persistent [`Chain`](builtins_common::Chain) lives in `builtins-common`.

pub mod array; // Array utilities
pub mod error; // Error type
pub mod object; // Record key/value helpers
pub mod range; // Range and sum

pub use error::BuiltinsError;
