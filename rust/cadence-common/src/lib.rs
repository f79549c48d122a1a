//! Core definitions shared by all cadence-* crates: the error type, the result alias
//! and argument verification helpers.

pub mod error;
pub mod macros;
pub mod result;

pub use result::Result;
