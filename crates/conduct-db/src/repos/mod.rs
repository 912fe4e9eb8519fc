//! Typed operations for each record kind.
//!
//! Each module adds methods to `Registry` via `impl Registry` blocks.

pub mod class;
pub mod incident;
pub mod student;
pub mod year;
