//! # conduct-core
//!
//! Core types, ID generation, and error types for conduct.
//!
//! This crate provides the foundational types shared across all conduct crates:
//! - Entity structs for the four stored kinds (year levels, classes, students, incidents)
//! - The closed [`enums::Kind`] whitelist and its per-kind column metadata
//! - Closed incident category and status enumerations
//! - The [`record::Record`] tagged union used at the typed store boundary
//! - ID prefix constants and generation
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod record;
