//! ID prefixes and generation.
//!
//! Generated IDs look like `stu-3f9a0c4e71b2d8a65c0e94f1a7b3d2c8`: a kind
//! prefix, a dash, and 32 lowercase hex characters from 16 random bytes.
//! IDs are opaque; callers may also supply their own non-empty strings.

use crate::errors::CoreError;

pub const PREFIX_YEAR: &str = "yr";
pub const PREFIX_CLASS: &str = "cls";
pub const PREFIX_STUDENT: &str = "stu";
pub const PREFIX_INCIDENT: &str = "inc";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_YEAR, PREFIX_CLASS, PREFIX_STUDENT, PREFIX_INCIDENT];

const RANDOM_BYTES: usize = 16;

/// Generate a fresh prefixed ID from the system entropy source.
///
/// # Errors
///
/// Returns `CoreError::Entropy` if the operating system RNG is unavailable.
pub fn new_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; RANDOM_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::Entropy(e.to_string()))?;

    let mut id = String::with_capacity(prefix.len() + 1 + RANDOM_BYTES * 2);
    id.push_str(prefix);
    id.push('-');
    for byte in bytes {
        id.push_str(&format!("{byte:02x}"));
    }
    Ok(id)
}
