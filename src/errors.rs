//! Error types shared between submodules.

use thiserror::Error;

/// Convenience result alias used throughout the crate.
pub type Result<T, E = ZinError> = std::result::Result<T, E>;

/// Top-level error type for the crate.
///
/// Every error is raised at the point of detection and returned to the caller
/// unchanged; nothing inside the library retries or substitutes a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZinError {
    /// The text is not a `<number><suffix>` engineering-notation value.
    #[error("{0:?} is not a valid component value, expected <number><G|M|k|h|c|m|u|n|p>")]
    InvalidFormat(String),
    /// A dynamically typed value was neither a number nor a string.
    #[error("type mismatch: expected a number or a string, found {0}")]
    TypeMismatch(String),
    /// The first character of a component code is not one of `r`, `l`, `c`.
    #[error("'{0}' is not a valid component, must be one of l, c, r")]
    InvalidComponent(char),
    /// The second character of a component code is not one of `s`, `p`.
    #[error("'{0}' is not a valid orientation, must be one of s, p")]
    InvalidOrientation(char),
    /// The component code is not exactly two characters long.
    #[error("{0:?} is not a component code, expected <r|l|c><s|p>")]
    MalformedCode(String),
}
