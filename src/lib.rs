#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Frequency conversions shared by the element formulas.
pub mod constants;
/// Scalar and complex aliases.
pub mod math;
/// Engineering-notation component values.
pub mod units;
/// Ladder components, reduction, and transmission-line models.
pub mod circuits;
/// Frequency sweep builders and post-processing helpers.
pub mod sweep;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
