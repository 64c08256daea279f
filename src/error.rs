//! Error types for color scales and their configuration.
//!
//! The color mapper itself never fails: every error below is raised
//! by a scale when a value is mapped, or by parsing a preset token or
//! a CSS color.

use thiserror::Error;

use crate::Value;

/// The error type for chart-color operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The token does not name a known scale preset.
    #[error("Unknown color scale preset: {0:?}")]
    UnknownPreset(String),

    /// The string is not a supported CSS color.
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// A continuous scale was asked to map a non-numeric value.
    #[error("Value {0} is not numeric")]
    NotNumeric(Value),

    /// The scale domain cannot be used for mapping.
    #[error("Invalid scale domain: {message}")]
    InvalidDomain { message: String },

    /// A discrete scale has no colors to hand out.
    #[error("Color scale range is empty")]
    EmptyRange,

    /// Failure reported by a user supplied scale.
    #[error("Scale error: {message}")]
    Scale { message: String },
}

/// Convenience type alias for Results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
