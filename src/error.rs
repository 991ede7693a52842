//! Error taxonomy for the diagnosis pipeline.
//!
//! The pipeline is pure computation, so every failure is local and reported
//! synchronously. There is nothing to retry.

use core::fmt;

use thiserror::Error;

/// Which score axis a rejected value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Temporal axis (past → future).
    X,
    /// Valence axis (negative → positive).
    Y,
    /// The value was bucketed outside the pipeline, with no axis attached.
    Unspecified,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
            Axis::Unspecified => f.write_str("unspecified"),
        }
    }
}

/// Errors raised by the bucketing, classification, and lookup stages.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DiagnoseError {
    /// A raw score was NaN or infinite.
    #[error("score on {axis} axis is not a finite number: {value}")]
    InvalidInput {
        /// Axis the score belongs to.
        axis: Axis,
        /// The offending value.
        value: f64,
    },

    /// An integer outside {-3, -2, -1, 1, 2, 3} was offered as a bucket label.
    #[error("invalid bucket label: {0} (expected one of -3, -2, -1, 1, 2, 3)")]
    InvalidBucket(i8),

    /// A region name did not match any known quadrant.
    #[error("unknown region name")]
    UnknownRegion,
}

impl DiagnoseError {
    /// Attach an axis to an [`DiagnoseError::InvalidInput`]; other variants pass through.
    pub fn on_axis(self, axis: Axis) -> Self {
        match self {
            DiagnoseError::InvalidInput { value, .. } => DiagnoseError::InvalidInput { axis, value },
            other => other,
        }
    }
}

/// Result type for diagnosis operations.
pub type Result<T> = core::result::Result<T, DiagnoseError>;

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn error_display_messages() {
        let err = DiagnoseError::InvalidInput { axis: Axis::X, value: f64::INFINITY };
        assert_eq!(err.to_string(), "score on x axis is not a finite number: inf");

        let err = DiagnoseError::InvalidBucket(0);
        assert_eq!(
            err.to_string(),
            "invalid bucket label: 0 (expected one of -3, -2, -1, 1, 2, 3)"
        );

        assert_eq!(DiagnoseError::UnknownRegion.to_string(), "unknown region name");
    }

    #[test]
    fn on_axis_retags_invalid_input_only() {
        let err = DiagnoseError::InvalidInput { axis: Axis::Unspecified, value: f64::NEG_INFINITY };
        assert_eq!(
            err.on_axis(Axis::Y),
            DiagnoseError::InvalidInput { axis: Axis::Y, value: f64::NEG_INFINITY }
        );
        assert_eq!(DiagnoseError::UnknownRegion.on_axis(Axis::X), DiagnoseError::UnknownRegion);
    }
}
