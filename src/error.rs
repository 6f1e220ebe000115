//! Error types for console-plot operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, encoding or presenting a plot.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Empty data provided where non-empty is required.
    #[error("Empty data provided for the {axis} series")]
    EmptyData {
        /// Axis the series belongs to.
        axis: Axis,
    },

    /// Data length mismatch between series of one plot.
    #[error("Data length mismatch: x has {expected} elements, {axis} has {actual} elements")]
    DataLengthMismatch {
        /// Axis whose series disagrees with x.
        axis: Axis,
        /// Length of the x series.
        expected: usize,
        /// Length of the offending series.
        actual: usize,
    },

    /// NaN or infinite sample.
    #[error("Non-finite value in the {axis} series at index {index}")]
    NonFiniteValue {
        /// Axis the series belongs to.
        axis: Axis,
        /// Position of the offending sample.
        index: usize,
    },

    /// Series span too large to represent.
    #[error("Extent of the {axis} series overflows")]
    ExtentOverflow {
        /// Axis whose span is not finite.
        axis: Axis,
    },

    /// Plot option outside its valid range.
    #[error("Invalid plot option: {0}")]
    InvalidOption(String),

    /// Plot variant that has no renderer.
    #[error("Unsupported plot: {0}")]
    UnsupportedPlot(String),

    /// Markup serialization failed.
    #[error("SVG serialization error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Data URI encoding or decoding failed.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input series or options were rejected before any scene was built.
    Validation,
    /// Scene serialization or URI encoding failed.
    Encoding,
    /// The requested plot variant is not implemented.
    Unsupported,
}

impl Error {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyData { .. }
            | Self::DataLengthMismatch { .. }
            | Self::NonFiniteValue { .. }
            | Self::ExtentOverflow { .. }
            | Self::InvalidOption(_) => ErrorKind::Validation,
            Self::Format(_) | Self::Encoding(_) => ErrorKind::Encoding,
            Self::UnsupportedPlot(_) => ErrorKind::Unsupported,
        }
    }

    /// Whether this is a validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

/// Data axis a series is plotted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
    /// Depth axis.
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}
