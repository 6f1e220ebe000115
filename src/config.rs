//! Plot configuration.
//!
//! With the `serde` feature, options deserialize from the same shape as a
//! plain options object: `{"padding": 5, "xaxis": 10, "type": "scatter"}`.
//! Missing fields take their defaults.

use crate::error::{Error, Result};
use crate::plots::PlotKind;

/// Default margin around the bounding box, in data units.
pub const DEFAULT_PADDING: f64 = 20.0;

/// Options controlling layout of a rendered plot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlotOptions {
    /// Margin added around the bounding box on all sides.
    pub padding: f64,
    /// Y coordinate at which the horizontal axis is drawn.
    pub xaxis: f64,
    /// X coordinate at which the vertical axis is drawn.
    pub yaxis: f64,
    /// Plot type.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: PlotKind,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotOptions {
    /// Create default plot options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            xaxis: 0.0,
            yaxis: 0.0,
            kind: PlotKind::Scatter,
        }
    }

    /// Set the padding. Zero is honoured.
    #[must_use]
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the y coordinate of the horizontal axis.
    #[must_use]
    pub fn xaxis(mut self, y: f64) -> Self {
        self.xaxis = y;
        self
    }

    /// Set the x coordinate of the vertical axis.
    #[must_use]
    pub fn yaxis(mut self, x: f64) -> Self {
        self.yaxis = x;
        self
    }

    /// Set the plot type.
    #[must_use]
    pub fn kind(mut self, kind: PlotKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check that every option is usable for layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] for a negative or non-finite padding
    /// or a non-finite axis position.
    pub fn validate(&self) -> Result<()> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(Error::InvalidOption(format!(
                "padding must be a finite non-negative number, got {}",
                self.padding
            )));
        }
        if !self.xaxis.is_finite() {
            return Err(Error::InvalidOption(format!("xaxis must be finite, got {}", self.xaxis)));
        }
        if !self.yaxis.is_finite() {
            return Err(Error::InvalidOption(format!("yaxis must be finite, got {}", self.yaxis)));
        }
        Ok(())
    }
}
