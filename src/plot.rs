//! Immutable plot record: the input series plus their bounding box.

use crate::config::PlotOptions;
use crate::console::{self, StyledLine};
use crate::error::{Error, Result};
use crate::extent::BoundingBox;
use crate::layout::Layout;
use crate::output::{DataUri, SvgScene};
use crate::plots::{self, PlotKind};

/// Validated series and their bounds.
///
/// Constructed once; every render produces a fresh scene and image.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Option<Vec<f64>>,
    bbox: BoundingBox,
}

impl Plot {
    /// Create a 2D plot.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either series is empty, contains a
    /// non-finite value, or the lengths differ.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self> {
        let bbox = BoundingBox::from_series(x, y, None)?;
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            z: None,
            bbox,
        })
    }

    /// Create a plot with a depth series.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Plot::new`], applied to all three series.
    pub fn with_depth(x: &[f64], y: &[f64], z: &[f64]) -> Result<Self> {
        let bbox = BoundingBox::from_series(x, y, Some(z))?;
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            z: Some(z.to_vec()),
            bbox,
        })
    }

    /// Bounds of the data.
    #[must_use]
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.x.len()
    }

    /// Whether a depth series is present.
    #[must_use]
    pub fn has_depth(&self) -> bool {
        self.z.is_some()
    }

    /// `(x, y)` pairs in input order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Build the scene for `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] for unusable options or a padded
    /// view window that overflows, and [`Error::UnsupportedPlot`] for plot
    /// types without a renderer or when a depth series selects the 3D path.
    pub fn scene(&self, options: &PlotOptions) -> Result<SvgScene> {
        options.validate()?;
        match &options.kind {
            PlotKind::Other(name) => {
                Err(Error::UnsupportedPlot(format!("{name} plots are not rendered")))
            }
            PlotKind::Scatter if self.has_depth() => {
                Err(Error::UnsupportedPlot("3D scatter plots are not rendered".to_string()))
            }
            PlotKind::Scatter => {
                let layout = Layout::compute(&self.bbox, options);
                if !layout.view_window.is_finite() {
                    return Err(Error::InvalidOption(format!(
                        "padding {} overflows the view window",
                        options.padding
                    )));
                }
                Ok(plots::build_scene(self, &layout))
            }
        }
    }

    /// Build and encode the scene as a data URI.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Plot::scene`] and encoding.
    pub fn encode(&self, options: &PlotOptions) -> Result<DataUri> {
        DataUri::encode(&self.scene(options)?)
    }

    /// Render to a styled console line without emitting it.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Plot::encode`].
    pub fn render(&self, options: &PlotOptions) -> Result<StyledLine> {
        let uri = self.encode(options)?;
        Ok(console::present(&uri, &self.bbox))
    }
}
