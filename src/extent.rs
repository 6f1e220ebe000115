//! Extent calculation over numeric series.
//!
//! A single linear pass per series yields its minimum and maximum. Empty
//! series are rejected up front rather than folded from sentinel extremes,
//! which would yield an inverted box.

use crate::error::{Axis, Error, Result};

/// Minimum and maximum of one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
}

impl Extent {
    /// Create an extent from explicit bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Distance between the bounds (`max - min`).
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether a value lies within the bounds (inclusive).
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Compute the extent of a series.
///
/// # Errors
///
/// Returns [`Error::EmptyData`] for an empty series and
/// [`Error::NonFiniteValue`] if any sample is NaN or infinite.
pub fn compute_extent(series: &[f64]) -> Result<Extent> {
    extent_of(series, Axis::X)
}

fn extent_of(series: &[f64], axis: Axis) -> Result<Extent> {
    let (&first, rest) = series.split_first().ok_or(Error::EmptyData { axis })?;
    if !first.is_finite() {
        return Err(Error::NonFiniteValue { axis, index: 0 });
    }

    rest.iter()
        .enumerate()
        .try_fold(Extent::new(first, first), |acc, (i, &v)| {
            if v.is_finite() {
                Ok(Extent::new(acc.min.min(v), acc.max.max(v)))
            } else {
                Err(Error::NonFiniteValue { axis, index: i + 1 })
            }
        })
}

/// Axis-aligned bounds of a plot's data.
///
/// Computed once when a plot is constructed and never mutated afterward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Horizontal extent.
    pub x: Extent,
    /// Vertical extent.
    pub y: Extent,
    /// Depth extent, present only for three-series plots.
    pub z: Option<Extent>,
    /// `x.max - x.min`.
    pub width: f64,
    /// `y.max - y.min`.
    pub height: f64,
    /// `z.max - z.min`, present only for three-series plots.
    pub depth: Option<f64>,
}

impl BoundingBox {
    /// Compute the bounding box of two or three equally long series.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any series is empty, contains a
    /// non-finite value, differs in length from `x`, or spans more than
    /// `f64` can represent.
    pub fn from_series(x: &[f64], y: &[f64], z: Option<&[f64]>) -> Result<Self> {
        check_length(x, y, Axis::Y)?;
        if let Some(z) = z {
            check_length(x, z, Axis::Z)?;
        }

        let x = extent_of(x, Axis::X)?;
        let y = extent_of(y, Axis::Y)?;
        let z = z.map(|z| extent_of(z, Axis::Z)).transpose()?;

        let bbox = Self {
            x,
            y,
            z,
            width: finite_span(x, Axis::X)?,
            height: finite_span(y, Axis::Y)?,
            depth: z.map(|e| finite_span(e, Axis::Z)).transpose()?,
        };
        log::debug!(
            "bounding box x=[{}, {}] y=[{}, {}] ({}x{})",
            bbox.x.min,
            bbox.x.max,
            bbox.y.min,
            bbox.y.max,
            bbox.width,
            bbox.height
        );
        Ok(bbox)
    }

    /// Height over width, falling back to a square when the width is zero.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        if self.width > 0.0 {
            self.height / self.width
        } else {
            1.0
        }
    }
}

fn finite_span(extent: Extent, axis: Axis) -> Result<f64> {
    let span = extent.span();
    if span.is_finite() {
        Ok(span)
    } else {
        Err(Error::ExtentOverflow { axis })
    }
}

fn check_length(x: &[f64], other: &[f64], axis: Axis) -> Result<()> {
    if x.len() == other.len() {
        Ok(())
    } else {
        Err(Error::DataLengthMismatch {
            axis,
            expected: x.len(),
            actual: other.len(),
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Every sample lies within the extent and both bounds are samples.
        #[test]
        fn prop_extent_bounds_are_samples(
            values in prop::collection::vec(-1.0e6f64..1.0e6, 1..200)
        ) {
            let e = compute_extent(&values).unwrap();
            prop_assert!(values.iter().all(|&v| e.contains(v)));
            prop_assert!(values.contains(&e.min));
            prop_assert!(values.contains(&e.max));
        }

        /// Width and height are never negative for valid input.
        #[test]
        fn prop_box_dimensions_non_negative(
            points in prop::collection::vec((-1.0e6f64..1.0e6, -1.0e6f64..1.0e6), 1..200)
        ) {
            let (x, y): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
            let bbox = BoundingBox::from_series(&x, &y, None).unwrap();
            prop_assert!(bbox.width >= 0.0);
            prop_assert!(bbox.height >= 0.0);
            prop_assert_eq!(bbox.width, bbox.x.max - bbox.x.min);
            prop_assert_eq!(bbox.height, bbox.y.max - bbox.y.min);
        }
    }
}
