//! Layout of the drawing surface, axes and labels.
//!
//! The view window is expressed in data units, so every drawn element uses
//! the raw data coordinates and the padding becomes a margin around them.
//! Each axis carries exactly two ticks, at its minimum and maximum.

use crate::config::PlotOptions;
use crate::extent::BoundingBox;
use crate::geometry::{Line, Point, Rect};
use crate::output::{DominantBaseline, TextAnchor};

/// Label font size in points. Also drives label offsets and tick length.
pub const TEXT_SIZE: f64 = 6.0;

/// Length of a tick stroke.
pub const TICK_LENGTH: f64 = TEXT_SIZE / 2.0;

/// Anchor point and alignment of one extremum label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    /// Where the label is placed.
    pub position: Point,
    /// The value the label displays.
    pub value: f64,
    /// Horizontal alignment relative to `position`.
    pub anchor: TextAnchor,
    /// Vertical alignment relative to `position`.
    pub baseline: Option<DominantBaseline>,
}

/// Axis line plus its min/max ticks and labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisGeometry {
    /// The full-length axis line, padding included.
    pub line: Line,
    /// Tick strokes at the minimum and maximum.
    pub ticks: [Line; 2],
    /// Labels for the minimum and maximum.
    pub labels: [LabelAnchor; 2],
}

impl AxisGeometry {
    /// SVG path data for the axis line followed by both ticks.
    #[must_use]
    pub fn path_data(&self) -> String {
        format!("{} {} {}", self.line, self.ticks[0], self.ticks[1])
    }
}

/// Geometry derived from a bounding box and plot options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Visible coordinate rectangle, in data units.
    pub view_window: Rect,
    /// Nominal surface size in pixels (unpadded box width and height).
    pub surface: (f64, f64),
    /// Horizontal axis.
    pub x_axis: AxisGeometry,
    /// Vertical axis.
    pub y_axis: AxisGeometry,
}

impl Layout {
    /// Compute the layout for `bbox` under `options`.
    #[must_use]
    pub fn compute(bbox: &BoundingBox, options: &PlotOptions) -> Self {
        let pad = options.padding;
        let view_window = Rect::new(
            bbox.x.min - pad,
            bbox.y.min - pad,
            bbox.width + pad * 2.0,
            bbox.height + pad * 2.0,
        );

        let layout = Self {
            view_window,
            surface: (bbox.width, bbox.height),
            x_axis: horizontal_axis(bbox, pad, options.xaxis),
            y_axis: vertical_axis(bbox, pad, options.yaxis),
        };
        log::debug!("layout view window {view_window}, surface {:?}", layout.surface);
        layout
    }
}

/// Axis drawn at height `at`, ticks hanging below it.
fn horizontal_axis(bbox: &BoundingBox, pad: f64, at: f64) -> AxisGeometry {
    let (min, max) = (bbox.x.min, bbox.x.max);
    let label_y = at + 2.0 * TEXT_SIZE;
    let label = |value: f64| LabelAnchor {
        position: Point::new(value, label_y),
        value,
        anchor: TextAnchor::Middle,
        baseline: None,
    };

    AxisGeometry {
        line: Line::from_coords(min - pad, at, max + pad, at),
        ticks: [
            Line::from_coords(min, at, min, at + TICK_LENGTH),
            Line::from_coords(max, at, max, at + TICK_LENGTH),
        ],
        labels: [label(min), label(max)],
    }
}

/// Axis drawn at horizontal position `at`, ticks extending left of it.
fn vertical_axis(bbox: &BoundingBox, pad: f64, at: f64) -> AxisGeometry {
    let (min, max) = (bbox.y.min, bbox.y.max);
    let label_x = at - 2.5 * TEXT_SIZE;
    let label = |value: f64| LabelAnchor {
        position: Point::new(label_x, value),
        value,
        anchor: TextAnchor::End,
        baseline: Some(DominantBaseline::Central),
    };

    AxisGeometry {
        line: Line::from_coords(at, min - pad, at, max + pad),
        ticks: [
            Line::from_coords(at, min, at - TICK_LENGTH, min),
            Line::from_coords(at, max, at - TICK_LENGTH, max),
        ],
        labels: [label(min), label(max)],
    }
}
