//! Scatter plot scene construction.
//!
//! Paint order: x axis, x labels, y axis, y labels, then one marker per
//! point in input order so markers render on top.

use crate::color::Rgb;
use crate::layout::{AxisGeometry, Layout, TEXT_SIZE};
use crate::output::SvgScene;
use crate::plot::Plot;

/// Radius of a point marker, in data units.
pub const MARKER_RADIUS: f64 = 0.5;

/// Stroke width of axis lines and ticks, in data units.
pub const AXIS_STROKE_WIDTH: f64 = 0.25;

const AXIS_COLOR: Rgb = Rgb::BLACK;
const MARKER_COLOR: Rgb = Rgb::BLACK;

/// Build the 2D scatter scene for `plot` laid out by `layout`.
#[must_use]
pub fn build_scene(plot: &Plot, layout: &Layout) -> SvgScene {
    let (width, height) = layout.surface;
    let scene = SvgScene::new(layout.view_window, width, height);
    let scene = axis(scene, &layout.x_axis);
    let scene = axis(scene, &layout.y_axis);

    let scene = plot
        .points()
        .fold(scene, |scene, (x, y)| scene.circle(x, y, MARKER_RADIUS, MARKER_COLOR));
    log::debug!("scatter scene with {} markers", plot.point_count());
    scene
}

/// Axis path followed by its two extremum labels.
fn axis(scene: SvgScene, geometry: &AxisGeometry) -> SvgScene {
    let scene = scene.path(&geometry.path_data(), AXIS_COLOR, AXIS_STROKE_WIDTH);
    geometry.labels.iter().fold(scene, |scene, label| {
        scene.text_anchored(
            label.position.x,
            label.position.y,
            &label_text(label.value),
            TEXT_SIZE,
            label.anchor,
            label.baseline,
        )
    })
}

/// Shortest round-trip form of `value`; negative zero prints as `0`.
fn label_text(value: f64) -> String {
    (value + 0.0).to_string()
}
