//! End-to-end tests: series in, one styled console line out.
//!
//! Run: cargo test --test console_plot_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use console_plot::layout::TEXT_SIZE;
use console_plot::output::{SvgElement, SVG_DATA_PREFIX};
use console_plot::prelude::*;
use percent_encoding::percent_decode_str;
use proptest::prelude::*;

/// Pull the data URI back out of `background: url(...)`.
fn extract_uri(style: &str) -> DataUri {
    let start = style.find("url(").unwrap() + "url(".len();
    let end = start + style[start..].find(')').unwrap();
    let embedded = &style[start..end];
    assert!(embedded.starts_with(SVG_DATA_PREFIX));

    let markup = percent_decode_str(&embedded[SVG_DATA_PREFIX.len()..])
        .decode_utf8()
        .unwrap();
    DataUri::from_markup(&markup).unwrap()
}

// ============================================================================
// Scenario A: default options
// ============================================================================

#[test]
fn scenario_a_bounding_box_and_markers() {
    let plot = Plot::new(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
    let bbox = plot.bounding_box();
    assert_eq!(bbox.x, Extent::new(1.0, 3.0));
    assert_eq!(bbox.y, Extent::new(4.0, 6.0));
    assert_eq!(bbox.width, 2.0);
    assert_eq!(bbox.height, 2.0);

    let scene = plot.scene(&PlotOptions::default()).unwrap();
    let markers: Vec<(f64, f64)> = scene
        .elements()
        .iter()
        .filter_map(|e| match *e {
            SvgElement::Circle { cx, cy, .. } => Some((cx, cy)),
            _ => None,
        })
        .collect();
    assert_eq!(markers, vec![(1.0, 4.0), (2.0, 5.0), (3.0, 6.0)]);
}

#[test]
fn scenario_a_emitted_line() {
    let mut console = RecordingConsole::new();
    plot_2d(&mut console, &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &PlotOptions::default()).unwrap();

    let lines = console.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].format, "%cconsole.plot");

    let uri = extract_uri(&lines[0].style);
    let markup = uri.decode_markup().unwrap();
    assert!(markup.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-19 -16 42 42" width="2px" height="2px">"#));
    assert_eq!(markup.matches("<circle").count(), 3);
    assert_eq!(markup.matches("<text").count(), 4);
    assert_eq!(markup.matches("<path").count(), 2);
}

// ============================================================================
// Scenario B: mismatched lengths
// ============================================================================

#[test]
fn scenario_b_length_mismatch() {
    let mut console = RecordingConsole::new();
    let err = plot_2d(&mut console, &[1.0, 2.0], &[1.0, 2.0, 3.0], &PlotOptions::default())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(matches!(err, Error::DataLengthMismatch { expected: 2, actual: 3, .. }));
    assert!(console.lines().is_empty());
}

// ============================================================================
// Scenario C: custom padding
// ============================================================================

#[test]
fn scenario_c_padding() {
    let plot = Plot::new(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
    let scene = plot.scene(&PlotOptions::new().padding(5.0)).unwrap();
    let window = scene.view_box();

    assert_eq!((window.x, window.y), (1.0 - 5.0, 4.0 - 5.0));
    assert_eq!((window.width, window.height), (2.0 + 10.0, 2.0 + 10.0));
    assert_eq!(scene.size(), (2.0, 2.0));
}

// ============================================================================
// Scenario D: horizontal axis offset
// ============================================================================

#[test]
fn scenario_d_xaxis_offset() {
    let plot = Plot::new(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
    let scene = plot.scene(&PlotOptions::new().xaxis(10.0)).unwrap();
    let elements = scene.elements();

    match &elements[0] {
        SvgElement::Path { d, .. } => assert!(d.starts_with("M -19 10 L 23 10 ")),
        other => panic!("expected x axis path, got {other:?}"),
    }
    for label in &elements[1..3] {
        match label {
            SvgElement::Text { y, .. } => assert_eq!(*y, 10.0 + 2.0 * TEXT_SIZE),
            other => panic!("expected x label, got {other:?}"),
        }
    }
}

// ============================================================================
// Scenario E: empty series
// ============================================================================

#[test]
fn scenario_e_empty_series() {
    let mut console = RecordingConsole::new();
    let err = plot_2d(&mut console, &[], &[], &PlotOptions::default()).unwrap_err();

    assert!(err.is_validation());
    assert!(console.lines().is_empty());
}

// ============================================================================
// Overflowing extents
// ============================================================================

#[test]
fn overflowing_span_is_rejected_on_either_axis() {
    let mut console = RecordingConsole::new();

    let err = plot_2d(&mut console, &[-1e308, 1e308], &[0.0, 1.0], &PlotOptions::default())
        .unwrap_err();
    assert_eq!(err, Error::ExtentOverflow { axis: console_plot::error::Axis::X });

    let err = plot_2d(&mut console, &[0.0, 1.0], &[-1e308, 1e308], &PlotOptions::default())
        .unwrap_err();
    assert_eq!(err, Error::ExtentOverflow { axis: console_plot::error::Axis::Y });

    assert!(console.lines().is_empty());
}

#[test]
fn overflowing_padding_is_rejected() {
    let mut console = RecordingConsole::new();
    let err = plot_2d(
        &mut console,
        &[0.0, 1e308],
        &[0.0, 1.0],
        &PlotOptions::new().padding(1e308),
    )
    .unwrap_err();

    assert!(err.is_validation());
    assert!(console.lines().is_empty());
}

#[test]
fn large_finite_extents_render_without_infinity() {
    let mut console = RecordingConsole::new();
    let line = plot_2d(&mut console, &[-1e307, 1e307], &[0.0, 1e307], &PlotOptions::default())
        .unwrap();

    assert!(!line.style.contains("inf"));
    let markup = extract_uri(&line.style).decode_markup().unwrap();
    assert!(!markup.contains("inf"));
}

// ============================================================================
// Three-series entry point
// ============================================================================

#[test]
fn three_series_is_reported_unsupported() {
    let mut console = RecordingConsole::new();
    let err = plot_3d(
        &mut console,
        &[1.0, 2.0],
        &[3.0, 4.0],
        &[5.0, 6.0],
        &PlotOptions::default(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert!(console.lines().is_empty());
}

// ============================================================================
// Properties
// ============================================================================

fn series() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((-1.0e4f64..1.0e4, -1.0e4f64..1.0e4), 1..64)
        .prop_map(|points| points.into_iter().unzip())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Rendering the same input twice yields identical output.
    #[test]
    fn prop_render_is_idempotent((x, y) in series(), padding in 0.0f64..50.0) {
        let opts = PlotOptions::new().padding(padding);
        let first = Plot::new(&x, &y).unwrap().render(&opts).unwrap();
        let second = Plot::new(&x, &y).unwrap().render(&opts).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Decoding the payload and re-encoding it reproduces the URI.
    #[test]
    fn prop_data_uri_round_trip((x, y) in series()) {
        let uri = Plot::new(&x, &y).unwrap().encode(&PlotOptions::default()).unwrap();
        let markup = uri.decode_markup().unwrap();
        prop_assert_eq!(DataUri::from_markup(&markup).unwrap(), uri);
    }

    /// One marker per point, never more.
    #[test]
    fn prop_marker_count_matches_points((x, y) in series()) {
        let scene = Plot::new(&x, &y).unwrap().scene(&PlotOptions::default()).unwrap();
        let markers = scene
            .elements()
            .iter()
            .filter(|e| matches!(e, SvgElement::Circle { .. }))
            .count();
        prop_assert_eq!(markers, x.len());
    }
}
