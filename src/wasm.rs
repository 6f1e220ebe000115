//! WebAssembly bindings for console-plot.
//!
//! Plots straight into the browser devtools console. Both entry points
//! throw a JavaScript `Error` instead of logging when the input is rejected;
//! `console_plot_3d` validates the depth series and then reports that 3D
//! rendering is unsupported.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { console_plot, console_plot_3d } from 'console-plot';
//!
//! await init();
//!
//! // Padding and axis positions are optional
//! console_plot(
//!     new Float64Array([1, 2, 3]),
//!     new Float64Array([4, 5, 6]),
//!     5, undefined, undefined
//! );
//! ```

use wasm_bindgen::prelude::*;

use crate::config::PlotOptions;
use crate::console::{plot_2d, plot_3d, ConsoleSink, StyledLine};

/// Sink backed by the browser's `console.log`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebConsole;

impl ConsoleSink for WebConsole {
    fn log_styled(&mut self, format: &str, css: &str) {
        web_sys::console::log_2(&JsValue::from_str(format), &JsValue::from_str(css));
    }
}

/// Plot `x` against `y` in the browser console.
///
/// # Errors
///
/// Throws a JavaScript `Error` carrying the message if the series or
/// options are rejected.
#[wasm_bindgen]
pub fn console_plot(
    x: &[f64],
    y: &[f64],
    padding: Option<f64>,
    xaxis: Option<f64>,
    yaxis: Option<f64>,
) -> Result<(), JsValue> {
    let options = options_from(padding, xaxis, yaxis);
    to_js(plot_with(&mut WebConsole, x, y, None, &options))
}

/// Plot three series in the browser console.
///
/// # Errors
///
/// Throws a JavaScript `Error` for invalid series and, once they validate,
/// because 3D scatter plots are not rendered.
#[wasm_bindgen]
pub fn console_plot_3d(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    padding: Option<f64>,
    xaxis: Option<f64>,
    yaxis: Option<f64>,
) -> Result<(), JsValue> {
    let options = options_from(padding, xaxis, yaxis);
    to_js(plot_with(&mut WebConsole, x, y, Some(z), &options))
}

fn plot_with<C: ConsoleSink>(
    console: &mut C,
    x: &[f64],
    y: &[f64],
    z: Option<&[f64]>,
    options: &PlotOptions,
) -> crate::Result<StyledLine> {
    match z {
        Some(z) => plot_3d(console, x, y, z, options),
        None => plot_2d(console, x, y, options),
    }
}

fn to_js(result: crate::Result<StyledLine>) -> Result<(), JsValue> {
    result
        .map(|_| ())
        .map_err(|e| js_sys::Error::new(&e.to_string()).into())
}

fn options_from(padding: Option<f64>, xaxis: Option<f64>, yaxis: Option<f64>) -> PlotOptions {
    let defaults = PlotOptions::default();
    PlotOptions::new()
        .padding(padding.unwrap_or(defaults.padding))
        .xaxis(xaxis.unwrap_or(defaults.xaxis))
        .yaxis(yaxis.unwrap_or(defaults.yaxis))
}
