//! Console presentation of an encoded plot.
//!
//! The image travels as the background of a `%c`-styled log line. The line's
//! text is made transparent and the box is sized through padding so the
//! background keeps the plot's aspect ratio.
//!
//! ```rust,ignore
//! use console_plot::prelude::*;
//!
//! let mut console = RecordingConsole::new();
//! plot_2d(&mut console, &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &PlotOptions::default())?;
//! assert_eq!(console.lines().len(), 1);
//! ```

use crate::config::PlotOptions;
use crate::error::Result;
use crate::extent::BoundingBox;
use crate::output::DataUri;
use crate::plot::Plot;

/// Format string handed to the console; `%c` consumes the style argument.
pub const FORMAT: &str = "%cconsole.plot";

/// Share of the background size used as padding on each side.
const PADDING_SCALE: f64 = 1.0 / 8.0;

/// Ordered CSS declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleStyle {
    declarations: Vec<(&'static str, String)>,
}

impl ConsoleStyle {
    /// Create an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration.
    #[must_use]
    pub fn declare(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }

    /// Value of the first declaration of `property`.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Flatten to `property: value;` pairs separated by spaces.
    #[must_use]
    pub fn flatten(&self) -> String {
        self.declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A format string plus the CSS consumed by its `%c` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    /// Format string.
    pub format: String,
    /// Flattened CSS.
    pub style: String,
}

/// CSS that displays `uri` as a background sized for `bbox`.
#[must_use]
pub fn console_style(uri: &DataUri, bbox: &BoundingBox) -> ConsoleStyle {
    let h = (bbox.aspect() * 100.0).floor();

    ConsoleStyle::new()
        .declare("display", "inline-block")
        .declare("color", "transparent")
        .declare("background", format!("url({uri})"))
        .declare("background-repeat", "no-repeat")
        .declare("background-size", format!("100% {h}%"))
        .declare(
            "padding",
            format!("{}% {}%", h * PADDING_SCALE, 100.0 * PADDING_SCALE),
        )
        .declare("max-width", format!("{}px", bbox.width))
        .declare("max-height", format!("{}px", bbox.height))
}

/// Build the styled line for an encoded plot.
#[must_use]
pub fn present(uri: &DataUri, bbox: &BoundingBox) -> StyledLine {
    StyledLine {
        format: FORMAT.to_string(),
        style: console_style(uri, bbox).flatten(),
    }
}

/// A console that renders `%c` format directives as inline CSS.
pub trait ConsoleSink {
    /// Log `format` with `css` bound to its `%c` directive.
    fn log_styled(&mut self, format: &str, css: &str);
}

/// Sink that keeps every line it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    lines: Vec<StyledLine>,
}

impl RecordingConsole {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines received so far.
    #[must_use]
    pub fn lines(&self) -> &[StyledLine] {
        &self.lines
    }
}

impl ConsoleSink for RecordingConsole {
    fn log_styled(&mut self, format: &str, css: &str) {
        self.lines.push(StyledLine {
            format: format.to_string(),
            style: css.to_string(),
        });
    }
}

/// Sink that forwards lines to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogConsole;

impl ConsoleSink for LogConsole {
    fn log_styled(&mut self, format: &str, css: &str) {
        log::info!(target: "console_plot", "{format} {css}");
    }
}

/// Plot `x` against `y` and emit one styled line to `console`.
///
/// Nothing is emitted unless every stage succeeds.
///
/// # Errors
///
/// Returns a validation error for empty, non-finite or mismatched series
/// and invalid options; an encoding error if the image cannot be encoded.
pub fn plot_2d<C: ConsoleSink + ?Sized>(
    console: &mut C,
    x: &[f64],
    y: &[f64],
    options: &PlotOptions,
) -> Result<StyledLine> {
    emit(console, &Plot::new(x, y)?, options)
}

/// Plot three series and emit one styled line to `console`.
///
/// # Errors
///
/// As [`plot_2d`], with `z` validated alongside `x` and `y`. Three-series
/// scatter rendering is not available and reports
/// [`crate::Error::UnsupportedPlot`].
pub fn plot_3d<C: ConsoleSink + ?Sized>(
    console: &mut C,
    x: &[f64],
    y: &[f64],
    z: &[f64],
    options: &PlotOptions,
) -> Result<StyledLine> {
    emit(console, &Plot::with_depth(x, y, z)?, options)
}

fn emit<C: ConsoleSink + ?Sized>(
    console: &mut C,
    plot: &Plot,
    options: &PlotOptions,
) -> Result<StyledLine> {
    let line = plot.render(options)?;
    log::debug!(
        "emitting plot of {} points ({} bytes of style)",
        plot.point_count(),
        line.style.len()
    );
    console.log_styled(&line.format, &line.style);
    Ok(line)
}
