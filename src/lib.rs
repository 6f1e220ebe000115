//! # console-plot
//!
//! Scatter plots rendered inline in a text console.
//!
//! A plot is drawn as a self-contained SVG image, percent-encoded into a
//! `data:` URI and handed to the console as the CSS background of a single
//! `%c`-styled log line. No charting runtime, no retained render loop: each
//! call is a one-shot render of a fixed data snapshot.
//!
//! ## Pipeline
//!
//! series → [`extent`] → [`layout`] → [`plots`] scene → [`output`] data URI
//! → [`console`] style → [`console::ConsoleSink`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use console_plot::prelude::*;
//!
//! let mut console = RecordingConsole::new();
//! let line = plot_2d(
//!     &mut console,
//!     &[1.0, 2.0, 3.0],
//!     &[4.0, 5.0, 6.0],
//!     &PlotOptions::new().padding(5.0),
//! )?;
//! assert_eq!(line.format, "%cconsole.plot");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: deserialize [`PlotOptions`] from an options object
//! - `wasm`: browser console sink and `console_plot` binding
//! - `full`: all features except `wasm`

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type for strokes and fills.
pub mod color;

/// Plot options.
pub mod config;

/// Extent and bounding-box calculation.
pub mod extent;

/// Geometric primitives (points, lines, rectangles).
pub mod geometry;

/// Surface, axis and label geometry.
pub mod layout;

// ============================================================================
// Visualization Modules
// ============================================================================

/// Immutable plot record.
pub mod plot;

/// Plot types and scene builders.
pub mod plots;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Output encoders (SVG, data URI).
pub mod output;

/// Console presentation and entry points.
pub mod console;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for console-plot operations.
pub mod error;

pub use config::PlotOptions;
pub use console::{plot_2d, plot_3d};
pub use error::{Error, ErrorKind, Result};
pub use plot::Plot;

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use console_plot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::PlotOptions;
    pub use crate::console::{
        plot_2d, plot_3d, ConsoleSink, LogConsole, RecordingConsole, StyledLine,
    };
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::extent::{compute_extent, BoundingBox, Extent};
    pub use crate::output::{DataUri, SvgScene};
    pub use crate::plot::Plot;
    pub use crate::plots::PlotKind;
}
