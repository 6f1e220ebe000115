//! Output encoders (SVG markup, data URI).

mod data_uri;
mod svg;

pub use data_uri::{DataUri, SVG_DATA_PREFIX};
pub use svg::{DominantBaseline, SvgElement, SvgScene, TextAnchor, SVG_NAMESPACE};
