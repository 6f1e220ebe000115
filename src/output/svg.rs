//! SVG scene graph and markup serialization.
//!
//! A scene is built top-down once and then serialized; elements keep the
//! order in which they were added, which is also their paint order.

use crate::color::Rgb;
use crate::error::Result;
use crate::geometry::Rect;
use std::fmt::Write as FmtWrite;

/// SVG namespace declared on the root element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Vector scene: root attributes plus ordered child elements.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgScene {
    /// `viewBox`, in data units.
    view_box: Rect,
    /// Pixel width of the surface.
    width: f64,
    /// Pixel height of the surface.
    height: f64,
    /// SVG elements
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names are self-documenting and match SVG attribute names.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Path (SVG path data)
    Path {
        d: String,
        stroke: Rgb,
        stroke_width: f64,
    },
    /// Text
    Text {
        x: f64,
        y: f64,
        text: String,
        font_size_pt: f64,
        anchor: TextAnchor,
        baseline: Option<DominantBaseline>,
    },
    /// Circle
    Circle { cx: f64, cy: f64, r: f64, fill: Rgb },
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Align text start at position (left-aligned for LTR)
    #[default]
    Start,
    /// Center text at position
    Middle,
    /// Align text end at position (right-aligned for LTR)
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Vertical text alignment (`dominant-baseline`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominantBaseline {
    /// Center the glyphs on the anchor's y coordinate.
    Central,
}

impl DominantBaseline {
    fn as_str(self) -> &'static str {
        match self {
            Self::Central => "central",
        }
    }
}

impl SvgScene {
    /// Create an empty scene with the given view box and pixel size.
    #[must_use]
    pub fn new(view_box: Rect, width: f64, height: f64) -> Self {
        Self {
            view_box,
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Add a stroked, unfilled path.
    #[must_use]
    pub fn path(mut self, d: &str, stroke: Rgb, stroke_width: f64) -> Self {
        self.elements.push(SvgElement::Path {
            d: d.to_string(),
            stroke,
            stroke_width,
        });
        self
    }

    /// Add a circle.
    #[must_use]
    pub fn circle(mut self, cx: f64, cy: f64, r: f64, fill: Rgb) -> Self {
        self.elements.push(SvgElement::Circle { cx, cy, r, fill });
        self
    }

    /// Add text with anchor and optional baseline.
    #[must_use]
    pub fn text_anchored(
        mut self,
        x: f64,
        y: f64,
        text: &str,
        font_size_pt: f64,
        anchor: TextAnchor,
        baseline: Option<DominantBaseline>,
    ) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size_pt,
            anchor,
            baseline,
        });
        self
    }

    /// The `viewBox` rectangle.
    #[must_use]
    pub fn view_box(&self) -> Rect {
        self.view_box
    }

    /// Pixel size of the surface.
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Elements in paint order.
    #[must_use]
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// Render to a self-contained SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Format`] if writing the markup fails.
    pub fn render(&self) -> Result<String> {
        let mut svg = String::with_capacity(256 + self.elements.len() * 64);

        write!(
            svg,
            r#"<svg xmlns="{SVG_NAMESPACE}" viewBox="{}" width="{}px" height="{}px">"#,
            self.view_box, self.width, self.height
        )?;
        for element in &self.elements {
            write_element(&mut svg, element)?;
        }
        svg.push_str("</svg>");
        Ok(svg)
    }
}

fn write_element(svg: &mut String, element: &SvgElement) -> std::fmt::Result {
    match element {
        SvgElement::Path {
            d,
            stroke,
            stroke_width,
        } => write!(
            svg,
            r#"<path d="{d}" fill="none" stroke="{stroke}" stroke-width="{stroke_width}"/>"#
        ),
        SvgElement::Text {
            x,
            y,
            text,
            font_size_pt,
            anchor,
            baseline,
        } => {
            write!(
                svg,
                r#"<text x="{x}" y="{y}" style="font-size: {font_size_pt}pt;" text-anchor="{}""#,
                anchor.as_str()
            )?;
            if let Some(baseline) = baseline {
                write!(svg, r#" dominant-baseline="{}""#, baseline.as_str())?;
            }
            write!(svg, ">{}</text>", escape_xml(text))
        }
        SvgElement::Circle { cx, cy, r, fill } => {
            write!(svg, r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}"/>"#)
        }
    }
}

/// Escape XML special characters in text content.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
