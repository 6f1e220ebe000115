//! Plot types and their scene builders.

mod scatter;

pub use scatter::{build_scene, AXIS_STROKE_WIDTH, MARKER_RADIUS};

/// Kind of plot to draw.
///
/// Names other than `scatter` are kept as [`PlotKind::Other`] and rejected
/// at render time as unsupported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum PlotKind {
    /// One marker per data point.
    #[default]
    Scatter,
    /// A plot type without a renderer.
    Other(String),
}

impl PlotKind {
    /// Name as used in an options object.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scatter => "scatter",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for PlotKind {
    fn from(name: String) -> Self {
        if name == "scatter" {
            Self::Scatter
        } else {
            Self::Other(name)
        }
    }
}

impl From<&str> for PlotKind {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<PlotKind> for String {
    fn from(kind: PlotKind) -> Self {
        match kind {
            PlotKind::Scatter => "scatter".to_string(),
            PlotKind::Other(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_name() {
        assert_eq!(PlotKind::from("scatter"), PlotKind::Scatter);
        assert_eq!(PlotKind::from("pie"), PlotKind::Other("pie".to_string()));
        assert_eq!(PlotKind::from("pie").name(), "pie");
        assert_eq!(String::from(PlotKind::Scatter), "scatter");
    }
}
