pub use kurbo::{Point, Rect, Size};

/// Display orientation, supplied by the caller.
///
/// The packer never inspects a display or window; whoever owns the host
/// surface recomputes this flag and passes it in on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Orientation {
    /// Height >= width.
    #[default]
    Portrait,
    /// Width > height.
    Landscape,
}

impl Orientation {
    /// `true` for [`Orientation::Landscape`].
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape)
    }
}

/// Padding edges in pixels.
#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct Edges {
    /// Left padding.
    #[serde(default)]
    pub left: f64,
    /// Right padding.
    #[serde(default)]
    pub right: f64,
    /// Top padding.
    #[serde(default)]
    pub top: f64,
    /// Bottom padding.
    #[serde(default)]
    pub bottom: f64,
}

impl Edges {
    /// Uniform padding on all four edges.
    pub fn uniform(px: f64) -> Self {
        Self {
            left: px,
            right: px,
            top: px,
            bottom: px,
        }
    }

    /// Combined left + right padding.
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    /// Combined top + bottom padding.
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}
