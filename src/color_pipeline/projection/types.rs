//! Color-space projection types

/// The two supported 2-D color-ratio spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// Per-pixel channel ratios: x = r/g, y = b/g.
    Ratio,
    /// Chromaticity coordinates: x = r/(r+g+b), y = g/(r+g+b).
    Chromaticity,
}

impl ColorSpace {
    /// Axis labels for plotting the projected points.
    pub fn axis_labels(self) -> (&'static str, &'static str) {
        match self {
            ColorSpace::Ratio => ("r/g", "b/g"),
            ColorSpace::Chromaticity => ("r/(r+g+b)", "g/(r+g+b)"),
        }
    }
}

/// Projected scatter coordinates in row-major scan order, with pixels that
/// failed the validity mask already dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectedPoints {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl ProjectedPoints {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
