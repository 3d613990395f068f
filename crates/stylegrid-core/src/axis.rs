// File: crates/stylegrid-core/src/axis.rs
// Summary: Axis model: label, optional fixed limits, tick configuration and orientation.

#[derive(Clone, Debug, PartialEq, Default)]
pub enum Ticks {
    /// Positions chosen from the view range at render time.
    #[default]
    Auto,
    /// Explicit positions with one label each.
    Fixed { positions: Vec<f64>, labels: Vec<String> },
    /// No tick marks or labels.
    Hidden,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Axis {
    pub label: String,
    /// Fixed `(min, max)`; `None` autoscales from the data.
    pub limits: Option<(f64, f64)>,
    pub ticks: Ticks,
    /// Draw `min` at the far end (top for Y), as images do.
    pub inverted: bool,
}

impl Axis {
    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }

    pub fn ticks_hidden(&self) -> bool {
        matches!(self.ticks, Ticks::Hidden)
    }
}
