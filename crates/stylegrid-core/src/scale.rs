// File: crates/stylegrid-core/src/scale.rs
// Summary: Linear data -> pixel transforms for panel axes (supports reversed domains).

/// Data coordinate along an axis.
pub type Value = f64;

/// Maps the data interval `[d0, d1]` onto the pixel interval `[p0, p1]`.
/// Either interval may be reversed; screen Y runs downward, so a normal Y
/// axis uses `p0 = bottom`, `p1 = top`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: Value,
    d1: Value,
    p0: f32,
    p1: f32,
}

impl LinearScale {
    pub fn new(d0: Value, d1: Value, p0: f32, p1: f32) -> Self {
        let mut s = Self { d0, d1, p0, p1 };
        if (s.d1 - s.d0).abs() < 1e-12 { s.d1 = s.d0 + 1.0; }
        s
    }

    /// Horizontal axis: `min` at `left`, `max` at `right`.
    pub fn horizontal(min: Value, max: Value, left: f32, right: f32) -> Self {
        Self::new(min, max, left, right)
    }

    /// Vertical axis: `min` at `bottom` unless `inverted`, in which case `min` sits at `top`.
    pub fn vertical(min: Value, max: Value, top: f32, bottom: f32, inverted: bool) -> Self {
        if inverted { Self::new(min, max, top, bottom) } else { Self::new(min, max, bottom, top) }
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.p0 + t as f32 * (self.p1 - self.p0)
    }

    pub fn domain(&self) -> (Value, Value) { (self.d0, self.d1) }
}
