// File: crates/stylegrid-core/src/artist.rs
// Summary: Recorded drawing primitives (scatter, line, bars, image, circle) and their data extents.
// Notes:
// - Colors are resolved against the style when an artist is recorded, so the
//   renderer never consults the color cycle.

use skia_safe as skia;

use crate::color::Colormap;
use crate::sample::Samples;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    Circle,
    Square,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Artist {
    Scatter {
        points: Vec<(f64, f64)>,
        color: skia::Color,
        marker: Marker,
        radius: f32,
        label: Option<String>,
    },
    Line {
        points: Vec<(f64, f64)>,
        color: skia::Color,
        width: f32,
        label: Option<String>,
    },
    /// Bars centered on `x`, rising from zero to `heights`.
    Bars {
        x: Vec<f64>,
        heights: Vec<f64>,
        width: f64,
        color: skia::Color,
        label: Option<String>,
    },
    /// Heat-map; cell (r, c) covers [c - 0.5, c + 0.5] x [r - 0.5, r + 0.5].
    Image { values: Samples, colormap: Colormap },
    Circle {
        center: (f64, f64),
        radius: f64,
        color: skia::Color,
        label: Option<String>,
    },
}

/// Axis-aligned data-space bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn union(self, o: Bounds) -> Bounds {
        Bounds {
            x_min: self.x_min.min(o.x_min),
            x_max: self.x_max.max(o.x_max),
            y_min: self.y_min.min(o.y_min),
            y_max: self.y_max.max(o.y_max),
        }
    }

    fn of_points(points: &[(f64, f64)]) -> Option<Bounds> {
        let mut it = points.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = it.next()?;
        let init = Bounds { x_min: x0, x_max: x0, y_min: y0, y_max: y0 };
        Some(it.fold(init, |b, &(x, y)| Bounds {
            x_min: b.x_min.min(x),
            x_max: b.x_max.max(x),
            y_min: b.y_min.min(y),
            y_max: b.y_max.max(y),
        }))
    }
}

impl Artist {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Artist::Scatter { .. } => "scatter",
            Artist::Line { .. } => "line",
            Artist::Bars { .. } => "bars",
            Artist::Image { .. } => "image",
            Artist::Circle { .. } => "circle",
        }
    }

    /// Solid color of the artist; images have none.
    pub fn color(&self) -> Option<skia::Color> {
        match self {
            Artist::Scatter { color, .. }
            | Artist::Line { color, .. }
            | Artist::Bars { color, .. }
            | Artist::Circle { color, .. } => Some(*color),
            Artist::Image { .. } => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Artist::Scatter { label, .. }
            | Artist::Line { label, .. }
            | Artist::Bars { label, .. }
            | Artist::Circle { label, .. } => label.as_deref(),
            Artist::Image { .. } => None,
        }
    }

    /// Data extent, or `None` for artists without finite data.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Artist::Scatter { points, .. } | Artist::Line { points, .. } => Bounds::of_points(points),
            Artist::Bars { x, heights, width, .. } => {
                let half = width * 0.5;
                let corners: Vec<(f64, f64)> = x
                    .iter()
                    .zip(heights)
                    .flat_map(|(&xi, &h)| [(xi - half, 0.0), (xi + half, h)])
                    .collect();
                Bounds::of_points(&corners)
            }
            Artist::Image { values, .. } => Some(Bounds {
                x_min: -0.5,
                x_max: values.cols() as f64 - 0.5,
                y_min: -0.5,
                y_max: values.rows() as f64 - 0.5,
            }),
            Artist::Circle { center: (cx, cy), radius, .. } => Some(Bounds {
                x_min: cx - radius,
                x_max: cx + radius,
                y_min: cy - radius,
                y_max: cy + radius,
            }),
        }
    }
}
