// File: crates/stylegrid-core/src/view.rs
// Visible data ranges of a panel: autoscale from artists, honouring fixed limits.

use crate::artist::{Artist, Bounds};
use crate::axes::Panel;

/// Fraction of the data span added on each side when autoscaling.
pub const MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

fn pad(lo: f64, hi: f64, sticky_zero: bool) -> (f64, f64) {
    let m = (hi - lo) * MARGIN;
    let lo_p = if sticky_zero && lo == 0.0 { lo } else { lo - m };
    let hi_p = if sticky_zero && hi == 0.0 { hi } else { hi + m };
    (lo_p, hi_p)
}

impl ViewState {
    /// Data ranges for `panel`. Images pin the view to their extent; bars keep
    /// zero as a hard edge; everything else gets a 5% margin.
    pub fn from_panel(panel: &Panel) -> Self {
        let artists = panel.artists();
        let image = artists.iter().find_map(|a| match a {
            Artist::Image { .. } => a.bounds(),
            _ => None,
        });
        let has_bars = artists.iter().any(|a| matches!(a, Artist::Bars { .. }));

        let mut view = match image {
            Some(b) => Self { x_min: b.x_min, x_max: b.x_max, y_min: b.y_min, y_max: b.y_max },
            None => {
                let data = artists.iter().filter_map(Artist::bounds).reduce(Bounds::union);
                match data {
                    None => Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 },
                    Some(mut b) => {
                        if (b.x_max - b.x_min).abs() < 1e-9 { b.x_min -= 0.5; b.x_max += 0.5; }
                        if (b.y_max - b.y_min).abs() < 1e-9 { b.y_min -= 0.5; b.y_max += 0.5; }
                        let (x_min, x_max) = pad(b.x_min, b.x_max, false);
                        let (y_min, y_max) = pad(b.y_min, b.y_max, has_bars);
                        Self { x_min, x_max, y_min, y_max }
                    }
                }
            }
        };

        if let Some((lo, hi)) = panel.x_axis().limits {
            view.x_min = lo;
            view.x_max = hi;
        }
        if let Some((lo, hi)) = panel.y_axis().limits {
            view.y_min = lo;
            view.y_max = hi;
        }
        view
    }
}
