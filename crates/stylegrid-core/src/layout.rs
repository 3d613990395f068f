// File: crates/stylegrid-core/src/layout.rs
// Summary: Constrained grid layout: title band, non-overlapping panel cells, per-panel plot insets.

use crate::axes::Panel;
use crate::geometry::RectI32;
use crate::types::{Insets, LABEL_FONT_SIZE, PANEL_TITLE_FONT_SIZE, TICK_FONT_SIZE, TICK_LENGTH};
use crate::view::ViewState;

/// Pixel regions of a figure.
#[derive(Clone, Debug, PartialEq)]
pub struct FigureLayout {
    pub title_band: RectI32,
    /// Row-major cells, one per panel.
    pub cells: Vec<RectI32>,
}

/// Split `width` x `height` into a title band over an `nrows` x `ncols` grid.
/// Cells are separated by `gap` pixels and never overlap.
pub fn constrained_grid(width: i32, height: i32, nrows: usize, ncols: usize, title_height: i32, gap: i32) -> FigureLayout {
    let outer_pad = gap / 2;
    let title_band = RectI32::from_ltrb(0, 0, width, title_height.min(height));
    let top = title_band.bottom;
    let avail_w = (width - 2 * outer_pad - gap * (ncols as i32 - 1)).max(ncols as i32);
    let avail_h = (height - top - outer_pad - gap * (nrows as i32 - 1)).max(nrows as i32);
    let cell_w = avail_w / ncols as i32;
    let cell_h = avail_h / nrows as i32;

    let cells = (0..nrows)
        .flat_map(|r| (0..ncols).map(move |c| (r as i32, c as i32)))
        .map(|(r, c)| {
            RectI32::from_ltwh(outer_pad + c * (cell_w + gap), top + r * (cell_h + gap), cell_w, cell_h)
        })
        .collect();
    FigureLayout { title_band, cells }
}

/// Room needed around the plot area for the panel's title, labels and ticks.
pub fn panel_insets(panel: &Panel) -> Insets {
    let tick_room = |hidden: bool| if hidden { 2.0 } else { TICK_LENGTH + TICK_FONT_SIZE + 3.0 };
    let x_ticks = tick_room(panel.x_axis().ticks_hidden());
    let y_ticks = if panel.y_axis().ticks_hidden() { 2.0 } else { TICK_LENGTH + 4.0 * TICK_FONT_SIZE * 0.6 + 3.0 };

    let top = if panel.title().is_some() { PANEL_TITLE_FONT_SIZE + 6.0 } else { 4.0 };
    let bottom = x_ticks + if panel.x_axis().has_label() { LABEL_FONT_SIZE + 3.0 } else { 0.0 };
    let left = y_ticks + if panel.y_axis().has_label() { LABEL_FONT_SIZE + 3.0 } else { 0.0 };

    Insets::new(left.ceil() as u32, 6, top.ceil() as u32, bottom.ceil() as u32)
}

/// Plot rectangle of `panel` inside `cell`.
///
/// Equal-aspect panels shrink the box around its center until one data unit
/// covers the same number of pixels in x and y.
pub fn plot_rect(cell: &RectI32, panel: &Panel) -> RectI32 {
    let rect = cell.inset(&panel_insets(panel));
    if !panel.equal_aspect() {
        return rect;
    }
    let view = ViewState::from_panel(panel);
    fit_aspect(&rect, (view.x_max - view.x_min).abs(), (view.y_max - view.y_min).abs())
}

/// Largest rectangle centered in `rect` whose width/height ratio is `dx / dy`.
pub fn fit_aspect(rect: &RectI32, dx: f64, dy: f64) -> RectI32 {
    if !(dx > 0.0 && dy > 0.0 && dx.is_finite() && dy.is_finite()) {
        return *rect;
    }
    let px_per_unit = (rect.width() as f64 / dx).min(rect.height() as f64 / dy);
    let w = ((dx * px_per_unit).round() as i32).clamp(1, rect.width().max(1));
    let h = ((dy * px_per_unit).round() as i32).clamp(1, rect.height().max(1));
    let left = rect.left + (rect.width() - w) / 2;
    let top = rect.top + (rect.height() - h) / 2;
    RectI32::from_ltwh(left, top, w, h)
}
