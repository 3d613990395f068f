// File: crates/stylegrid-core/src/render.rs
// Summary: Headless rendering of a Figure via Skia CPU raster surfaces (PNG file, PNG bytes, RGBA buffer).

use std::path::Path;

use skia_safe as skia;

use crate::artist::{Artist, Marker};
use crate::axes::{Panel, Swatch};
use crate::axis::Ticks;
use crate::error::{Error, Result};
use crate::figure::Figure;
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_ticks};
use crate::layout::{constrained_grid, plot_rect};
use crate::scale::LinearScale;
use crate::style::Style;
use crate::text::{TextRole, TextShaper};
use crate::types::{
    FIGURE_HEIGHT, FIGURE_WIDTH, LABEL_FONT_SIZE, LEGEND_FONT_SIZE, PANEL_TITLE_FONT_SIZE, TICK_FONT_SIZE,
    TICK_LENGTH,
};
use crate::view::ViewState;

/// Height of the band reserved for the figure title.
const TITLE_BAND: i32 = 24;
/// Space between neighbouring panel cells.
const CELL_GAP: i32 = 8;
/// Preferred number of intervals for automatic ticks.
const AUTO_TICKS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Text is skipped when false; keeps pixel output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: FIGURE_WIDTH, height: FIGURE_HEIGHT, draw_labels: true }
    }
}

impl RenderOptions {
    /// Options matching the figure's own pixel size.
    pub fn for_figure(figure: &Figure) -> Self {
        let (width, height) = figure.size();
        Self { width, height, draw_labels: true }
    }
}

impl Figure {
    fn raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            return Err(Error::Render(format!("invalid surface size {}x{}", opts.width, opts.height)));
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| Error::Render("failed to create raster surface".into()))?;
        let shaper = opts.draw_labels.then(TextShaper::new);
        paint_figure(surface.canvas(), self, opts, shaper.as_ref());
        Ok(surface)
    }

    /// Encode the figure as PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| Error::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the figure to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Pixel plot area of every panel at `opts` size, row-major.
    pub fn plot_rects(&self, opts: &RenderOptions) -> Vec<RectI32> {
        let (rows, cols) = self.grid_shape();
        let layout = constrained_grid(opts.width, opts.height, rows, cols, TITLE_BAND, CELL_GAP);
        self.panels().iter().zip(&layout.cells).map(|(panel, cell)| plot_rect(cell, panel)).collect()
    }

    /// Unpremultiplied RGBA pixels plus `(width, height, row stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut px = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(Error::Render("read pixels failed".into()));
        }
        Ok((px, opts.width as u32, opts.height as u32, stride))
    }
}

// ---- helpers ----------------------------------------------------------------

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn ordered_rect(x0: f32, y0: f32, x1: f32, y1: f32) -> skia::Rect {
    skia::Rect::from_ltrb(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
}

fn paint_figure(canvas: &skia::Canvas, fig: &Figure, opts: &RenderOptions, shaper: Option<&TextShaper>) {
    let style = fig.style();
    canvas.clear(style.figure_face);

    let (rows, cols) = fig.grid_shape();
    let layout = constrained_grid(opts.width, opts.height, rows, cols, TITLE_BAND, CELL_GAP);

    if let Some(sh) = shaper {
        let title = fig.suptitle();
        let x = opts.width as f32 * title.options.x;
        let baseline = layout.title_band.top as f32 + title.options.font_size + 4.0;
        sh.draw_left(
            canvas,
            &title.text,
            x,
            baseline,
            title.options.font_size,
            title.color.to_color(),
            TextRole::Title(title.options.family),
        );
    }

    for (panel, cell) in fig.panels().iter().zip(&layout.cells) {
        draw_panel(canvas, panel, style, cell, shaper);
    }
}

struct TickMark {
    pos: f64,
    label: String,
}

fn resolve_ticks(ticks: &Ticks, min: f64, max: f64) -> Vec<TickMark> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let tol = (hi - lo).abs() * 1e-9;
    let visible = |p: f64| p >= lo - tol && p <= hi + tol;
    match ticks {
        Ticks::Hidden => Vec::new(),
        Ticks::Fixed { positions, labels } => positions
            .iter()
            .zip(labels)
            .filter(|(p, _)| visible(**p))
            .map(|(&pos, label)| TickMark { pos, label: label.clone() })
            .collect(),
        Ticks::Auto => {
            let positions = nice_ticks(lo, hi, AUTO_TICKS);
            let step = positions.windows(2).map(|w| w[1] - w[0]).next().unwrap_or(1.0);
            positions
                .into_iter()
                .filter(|p| visible(*p))
                .map(|pos| TickMark { pos, label: format_tick(pos, step) })
                .collect()
        }
    }
}

fn draw_panel(canvas: &skia::Canvas, panel: &Panel, style: &Style, cell: &RectI32, shaper: Option<&TextShaper>) {
    let rect = plot_rect(cell, panel).to_rect();
    let view = ViewState::from_panel(panel);
    let sx = LinearScale::horizontal(view.x_min, view.x_max, rect.left, rect.right);
    let sy = LinearScale::vertical(view.y_min, view.y_max, rect.top, rect.bottom, panel.y_axis().inverted);

    canvas.draw_rect(rect, &fill_paint(style.axes_face));

    let x_ticks = resolve_ticks(&panel.x_axis().ticks, view.x_min, view.x_max);
    let y_ticks = resolve_ticks(&panel.y_axis().ticks, view.y_min, view.y_max);

    if let Some(grid) = style.grid {
        let paint = stroke_paint(grid, 0.8);
        for t in &x_ticks {
            let x = sx.to_px(t.pos);
            canvas.draw_line((x, rect.top), (x, rect.bottom), &paint);
        }
        for t in &y_ticks {
            let y = sy.to_px(t.pos);
            canvas.draw_line((rect.left, y), (rect.right, y), &paint);
        }
    }

    canvas.save();
    canvas.clip_rect(rect, skia::ClipOp::Intersect, true);
    for artist in panel.artists() {
        draw_artist(canvas, artist, &sx, &sy);
    }
    canvas.restore();

    // spines
    canvas.draw_rect(rect, &stroke_paint(style.axes_edge, 1.0));

    let tick_paint = stroke_paint(style.tick, 1.0);
    for t in &x_ticks {
        let x = sx.to_px(t.pos);
        canvas.draw_line((x, rect.bottom), (x, rect.bottom + TICK_LENGTH), &tick_paint);
    }
    for t in &y_ticks {
        let y = sy.to_px(t.pos);
        canvas.draw_line((rect.left - TICK_LENGTH, y), (rect.left, y), &tick_paint);
    }

    if let Some(sh) = shaper {
        for t in &x_ticks {
            let baseline = rect.bottom + TICK_LENGTH + TICK_FONT_SIZE + 1.0;
            sh.draw_centered(canvas, &t.label, sx.to_px(t.pos), baseline, TICK_FONT_SIZE, style.tick, TextRole::Numeric);
        }
        for t in &y_ticks {
            let baseline = sy.to_px(t.pos) + TICK_FONT_SIZE * 0.35;
            sh.draw_right(canvas, &t.label, rect.left - TICK_LENGTH - 2.0, baseline, TICK_FONT_SIZE, style.tick, TextRole::Numeric);
        }

        let x_axis = panel.x_axis();
        if x_axis.has_label() {
            let below = if x_axis.ticks_hidden() { 2.0 } else { TICK_LENGTH + TICK_FONT_SIZE + 3.0 };
            let baseline = rect.bottom + below + LABEL_FONT_SIZE + 1.0;
            sh.draw_centered(canvas, &x_axis.label, rect.center_x(), baseline, LABEL_FONT_SIZE, style.text, TextRole::Label);
        }
        let y_axis = panel.y_axis();
        if y_axis.has_label() {
            canvas.save();
            canvas.translate((cell.left as f32 + LABEL_FONT_SIZE + 1.0, rect.center_y()));
            canvas.rotate(-90.0, None);
            sh.draw_centered(canvas, &y_axis.label, 0.0, 0.0, LABEL_FONT_SIZE, style.text, TextRole::Label);
            canvas.restore();
        }
        if let Some(title) = panel.title() {
            sh.draw_centered(canvas, title, rect.center_x(), rect.top - 4.0, PANEL_TITLE_FONT_SIZE, style.text, TextRole::Label);
        }
    }

    draw_legend(canvas, panel, &rect, style, shaper);
}

fn draw_artist(canvas: &skia::Canvas, artist: &Artist, sx: &LinearScale, sy: &LinearScale) {
    match artist {
        Artist::Scatter { points, color, marker, radius, .. } => {
            let paint = fill_paint(*color);
            for &(x, y) in points {
                let (px, py) = (sx.to_px(x), sy.to_px(y));
                match marker {
                    Marker::Circle => {
                        canvas.draw_circle((px, py), *radius, &paint);
                    }
                    Marker::Square => {
                        let side = radius * 2.0;
                        canvas.draw_rect(skia::Rect::from_xywh(px - radius, py - radius, side, side), &paint);
                    }
                }
            }
        }
        Artist::Line { points, color, width, .. } => {
            if points.len() < 2 {
                return;
            }
            let mut path = skia::Path::new();
            let (x0, y0) = points[0];
            path.move_to((sx.to_px(x0), sy.to_px(y0)));
            for &(x, y) in points.iter().skip(1) {
                path.line_to((sx.to_px(x), sy.to_px(y)));
            }
            canvas.draw_path(&path, &stroke_paint(*color, *width));
        }
        Artist::Bars { x, heights, width, color, .. } => {
            let paint = fill_paint(*color);
            let half = width * 0.5;
            let base = sy.to_px(0.0);
            for (&xi, &h) in x.iter().zip(heights) {
                let rect = ordered_rect(sx.to_px(xi - half), base, sx.to_px(xi + half), sy.to_px(h));
                canvas.draw_rect(rect, &paint);
            }
        }
        Artist::Image { values, colormap } => {
            let (lo, hi) = values.min_max();
            let span = hi - lo;
            let mut paint = fill_paint(skia::Color::BLACK);
            // hard cell edges, no blending between neighbours
            paint.set_anti_alias(false);
            for r in 0..values.rows() {
                for (c, &v) in values.row(r).iter().enumerate() {
                    let t = if span > 0.0 { (v - lo) / span } else { 0.5 };
                    paint.set_color(colormap.sample(t));
                    let (cx, cy) = (c as f64, r as f64);
                    let cell = ordered_rect(sx.to_px(cx - 0.5), sy.to_px(cy - 0.5), sx.to_px(cx + 0.5), sy.to_px(cy + 0.5));
                    canvas.draw_rect(cell, &paint);
                }
            }
        }
        Artist::Circle { center: (cx, cy), radius, color, .. } => {
            let oval = ordered_rect(sx.to_px(cx - radius), sy.to_px(cy - radius), sx.to_px(cx + radius), sy.to_px(cy + radius));
            canvas.draw_oval(oval, &fill_paint(*color));
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, panel: &Panel, rect: &skia::Rect, style: &Style, shaper: Option<&TextShaper>) {
    let entries = panel.legend_entries();
    if entries.is_empty() {
        return;
    }
    let row_h = LEGEND_FONT_SIZE + 4.0;
    let swatch_w = 12.0;
    let pad = 4.0;
    let text_w = entries
        .iter()
        .map(|e| match shaper {
            Some(sh) => sh.measure_width(&e.label, LEGEND_FONT_SIZE, TextRole::Label),
            None => e.label.chars().count() as f32 * LEGEND_FONT_SIZE * 0.6,
        })
        .fold(0.0f32, f32::max);

    let box_w = pad * 3.0 + swatch_w + text_w;
    let box_h = pad * 2.0 + row_h * entries.len() as f32;
    let right = rect.right - pad;
    let top = rect.top + pad;
    let frame = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

    let face = style.axes_face;
    canvas.draw_rect(frame, &fill_paint(skia::Color::from_argb(204, face.r(), face.g(), face.b())));
    canvas.draw_rect(frame, &stroke_paint(style.axes_edge, 0.8));

    for (i, entry) in entries.iter().enumerate() {
        let mid = frame.top + pad + row_h * (i as f32 + 0.5);
        let sw_left = frame.left + pad;
        match entry.swatch {
            Swatch::Patch => {
                let sw = skia::Rect::from_xywh(sw_left, mid - 3.0, swatch_w, 6.0);
                canvas.draw_rect(sw, &fill_paint(entry.color));
            }
            Swatch::Line => {
                canvas.draw_line((sw_left, mid), (sw_left + swatch_w, mid), &stroke_paint(entry.color, 2.0));
            }
            Swatch::Marker(Marker::Circle) => {
                canvas.draw_circle((sw_left + swatch_w * 0.5, mid), 3.0, &fill_paint(entry.color));
            }
            Swatch::Marker(Marker::Square) => {
                let sw = skia::Rect::from_xywh(sw_left + swatch_w * 0.5 - 3.0, mid - 3.0, 6.0, 6.0);
                canvas.draw_rect(sw, &fill_paint(entry.color));
            }
        }
        if let Some(sh) = shaper {
            let x = sw_left + swatch_w + pad;
            sh.draw_left(canvas, &entry.label, x, mid + LEGEND_FONT_SIZE * 0.35, LEGEND_FONT_SIZE, style.text, TextRole::Label);
        }
    }
}
