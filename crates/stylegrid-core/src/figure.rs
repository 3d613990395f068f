// File: crates/stylegrid-core/src/figure.rs
// Summary: 2x2 figure model and the composer that styles it and dispatches the panel renderers.

use std::sync::atomic::{AtomicUsize, Ordering};

use skia_safe as skia;
use tracing::debug;

use crate::axes::{Panel, PanelRole};
use crate::color::value;
use crate::config::{GalleryConfig, SuptitleOptions};
use crate::error::{Error, Result};
use crate::panels;
use crate::sample::SampleGenerator;
use crate::style::Style;
use crate::types::{GRID_COLS, GRID_ROWS};

/// Title color on dark backgrounds (HSV value < 0.5).
pub const LIGHT_TITLE: skia::Color4f = skia::Color4f { r: 0.8, g: 0.8, b: 1.0, a: 1.0 };
/// Title color on light backgrounds.
pub const DARK_TITLE: skia::Color4f = skia::Color4f { r: 19.0 / 256.0, g: 6.0 / 256.0, b: 84.0 / 256.0, a: 1.0 };

/// Pick a readable suptitle color for the given figure background.
pub fn title_color_for(background: skia::Color) -> skia::Color4f {
    if value(background) < 0.5 { LIGHT_TITLE } else { DARK_TITLE }
}

static OPEN_FIGURES: AtomicUsize = AtomicUsize::new(0);

/// Number of figures alive in this process, clones included.
pub fn open_figures() -> usize {
    OPEN_FIGURES.load(Ordering::Relaxed)
}

/// Counts itself in `OPEN_FIGURES` for as long as it lives.
#[derive(Debug)]
struct OpenFigure;

impl OpenFigure {
    fn register() -> Self {
        OPEN_FIGURES.fetch_add(1, Ordering::Relaxed);
        OpenFigure
    }
}

impl Clone for OpenFigure {
    fn clone(&self) -> Self {
        Self::register()
    }
}

impl Drop for OpenFigure {
    fn drop(&mut self) {
        OPEN_FIGURES.fetch_sub(1, Ordering::Relaxed);
    }
}

#[derive(Clone, Debug)]
pub struct Suptitle {
    pub text: String,
    pub color: skia::Color4f,
    pub options: SuptitleOptions,
}

/// A 2x2 grid of panels tagged with a theme name.
#[derive(Clone, Debug)]
pub struct Figure {
    suptitle: Suptitle,
    style: Style,
    width: i32,
    height: i32,
    /// Row-major, `GRID_ROWS * GRID_COLS` entries.
    panels: Vec<Panel>,
    _open: OpenFigure,
}

impl Figure {
    /// Empty figure with unpopulated panels.
    pub fn subplots(title: &str, style: &Style, width: i32, height: i32, suptitle: SuptitleOptions) -> Self {
        Self {
            suptitle: Suptitle {
                text: title.to_string(),
                color: title_color_for(style.figure_face),
                options: suptitle,
            },
            style: style.clone(),
            width,
            height,
            panels: (0..GRID_ROWS * GRID_COLS).map(|_| Panel::new(style)).collect(),
            _open: OpenFigure::register(),
        }
    }

    pub fn title(&self) -> &str { &self.suptitle.text }
    pub fn title_color(&self) -> skia::Color4f { self.suptitle.color }
    pub fn suptitle(&self) -> &Suptitle { &self.suptitle }
    pub fn style(&self) -> &Style { &self.style }
    pub fn size(&self) -> (i32, i32) { (self.width, self.height) }
    pub fn grid_shape(&self) -> (usize, usize) { (GRID_ROWS, GRID_COLS) }
    pub fn panels(&self) -> &[Panel] { &self.panels }

    pub fn panel(&self, row: usize, col: usize) -> Option<&Panel> {
        if row < GRID_ROWS && col < GRID_COLS { self.panels.get(row * GRID_COLS + col) } else { None }
    }

    pub fn panel_mut(&mut self, row: usize, col: usize) -> Result<&mut Panel> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return Err(Error::config(format!("no panel at ({row}, {col}) in a {GRID_ROWS}x{GRID_COLS} grid")));
        }
        Ok(&mut self.panels[row * GRID_COLS + col])
    }

    /// Panel at the fixed cell for `role`.
    pub fn panel_for(&self, role: PanelRole) -> Option<&Panel> {
        let (r, c) = role.cell();
        self.panel(r, c)
    }

    fn panel_mut_for(&mut self, role: PanelRole) -> Result<&mut Panel> {
        let (r, c) = role.cell();
        self.panel_mut(r, c)
    }

    /// True when every panel holds the role assigned to its cell.
    pub fn is_fully_populated(&self) -> bool {
        PanelRole::ALL
            .iter()
            .all(|&role| self.panel_for(role).and_then(Panel::role) == Some(role))
    }
}

/// Build the figure for `theme_id` under `style`.
///
/// Every call seeds a fresh generator with `config.seed`, so figures for
/// different themes contain identical data.
pub fn compose(theme_id: &str, style: &Style, config: &GalleryConfig) -> Result<Figure> {
    let _span = tracing::debug_span!("compose", theme = theme_id).entered();
    let mut fig = Figure::subplots(theme_id, style, config.figure_width, config.figure_height, config.suptitle.clone());
    let mut rng = SampleGenerator::new(config.seed)?;

    panels::scatter(fig.panel_mut_for(PanelRole::Scatter)?, &mut rng, &config.scatter)?;
    panels::image_and_patch(fig.panel_mut_for(PanelRole::ImagePatch)?, &mut rng, &config.image)?;
    panels::bar_graphs(fig.panel_mut_for(PanelRole::Bars)?, &mut rng, &config.bars)?;
    panels::colored_lines(fig.panel_mut_for(PanelRole::Lines)?, &config.lines)?;

    if !fig.is_fully_populated() {
        return Err(Error::config(format!("figure '{theme_id}' has unpopulated panels")));
    }
    debug!(theme = theme_id, background_value = value(style.figure_face), "figure composed");
    Ok(fig)
}
