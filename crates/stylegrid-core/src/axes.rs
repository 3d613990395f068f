// File: crates/stylegrid-core/src/axes.rs
// Summary: Drawing-surface capability trait (one method per primitive) and its recording Panel implementation.

use skia_safe as skia;
use tracing::debug;

use crate::artist::{Artist, Marker};
use crate::axis::{Axis, Ticks};
use crate::color::Colormap;
use crate::error::{Error, Result};
use crate::grid::format_tick;
use crate::sample::Samples;
use crate::style::Style;

#[derive(Clone, Debug, Default)]
pub struct ScatterOptions {
    pub color: Option<skia::Color>,
    pub marker: Marker,
    pub label: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LineOptions {
    pub color: Option<skia::Color>,
    /// Stroke width in pixels; defaults to the style's line width.
    pub width: Option<f32>,
    pub label: Option<String>,
}

#[derive(Clone, Debug)]
pub struct BarOptions {
    /// Bar width in data units.
    pub width: f64,
    pub color: Option<skia::Color>,
    pub label: Option<String>,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self { width: 0.8, color: None, label: None }
    }
}

/// Heat-map options. Cells are always drawn as flat blocks (nearest-neighbour).
#[derive(Clone, Debug, Default)]
pub struct ImageOptions {
    pub colormap: Option<Colormap>,
}

#[derive(Clone, Debug)]
pub struct CirclePatch {
    pub center: (f64, f64),
    pub radius: f64,
    pub color: Option<skia::Color>,
    pub label: Option<String>,
}

/// Which renderer populated a panel. Each maps to a fixed grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelRole {
    Scatter,
    Lines,
    Bars,
    ImagePatch,
}

impl PanelRole {
    pub const ALL: [PanelRole; 4] = [PanelRole::Scatter, PanelRole::Lines, PanelRole::Bars, PanelRole::ImagePatch];

    /// `(row, col)` in the 2x2 grid.
    pub const fn cell(self) -> (usize, usize) {
        match self {
            PanelRole::Scatter => (0, 0),
            PanelRole::Lines => (0, 1),
            PanelRole::Bars => (1, 0),
            PanelRole::ImagePatch => (1, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swatch {
    Patch,
    Line,
    Marker(Marker),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
    pub swatch: Swatch,
}

/// Capability set of a drawing surface.
pub trait Axes {
    /// Mark the surface as populated by `role`; a second claim fails.
    fn claim(&mut self, role: PanelRole) -> Result<()>;
    /// Colors of the active style's property cycle.
    fn cycle_colors(&self) -> &[skia::Color];

    fn scatter(&mut self, x: &[f64], y: &[f64], opts: ScatterOptions) -> Result<()>;
    fn plot(&mut self, x: &[f64], y: &[f64], opts: LineOptions) -> Result<()>;
    fn bar(&mut self, x: &[f64], heights: &[f64], opts: BarOptions) -> Result<()>;
    fn imshow(&mut self, values: &Samples, opts: ImageOptions) -> Result<()>;
    fn add_patch(&mut self, patch: CirclePatch) -> Result<()>;

    fn set_title(&mut self, title: &str);
    fn set_xlabel(&mut self, label: &str);
    fn set_ylabel(&mut self, label: &str);
    fn set_xlim(&mut self, min: f64, max: f64) -> Result<()>;
    /// Empty `positions` with no labels hides the ticks.
    fn set_xticks(&mut self, positions: &[f64], labels: Option<&[&str]>) -> Result<()>;
    fn set_yticks(&mut self, positions: &[f64], labels: Option<&[&str]>) -> Result<()>;
    /// One label per legend-able artist, in drawing order.
    fn legend(&mut self, labels: &[&str]) -> Result<()>;
}

#[derive(Clone, Debug)]
struct ColorCycle {
    colors: Vec<skia::Color>,
    next: usize,
    fallback: skia::Color,
}

impl ColorCycle {
    fn advance(&mut self) -> skia::Color {
        if self.colors.is_empty() {
            return self.fallback;
        }
        let c = self.colors[self.next % self.colors.len()];
        self.next += 1;
        c
    }
}

/// One cell of a figure: recorded artists plus axis, title and legend state.
#[derive(Clone, Debug)]
pub struct Panel {
    role: Option<PanelRole>,
    title: Option<String>,
    x_axis: Axis,
    y_axis: Axis,
    artists: Vec<Artist>,
    legend: Vec<LegendEntry>,
    cycle: ColorCycle,
    patch_face: skia::Color,
    line_width: f32,
    marker_radius: f32,
    colormap: Colormap,
    /// One data unit spans the same pixel length on both axes.
    equal_aspect: bool,
}

impl Panel {
    pub fn new(style: &Style) -> Self {
        Self {
            role: None,
            title: None,
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            artists: Vec::new(),
            legend: Vec::new(),
            cycle: ColorCycle { colors: style.color_cycle.clone(), next: 0, fallback: style.text },
            patch_face: style.patch_face,
            line_width: style.line_width,
            marker_radius: style.marker_radius,
            colormap: style.colormap,
            equal_aspect: false,
        }
    }

    pub fn role(&self) -> Option<PanelRole> { self.role }
    pub fn is_populated(&self) -> bool { self.role.is_some() }
    pub fn title(&self) -> Option<&str> { self.title.as_deref() }
    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    pub fn artists(&self) -> &[Artist] { &self.artists }
    pub fn legend_entries(&self) -> &[LegendEntry] { &self.legend }
    pub fn equal_aspect(&self) -> bool { self.equal_aspect }

    fn ticks_from(positions: &[f64], labels: Option<&[&str]>) -> Result<Ticks> {
        match labels {
            None if positions.is_empty() => Ok(Ticks::Hidden),
            Some(labels) if labels.len() != positions.len() => Err(Error::config(format!(
                "{} tick labels for {} tick positions",
                labels.len(),
                positions.len()
            ))),
            Some(labels) => Ok(Ticks::Fixed {
                positions: positions.to_vec(),
                labels: labels.iter().map(|s| s.to_string()).collect(),
            }),
            None => {
                let step = positions.windows(2).map(|w| (w[1] - w[0]).abs()).fold(f64::INFINITY, f64::min);
                let step = if step.is_finite() { step } else { 1.0 };
                Ok(Ticks::Fixed {
                    positions: positions.to_vec(),
                    labels: positions.iter().map(|&p| format_tick(p, step)).collect(),
                })
            }
        }
    }
}

fn check_lengths(what: &str, x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::config(format!("{what}: {} x values but {} y values", x.len(), y.len())));
    }
    Ok(())
}

impl Axes for Panel {
    fn claim(&mut self, role: PanelRole) -> Result<()> {
        if let Some(existing) = self.role {
            return Err(Error::config(format!(
                "panel already populated by {existing:?}, cannot populate as {role:?}"
            )));
        }
        self.role = Some(role);
        debug!(?role, "panel claimed");
        Ok(())
    }

    fn cycle_colors(&self) -> &[skia::Color] {
        &self.cycle.colors
    }

    fn scatter(&mut self, x: &[f64], y: &[f64], opts: ScatterOptions) -> Result<()> {
        check_lengths("scatter", x, y)?;
        let color = opts.color.unwrap_or_else(|| self.cycle.advance());
        self.artists.push(Artist::Scatter {
            points: x.iter().copied().zip(y.iter().copied()).collect(),
            color,
            marker: opts.marker,
            radius: self.marker_radius,
            label: opts.label,
        });
        Ok(())
    }

    fn plot(&mut self, x: &[f64], y: &[f64], opts: LineOptions) -> Result<()> {
        check_lengths("plot", x, y)?;
        let color = opts.color.unwrap_or_else(|| self.cycle.advance());
        self.artists.push(Artist::Line {
            points: x.iter().copied().zip(y.iter().copied()).collect(),
            color,
            width: opts.width.unwrap_or(self.line_width),
            label: opts.label,
        });
        Ok(())
    }

    fn bar(&mut self, x: &[f64], heights: &[f64], opts: BarOptions) -> Result<()> {
        check_lengths("bar", x, heights)?;
        if !(opts.width.is_finite() && opts.width > 0.0) {
            return Err(Error::config(format!("bar width must be positive, got {}", opts.width)));
        }
        let color = opts.color.unwrap_or_else(|| self.cycle.advance());
        self.artists.push(Artist::Bars {
            x: x.to_vec(),
            heights: heights.to_vec(),
            width: opts.width,
            color,
            label: opts.label,
        });
        Ok(())
    }

    fn imshow(&mut self, values: &Samples, opts: ImageOptions) -> Result<()> {
        self.artists.push(Artist::Image {
            values: values.clone(),
            colormap: opts.colormap.unwrap_or(self.colormap),
        });
        // images put row 0 at the top and keep square cells
        self.y_axis.inverted = true;
        self.equal_aspect = true;
        Ok(())
    }

    fn add_patch(&mut self, patch: CirclePatch) -> Result<()> {
        if !(patch.radius.is_finite() && patch.radius > 0.0) {
            return Err(Error::config(format!("circle radius must be positive, got {}", patch.radius)));
        }
        self.artists.push(Artist::Circle {
            center: patch.center,
            radius: patch.radius,
            color: patch.color.unwrap_or(self.patch_face),
            label: patch.label,
        });
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_xlabel(&mut self, label: &str) {
        self.x_axis.label = label.to_string();
    }

    fn set_ylabel(&mut self, label: &str) {
        self.y_axis.label = label.to_string();
    }

    fn set_xlim(&mut self, min: f64, max: f64) -> Result<()> {
        if !(min.is_finite() && max.is_finite()) || min == max {
            return Err(Error::config(format!("invalid x limits [{min}, {max}]")));
        }
        self.x_axis.limits = Some((min, max));
        Ok(())
    }

    fn set_xticks(&mut self, positions: &[f64], labels: Option<&[&str]>) -> Result<()> {
        self.x_axis.ticks = Self::ticks_from(positions, labels)?;
        Ok(())
    }

    fn set_yticks(&mut self, positions: &[f64], labels: Option<&[&str]>) -> Result<()> {
        self.y_axis.ticks = Self::ticks_from(positions, labels)?;
        Ok(())
    }

    fn legend(&mut self, labels: &[&str]) -> Result<()> {
        let handles: Vec<&Artist> = self.artists.iter().filter(|a| a.color().is_some()).collect();
        if labels.len() != handles.len() {
            return Err(Error::config(format!(
                "{} legend labels for {} artists",
                labels.len(),
                handles.len()
            )));
        }
        self.legend = handles
            .iter()
            .zip(labels)
            .filter_map(|(artist, label)| {
                let swatch = match artist {
                    Artist::Scatter { marker, .. } => Swatch::Marker(*marker),
                    Artist::Line { .. } => Swatch::Line,
                    Artist::Bars { .. } | Artist::Circle { .. } => Swatch::Patch,
                    Artist::Image { .. } => return None,
                };
                Some(LegendEntry { label: label.to_string(), color: artist.color()?, swatch })
            })
            .collect();
        Ok(())
    }
}
