// File: crates/stylegrid-core/src/style.rs
// Summary: Named visual styles (backgrounds, color cycle, colormap) and the registry they are looked up in.

use skia_safe as skia;

use crate::color::{hex, Colormap};
use crate::error::{Error, Result};

/// Immutable styling context handed to the figure composer and every panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub name: &'static str,
    pub figure_face: skia::Color,
    pub axes_face: skia::Color,
    pub axes_edge: skia::Color,
    pub text: skia::Color,
    pub tick: skia::Color,
    /// Grid line color; `None` disables the grid.
    pub grid: Option<skia::Color>,
    /// Property cycle: artists without an explicit color take the next entry.
    pub color_cycle: Vec<skia::Color>,
    pub patch_face: skia::Color,
    pub line_width: f32,
    pub marker_radius: f32,
    pub colormap: Colormap,
}

fn cycle(colors: &[u32]) -> Vec<skia::Color> {
    colors.iter().copied().map(hex).collect()
}

impl Style {
    /// `Cn` color: index into the cycle, wrapping around.
    pub fn cycle_color(&self, n: usize) -> skia::Color {
        if self.color_cycle.is_empty() {
            return self.text;
        }
        self.color_cycle[n % self.color_cycle.len()]
    }

    pub fn default_light() -> Self {
        let colors = cycle(&[
            0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd, 0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22, 0x17becf,
        ]);
        Self {
            name: "default",
            figure_face: hex(0xffffff),
            axes_face: hex(0xffffff),
            axes_edge: hex(0x000000),
            text: hex(0x000000),
            tick: hex(0x000000),
            grid: None,
            patch_face: colors[0],
            color_cycle: colors,
            line_width: 1.5,
            marker_radius: 3.0,
            colormap: Colormap::Viridis,
        }
    }

    pub fn dark_background() -> Self {
        let colors = cycle(&[
            0x8dd3c7, 0xfeffb3, 0xbfbbd9, 0xfa8174, 0x81b1d2, 0xfdb462, 0xb3de69, 0xbc82bd, 0xccebc4, 0xffed6f,
        ]);
        Self {
            name: "dark_background",
            figure_face: hex(0x000000),
            axes_face: hex(0x000000),
            axes_edge: hex(0xffffff),
            text: hex(0xffffff),
            tick: hex(0xffffff),
            grid: None,
            patch_face: colors[0],
            color_cycle: colors,
            line_width: 1.5,
            marker_radius: 3.0,
            colormap: Colormap::Viridis,
        }
    }

    /// Cool blues on a pale, watery background.
    pub fn liquid() -> Self {
        let colors = cycle(&[0x0b5394, 0x3d85c6, 0x45b5c4, 0x7fd3d8, 0x1c7c8c, 0xa3c9e8]);
        Self {
            name: "liquid",
            figure_face: hex(0xeef6fb),
            axes_face: hex(0xfafdff),
            axes_edge: hex(0x2b4c6f),
            text: hex(0x10324a),
            tick: hex(0x2b4c6f),
            grid: Some(hex(0xcfe3ef)),
            patch_face: colors[1],
            color_cycle: colors,
            line_width: 2.0,
            marker_radius: 3.0,
            colormap: Colormap::Viridis,
        }
    }

    /// Earthy, heavy strokes on parchment.
    pub fn solid() -> Self {
        let colors = cycle(&[0x8c510a, 0xbf812d, 0x35978f, 0x01665e, 0x543005]);
        Self {
            name: "solid",
            figure_face: hex(0xf2efe9),
            axes_face: hex(0xfaf8f4),
            axes_edge: hex(0x3b3530),
            text: hex(0x2a2420),
            tick: hex(0x3b3530),
            grid: None,
            patch_face: colors[3],
            color_cycle: colors,
            line_width: 2.5,
            marker_radius: 3.5,
            colormap: Colormap::Cividis,
        }
    }

    /// Thin pastel strokes on near-white.
    pub fn gas() -> Self {
        let colors = cycle(&[0x9ecae1, 0xfdd0a2, 0xc7e9c0, 0xdadaeb, 0xfcbba1, 0xd9d9d9, 0xfff2ae]);
        Self {
            name: "gas",
            figure_face: hex(0xfbfbfd),
            axes_face: hex(0xffffff),
            axes_edge: hex(0x9aa0a6),
            text: hex(0x4a4f55),
            tick: hex(0x9aa0a6),
            grid: Some(hex(0xeceff3)),
            patch_face: colors[3],
            color_cycle: colors,
            line_width: 1.0,
            marker_radius: 2.5,
            colormap: Colormap::Greys,
        }
    }

    /// Neon accents on a deep violet background.
    pub fn plasma() -> Self {
        let colors = cycle(&[0xff4fd8, 0x7c4dff, 0x00e5ff, 0xffd740, 0xff6e40, 0x69f0ae, 0xea80fc, 0x40c4ff]);
        Self {
            name: "plasma",
            figure_face: hex(0x14081f),
            axes_face: hex(0x1e0f2e),
            axes_edge: hex(0xb39ddb),
            text: hex(0xe8defa),
            tick: hex(0xb39ddb),
            grid: Some(hex(0x3a2452)),
            patch_face: colors[1],
            color_cycle: colors,
            line_width: 1.8,
            marker_radius: 3.0,
            colormap: Colormap::Magma,
        }
    }
}

/// Return the list of built-in styles.
pub fn presets() -> Vec<Style> {
    vec![
        Style::default_light(),
        Style::dark_background(),
        Style::liquid(),
        Style::solid(),
        Style::gas(),
        Style::plasma(),
    ]
}

/// Styles addressable by name.
#[derive(Clone, Debug)]
pub struct StyleRegistry {
    styles: Vec<Style>,
}

impl StyleRegistry {
    pub fn empty() -> Self {
        Self { styles: Vec::new() }
    }

    pub fn builtin() -> Self {
        Self { styles: presets() }
    }

    /// Add `style`, replacing any existing style with the same name.
    pub fn register(&mut self, style: Style) {
        match self.styles.iter_mut().find(|s| s.name.eq_ignore_ascii_case(style.name)) {
            Some(slot) => *slot = style,
            None => self.styles.push(style),
        }
    }

    /// Find a style by name (case-insensitive).
    pub fn get(&self, name: &str) -> Result<&Style> {
        self.styles
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::StyleNotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.styles.iter().map(|s| s.name)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
