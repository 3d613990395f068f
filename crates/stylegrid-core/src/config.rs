// File: crates/stylegrid-core/src/config.rs
// Summary: Run-wide constants gathered into one options struct (themes, seed, sizes, renderer parameters).

use std::path::PathBuf;

use crate::panels::{BarParams, ImageParams, LineParams, ScatterParams};
use crate::sample::FIGURE_SEED;
use crate::types::{FIGURE_HEIGHT, FIGURE_WIDTH, SUPTITLE_FONT_SIZE};

/// Themes rendered by a default run, in order.
pub const DEFAULT_THEMES: [&str; 4] = ["liquid", "solid", "gas", "plasma"];

/// Figure-level title placement and font.
#[derive(Clone, Debug, PartialEq)]
pub struct SuptitleOptions {
    /// Left edge as a fraction of the figure width.
    pub x: f32,
    pub font_size: f32,
    pub family: &'static str,
}

impl Default for SuptitleOptions {
    fn default() -> Self {
        Self { x: 0.01, font_size: SUPTITLE_FONT_SIZE, family: "DejaVu Sans" }
    }
}

#[derive(Clone, Debug)]
pub struct GalleryConfig {
    pub themes: Vec<String>,
    pub seed: u64,
    pub figure_width: i32,
    pub figure_height: i32,
    pub suptitle: SuptitleOptions,
    /// Open-figure count above which a warning is logged; a run raises it to
    /// its own theme count.
    pub max_open_warning: usize,
    pub output_dir: PathBuf,
    pub scatter: ScatterParams,
    pub lines: LineParams,
    pub bars: BarParams,
    pub image: ImageParams,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            themes: DEFAULT_THEMES.iter().map(|s| s.to_string()).collect(),
            seed: FIGURE_SEED,
            figure_width: FIGURE_WIDTH,
            figure_height: FIGURE_HEIGHT,
            suptitle: SuptitleOptions::default(),
            max_open_warning: 20,
            output_dir: PathBuf::from("target/out"),
            scatter: ScatterParams::default(),
            lines: LineParams::default(),
            bars: BarParams::default(),
            image: ImageParams::default(),
        }
    }
}
