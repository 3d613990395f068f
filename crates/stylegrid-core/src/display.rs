// File: crates/stylegrid-core/src/display.rs
// Summary: Final display step: a no-op headless sink and a PNG writer; windowed displays live in their own crate.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::figure::Figure;
use crate::render::RenderOptions;

/// Receives every figure of a run at once. Figures are dropped when `show` returns.
pub trait Display {
    fn show(&mut self, figures: Vec<Figure>) -> Result<()>;
}

/// Displays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Headless;

impl Display for Headless {
    fn show(&mut self, figures: Vec<Figure>) -> Result<()> {
        debug!(count = figures.len(), "headless display; releasing figures");
        Ok(())
    }
}

/// Writes one PNG per figure into a directory.
#[derive(Clone, Debug)]
pub struct PngWriter {
    out_dir: PathBuf,
    draw_labels: bool,
    written: Vec<PathBuf>,
}

impl PngWriter {
    pub fn new(out_dir: impl AsRef<Path>) -> Self {
        Self { out_dir: out_dir.as_ref().to_path_buf(), draw_labels: true, written: Vec::new() }
    }

    /// Skip text rendering (deterministic pixels regardless of installed fonts).
    pub fn without_labels(mut self) -> Self {
        self.draw_labels = false;
        self
    }

    /// Paths written so far, in display order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// `stylegrid_<title>.png`, with anything outside `[A-Za-z0-9_-]` replaced by `_`.
    pub fn file_name_for(title: &str) -> String {
        let safe: String = title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        format!("stylegrid_{safe}.png")
    }
}

impl Display for PngWriter {
    fn show(&mut self, figures: Vec<Figure>) -> Result<()> {
        std::fs::create_dir_all(&self.out_dir)?;
        for figure in figures {
            let opts = RenderOptions { draw_labels: self.draw_labels, ..RenderOptions::for_figure(&figure) };
            let path = self.out_dir.join(Self::file_name_for(figure.title()));
            figure.render_to_png(&opts, &path)?;
            info!(theme = figure.title(), path = %path.display(), "wrote figure");
            self.written.push(path);
        }
        Ok(())
    }
}
