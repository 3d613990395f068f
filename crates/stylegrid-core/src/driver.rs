// File: crates/stylegrid-core/src/driver.rs
// Summary: Theme driver: one composed figure per theme, then a single hand-off to the display.

use tracing::{info, warn};

use crate::config::GalleryConfig;
use crate::display::Display;
use crate::error::Result;
use crate::figure::{compose, open_figures, Figure};
use crate::style::StyleRegistry;

pub struct ThemeDriver {
    registry: StyleRegistry,
    config: GalleryConfig,
}

impl Default for ThemeDriver {
    fn default() -> Self {
        Self::new(StyleRegistry::builtin(), GalleryConfig::default())
    }
}

impl ThemeDriver {
    pub fn new(registry: StyleRegistry, config: GalleryConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &GalleryConfig { &self.config }
    pub fn registry(&self) -> &StyleRegistry { &self.registry }

    /// Compose one figure per theme, in order. The first unknown theme or
    /// failing renderer aborts the whole run.
    pub fn build_figures<S: AsRef<str>>(&self, themes: &[S]) -> Result<Vec<Figure>> {
        let threshold = self.open_warning_threshold(themes.len());
        let mut figures = Vec::with_capacity(themes.len());
        for theme in themes {
            let theme = theme.as_ref();
            let style = self.registry.get(theme)?;
            figures.push(compose(theme, style, &self.config)?);
            // counts figures held anywhere in the process, not just this run
            let open = open_figures();
            if open > threshold {
                warn!(open, threshold, theme, "more figures open than the warning threshold");
            }
        }
        Ok(figures)
    }

    /// Warning threshold for a run of `run_len` themes: the configured value,
    /// raised so the run's own figures never trip it on their own.
    pub fn open_warning_threshold(&self, run_len: usize) -> usize {
        self.config.max_open_warning.max(run_len)
    }

    /// Build every figure, then show them all with one `display.show` call.
    pub fn run<S: AsRef<str>>(&self, themes: &[S], display: &mut dyn Display) -> Result<()> {
        let figures = self.build_figures(themes)?;
        info!(count = figures.len(), "figures ready for display");
        display.show(figures)
    }

    /// Run over the configured theme list.
    pub fn run_default(&self, display: &mut dyn Display) -> Result<()> {
        self.run(self.config.themes.as_slice(), display)
    }
}
