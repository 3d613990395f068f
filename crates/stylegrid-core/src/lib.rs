// File: crates/stylegrid-core/src/lib.rs
// Summary: Core library entry point; exports the figure model, panel renderers, styles, driver and rendering.

pub mod error;
pub mod sample;
pub mod color;
pub mod style;
pub mod axis;
pub mod artist;
pub mod axes;
pub mod view;
pub mod panels;
pub mod config;
pub mod figure;
pub mod driver;
pub mod display;
pub mod grid;
pub mod geometry;
pub mod layout;
pub mod scale;
pub mod types;
pub mod text;
pub mod render;

pub use error::{Error, Result};
pub use sample::{SampleGenerator, Samples, Shape, FIGURE_SEED};
pub use color::Colormap;
pub use style::{Style, StyleRegistry};
pub use axis::{Axis, Ticks};
pub use artist::{Artist, Marker};
pub use axes::{Axes, Panel, PanelRole};
pub use view::ViewState;
pub use config::{GalleryConfig, DEFAULT_THEMES};
pub use figure::{compose, open_figures, title_color_for, Figure};
pub use driver::ThemeDriver;
pub use display::{Display, Headless, PngWriter};
pub use render::RenderOptions;
pub use text::TextShaper;
