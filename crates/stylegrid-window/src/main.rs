// File: crates/stylegrid-window/src/main.rs
// Summary: Shows every theme's figure in one window (winit + softbuffer); any key cycles figures, closing exits.

use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use stylegrid_core::{Display, Error, Figure, GalleryConfig, RenderOptions, StyleRegistry, ThemeDriver};
use tracing_subscriber::EnvFilter;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    init_tracing();

    let config = GalleryConfig::default();
    let mut display = WindowDisplay::new(config.figure_width as u32, config.figure_height as u32);
    let driver = ThemeDriver::new(StyleRegistry::builtin(), config);
    driver.run_default(&mut display).context("failed to show style gallery")?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Blocks in the window event loop until the window is closed.
struct WindowDisplay {
    width: u32,
    height: u32,
}

impl WindowDisplay {
    fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

fn window_title(figures: &[Figure], idx: usize) -> String {
    format!("stylegrid: {} ({}/{})", figures[idx].title(), idx + 1, figures.len())
}

impl Display for WindowDisplay {
    fn show(&mut self, figures: Vec<Figure>) -> stylegrid_core::Result<()> {
        if figures.is_empty() {
            return Ok(());
        }

        let event_loop = EventLoop::new();
        let window = WindowBuilder::new()
            .with_title(window_title(&figures, 0))
            .with_inner_size(LogicalSize::new(self.width as f64, self.height as f64))
            .build(&event_loop)
            .map_err(|e| Error::Display(e.to_string()))?;

        let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| Error::Display(e.to_string()))?;
        let mut surface =
            unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| Error::Display(e.to_string()))?;

        // Which figure is on screen
        let mut idx = 0usize;

        event_loop.run(move |event, _, cf| {
            *cf = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        *cf = ControlFlow::Exit;
                    }
                    WindowEvent::Resized(_) => window.request_redraw(),
                    WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                        idx = (idx + 1) % figures.len();
                        window.set_title(&window_title(&figures, idx));
                        window.request_redraw();
                    }
                    _ => {}
                },
                Event::RedrawRequested(_) => {
                    if let Err(e) = present(&mut surface, &figures[idx], window.inner_size()) {
                        tracing::error!("present failed: {e:#}");
                        *cf = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        })
    }
}

/// Render `figure` at the window size and blit it into the softbuffer frame.
fn present(surface: &mut softbuffer::Surface, figure: &Figure, size: PhysicalSize<u32>) -> Result<()> {
    let w = size.width.max(1);
    let h = size.height.max(1);
    surface.resize(
        NonZeroU32::new(w).context("zero window width")?,
        NonZeroU32::new(h).context("zero window height")?,
    )
    .map_err(|e| anyhow!("resize failed: {e}"))?;

    let opts = RenderOptions { width: w as i32, height: h as i32, draw_labels: true };
    let (rgba, _, _, _) = figure.render_to_rgba8(&opts)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("no frame buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        // softbuffer expects 0RGB
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow!("present failed: {e}"))?;
    Ok(())
}
