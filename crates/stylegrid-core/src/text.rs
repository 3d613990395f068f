// File: crates/stylegrid-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; family stacks per text role.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// What a piece of text is for; picks the font family stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    /// Figure title, with an explicit preferred family.
    Title(&'static str),
    Label,
    Numeric,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, role: TextRole) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_style(skia::FontStyle::normal());
        match role {
            TextRole::Title(family) => {
                ts.set_font_families(&[family, "DejaVu Sans", "Arial", "sans-serif"]);
            }
            TextRole::Label => {
                ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
            }
            TextRole::Numeric => {
                // tabular digits keep tick labels aligned
                ts.set_font_families(&["DejaVu Sans Mono", "Roboto Mono", "Consolas", "Menlo", "monospace"]);
            }
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, role: TextRole) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, role);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, role: TextRole) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), role);
        p.longest_line()
    }

    /// Draw with the baseline at `y`, starting at `x`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, role: TextRole) {
        let mut p = self.layout(text, size, color, role);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw horizontally centered on `cx`, baseline at `y`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color, role: TextRole) {
        let w = self.measure_width(text, size, role);
        self.draw_left(canvas, text, cx - w * 0.5, y, size, color, role);
    }

    /// Draw ending at `right`, baseline at `y`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, y: f32, size: f32, color: skia::Color, role: TextRole) {
        let w = self.measure_width(text, size, role);
        self.draw_left(canvas, text, right - w, y, size, color, role);
    }
}
