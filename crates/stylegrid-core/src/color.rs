// File: crates/stylegrid-core/src/color.rs
// Summary: Color conversions (RGB -> HSV, hex, Color4f) and sampled colormaps for heat-maps.

use skia_safe as skia;

use crate::geometry::clamp;

/// Build an opaque color from a 0xRRGGBB literal.
pub fn hex(rgb: u32) -> skia::Color {
    skia::Color::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Channels scaled to [0, 1].
pub fn to_unit_rgb(c: skia::Color) -> [f32; 3] {
    [c.r() as f32 / 255.0, c.g() as f32 / 255.0, c.b() as f32 / 255.0]
}

/// Convert an RGB triple in [0, 1] to hue/saturation/value, all in [0, 1].
pub fn rgb_to_hsv([r, g, b]: [f32; 3]) -> [f32; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max > 0.0 { delta / max } else { 0.0 };
    let h = if delta <= 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };
    [h, s, max]
}

/// Brightness (HSV value channel) of a color.
pub fn value(c: skia::Color) -> f32 {
    rgb_to_hsv(to_unit_rgb(c))[2]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colormap {
    Viridis,
    Magma,
    Cividis,
    Greys,
}

impl Colormap {
    pub fn name(self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Magma => "magma",
            Colormap::Cividis => "cividis",
            Colormap::Greys => "Greys",
        }
    }

    // Evenly spaced anchors, interpolated linearly in sRGB.
    fn anchors(self) -> &'static [u32] {
        match self {
            Colormap::Viridis => &[
                0x440154, 0x472d7b, 0x3b528b, 0x2c728e, 0x21918c, 0x28ae80, 0x5ec962, 0xaddc30, 0xfde725,
            ],
            Colormap::Magma => &[
                0x000004, 0x1c1044, 0x4f127b, 0x812581, 0xb5367a, 0xe55964, 0xfb8761, 0xfec287, 0xfcfdbf,
            ],
            Colormap::Cividis => &[
                0x00224e, 0x123570, 0x3b496c, 0x575d6d, 0x707173, 0x8a8779, 0xa69d75, 0xc4b56c, 0xfee838,
            ],
            Colormap::Greys => &[
                0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525, 0x000000,
            ],
        }
    }

    /// Color at position `t`, clamped to [0, 1]. NaN maps to the low end.
    pub fn sample(self, t: f64) -> skia::Color {
        let anchors = self.anchors();
        let t = if t.is_nan() { 0.0 } else { clamp(t, 0.0, 1.0) };
        let pos = t * (anchors.len() - 1) as f64;
        let i = (pos.floor() as usize).min(anchors.len() - 2);
        let f = (pos - i as f64) as f32;
        let (a, b) = (hex(anchors[i]), hex(anchors[i + 1]));
        let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * f).round() as u8;
        skia::Color::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
    }
}
