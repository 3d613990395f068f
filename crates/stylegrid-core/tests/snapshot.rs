// File: crates/stylegrid-core/tests/snapshot.rs
// Purpose: Pixel snapshots of gallery figures.
// Behavior:
// - Golden comparisons are opt-in: they only compare once a golden PNG exists
//   under tests/__snapshots__, which `UPDATE_SNAPSHOTS=1` writes.
// - The PNG/RGBA agreement and repeatability checks always run.

use std::path::PathBuf;

use stylegrid_core::{compose, Figure, GalleryConfig, RenderOptions, StyleRegistry};

fn figure(theme: &str) -> Figure {
    let registry = StyleRegistry::builtin();
    let style = registry.get(theme).expect("builtin theme");
    compose(theme, style, &GalleryConfig::default()).expect("compose figure")
}

/// Text off: glyph rasterization differs between platforms.
fn textless(fig: &Figure) -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::for_figure(fig) }
}

enum Golden {
    Blessed(PathBuf),
    Matched,
    Absent(PathBuf),
}

/// Bless, compare, or report a missing golden for `name`.
fn check_golden(name: &str, png: &[u8]) -> Golden {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(format!("{name}.png"));
    let bless = matches!(std::env::var("UPDATE_SNAPSHOTS").as_deref(), Ok("1") | Ok("true") | Ok("TRUE"));

    if bless {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).expect("create snapshot dir");
        }
        std::fs::write(&path, png).expect("write golden");
        return Golden::Blessed(path);
    }
    let Ok(golden) = std::fs::read(&path) else {
        return Golden::Absent(path);
    };

    // decoded pixels, so encoder settings do not matter
    let got = image::load_from_memory(png).expect("decode render").to_rgba8();
    let want = image::load_from_memory(&golden).expect("decode golden").to_rgba8();
    assert_eq!(got.dimensions(), want.dimensions(), "size differs from {}", path.display());
    assert!(got.as_raw() == want.as_raw(), "pixels differ from golden {}", path.display());
    Golden::Matched
}

fn golden_gallery(theme: &str) {
    let fig = figure(theme);
    let png = fig.render_to_png_bytes(&textless(&fig)).expect("render png bytes");
    match check_golden(&format!("gallery_{theme}"), &png) {
        Golden::Blessed(path) => eprintln!("[snapshot] blessed {} ({} bytes)", path.display(), png.len()),
        Golden::Matched => {}
        Golden::Absent(path) => eprintln!("[snapshot] no golden at {}; run with UPDATE_SNAPSHOTS=1", path.display()),
    }
}

#[test]
fn liquid_gallery_matches_golden_when_blessed() {
    golden_gallery("liquid");
}

#[test]
fn plasma_gallery_matches_golden_when_blessed() {
    golden_gallery("plasma");
}

#[test]
fn png_and_rgba_outputs_agree() {
    let fig = figure("gas");
    let opts = textless(&fig);
    let png = fig.render_to_png_bytes(&opts).unwrap();
    let (rgba, w, h, _) = fig.render_to_rgba8(&opts).unwrap();

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (w, h));
    assert!(decoded.as_raw() == &rgba, "PNG and RGBA renders disagree");
}

#[test]
fn rendering_is_repeatable() {
    let fig = figure("solid");
    let opts = textless(&fig);
    assert_eq!(fig.render_to_png_bytes(&opts).unwrap(), figure("solid").render_to_png_bytes(&opts).unwrap());
}
