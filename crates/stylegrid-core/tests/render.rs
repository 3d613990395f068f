// File: crates/stylegrid-core/tests/render.rs
// Purpose: Raster output: PNG encoding, RGBA buffer shape, background color and the PNG writer display.

use stylegrid_core::{compose, Display, GalleryConfig, PngWriter, RenderOptions, Style, ThemeDriver};

fn no_text(width: i32, height: i32) -> RenderOptions {
    RenderOptions { width, height, draw_labels: false }
}

#[test]
fn png_bytes_have_png_magic() {
    let fig = compose("liquid", &Style::liquid(), &GalleryConfig::default()).unwrap();
    let bytes = fig.render_to_png_bytes(&no_text(740, 140)).unwrap();
    assert!(bytes.len() > 8);
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (740, 140));
}

#[test]
fn rgba_buffer_matches_size_and_background() {
    let style = Style::liquid();
    let fig = compose("liquid", &style, &GalleryConfig::default()).unwrap();
    let (px, w, h, stride) = fig.render_to_rgba8(&no_text(1480, 280)).unwrap();

    assert_eq!((w, h), (1480, 280));
    assert_eq!(stride, 1480 * 4);
    assert_eq!(px.len(), (w * h * 4) as usize);

    // top-left corner sits in the title band, outside every panel
    let bg = style.figure_face;
    assert_eq!(&px[..4], &[bg.r(), bg.g(), bg.b(), 255]);
    assert_eq!(&px[..3], &[238, 246, 251]);
}

#[test]
fn themes_render_different_pixels() {
    let config = GalleryConfig::default();
    let opts = no_text(400, 120);
    let a = compose("gas", &Style::gas(), &config).unwrap().render_to_rgba8(&opts).unwrap().0;
    let b = compose("plasma", &Style::plasma(), &config).unwrap().render_to_rgba8(&opts).unwrap().0;
    assert_ne!(a, b);
}

#[test]
fn invalid_surface_size_is_a_render_error() {
    let fig = compose("solid", &Style::solid(), &GalleryConfig::default()).unwrap();
    assert!(matches!(
        fig.render_to_png_bytes(&no_text(0, 100)),
        Err(stylegrid_core::Error::Render(_))
    ));
}

#[test]
fn png_writer_names_files_by_theme() {
    assert_eq!(PngWriter::file_name_for("liquid"), "stylegrid_liquid.png");
    assert_eq!(PngWriter::file_name_for("my theme/2"), "stylegrid_my_theme_2.png");

    let out = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target/test_out/png_writer");
    let mut writer = PngWriter::new(&out).without_labels();
    let driver = ThemeDriver::default();
    let figures = driver.build_figures(&["liquid", "plasma"]).unwrap();
    writer.show(figures).unwrap();

    let written = writer.written();
    assert_eq!(written.len(), 2);
    assert_eq!(written[0], out.join("stylegrid_liquid.png"));
    assert_eq!(written[1], out.join("stylegrid_plasma.png"));
    for path in written {
        let bytes = std::fs::read(path).expect("read written png");
        assert_eq!(&bytes[..4], b"\x89PNG");
    }
}
