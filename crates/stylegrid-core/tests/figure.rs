// File: crates/stylegrid-core/tests/figure.rs
// Purpose: Figure composition: panel assignment, title color and data shared across themes.

use approx::assert_abs_diff_eq;
use skia_safe as skia;
use stylegrid_core::figure::{DARK_TITLE, LIGHT_TITLE};
use stylegrid_core::{compose, title_color_for, Artist, GalleryConfig, PanelRole, Style};

fn assert_color4f_eq(got: skia::Color4f, want: skia::Color4f) {
    assert_abs_diff_eq!(got.r, want.r, epsilon = 1e-6);
    assert_abs_diff_eq!(got.g, want.g, epsilon = 1e-6);
    assert_abs_diff_eq!(got.b, want.b, epsilon = 1e-6);
}

#[test]
fn title_color_follows_background_brightness() {
    assert_color4f_eq(title_color_for(skia::Color::BLACK), skia::Color4f::new(0.8, 0.8, 1.0, 1.0));
    assert_color4f_eq(
        title_color_for(skia::Color::WHITE),
        skia::Color4f::new(19.0 / 256.0, 6.0 / 256.0, 84.0 / 256.0, 1.0),
    );
    // saturated but bright: value is 1.0
    assert_color4f_eq(title_color_for(skia::Color::from_rgb(200, 0, 0)), DARK_TITLE);
    assert_color4f_eq(title_color_for(skia::Color::from_rgb(60, 20, 90)), LIGHT_TITLE);
}

#[test]
fn composed_figure_has_four_designated_panels() {
    let config = GalleryConfig::default();
    let fig = compose("liquid", &Style::liquid(), &config).unwrap();

    assert_eq!(fig.title(), "liquid");
    assert_eq!(fig.panels().len(), 4);
    assert!(fig.is_fully_populated());
    assert_eq!(fig.panel(0, 0).unwrap().role(), Some(PanelRole::Scatter));
    assert_eq!(fig.panel(0, 1).unwrap().role(), Some(PanelRole::Lines));
    assert_eq!(fig.panel(1, 0).unwrap().role(), Some(PanelRole::Bars));
    assert_eq!(fig.panel(1, 1).unwrap().role(), Some(PanelRole::ImagePatch));
    assert!(fig.panel(2, 0).is_none());

    assert_color4f_eq(fig.title_color(), DARK_TITLE);
    assert_eq!(fig.size(), (config.figure_width, config.figure_height));
}

#[test]
fn dark_theme_gets_light_title() {
    let fig = compose("plasma", &Style::plasma(), &GalleryConfig::default()).unwrap();
    assert_color4f_eq(fig.title_color(), LIGHT_TITLE);
}

#[test]
fn themes_share_data_but_not_colors() {
    let config = GalleryConfig::default();
    let a = compose("liquid", &Style::liquid(), &config).unwrap();
    let b = compose("plasma", &Style::plasma(), &config).unwrap();

    let points = |fig: &stylegrid_core::Figure| -> Vec<Vec<(f64, f64)>> {
        fig.panel_for(PanelRole::Scatter)
            .unwrap()
            .artists()
            .iter()
            .filter_map(|art| match art {
                Artist::Scatter { points, .. } => Some(points.clone()),
                _ => None,
            })
            .collect()
    };
    assert_eq!(points(&a), points(&b));

    let image = |fig: &stylegrid_core::Figure| match &fig.panel_for(PanelRole::ImagePatch).unwrap().artists()[0] {
        Artist::Image { values, .. } => values.clone(),
        other => panic!("unexpected {}", other.kind_name()),
    };
    assert_eq!(image(&a), image(&b));

    let first_color = |fig: &stylegrid_core::Figure| fig.panel_for(PanelRole::Scatter).unwrap().artists()[0].color();
    assert_ne!(first_color(&a), first_color(&b));
}

#[test]
fn invalid_seed_aborts_composition() {
    let config = GalleryConfig { seed: u64::MAX, ..GalleryConfig::default() };
    assert!(matches!(
        compose("liquid", &Style::liquid(), &config),
        Err(stylegrid_core::Error::InvalidParameter(_))
    ));
}

#[test]
fn image_panel_keeps_the_patch_round() {
    use stylegrid_core::scale::LinearScale;
    use stylegrid_core::{RenderOptions, ViewState};

    let fig = compose("solid", &Style::solid(), &GalleryConfig::default()).unwrap();
    let panel = fig.panel_for(PanelRole::ImagePatch).unwrap();
    assert!(panel.equal_aspect());

    let opts = RenderOptions::default();
    let (r, c) = PanelRole::ImagePatch.cell();
    let rect = fig.plot_rects(&opts)[r * 2 + c];
    let view = ViewState::from_panel(panel);
    let sx = LinearScale::horizontal(view.x_min, view.x_max, rect.left as f32, rect.right as f32);
    let sy = LinearScale::vertical(view.y_min, view.y_max, rect.top as f32, rect.bottom as f32, true);

    let Artist::Circle { center: (cx, cy), radius, .. } = &panel.artists()[1] else { panic!("circle expected") };
    let w = (sx.to_px(cx + radius) - sx.to_px(cx - radius)).abs();
    let h = (sy.to_px(cy + radius) - sy.to_px(cy - radius)).abs();
    assert!((w - h).abs() <= 1.0, "circle drawn as {w}x{h} px");

    // 20x20 heat-map: square cells
    assert!((rect.width() - rect.height()).abs() <= 1, "image box {rect:?}");

    // other panels still fill their cell's plot area
    let lines = fig.plot_rects(&opts)[1];
    assert!(lines.width() > 4 * lines.height());
}
