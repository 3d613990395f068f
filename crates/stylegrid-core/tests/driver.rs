// File: crates/stylegrid-core/tests/driver.rs
// Purpose: Theme driver builds every figure before one display hand-off, and aborts on unknown themes.

use std::io;
use std::sync::{Arc, Mutex};

use stylegrid_core::{open_figures, Display, Error, Figure, GalleryConfig, Headless, StyleRegistry, ThemeDriver};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Default)]
struct Recorder {
    calls: usize,
    titles: Vec<String>,
    all_populated: bool,
}

impl Display for Recorder {
    fn show(&mut self, figures: Vec<Figure>) -> stylegrid_core::Result<()> {
        self.calls += 1;
        self.all_populated = figures.iter().all(Figure::is_fully_populated);
        self.titles = figures.iter().map(|f| f.title().to_string()).collect();
        Ok(())
    }
}

#[test]
fn one_show_call_with_figures_in_order() {
    let driver = ThemeDriver::default();
    let mut display = Recorder::default();
    driver.run(&["liquid", "solid"], &mut display).unwrap();

    assert_eq!(display.calls, 1);
    assert_eq!(display.titles, vec!["liquid", "solid"]);
    assert!(display.all_populated);
}

#[test]
fn default_run_covers_configured_themes() {
    let driver = ThemeDriver::default();
    let mut display = Recorder::default();
    driver.run_default(&mut display).unwrap();
    assert_eq!(display.calls, 1);
    assert_eq!(display.titles, driver.config().themes);
}

#[test]
fn unknown_theme_aborts_before_display() {
    let driver = ThemeDriver::default();
    let mut display = Recorder::default();
    let err = driver.run(&["liquid", "vapor"], &mut display).unwrap_err();

    assert!(matches!(err, Error::StyleNotFound(ref n) if n == "vapor"), "got {err}");
    assert_eq!(display.calls, 0);
}

#[test]
fn empty_registry_fails_first_theme() {
    let driver = ThemeDriver::new(StyleRegistry::empty(), GalleryConfig::default());
    assert!(matches!(driver.build_figures(&["gas"]), Err(Error::StyleNotFound(_))));
}

#[test]
fn theme_lookup_is_case_insensitive_and_keeps_requested_title() {
    let driver = ThemeDriver::default();
    let figures = driver.build_figures(&["Gas"]).unwrap();
    assert_eq!(figures.len(), 1);
    assert_eq!(figures[0].title(), "Gas");
    assert_eq!(figures[0].style().name, "gas");
}

#[test]
fn headless_display_accepts_figures() {
    let driver = ThemeDriver::default();
    driver.run(&["plasma"], &mut Headless).unwrap();
}

/// Collects formatted log lines for inspection.
#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn warnings_while(f: impl FnOnce()) -> String {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

const OPEN_WARNING: &str = "more figures open than the warning threshold";

#[test]
fn threshold_is_raised_to_the_run_size() {
    let config = GalleryConfig { max_open_warning: 1, ..GalleryConfig::default() };
    let driver = ThemeDriver::new(StyleRegistry::builtin(), config);
    assert_eq!(driver.open_warning_threshold(3), 3);
    assert_eq!(ThemeDriver::default().open_warning_threshold(3), 20);
}

#[test]
fn figures_held_elsewhere_trip_the_open_figure_warning() {
    let config = GalleryConfig { max_open_warning: 1, ..GalleryConfig::default() };
    let driver = ThemeDriver::new(StyleRegistry::builtin(), config);

    // two figures kept alive outside the run push the count past max(1, 3)
    let held = driver.build_figures(&["gas", "gas"]).unwrap();
    assert!(open_figures() >= held.len());

    let logs = warnings_while(|| {
        let figures = driver.build_figures(&["liquid", "solid", "gas"]).unwrap();
        assert_eq!(figures.len(), 3);
    });
    assert!(logs.contains(OPEN_WARNING), "no warning in {logs:?}");
    drop(held);
}

#[test]
fn generous_threshold_stays_quiet() {
    let config = GalleryConfig { max_open_warning: 10_000, ..GalleryConfig::default() };
    let driver = ThemeDriver::new(StyleRegistry::builtin(), config);
    let logs = warnings_while(|| {
        driver.build_figures(&["liquid", "plasma"]).unwrap();
    });
    assert!(!logs.contains(OPEN_WARNING), "unexpected warning in {logs:?}");
}

#[test]
fn cloned_figures_count_as_open() {
    let fig = stylegrid_core::compose("gas", &stylegrid_core::Style::gas(), &GalleryConfig::default()).unwrap();
    let copy = fig.clone();
    assert!(open_figures() >= 2);
    drop(fig);
    drop(copy);
}
