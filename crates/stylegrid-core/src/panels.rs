// File: crates/stylegrid-core/src/panels.rs
// Summary: The four panel renderers (scatter, sigmoid lines, grouped bars, image + patch) and their parameters.

use crate::artist::Marker;
use crate::axes::{Axes, BarOptions, CirclePatch, ImageOptions, LineOptions, PanelRole, ScatterOptions};
use crate::error::{Error, Result};
use crate::grid::linspace;
use crate::sample::{SampleGenerator, Shape};

/// One normally distributed point cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cluster {
    pub mean: f64,
    pub std_dev: f64,
    pub marker: Marker,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterParams {
    pub n_samples: usize,
    pub clusters: Vec<Cluster>,
    pub x_label: String,
    pub title: String,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            n_samples: 100,
            clusters: vec![
                Cluster { mean: -0.5, std_dev: 0.75, marker: Marker::Circle },
                Cluster { mean: 0.75, std_dev: 1.0, marker: Marker::Square },
            ],
            x_label: "X-label".to_string(),
            title: "Axes title".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineParams {
    pub n_points: usize,
    pub t_range: (f64, f64),
    pub shift_range: (f64, f64),
    pub amplitude_range: (f64, f64),
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            n_points: 100,
            t_range: (-10.0, 10.0),
            shift_range: (-5.0, 5.0),
            amplitude_range: (1.0, 1.5),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarParams {
    pub n_samples: usize,
    /// Inclusive lower bound of bar heights.
    pub min_value: i64,
    /// Exclusive upper bound of bar heights.
    pub max_value: i64,
    pub width: f64,
    /// Cycle index (`Cn`) of the second series' color.
    pub second_color: usize,
    pub labels: Vec<String>,
    pub legend: [String; 2],
}

impl Default for BarParams {
    fn default() -> Self {
        Self {
            n_samples: 5,
            min_value: 5,
            max_value: 25,
            width: 0.25,
            second_color: 2,
            labels: ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect(),
            legend: ["Sample 1".to_string(), "Sample 2".to_string()],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageParams {
    pub rows: usize,
    pub cols: usize,
    pub patch_center: (f64, f64),
    pub patch_radius: f64,
    pub patch_label: String,
}

impl Default for ImageParams {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            patch_center: (5.0, 5.0),
            patch_radius: 5.0,
            patch_label: "patch".to_string(),
        }
    }
}

/// Two normal point clouds, one 2 x n draw each (row 0 = x, row 1 = y).
pub fn scatter<A: Axes + ?Sized>(ax: &mut A, rng: &mut SampleGenerator, params: &ScatterParams) -> Result<()> {
    ax.claim(PanelRole::Scatter)?;
    for cluster in &params.clusters {
        let xy = rng.normal(cluster.mean, cluster.std_dev, Shape::new(2, params.n_samples))?;
        ax.scatter(xy.row(0), xy.row(1), ScatterOptions { marker: cluster.marker, ..Default::default() })?;
    }
    ax.set_xlabel(&params.x_label);
    ax.set_title(&params.title);
    Ok(())
}

#[inline]
pub fn sigmoid(t: f64, t0: f64) -> f64 {
    1.0 / (1.0 + (-(t - t0)).exp())
}

/// `(shift, amplitude)` of each curve when `count` cycle colors are active.
pub fn curve_parameters(count: usize, params: &LineParams) -> Vec<(f64, f64)> {
    let shifts = linspace(params.shift_range.0, params.shift_range.1, count);
    let amplitudes = linspace(params.amplitude_range.0, params.amplitude_range.1, count);
    shifts.into_iter().zip(amplitudes).collect()
}

/// One shifted, scaled sigmoid per cycle color. Draws no random numbers.
pub fn colored_lines<A: Axes + ?Sized>(ax: &mut A, params: &LineParams) -> Result<()> {
    ax.claim(PanelRole::Lines)?;
    let count = ax.cycle_colors().len();
    if count == 0 {
        return Err(Error::config("style has an empty color cycle"));
    }
    let (t_lo, t_hi) = params.t_range;
    let t = linspace(t_lo, t_hi, params.n_points);
    for (t0, a) in curve_parameters(count, params) {
        let y: Vec<f64> = t.iter().map(|&ti| a * sigmoid(ti, t0)).collect();
        ax.plot(&t, &y, LineOptions::default())?;
    }
    ax.set_xlim(t_lo, t_hi)
}

/// Two grouped bar series with random integer heights, ticks between each pair.
pub fn bar_graphs<A: Axes + ?Sized>(ax: &mut A, rng: &mut SampleGenerator, params: &BarParams) -> Result<()> {
    ax.claim(PanelRole::Bars)?;
    let n = params.n_samples;
    let heights = rng.uniform_int(params.min_value, params.max_value, Shape::new(2, n))?;
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let shifted: Vec<f64> = x.iter().map(|v| v + params.width).collect();

    ax.bar(&x, heights.row(0), BarOptions { width: params.width, ..Default::default() })?;
    let colors = ax.cycle_colors();
    let second = if colors.is_empty() { None } else { Some(colors[params.second_color % colors.len()]) };
    ax.bar(&shifted, heights.row(1), BarOptions { width: params.width, color: second, label: None })?;

    let labels: Vec<&str> = params.labels.iter().map(String::as_str).collect();
    ax.set_xticks(&shifted, Some(labels.as_slice()))?;
    ax.legend(&[params.legend[0].as_str(), params.legend[1].as_str()])
}

/// Uniform random heat-map with a circle on top; both axes lose their ticks.
pub fn image_and_patch<A: Axes + ?Sized>(ax: &mut A, rng: &mut SampleGenerator, params: &ImageParams) -> Result<()> {
    ax.claim(PanelRole::ImagePatch)?;
    let values = rng.uniform(Shape::new(params.rows, params.cols))?;
    ax.imshow(&values, ImageOptions::default())?;
    ax.add_patch(CirclePatch {
        center: params.patch_center,
        radius: params.patch_radius,
        color: None,
        label: Some(params.patch_label.clone()),
    })?;
    ax.set_xticks(&[], None)?;
    ax.set_yticks(&[], None)
}
