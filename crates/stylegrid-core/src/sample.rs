// File: crates/stylegrid-core/src/sample.rs
// Summary: Seeded sample generator producing reproducible 2-D arrays (normal, uniform int, uniform float).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::{Error, Result};

/// Seed used for every figure so all themes draw identical data.
pub const FIGURE_SEED: u64 = 96_917_002;

/// Rows x columns of a requested sample array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn validate(self) -> Result<Self> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::param(format!(
                "shape must have non-zero dimensions, got {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(self)
    }
}

/// Row-major 2-D array of samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Samples {
    shape: Shape,
    data: Vec<f64>,
}

impl Samples {
    /// Wrap existing values; `data.len()` must match the shape.
    pub fn from_vec(shape: Shape, data: Vec<f64>) -> Result<Self> {
        let shape = shape.validate()?;
        if data.len() != shape.len() {
            return Err(Error::param(format!(
                "{} values do not fill a {}x{} array",
                data.len(),
                shape.rows,
                shape.cols
            )));
        }
        Ok(Self { shape, data })
    }

    pub fn shape(&self) -> Shape { self.shape }
    pub fn rows(&self) -> usize { self.shape.rows }
    pub fn cols(&self) -> usize { self.shape.cols }
    pub fn as_slice(&self) -> &[f64] { &self.data }

    /// Row `r` as a slice. Panics when `r >= rows`, like slice indexing.
    pub fn row(&self, r: usize) -> &[f64] {
        let start = r * self.shape.cols;
        &self.data[start..start + self.shape.cols]
    }

    pub fn get(&self, r: usize, c: usize) -> Option<f64> {
        if r < self.shape.rows && c < self.shape.cols {
            Some(self.data[r * self.shape.cols + c])
        } else {
            None
        }
    }

    /// Smallest and largest value; arrays are never empty.
    pub fn min_max(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

/// Deterministic pseudo-random stream. Same seed and same call sequence
/// yield bit-identical arrays.
pub struct SampleGenerator {
    rng: StdRng,
    seed: u64,
}

impl SampleGenerator {
    /// Seeds must fit in 32 bits.
    pub fn new(seed: u64) -> Result<Self> {
        if seed > u64::from(u32::MAX) {
            return Err(Error::param(format!("seed {seed} does not fit in 32 bits")));
        }
        Ok(Self { rng: StdRng::seed_from_u64(seed), seed })
    }

    pub fn seed(&self) -> u64 { self.seed }

    /// Normally distributed values with the given mean and standard deviation.
    pub fn normal(&mut self, mean: f64, std_dev: f64, shape: Shape) -> Result<Samples> {
        let shape = shape.validate()?;
        if !mean.is_finite() {
            return Err(Error::param(format!("mean must be finite, got {mean}")));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(Error::param(format!(
                "standard deviation must be finite and non-negative, got {std_dev}"
            )));
        }
        let dist = Normal::new(mean, std_dev).map_err(|e| Error::param(e.to_string()))?;
        let data = (0..shape.len()).map(|_| dist.sample(&mut self.rng)).collect();
        Ok(Samples { shape, data })
    }

    /// Integers drawn uniformly from the half-open range `[low, high)`.
    pub fn uniform_int(&mut self, low: i64, high: i64, shape: Shape) -> Result<Samples> {
        let shape = shape.validate()?;
        if low >= high {
            return Err(Error::param(format!("empty integer range [{low}, {high})")));
        }
        let data = (0..shape.len())
            .map(|_| self.rng.random_range(low..high) as f64)
            .collect();
        Ok(Samples { shape, data })
    }

    /// Floats drawn uniformly from `[0, 1)`.
    pub fn uniform(&mut self, shape: Shape) -> Result<Samples> {
        let shape = shape.validate()?;
        let data = (0..shape.len()).map(|_| self.rng.random::<f64>()).collect();
        Ok(Samples { shape, data })
    }
}
