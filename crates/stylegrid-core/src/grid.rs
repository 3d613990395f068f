// File: crates/stylegrid-core/src/grid.rs
// Summary: Evenly spaced sequences and "nice" tick placement.

/// `steps` evenly spaced values from `start` to `end` inclusive.
/// One step yields `[start]`; zero steps yield nothing.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            (0..steps)
                .map(|i| if i + 1 == steps { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Round `raw` to 1, 2, 2.5 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let exp = raw.log10().floor();
    let base = 10f64.powf(exp);
    let frac = raw / base;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 2.5 {
        2.5
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Tick positions covering `[min, max]` with roughly `target` intervals.
/// Works for reversed ranges; returns ascending positions.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = hi - lo;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return vec![lo];
    }
    let step = nice_step(span / target as f64);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            // snap -0.0 and float dust to a clean zero
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect()
}

/// Format a tick value with just enough decimals for its spacing.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = (0..=6usize)
        .find(|&d| {
            let scaled = step.abs() * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6
        })
        .unwrap_or(6);
    let s = format!("{value:.decimals$}");
    // typographic minus for negatives
    if s.starts_with('-') { s.replacen('-', "\u{2212}", 1) } else { s }
}
