//! Plot geometry shared by the chart renderers: canvas size, linear scales
//! and tick placement.

use serde::Serialize;

pub const WIDTH: f64 = 1000.0;
pub const HEIGHT: f64 = 600.0;

/// Drawing area inside the canvas margins.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    /// Default margins; `bottom_margin` grows for rotated category labels.
    pub fn with_bottom_margin(bottom_margin: f64) -> Self {
        Self {
            left: 90.0,
            top: 60.0,
            right: WIDTH - 30.0,
            bottom: HEIGHT - bottom_margin,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

impl Default for PlotArea {
    fn default() -> Self {
        Self::with_bottom_margin(70.0)
    }
}

/// Maps a data interval onto a pixel interval.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Ticks that fall inside the domain.
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        let (lo, hi) = self.domain;
        let eps = (hi - lo).abs() * 1e-9;
        nice_ticks(lo, hi, target)
            .into_iter()
            .filter(|tick| *tick >= lo - eps && *tick <= hi + eps)
            .collect()
    }
}

/// A tick ready for a template: pixel position plus label.
#[derive(Debug, Clone, Serialize)]
pub struct Tick {
    pub pos: String,
    pub label: String,
}

pub fn axis_ticks(scale: &LinearScale, target: usize) -> Vec<Tick> {
    scale
        .ticks(target)
        .into_iter()
        .map(|value| Tick {
            pos: px(scale.map(value)),
            label: format_number(value),
        })
        .collect()
}

/// Round a span to 1, 2, 5 or 10 times a power of ten.
fn nice_num(span: f64, round: bool) -> f64 {
    let exponent = span.log10().floor();
    let fraction = span / 10f64.powf(exponent);
    let nice = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * 10f64.powf(exponent)
}

/// Evenly spaced round tick values covering `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || target < 2 {
        return vec![min];
    }

    let span = nice_num(max - min, false);
    let step = nice_num(span / (target - 1) as f64, true);
    let start = (min / step).floor() * step;
    let end = (max / step).ceil() * step;

    let count = ((end - start) / step).round() as usize;
    (0..=count)
        .map(|i| {
            let value = start + step * i as f64;
            // snap away float noise such as 0.30000000000000004
            (value / step).round() * step
        })
        .collect()
}

/// Upper bound for a count axis, leaving headroom above the tallest bar.
pub fn count_axis_max(max_count: usize) -> f64 {
    if max_count == 0 {
        return 1.0;
    }
    let ticks = nice_ticks(0.0, max_count as f64 * 1.05, 6);
    ticks.last().copied().unwrap_or(max_count as f64)
}

/// Domain padded by a fraction of its span on both sides, widened around a
/// single value.
pub fn padded_domain(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    if max > min {
        let pad = (max - min) * fraction;
        (min - pad, max + pad)
    } else {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.05 };
        (min - pad, max + pad)
    }
}

pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

pub fn px(value: f64) -> String {
    format!("{:.2}", value)
}
