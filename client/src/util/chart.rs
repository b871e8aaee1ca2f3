//! Layout math for the dashboard's inline SVG charts.
//!
//! All coordinates are in SVG user units. Angles start at 12 o'clock and run
//! clockwise.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use std::f64::consts::{FRAC_PI_2, TAU};

/// Fraction of each category band left empty on either side of its bars.
pub const BAND_PADDING: f64 = 0.1;

/// Distance of pie labels from the center, relative to the radius.
pub const PIE_LABEL_OFFSET: f64 = 1.18;

/// Rectangle inside the SVG that holds bars, excluding axis gutters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieArc {
    /// SVG path data; empty for zero-valued slices.
    pub path: String,
    pub label_x: f64,
    pub label_y: f64,
    /// `text-anchor` keeping the label outside the pie.
    pub label_anchor: &'static str,
}

/// Pick a 1/2/5 x 10^k step so that `peak` fits in roughly `target` ticks.
pub fn nice_step(peak: u32, target: u32) -> u32 {
    let raw = f64::from(peak) / f64::from(target.max(1));
    let mut magnitude = 1_u32;
    loop {
        for factor in [1, 2, 5] {
            let step = magnitude.saturating_mul(factor);
            if f64::from(step) >= raw {
                return step;
            }
        }
        magnitude = magnitude.saturating_mul(10);
    }
}

/// Y-axis tick values from zero up to the first step at or above `peak`.
pub fn axis_ticks(peak: u32, target: u32) -> Vec<u32> {
    let step = nice_step(peak, target);
    let top = peak.div_ceil(step).max(1).saturating_mul(step);
    (0..=top).step_by(step as usize).collect()
}

/// Vertical position of `value` on an axis topped at `axis_max`.
pub fn value_y(value: u32, axis_max: u32, area: PlotArea) -> f64 {
    area.bottom() - scaled_height(value, axis_max, area)
}

/// Horizontal center of category band `index`.
#[allow(clippy::cast_precision_loss)]
pub fn band_center_x(index: usize, band_count: usize, area: PlotArea) -> f64 {
    let band = area.width / band_count.max(1) as f64;
    area.left + band * (index as f64 + 0.5)
}

/// Lay out side-by-side bars, one group per category.
///
/// `series[s][g]` is the value of series `s` in category `g`. The result has
/// the same shape. Missing values in shorter series render as zero height.
#[allow(clippy::cast_precision_loss)]
pub fn grouped_bars(series: &[Vec<u32>], axis_max: u32, area: PlotArea) -> Vec<Vec<BarRect>> {
    let groups = series.iter().map(Vec::len).max().unwrap_or(0);
    if groups == 0 {
        return series.iter().map(|_| Vec::new()).collect();
    }
    let band = area.width / groups as f64;
    let usable = band * (1.0 - 2.0 * BAND_PADDING);
    let bar_width = usable / series.len() as f64;

    series
        .iter()
        .enumerate()
        .map(|(s, values)| {
            (0..groups)
                .map(|g| {
                    let value = values.get(g).copied().unwrap_or(0);
                    let height = scaled_height(value, axis_max, area);
                    BarRect {
                        x: area.left + band * g as f64 + band * BAND_PADDING + bar_width * s as f64,
                        y: area.bottom() - height,
                        width: bar_width,
                        height,
                    }
                })
                .collect()
        })
        .collect()
}

/// Pie wedges for `values` around (`cx`, `cy`).
pub fn pie_arcs(values: &[u32], cx: f64, cy: f64, radius: f64) -> Vec<PieArc> {
    let total: u32 = values.iter().sum();
    let mut start = 0.0_f64;
    values
        .iter()
        .map(|&value| {
            let sweep = if total == 0 { 0.0 } else { TAU * f64::from(value) / f64::from(total) };
            let end = start + sweep;
            let mid = start + sweep / 2.0;
            let (label_x, label_y) = polar(cx, cy, radius * PIE_LABEL_OFFSET, mid);
            let path = wedge_path(cx, cy, radius, start, end);
            start = end;
            PieArc {
                path,
                label_x,
                label_y,
                label_anchor: if mid <= std::f64::consts::PI { "start" } else { "end" },
            }
        })
        .collect()
}

/// Format a coordinate for an SVG attribute.
pub fn coord(value: f64) -> String {
    format!("{value:.2}")
}

fn scaled_height(value: u32, axis_max: u32, area: PlotArea) -> f64 {
    if axis_max == 0 {
        return 0.0;
    }
    area.height * (f64::from(value.min(axis_max)) / f64::from(axis_max))
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (cx + radius * theta.cos(), cy + radius * theta.sin())
}

fn wedge_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep <= 0.0 {
        return String::new();
    }
    if sweep >= TAU - 1e-9 {
        // A single arc cannot close on itself; split the circle in two.
        let (tx, ty) = polar(cx, cy, radius, 0.0);
        let (bx, by) = polar(cx, cy, radius, std::f64::consts::PI);
        return format!(
            "M {} {} A {r} {r} 0 1 1 {} {} A {r} {r} 0 1 1 {} {} Z",
            coord(tx),
            coord(ty),
            coord(bx),
            coord(by),
            coord(tx),
            coord(ty),
            r = coord(radius),
        );
    }
    let (x0, y0) = polar(cx, cy, radius, start);
    let (x1, y1) = polar(cx, cy, radius, end);
    let large_arc = u8::from(sweep > std::f64::consts::PI);
    format!(
        "M {} {} L {} {} A {r} {r} 0 {large_arc} 1 {} {} Z",
        coord(cx),
        coord(cy),
        coord(x0),
        coord(y0),
        coord(x1),
        coord(y1),
        r = coord(radius),
    )
}
