//! Inline SVG pie and bar charts for the dashboard.
//!
//! DESIGN
//! ======
//! Geometry lives in `util::chart`; these components only map layout output
//! to SVG elements. Fill colors come from CSS classes named after each
//! dataset's color token.

use leptos::prelude::*;

use issues::metrics::Slice;

use crate::util::chart::{PlotArea, axis_ticks, band_center_x, coord, grouped_bars, pie_arcs, value_y};

const PIE_WIDTH: f64 = 360.0;
const PIE_HEIGHT: f64 = 260.0;
const PIE_RADIUS: f64 = 80.0;

const BAR_WIDTH: f64 = 480.0;
const BAR_HEIGHT: f64 = 260.0;
const BAR_AREA: PlotArea = PlotArea { left: 36.0, top: 12.0, width: 432.0, height: 208.0 };
const AXIS_TICK_TARGET: u32 = 4;

/// One series of a bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    pub name: &'static str,
    /// CSS color token, e.g. `status-done`.
    pub color: &'static str,
    pub values: Vec<u32>,
}

/// Pie chart with `Name: value` labels next to each wedge.
#[component]
pub fn PieChart(slices: &'static [Slice]) -> impl IntoView {
    let values: Vec<u32> = slices.iter().map(|s| s.value).collect();
    let arcs = pie_arcs(&values, PIE_WIDTH / 2.0, PIE_HEIGHT / 2.0, PIE_RADIUS);

    let wedges = slices
        .iter()
        .zip(arcs)
        .map(|(slice, arc)| {
            view! {
                <g class=format!("chart__slice chart__fill--{}", slice.color)>
                    <path d=arc.path>
                        <title>{format!("{}: {}", slice.name, slice.value)}</title>
                    </path>
                    <text
                        class="chart__label"
                        x=coord(arc.label_x)
                        y=coord(arc.label_y)
                        text-anchor=arc.label_anchor
                        dominant-baseline="middle"
                    >
                        {format!("{}: {}", slice.name, slice.value)}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="chart chart--pie" viewBox=format!("0 0 {PIE_WIDTH} {PIE_HEIGHT}") role="img">
            {wedges}
        </svg>
    }
}

/// Vertical bar chart with a dashed grid and one bar per series per category.
#[component]
pub fn BarChart(
    categories: Vec<&'static str>,
    series: Vec<BarSeries>,
    #[prop(optional)] legend: bool,
) -> impl IntoView {
    let peak = series.iter().flat_map(|s| s.values.iter().copied()).max().unwrap_or(0);
    let ticks = axis_ticks(peak, AXIS_TICK_TARGET);
    let axis_max = ticks.last().copied().unwrap_or(0);
    let values: Vec<Vec<u32>> = series.iter().map(|s| s.values.clone()).collect();
    let layout = grouped_bars(&values, axis_max, BAR_AREA);
    let band_count = categories.len();

    let grid = ticks
        .iter()
        .map(|&tick| {
            let y = coord(value_y(tick, axis_max, BAR_AREA));
            view! {
                <line
                    class="chart__grid"
                    x1=coord(BAR_AREA.left)
                    x2=coord(BAR_AREA.right())
                    y1=y.clone()
                    y2=y.clone()
                />
                <text class="chart__tick" x=coord(BAR_AREA.left - 6.0) y=y text-anchor="end" dominant-baseline="middle">
                    {tick.to_string()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let labels = categories
        .iter()
        .enumerate()
        .map(|(i, name)| {
            view! {
                <text
                    class="chart__tick"
                    x=coord(band_center_x(i, band_count, BAR_AREA))
                    y=coord(BAR_AREA.bottom() + 16.0)
                    text-anchor="middle"
                >
                    {*name}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let bars = series
        .iter()
        .zip(layout)
        .flat_map(|(s, rects)| {
            let fill = format!("chart__bar chart__fill--{}", s.color);
            rects.into_iter().zip(s.values.clone()).zip(categories.clone()).map(move |((rect, value), category)| {
                view! {
                    <rect
                        class=fill.clone()
                        x=coord(rect.x)
                        y=coord(rect.y)
                        width=coord(rect.width)
                        height=coord(rect.height)
                        rx="3"
                    >
                        <title>{format!("{category} {}: {value}", s.name)}</title>
                    </rect>
                }
            })
        })
        .collect::<Vec<_>>();

    let legend_row = legend.then(|| {
        let items = series
            .iter()
            .map(|s| {
                view! {
                    <span class="chart-legend__item">
                        <span class=format!("chart-legend__swatch chart__bg--{}", s.color)></span>
                        {s.name}
                    </span>
                }
            })
            .collect::<Vec<_>>();
        view! { <div class="chart-legend">{items}</div> }
    });

    view! {
        <div class="chart-wrap">
            <svg class="chart chart--bar" viewBox=format!("0 0 {BAR_WIDTH} {BAR_HEIGHT}") role="img">
                {grid}
                <line
                    class="chart__axis"
                    x1=coord(BAR_AREA.left)
                    x2=coord(BAR_AREA.right())
                    y1=coord(BAR_AREA.bottom())
                    y2=coord(BAR_AREA.bottom())
                />
                {bars}
                {labels}
            </svg>
            {legend_row}
        </div>
    }
}
