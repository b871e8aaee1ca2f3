use super::*;

const AREA: PlotArea = PlotArea { left: 40.0, top: 10.0, width: 200.0, height: 100.0 };

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// =============================================================
// Axis ticks
// =============================================================

#[test]
fn nice_step_picks_one_two_five_sequence() {
    assert_eq!(nice_step(8, 4), 2);
    assert_eq!(nice_step(23, 4), 10);
    assert_eq!(nice_step(15, 4), 5);
    assert_eq!(nice_step(0, 4), 1);
}

#[test]
fn axis_ticks_cover_peak() {
    assert_eq!(axis_ticks(8, 4), [0, 2, 4, 6, 8]);
    assert_eq!(axis_ticks(23, 4), [0, 10, 20, 30]);
    assert_eq!(axis_ticks(0, 4), [0, 1]);
}

#[test]
fn value_y_maps_zero_to_bottom_and_max_to_top() {
    assert!(approx(value_y(0, 10, AREA), AREA.bottom()));
    assert!(approx(value_y(10, 10, AREA), AREA.top));
    assert!(approx(value_y(5, 10, AREA), 60.0));
}

#[test]
fn band_centers_split_width_evenly() {
    assert!(approx(band_center_x(0, 4, AREA), 65.0));
    assert!(approx(band_center_x(3, 4, AREA), 215.0));
}

// =============================================================
// Bars
// =============================================================

#[test]
fn single_series_bars_scale_to_axis() {
    let bars = grouped_bars(&[vec![5, 10]], 10, AREA);
    assert_eq!(bars.len(), 1);
    let [half, full] = [bars[0][0], bars[0][1]];
    assert!(approx(full.height, 100.0));
    assert!(approx(full.y, AREA.top));
    assert!(approx(half.height, 50.0));
    assert!(approx(half.x, 40.0 + 100.0 * BAND_PADDING));
    assert!(approx(half.width, 80.0));
}

#[test]
fn grouped_bars_sit_side_by_side_within_band() {
    let bars = grouped_bars(&[vec![4, 6], vec![2, 5]], 8, AREA);
    let created = bars[0][1];
    let resolved = bars[1][1];
    assert!(approx(resolved.x, created.x + created.width));
    assert!(resolved.x + resolved.width <= AREA.right() + 1e-9);
}

#[test]
fn short_series_pad_with_zero_height() {
    let bars = grouped_bars(&[vec![1, 2, 3], vec![1]], 3, AREA);
    assert_eq!(bars[1].len(), 3);
    assert!(approx(bars[1][2].height, 0.0));
}

#[test]
fn zero_axis_max_renders_flat_bars() {
    let bars = grouped_bars(&[vec![3]], 0, AREA);
    assert!(approx(bars[0][0].height, 0.0));
    assert!(grouped_bars(&[], 10, AREA).is_empty());
}

// =============================================================
// Pie
// =============================================================

#[test]
fn pie_arcs_follow_value_order() {
    let arcs = pie_arcs(&[1, 1], 100.0, 100.0, 50.0);
    assert_eq!(arcs.len(), 2);
    // First half sits to the right of center, second to the left.
    assert!(arcs[0].label_x > 100.0);
    assert_eq!(arcs[0].label_anchor, "start");
    assert!(arcs[1].label_x < 100.0);
    assert_eq!(arcs[1].label_anchor, "end");
    assert!(arcs[0].path.starts_with("M 100.00 100.00 L 100.00 50.00"));
}

#[test]
fn full_circle_slice_uses_two_arcs() {
    let arcs = pie_arcs(&[0, 7], 50.0, 50.0, 20.0);
    assert!(arcs[0].path.is_empty());
    assert_eq!(arcs[1].path.matches(" A ").count(), 2);
}

#[test]
fn large_slice_sets_large_arc_flag() {
    let arcs = pie_arcs(&[3, 1], 0.0, 0.0, 10.0);
    assert!(arcs[0].path.contains(" 0 1 1 "));
    assert!(arcs[1].path.contains(" 0 0 1 "));
}

#[test]
fn empty_total_yields_empty_paths() {
    let arcs = pie_arcs(&[0, 0], 0.0, 0.0, 10.0);
    assert!(arcs.iter().all(|a| a.path.is_empty()));
    assert!(pie_arcs(&[], 0.0, 0.0, 10.0).is_empty());
}

#[test]
fn coord_rounds_to_two_places() {
    assert_eq!(coord(1.0 / 3.0), "0.33");
    assert_eq!(coord(-2.0), "-2.00");
}
