//! Panel module - One subplot: a series drawn against its node axis

use std::ops::Range;

use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use tracing::debug;

use super::style::{self, Marker, FONT_FAMILY, GRID_DASH, GRID_GAP, GRID_TICKS, PLOT_BACKGROUND};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::series::{NodeAxis, Series};

/// Fraction of the data span added on each side of an axis.
const RANGE_PADDING: f64 = 0.05;
/// Most decimals a tick label is given.
const MAX_LABEL_DECIMALS: usize = 6;
/// Fraction of the y span, from the top, the legend box may cover.
const LEGEND_BAND: f64 = 0.25;

#[derive(Debug, Clone, Copy)]
pub struct PanelSpec {
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub marker: Marker,
    pub color: RGBColor,
}

impl PanelSpec {
    pub fn latency(color: RGBColor) -> Self {
        Self {
            x_label: "Nodes",
            y_label: "Latency",
            marker: Marker::Diamond,
            color,
        }
    }

    pub fn throughput(color: RGBColor) -> Self {
        Self {
            x_label: "Nodes",
            y_label: "Throughput",
            marker: Marker::Square,
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    UpperLeft,
    UpperRight,
}

impl LegendCorner {
    fn position(self) -> SeriesLabelPosition {
        match self {
            LegendCorner::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendCorner::UpperRight => SeriesLabelPosition::UpperRight,
        }
    }
}

/// x range covering every node count, padded by 5% of the span (at least one node).
pub fn node_range(axis: &NodeAxis) -> Range<f64> {
    let (lo, hi) = match (axis.first(), axis.last()) {
        (Some(lo), Some(hi)) => (lo as f64, hi as f64),
        _ => return 0.0..1.0,
    };
    let pad = ((hi - lo) * RANGE_PADDING).max(1.0);
    (lo - pad)..(hi + pad)
}

/// y range covering every finite value, padded by 5% of the span.
/// A flat series gets one unit of room on either side.
pub fn value_range(series: &Series) -> Range<f64> {
    match series.value_range() {
        Some((lo, hi)) if hi > lo => {
            let pad = (hi - lo) * RANGE_PADDING;
            (lo - pad)..(hi + pad)
        }
        Some((v, _)) => (v - 1.0)..(v + 1.0),
        None => 0.0..1.0,
    }
}

/// Fewest decimals that print every tick exactly, so neighbouring labels never collide.
pub fn label_precision(ticks: &[f64]) -> usize {
    (0..MAX_LABEL_DECIMALS)
        .find(|&d| {
            let scale = 10f64.powi(d as i32);
            ticks.iter().all(|t| {
                let rounded = (t * scale).round() / scale;
                (rounded - t).abs() <= 1e-9 * t.abs().max(1.0)
            })
        })
        .unwrap_or(MAX_LABEL_DECIMALS)
}

/// Node counts are whole numbers; never ask for more than one label per node.
fn x_label_count(range: &Range<f64>) -> usize {
    ((range.end - range.start).floor() as usize + 1).clamp(2, GRID_TICKS)
}

/// Legend goes in whichever upper corner has fewer points under it.
pub fn legend_corner(points: &[(f64, f64)], x_range: &Range<f64>, y_range: &Range<f64>) -> LegendCorner {
    let x_mid = (x_range.start + x_range.end) / 2.0;
    let band = y_range.end - (y_range.end - y_range.start) * LEGEND_BAND;
    let (left, right) = points
        .iter()
        .filter(|(_, y)| *y >= band)
        .fold((0, 0), |(l, r), (x, _)| if *x < x_mid { (l + 1, r) } else { (l, r + 1) });

    if right > left {
        LegendCorner::UpperLeft
    } else {
        LegendCorner::UpperRight
    }
}

/// Width reserved left of the plot for tick labels and the rotated y description.
fn y_label_area(range: &Range<f64>, decimals: usize, font_size: u32) -> u32 {
    let digits = range
        .start
        .abs()
        .max(range.end.abs())
        .log10()
        .floor()
        .max(0.0) as u32
        + 1;
    let sign = u32::from(range.start < 0.0);
    let fraction = if decimals > 0 { decimals as u32 + 1 } else { 0 };
    let chars = digits + sign + fraction;
    (chars.saturating_mul(font_size).saturating_mul(6) / 10)
        .saturating_add(font_size.saturating_mul(2))
        .saturating_add(10)
}

pub fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    spec: &PanelSpec,
    series: &Series,
    config: &ChartConfig,
) -> Result<()> {
    let axis = series.node_axis();
    let points = series.points(&axis)?;
    let segments = series.segments(&axis)?;
    let x_range = node_range(&axis);
    let y_range = value_range(series);

    let x_labels = x_label_count(&x_range);
    let x_ticks = RangedCoordf64::from(x_range.clone()).key_points(x_labels);
    let y_ticks = RangedCoordf64::from(y_range.clone()).key_points(GRID_TICKS);
    let x_decimals = label_precision(&x_ticks);
    let y_decimals = label_precision(&y_ticks);
    debug!(
        series = %series.name,
        ?x_range,
        ?y_range,
        points = points.len(),
        segments = segments.len(),
        "drawing panel"
    );

    let label_font = config.label_font_size as f64;
    let tick_font = (label_font * 0.85).max(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption(series.title(), (FONT_FAMILY, config.title_font_size as f64))
        .margin(10)
        .x_label_area_size(config.label_font_size.saturating_mul(3).saturating_add(10))
        .y_label_area_size(y_label_area(&y_range, y_decimals, config.label_font_size))
        .build_cartesian_2d(x_range.clone(), y_range.clone())?;

    chart.plotting_area().fill(&PLOT_BACKGROUND)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(x_labels)
        .y_labels(GRID_TICKS)
        .x_desc(spec.x_label)
        .y_desc(spec.y_label)
        .axis_desc_style((FONT_FAMILY, label_font))
        .label_style((FONT_FAMILY, tick_font))
        .x_label_formatter(&|x| format!("{:.*}", x_decimals, x))
        .y_label_formatter(&|y| format!("{:.*}", y_decimals, y))
        .draw()?;

    // Dashed grid at the same key points the mesh labels.
    let grid = style::grid_style(config.grid_alpha);
    for &x in &x_ticks {
        chart.draw_series(DashedLineSeries::new(
            vec![(x, y_range.start), (x, y_range.end)],
            GRID_DASH,
            GRID_GAP,
            grid,
        ))?;
    }
    for &y in &y_ticks {
        chart.draw_series(DashedLineSeries::new(
            vec![(x_range.start, y), (x_range.end, y)],
            GRID_DASH,
            GRID_GAP,
            grid,
        ))?;
    }

    let line_style = spec.color.stroke_width(config.line_width);
    let marker_style = spec.color.filled();
    let marker = spec.marker;
    let size = config.marker_size as i32;

    for (i, segment) in segments.iter().enumerate() {
        let anno = chart.draw_series(LineSeries::new(segment.iter().copied(), line_style))?;
        if i == 0 {
            anno.label(series.name.as_str()).legend(move |(x, y)| {
                EmptyElement::at((x + 10, y))
                    + PathElement::new(vec![(-10, 0), (10, 0)], line_style)
                    + Polygon::new(marker.outline(size), marker_style)
            });
        }
    }

    chart.draw_series(PointSeries::of_element(
        points.iter().copied(),
        size,
        marker_style,
        &|c, s, st| EmptyElement::at(c) + Polygon::new(marker.outline(s), st),
    ))?;

    chart
        .configure_series_labels()
        .position(legend_corner(&points, &x_range, &y_range).position())
        .label_font((FONT_FAMILY, tick_font))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{latency_series, throughput_series};
    use crate::series::Unit;

    #[test]
    fn node_range_pads_both_ends() {
        let range = node_range(&NodeAxis::for_len(29));
        assert!(range.start < 12.0 && range.start >= 9.0);
        assert!(range.end > 68.0 && range.end <= 71.0);
    }

    #[test]
    fn single_node_gets_one_node_of_room() {
        assert_eq!(node_range(&NodeAxis::for_len(1)), 11.0..13.0);
    }

    #[test]
    fn flat_series_is_not_degenerate() {
        let series = Series::new("Latency", Unit::Milliseconds, vec![5.0, 5.0]);
        assert_eq!(value_range(&series), 4.0..6.0);
    }

    #[test]
    fn wider_values_reserve_wider_label_area() {
        assert!(y_label_area(&(0.0..9000.0), 0, 13) > y_label_area(&(0.0..90.0), 0, 13));
        assert!(y_label_area(&(0.0..1.0), 2, 13) > y_label_area(&(0.0..1.0), 0, 13));
    }

    #[test]
    fn label_area_saturates_on_huge_fonts() {
        assert_eq!(y_label_area(&(0.0..1e300), 6, u32::MAX), u32::MAX);
    }

    #[test]
    fn precision_follows_tick_step() {
        assert_eq!(label_precision(&[0.0, 2000.0, 4000.0]), 0);
        assert_eq!(label_precision(&[0.1, 0.2, 0.3]), 1);
        assert_eq!(label_precision(&[0.0, 2.5, 5.0]), 1);
        assert_eq!(label_precision(&[99.0, 99.25, 99.5]), 2);
    }

    #[test]
    fn sub_unit_ticks_get_distinct_labels() {
        let series = Series::new("Latency", Unit::Milliseconds, vec![0.1, 0.2, 0.3, 0.4]);
        let ticks = RangedCoordf64::from(value_range(&series)).key_points(GRID_TICKS);
        let decimals = label_precision(&ticks);
        let labels: Vec<String> = ticks.iter().map(|t| format!("{:.*}", decimals, t)).collect();

        assert!(ticks.len() > 1);
        let mut unique = labels.clone();
        unique.dedup();
        assert_eq!(unique, labels, "Labels should not repeat: {labels:?}");
    }

    #[test]
    fn single_point_axis_labels_whole_nodes() {
        let range = node_range(&NodeAxis::for_len(1));
        let ticks = RangedCoordf64::from(range.clone()).key_points(x_label_count(&range));
        let decimals = label_precision(&ticks);
        let labels: Vec<String> = ticks.iter().map(|t| format!("{:.*}", decimals, t)).collect();

        let mut unique = labels.clone();
        unique.dedup();
        assert!(labels.len() > 1);
        assert_eq!(unique, labels, "Labels should not repeat: {labels:?}");
    }

    #[test]
    fn legend_avoids_latency_tail() {
        let series = latency_series();
        let axis = series.node_axis();
        let points = series.points(&axis).unwrap();
        let corner = legend_corner(&points, &node_range(&axis), &value_range(&series));
        assert_eq!(corner, LegendCorner::UpperLeft);
    }

    #[test]
    fn legend_avoids_throughput_head() {
        let series = throughput_series();
        let axis = series.node_axis();
        let points = series.points(&axis).unwrap();
        let corner = legend_corner(&points, &node_range(&axis), &value_range(&series));
        assert_eq!(corner, LegendCorner::UpperRight);
    }
}
