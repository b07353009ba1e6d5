//! Chart description: what to draw, independent of the drawing backend
//!
//! The y axis is logarithmic with a fixed window. Points outside the window
//! are clipped for display only; the report data is never touched.

use std::ops::Range;

use itertools::Itertools;

use crate::application::ScalingReport;

/// Lowest visible value on the log axis (log scale cannot start at zero).
pub const Y_AXIS_FLOOR: f64 = 1.0;

/// Highest visible value on the log axis.
pub const Y_AXIS_CEILING: f64 = 1e11;

pub const X_AXIS_LABEL: &str = "Base";
pub const Y_AXIS_LABEL: &str = "Num tests to run";

/// A polyline in data coordinates.
pub type Segment = Vec<(f64, f64)>;

/// Corner the legend box is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// One labelled line, already clipped to the visible window.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub label: &'static str,
    pub segments: Vec<Segment>,
}

/// Complete, backend-agnostic description of the semi-log chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub x_range: Range<f64>,
    /// Log10 axis window.
    pub y_range: Range<f64>,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub grid: bool,
    pub legend: LegendPosition,
    pub lines: Vec<LineSpec>,
}

impl ChartSpec {
    /// Semi-log comparison of both series in the report.
    pub fn scaling(report: &ScalingReport) -> Self {
        let lines = report
            .series()
            .iter()
            .map(|series| {
                let points: Vec<(f64, f64)> = series
                    .points()
                    .map(|(base, value)| (f64::from(base), value))
                    .collect();
                LineSpec {
                    label: series.model.label(),
                    segments: clip_log(&points, Y_AXIS_FLOOR, Y_AXIS_CEILING),
                }
            })
            .collect();

        Self {
            x_range: f64::from(report.domain.start())..f64::from(report.domain.end()),
            y_range: Y_AXIS_FLOOR..Y_AXIS_CEILING,
            x_label: X_AXIS_LABEL,
            y_label: Y_AXIS_LABEL,
            grid: true,
            legend: LegendPosition::LowerRight,
            lines,
        }
    }
}

/// Split a polyline into the pieces visible inside `[floor, ceiling]` on a log axis.
///
/// Crossings are interpolated linearly in log10 space, which is where the
/// line is straight once drawn. Non-positive or non-finite values cannot be
/// placed on a log axis and break the line.
pub fn clip_log(points: &[(f64, f64)], floor: f64, ceiling: f64) -> Vec<Segment> {
    let (lo, hi) = (floor.log10(), ceiling.log10());

    if let [single] = points {
        return if plottable(single.1) && (floor..=ceiling).contains(&single.1) {
            vec![vec![*single]]
        } else {
            Vec::new()
        };
    }

    let mut segments = Vec::new();
    let mut current: Segment = Vec::new();
    // Whether the previous visible piece ended exactly on its right-hand point.
    let mut open = false;

    for (a, b) in points.iter().copied().tuple_windows() {
        let visible = if plottable(a.1) && plottable(b.1) {
            clip_range(a.1.log10(), b.1.log10(), lo, hi)
        } else {
            None
        };

        match visible {
            Some((t0, t1)) => {
                if !(open && t0 == 0.0) {
                    flush(&mut segments, &mut current);
                    current.push(lerp_log(a, b, t0));
                }
                current.push(lerp_log(a, b, t1));
                open = t1 == 1.0;
            }
            None => {
                flush(&mut segments, &mut current);
                open = false;
            }
        }
    }
    flush(&mut segments, &mut current);
    segments
}

fn plottable(y: f64) -> bool {
    y.is_finite() && y > 0.0
}

fn flush(segments: &mut Vec<Segment>, current: &mut Segment) {
    if !current.is_empty() {
        segments.push(std::mem::take(current));
    }
}

/// Parameter interval `[t0, t1]` of the segment `ya -> yb` lying inside `[lo, hi]`.
fn clip_range(ya: f64, yb: f64, lo: f64, hi: f64) -> Option<(f64, f64)> {
    let dy = yb - ya;
    if dy == 0.0 {
        return (lo..=hi).contains(&ya).then_some((0.0, 1.0));
    }
    let (ta, tb) = ((lo - ya) / dy, (hi - ya) / dy);
    let (enter, exit) = if ta < tb { (ta, tb) } else { (tb, ta) };
    let (t0, t1) = (enter.max(0.0), exit.min(1.0));
    (t0 <= t1).then_some((t0, t1))
}

/// Point at parameter `t` along `a -> b`, linear in x and in log10(y).
///
/// The endpoints are returned unchanged so unclipped data keeps its exact value.
fn lerp_log(a: (f64, f64), b: (f64, f64), t: f64) -> (f64, f64) {
    if t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }
    let (la, lb) = (a.1.log10(), b.1.log10());
    (a.0 + t * (b.0 - a.0), 10f64.powf(la + t * (lb - la)))
}
