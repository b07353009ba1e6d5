//! Tests for ScalingReport and the chart description built from it

use rstest::{fixture, rstest};

use plot_scaling::application::{
    ChartSpec, LegendPosition, ScalingReport, Y_AXIS_CEILING, Y_AXIS_FLOOR,
};
use plot_scaling::domain::{Domain, GrowthModel};
use plot_scaling::util::testing;

#[fixture]
fn report() -> ScalingReport {
    testing::init_test_setup();
    ScalingReport::compute(Domain::default()).expect("compute default report")
}

#[rstest]
fn test_default_report_has_28_ascending_lines(report: ScalingReport) {
    let mut buf = Vec::new();
    report.write_pairs(&mut buf).unwrap();
    let output = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 28);
    assert_eq!(lines[0], "(2, 1.0)");
    assert_eq!(lines[3], "(5, 32.0)");
    assert_eq!(lines[27], "(29, 3758096384.0)");

    let bases: Vec<u32> = lines
        .iter()
        .map(|l| {
            l.trim_start_matches('(')
                .split(',')
                .next()
                .unwrap()
                .parse()
                .unwrap()
        })
        .collect();
    assert_eq!(bases, (2..=29).collect::<Vec<_>>());
}

#[rstest]
fn test_series_align_with_domain(report: ScalingReport) {
    assert_eq!(report.naive.len(), report.domain.len());
    assert_eq!(report.tree.len(), report.domain.len());
    assert_eq!(report.naive.values[3], 120.0);
}

#[rstest]
fn test_chart_layout(report: ScalingReport) {
    let spec = ChartSpec::scaling(&report);

    assert_eq!(spec.x_range, 2.0..29.0);
    assert_eq!(spec.y_range, Y_AXIS_FLOOR..Y_AXIS_CEILING);
    assert_eq!(spec.y_range.end, 1e11);
    assert_eq!(spec.x_label, "Base");
    assert_eq!(spec.y_label, "Num tests to run");
    assert!(spec.grid);
    assert_eq!(spec.legend, LegendPosition::LowerRight);

    let labels: Vec<&str> = spec.lines.iter().map(|l| l.label).collect();
    assert_eq!(
        labels,
        vec![
            GrowthModel::AllPermutations.label(),
            GrowthModel::TreeSearch.label()
        ]
    );
    assert_eq!(labels, vec!["all permutations", "tree search"]);
}

#[rstest]
fn given_factorial_above_ceiling_when_building_chart_then_line_is_clipped(report: ScalingReport) {
    let spec = ChartSpec::scaling(&report);
    let all = &spec.lines[0];

    // 14! ~ 8.7e10 is visible, 15! ~ 1.3e12 is not
    assert_eq!(all.segments.len(), 1);
    let segment = &all.segments[0];
    assert_eq!(segment.len(), 14);
    assert_eq!(segment[12], (14.0, 87_178_291_200.0));
    let (x, y) = segment[13];
    assert!(x > 14.0 && x < 15.0);
    assert!((y - Y_AXIS_CEILING).abs() / Y_AXIS_CEILING < 1e-9);

    // clipping is display only
    assert_eq!(report.naive.values.len(), 28);
    assert!(report.naive.values[27] > Y_AXIS_CEILING);
}

#[rstest]
fn given_tree_series_within_window_when_building_chart_then_line_is_whole(report: ScalingReport) {
    let spec = ChartSpec::scaling(&report);
    let tree = &spec.lines[1];

    assert_eq!(tree.segments.len(), 1);
    let expected: Vec<(f64, f64)> = report
        .tree
        .points()
        .map(|(base, value)| (f64::from(base), value))
        .collect();
    assert_eq!(tree.segments[0], expected);
}
