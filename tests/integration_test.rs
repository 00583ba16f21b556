//! Integration tests for the node scaling charts

use node_scaling_charts::dataset::{latency_series, throughput_series, LATENCY_MS, THROUGHPUT_REQS};
use node_scaling_charts::{
    load_config, ChartConfig, ChartError, ChartRenderer, NodeAxis, OutputFormat, Series, Unit,
};
use std::io::Write;

// ============================================================================
// NODE AXIS TESTS
// ============================================================================

#[test]
fn test_latency_axis_covers_12_to_68() {
    let axis = latency_series().node_axis();

    assert_eq!(axis.len(), 29);
    assert_eq!(axis.first(), Some(12));
    assert_eq!(axis.last(), Some(68));
    assert!(axis.values().windows(2).all(|w| w[1] - w[0] == 2), "Axis should step by 2");
}

#[test]
fn test_throughput_axis_covers_12_to_72() {
    let axis = throughput_series().node_axis();
    let expected: Vec<u32> = (12..=72).step_by(2).collect();

    assert_eq!(axis.len(), 31);
    assert_eq!(axis.values(), expected.as_slice());
}

#[test]
fn test_axis_for_two_latency_values() {
    let series = Series::new("Latency", Unit::Milliseconds, vec![100.0, 200.0]);
    assert_eq!(series.node_axis().values(), &[12, 14]);
}

#[test]
fn test_axis_for_three_throughput_values() {
    let series = Series::new("Throughput", Unit::RequestsPerSecond, vec![5000.0, 6000.0, 7000.0]);
    assert_eq!(series.node_axis().values(), &[12, 14, 16]);
}

#[test]
fn test_axis_length_always_matches_series() {
    for len in 1..=64 {
        let series = Series::new("s", Unit::Milliseconds, vec![1.0; len]);
        let axis = series.node_axis();
        assert_eq!(axis.len(), len);
        assert_eq!(axis.first(), Some(12));
        assert_eq!(axis.last(), Some(12 + 2 * (len as u32 - 1)));
        assert!(series.points(&axis).is_ok());
    }
}

// ============================================================================
// DATASET TESTS
// ============================================================================

#[test]
fn test_dataset_series_carry_names_and_units() {
    let latency = latency_series();
    let throughput = throughput_series();

    assert_eq!(latency.name, "Latency");
    assert_eq!(latency.unit.suffix(), "ms");
    assert_eq!(throughput.name, "Throughput");
    assert_eq!(throughput.unit.suffix(), "req/s");
    assert_eq!(latency.title(), "Latency(ms)");
    assert_eq!(throughput.title(), "Throughput(req/s)");
    assert_eq!(latency.values, LATENCY_MS.to_vec());
    assert_eq!(throughput.values, THROUGHPUT_REQS.to_vec());
}

#[test]
fn test_dataset_values_are_finite_and_positive() {
    assert!(LATENCY_MS.iter().all(|v| v.is_finite() && *v > 0.0));
    assert!(THROUGHPUT_REQS.iter().all(|v| v.is_finite() && *v > 0.0));
}

// ============================================================================
// VALIDATION TESTS
// ============================================================================

#[test]
fn test_empty_series_is_rejected() {
    let renderer = ChartRenderer::new(ChartConfig::default());
    let empty = Series::new("Throughput", Unit::RequestsPerSecond, vec![]);

    let err = renderer.render(&latency_series(), &empty).unwrap_err();
    match err {
        ChartError::EmptySeries { series } => assert_eq!(series, "Throughput"),
        other => panic!("Expected EmptySeries, got {other:?}"),
    }
}

#[test]
fn test_mismatched_axis_is_rejected() {
    let series = latency_series();
    let err = series.points(&NodeAxis::for_len(3)).unwrap_err();

    assert!(matches!(
        err,
        ChartError::MismatchedLength { values: 29, axis: 3, .. }
    ));
}

// ============================================================================
// CONFIG TESTS
// ============================================================================

#[test]
fn test_config_file_overrides_output() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "output_path = \"out/figure.svg\"\nformat = \"svg\"\nmarker_size = 7").unwrap();

    let cfg = load_config(file.path().to_str().unwrap());
    assert_eq!(cfg.format, OutputFormat::Svg);
    assert_eq!(cfg.output_path.to_str(), Some("out/figure.svg"));
    assert_eq!(cfg.marker_size, 7);
    assert_eq!(cfg.line_width, 2, "Unset fields keep defaults");
}

#[test]
fn test_garbled_config_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "width = \"wide\"").unwrap();

    let cfg = load_config(file.path().to_str().unwrap());
    assert_eq!(cfg, ChartConfig::default());
}

#[test]
fn test_shipped_config_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/chart_config.toml");
    let cfg = load_config(path);
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg, ChartConfig::default());
}
