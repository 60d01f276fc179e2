//! Tests for buy-signal scoring

use kumo::services::scoring::{interpolate_color, interpolate_hue, SignalScorer, NEUTRAL_COLOR};

#[test]
fn test_interpolate_color_endpoints() {
    assert_eq!(interpolate_hue(0.1, 0.1, 100.0, 120.0, 0.0), 120.0);
    assert_eq!(interpolate_hue(100.0, 0.1, 100.0, 120.0, 0.0), 0.0);
    assert_eq!(interpolate_color(0.1, 0.1, 100.0, 120.0, 0.0), "hsl(120.0, 100%, 50%)");
    assert_eq!(interpolate_color(100.0, 0.1, 100.0, 120.0, 0.0), "hsl(0.0, 100%, 50%)");
}

#[test]
fn test_interpolate_color_clamps() {
    assert_eq!(
        interpolate_color(-5.0, 0.1, 100.0, 120.0, 0.0),
        interpolate_color(0.1, 0.1, 100.0, 120.0, 0.0)
    );
    assert_eq!(
        interpolate_color(1e9, 0.1, 100.0, 120.0, 0.0),
        interpolate_color(100.0, 0.1, 100.0, 120.0, 0.0)
    );
}

#[test]
fn test_hue_decreases_with_strength() {
    let low = interpolate_hue(10.0, 0.1, 100.0, 120.0, 0.0);
    let high = interpolate_hue(90.0, 0.1, 100.0, 120.0, 0.0);
    assert!(low > high);
}

#[test]
fn test_zero_close_is_grey() {
    for reference in [100_000.0, 1.0, 0.0] {
        assert_eq!(SignalScorer::new(reference).score(0.0).color, NEUTRAL_COLOR);
    }
}

#[test]
fn test_score_value() {
    let scorer = SignalScorer::new(100_000.0);
    let score = scorer.score(37_000.0);
    assert!((score.value - 37.0).abs() < 1e-9);
    assert!(score.color.starts_with("hsl("));
    assert!(score.color.ends_with(", 100%, 50%)"));
}

#[test]
fn test_score_serialization() {
    let score = SignalScorer::new(200.0).score(100.0);
    let json = serde_json::to_value(&score).unwrap();
    assert_eq!(json["value"], 50.0);
    assert!(json["color"].is_string());
}
