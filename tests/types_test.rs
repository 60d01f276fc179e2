//! Unit tests for types module

use kumo::types::*;

#[test]
fn test_chart_period_from_str() {
    assert_eq!(ChartPeriod::from_str("1y"), Some(ChartPeriod::OneYear));
    assert_eq!(ChartPeriod::from_str("ytd"), Some(ChartPeriod::YearToDate));
    assert_eq!(ChartPeriod::from_str("max"), Some(ChartPeriod::Max));
    assert_eq!(ChartPeriod::from_str("1w"), None);
}

#[test]
fn test_chart_period_serialization() {
    let json = serde_json::to_string(&ChartPeriod::ThreeMonths).unwrap();
    assert_eq!(json, "\"3mo\"");

    let parsed: ChartPeriod = serde_json::from_str("\"10y\"").unwrap();
    assert_eq!(parsed, ChartPeriod::TenYears);
}

#[test]
fn test_ticker_pattern() {
    assert!(Ticker::parse("BTC-USD").is_some());
    assert!(Ticker::parse("ABCDE-USD").is_some());
    assert!(Ticker::parse("ABCDEF-USD").is_none());
    assert!(Ticker::parse("BTC-usd").is_none());
    assert!(Ticker::parse("BTCUSD").is_none());
}

#[test]
fn test_ticker_list() {
    let list = TickerList::parse("BTC-USD,ETH-USD,nope");
    assert_eq!(list.valid.len(), 2);
    assert_eq!(list.rejected, vec!["nope".to_string()]);
}

#[test]
fn test_price_series_serialization() {
    let series = PriceSeries::close_only("BTC-USD", vec![1, 2], vec![10.0, 11.0]).unwrap();
    let json = serde_json::to_value(&series).unwrap();
    assert_eq!(json["symbol"], "BTC-USD");
    assert_eq!(json["close"][1], 11.0);
    assert!(json.get("high").is_none());
}

#[test]
fn test_skip_reason_serialization() {
    let skipped = SkippedIndicator {
        indicator: IndicatorKind::Ichimoku,
        reason: SkipReason::MissingField {
            field: "high".to_string(),
        },
    };
    let json = serde_json::to_value(&skipped).unwrap();
    assert_eq!(json["indicator"], "ichimoku");
    assert_eq!(json["reason"]["kind"], "missing_field");
    assert_eq!(json["reason"]["field"], "high");
}

#[test]
fn test_indicator_kind_names() {
    assert_eq!(IndicatorKind::Ichimoku.name(), "Ichimoku Cloud");
    assert_eq!(IndicatorKind::Macd.name(), "MACD");
    assert_eq!(IndicatorKind::Trend.name(), "Trend Line");
}
