//! Folds per-ticker analyses into a chart figure.
//!
//! The price chart takes the left 70% of the figure and the strength gauge
//! the right 30%.

use chrono::DateTime;

use crate::types::{
    Annotation, Axis, Domain, Extremum, Figure, Gauge, GaugeAxis, GaugeBar, GaugeTrace, Layout,
    LineStyle, MarkerStyle, NewShape, PlotConfig, ScatterTrace, SignalScore, TickerAnalysis, Title,
    Trace,
};

/// Horizontal split between the price chart and the gauge.
const PRICE_DOMAIN: [f64; 2] = [0.0, 0.7];
const GAUGE_DOMAIN: [f64; 2] = [0.75, 1.0];

/// Drawing tools added to the plot toolbar.
pub const DRAWING_TOOLS: [&str; 6] = [
    "drawline",
    "drawopenpath",
    "drawclosedpath",
    "drawcircle",
    "drawrect",
    "eraseshape",
];

/// Chart title for the number of requested tickers.
pub fn dashboard_title(requested: &[String]) -> String {
    match requested {
        [single] => format!("Financial Dashboard for {}", single),
        _ => "Financial Dashboard for Multiple Assets".to_string(),
    }
}

/// Format an epoch-millisecond timestamp as a `YYYY-MM-DD` date.
pub fn format_date(time_ms: i64) -> String {
    DateTime::from_timestamp_millis(time_ms)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn line_trace(name: &str, x: &[String], y: Vec<Option<f64>>, line: LineStyle) -> Trace {
    Trace::Scatter(ScatterTrace {
        name: name.to_string(),
        x: x.to_vec(),
        y,
        mode: "lines".to_string(),
        line: Some(line),
        marker: None,
        fill: None,
    })
}

fn marker_trace(name: &str, points: &[Extremum], color: &str) -> Trace {
    Trace::Scatter(ScatterTrace {
        name: name.to_string(),
        x: points.iter().map(|p| format_date(p.time)).collect(),
        y: points.iter().map(|p| Some(p.price)).collect(),
        mode: "markers".to_string(),
        line: None,
        marker: Some(MarkerStyle {
            color: color.to_string(),
            size: 10.0,
        }),
        fill: None,
    })
}

fn defined(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

/// Gauge trace for a strength score.
pub fn gauge_trace(score: &SignalScore) -> Trace {
    Trace::Indicator(GaugeTrace {
        mode: "gauge+number".to_string(),
        value: score.value,
        domain: Domain {
            x: GAUGE_DOMAIN,
            y: [0.0, 1.0],
        },
        title: Title::new("Buy Signal Strength"),
        gauge: Gauge {
            axis: GaugeAxis {
                range: [None, Some(100.0)],
            },
            bar: GaugeBar {
                color: score.color.clone(),
            },
        },
    })
}

/// Traces for one ticker, in drawing order.
pub fn ticker_traces(analysis: &TickerAnalysis) -> Vec<Trace> {
    let set = &analysis.indicators;
    let x: Vec<String> = set.time.iter().map(|&t| format_date(t)).collect();
    let mut traces = Vec::new();

    if let Some(ref cloud) = set.ichimoku {
        traces.push(line_trace("Tenkan Sen", &x, cloud.tenkan_sen.clone(), LineStyle::new("red", 1.5)));
        traces.push(line_trace("Kijun Sen", &x, cloud.kijun_sen.clone(), LineStyle::new("blue", 1.5)));
        traces.push(line_trace(
            "Senkou Span A",
            &x,
            cloud.senkou_span_a.clone(),
            LineStyle::new("green", 1.5),
        ));
        let mut span_b = line_trace(
            "Senkou Span B",
            &x,
            cloud.senkou_span_b.clone(),
            LineStyle::new("orange", 1.5),
        );
        if let Trace::Scatter(ref mut s) = span_b {
            s.fill = Some("tonexty".to_string());
        }
        traces.push(span_b);
        traces.push(line_trace(
            "Chikou Span",
            &x,
            cloud.chikou_span.clone(),
            LineStyle::new("purple", 1.5),
        ));
    }

    if let Some(ref macd) = set.macd {
        traces.push(line_trace("MACD", &x, defined(&macd.macd), LineStyle::new("blue", 2.0)));
        traces.push(line_trace("Signal", &x, defined(&macd.signal), LineStyle::new("red", 2.0)));
    }

    traces.push(Trace::Scatter(ScatterTrace {
        name: analysis.symbol.clone(),
        x: x.clone(),
        y: defined(&analysis.close),
        mode: "lines".to_string(),
        line: None,
        marker: None,
        fill: None,
    }));

    if let Some(ref trend) = set.trend {
        traces.push(line_trace(
            &format!("Trend for {}", analysis.symbol),
            &x,
            defined(&trend.values),
            LineStyle::new("purple", 4.0).dashed("dot"),
        ));
    }

    if let Some(ref score) = analysis.score {
        traces.push(gauge_trace(score));
    }

    traces
}

/// Layout with subplot titles and the drawing configuration.
pub fn layout(title: &str, line_color: &str) -> Layout {
    let subplot_title = |text: &str, domain: [f64; 2]| Annotation {
        text: text.to_string(),
        x: (domain[0] + domain[1]) / 2.0,
        y: 1.0,
        xref: "paper".to_string(),
        yref: "paper".to_string(),
        showarrow: false,
    };

    Layout {
        title: Title::new(title),
        xaxis: Axis {
            domain: PRICE_DOMAIN,
        },
        annotations: vec![
            subplot_title("Historical Price", PRICE_DOMAIN),
            subplot_title("Buy Indicator", GAUGE_DOMAIN),
        ],
        dragmode: "drawrect".to_string(),
        newshape: NewShape {
            line: LineStyle::new(line_color, 2.0),
        },
    }
}

/// Build the full figure.
///
/// Local extrema markers are drawn for the last ticker only.
pub fn build_figure(analyses: &[TickerAnalysis], title: &str, line_color: &str) -> Figure {
    let mut data: Vec<Trace> = analyses.iter().flat_map(ticker_traces).collect();

    if let Some(last) = analyses.last() {
        data.push(marker_trace("Local Max", &last.indicators.local_maxima, "red"));
        data.push(marker_trace("Local Min", &last.indicators.local_minima, "green"));
    }

    Figure {
        data,
        layout: layout(title, line_color),
        config: PlotConfig {
            mode_bar_buttons_to_add: DRAWING_TOOLS.iter().map(|s| s.to_string()).collect(),
        },
    }
}
