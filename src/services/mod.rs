pub mod dashboard;
pub mod indicators;
pub mod presentation;
pub mod scoring;

pub use dashboard::DashboardService;
pub use indicators::{compute_indicators, IndicatorEngine};
pub use presentation::build_figure;
pub use scoring::{interpolate_color, SignalScorer};
