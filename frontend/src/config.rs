//! Application configuration.
//!
//! Centralized configuration for the FinMetrics frontend. In development
//! these are hardcoded; in production they could be loaded from a config
//! file.

/// Backend API base URL.
///
/// The finmetrics backend server that exposes `/api/data`.
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Fixed reference list of companies, in display order.
///
/// The first entry is the default selection.
pub const COMPANIES: [&str; 5] = [
    "HCL Technologies Ltd.",
    "Infosys Ltd.",
    "Tata Consultancy Services Ltd.",
    "Wipro Ltd.",
    "Tech Mahindra Ltd.",
];

/// Fixed reference list of metrics, in display order.
///
/// The first entry is the default selection.
pub const METRICS: [&str; 3] = ["SALES", "EBITDA", "PAT"];

/// Chart drawing area (SVG user units).
pub const CHART_WIDTH: f64 = 800.0;
pub const CHART_HEIGHT: f64 = 400.0;

/// Margins around the plot area, leaving room for axis labels.
pub const CHART_MARGIN_X: f64 = 70.0;
pub const CHART_MARGIN_Y: f64 = 30.0;

/// Number of y-axis gridlines.
pub const Y_TICKS: usize = 5;
