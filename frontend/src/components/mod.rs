//! UI Components for the FinMetrics dashboard.
//!
//! # Layout Components
//! - [`Header`] - navigation bar
//! - [`Hero`] - main title and description
//! - [`Footer`] - page footer
//!
//! # Feature Components
//! - [`SelectorPanel`] - company and metric button groups
//! - [`ChartPanel`] - SVG line chart of the filtered series

mod chart;
mod footer;
mod header;
mod hero;
mod selectors;

pub use chart::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use selectors::*;
