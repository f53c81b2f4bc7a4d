//! SVG line chart for one company/metric series.
//!
//! Draws the filtered (year, value) sequence as a polyline with year
//! ticks on the x-axis and dollar-formatted ticks on the y-axis. Points
//! whose value was the not-a-number sentinel are left out of the line.

use leptos::*;

use crate::config::{CHART_HEIGHT, CHART_MARGIN_X, CHART_MARGIN_Y, CHART_WIDTH, Y_TICKS};
use crate::types::ChartPoint;

/// Value ranges of the plotted series.
#[derive(Clone, Debug, PartialEq)]
struct Scale {
    min_year: i32,
    max_year: i32,
    min_value: f64,
    max_value: f64,
}

/// Compute axis ranges from the series.
///
/// Returns `None` when no point carries a finite value. The value axis
/// starts at zero unless the series goes negative.
fn compute_scale(points: &[ChartPoint]) -> Option<Scale> {
    let finite: Vec<(i32, f64)> = points
        .iter()
        .filter_map(|p| p.value.filter(|v| v.is_finite()).map(|v| (p.year, v)))
        .collect();

    if finite.is_empty() {
        return None;
    }

    let min_year = points.iter().map(|p| p.year).min()?;
    let max_year = points.iter().map(|p| p.year).max()?;
    let mut min_value = finite.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let mut max_value = finite
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::NEG_INFINITY, f64::max);

    min_value = min_value.min(0.0);
    if max_value <= min_value {
        max_value = min_value + 1.0;
    }

    Some(Scale {
        min_year,
        max_year,
        min_value,
        max_value,
    })
}

fn x_position(year: i32, scale: &Scale) -> f64 {
    let span = (scale.max_year - scale.min_year).max(1) as f64;
    let plot_width = CHART_WIDTH - 2.0 * CHART_MARGIN_X;
    CHART_MARGIN_X + (year - scale.min_year) as f64 / span * plot_width
}

fn y_position(value: f64, scale: &Scale) -> f64 {
    let span = scale.max_value - scale.min_value;
    let plot_height = CHART_HEIGHT - 2.0 * CHART_MARGIN_Y;
    CHART_HEIGHT - CHART_MARGIN_Y - (value - scale.min_value) / span * plot_height
}

/// Format a y-axis tick: `$350M`, or `$1.2B` from a thousand up.
fn format_axis_value(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("${:.1}B", value / 1000.0)
    } else {
        format!("${:.0}M", value)
    }
}

/// Points attribute of the polyline, skipping sentinel values.
fn polyline_points(points: &[ChartPoint], scale: &Scale) -> String {
    points
        .iter()
        .filter_map(|p| {
            let value = p.value.filter(|v| v.is_finite())?;
            Some(format!(
                "{:.1},{:.1}",
                x_position(p.year, scale),
                y_position(value, scale)
            ))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn ChartPanel(
    #[prop(into)] data: Signal<Vec<ChartPoint>>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] metric: Signal<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !data.get().is_empty()
            fallback=|| view! {
                <p class="chart-empty">"No data available for the selected criteria."</p>
            }
        >
            <div class="chart-card">
                <h2 class="chart-title">{move || title.get()}</h2>
                {move || render_chart(&data.get(), &metric.get())}
            </div>
        </Show>
    }
}

/// Render one static SVG for the current series.
///
/// Re-run wholesale whenever the series changes; nothing inside the SVG
/// is individually reactive.
fn render_chart(points: &[ChartPoint], metric: &str) -> View {
    let Some(scale) = compute_scale(points) else {
        return view! {
            <p class="chart-empty">"No numeric values for this selection."</p>
        }
        .into_view();
    };

    let gridlines = (0..=Y_TICKS)
        .map(|i| {
            let value =
                scale.min_value + (scale.max_value - scale.min_value) * i as f64 / Y_TICKS as f64;
            let y = y_position(value, &scale);
            view! {
                <line
                    x1={CHART_MARGIN_X}
                    y1={y}
                    x2={CHART_WIDTH - CHART_MARGIN_X}
                    y2={y}
                    class="chart-gridline"
                />
                <text x={CHART_MARGIN_X - 8.0} y={y + 4.0} class="chart-axis-label y">
                    {format_axis_value(value)}
                </text>
            }
        })
        .collect_view();

    let year_labels = points
        .iter()
        .map(|p| {
            let x = x_position(p.year, &scale);
            view! {
                <text x={x} y={CHART_HEIGHT - CHART_MARGIN_Y + 20.0} class="chart-axis-label x">
                    {p.year}
                </text>
            }
        })
        .collect_view();

    let dots = points
        .iter()
        .filter_map(|p| {
            let value = p.value.filter(|v| v.is_finite())?;
            Some(view! {
                <circle
                    cx={x_position(p.year, &scale)}
                    cy={y_position(value, &scale)}
                    r="4"
                    class="chart-dot"
                />
            })
        })
        .collect_view();

    let line = polyline_points(points, &scale);

    view! {
        <svg
            viewBox={format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)}
            class="chart-svg"
            role="img"
        >
            {gridlines}
            {year_labels}
            <polyline points={line} class="chart-line"/>
            {dots}
            <text
                x={CHART_WIDTH / 2.0}
                y={CHART_HEIGHT - 4.0}
                class="chart-legend"
            >
                {metric.to_string()}
            </text>
        </svg>
    }
    .into_view()
}
