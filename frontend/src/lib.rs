//! FinMetrics - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that fetches the normalized financial record
//! array once on load and renders an interactive line chart filtered by
//! company and metric.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── SelectorPanel (company / metric buttons)               │
//! │  └── ChartPanel (loading → chart or error)                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - backend URL and reference lists
//! - [`types`] - records, chart points, errors
//! - [`components`] - UI components
//! - [`services`] - backend communication

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, ChartPoint, FinancialRecord};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 FinMetrics - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Selections default to the first entry of each reference list.
    let (selected_company, set_selected_company) = create_signal(COMPANIES[0].to_string());
    let (selected_metric, set_selected_metric) = create_signal(METRICS[0].to_string());

    // One fetch on load; no retry, no refetch.
    let records = create_local_resource(|| (), |_| async { fetch_records(BACKEND_URL).await });

    // Chart-ready series, re-derived whenever selections or records change.
    let chart_data = create_memo(move |_| {
        let company = selected_company.get();
        let metric = selected_metric.get();
        records
            .get()
            .and_then(|result| result.ok())
            .map(|recs| {
                recs.iter()
                    .filter(|r| r.company == company && r.metric == metric)
                    .map(ChartPoint::from)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });

    let chart_title =
        create_memo(move |_| format!("{} for {}", selected_metric.get(), selected_company.get()));

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <div class="dashboard">
                <SelectorPanel
                    selected_company=selected_company
                    set_selected_company=set_selected_company
                    selected_metric=selected_metric
                    set_selected_metric=set_selected_metric
                />

                <section class="chart-area">
                    {move || match records.get() {
                        None => view! {
                            <p class="loading">"Loading data from server..."</p>
                        }
                        .into_view(),
                        Some(Err(e)) => view! {
                            <div class="error-box">
                                <p class="error-title">"Error"</p>
                                <p class="error-detail">{e.to_string()}</p>
                            </div>
                        }
                        .into_view(),
                        Some(Ok(_)) => view! {
                            <ChartPanel
                                data=chart_data
                                title=chart_title
                                metric=selected_metric
                            />
                        }
                        .into_view(),
                    }}
                </section>
            </div>
        </div>

        <Footer/>
    }
}
