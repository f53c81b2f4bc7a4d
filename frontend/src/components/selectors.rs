//! Company and metric selection panel.
//!
//! Two button groups backed by the fixed reference lists; clicking a
//! button updates the corresponding selection signal.

use leptos::*;

use crate::config::{COMPANIES, METRICS};

#[component]
pub fn SelectorPanel(
    selected_company: ReadSignal<String>,
    set_selected_company: WriteSignal<String>,
    selected_metric: ReadSignal<String>,
    set_selected_metric: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <aside class="selector-panel">
            <div class="selector-group">
                <h2 class="selector-heading">"Company"</h2>
                <div class="selector-buttons">
                    {COMPANIES
                        .iter()
                        .map(|&company| {
                            view! {
                                <button
                                    class="selector-button"
                                    class:active=move || selected_company.get() == company
                                    on:click=move |_| set_selected_company.set(company.to_string())
                                >
                                    {company}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="selector-group">
                <h2 class="selector-heading">"Metric"</h2>
                <div class="selector-buttons">
                    {METRICS
                        .iter()
                        .map(|&metric| {
                            view! {
                                <button
                                    class="selector-button"
                                    class:active=move || selected_metric.get() == metric
                                    on:click=move |_| set_selected_metric.set(metric.to_string())
                                >
                                    {metric}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </aside>
    }
}
