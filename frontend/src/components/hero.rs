//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Financial Metrics Dashboard"</h1>
            <p class="subtitle">
                "Select a company and metric to visualize performance over time."
            </p>
        </div>
    }
}
