//! Top navigation bar.

use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"FINMETRICS"</a>
            </div>
            <div class="header-right">
                <span class="badge">"Financial Metrics Dashboard"</span>
            </div>
        </header>
    }
}
