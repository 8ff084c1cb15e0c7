//! Loading placeholder for routed pages.

use leptos::prelude::*;

/// Placeholder shown while a routed page suspends.
#[component]
pub fn PageLoading() -> impl IntoView {
    view! {
        <section class="page-loading" aria-busy="true">
            <div class="spinner"></div>
            <span class="sr-only">"Loading…"</span>
        </section>
    }
}
