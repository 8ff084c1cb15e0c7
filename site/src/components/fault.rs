//! Top-level fault boundary.
//!
//! Rendering failures surface as `Err` values inside views; the boundary
//! swaps the whole subtree for a fallback. There is no retry.

use leptos::prelude::*;

/// Catch rendering failures of `children`.
#[component]
pub fn FaultBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            for (_, error) in errors.get_untracked().into_iter() {
                tracing::error!("page failed to render: {error}");
            }
            view! { <FaultFallback /> }
        }>
            {children()}
        </ErrorBoundary>
    }
}

/// Generic fallback UI.
#[component]
pub fn FaultFallback() -> impl IntoView {
    view! {
        <section class="fault-section" role="alert">
            <div>
                <h1>"Something went wrong"</h1>
                <p>"This page could not be displayed. Please reload or try again later."</p>
            </div>
        </section>
    }
}
