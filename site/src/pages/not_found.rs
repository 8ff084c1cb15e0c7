// 404 page - reached through the router fallback
use leptos::html;
use leptos::prelude::*;

use crate::components::{Footer, Header};
use crate::config::Site;
use crate::routes::Page;

/// Shown for any path outside the route table.
#[component]
pub fn NotFoundPage(site: Site) -> impl IntoView {
    let footer = NodeRef::<html::Footer>::new();
    let home = site.base.href(Page::Home);

    view! {
        <Header base=site.base.clone() contact=footer />
        <main>
            <section class="not-found-section">
                <div class="not-found-content">
                    <h1 class="not-found-title">"404"</h1>
                    <h2 class="not-found-subtitle">"Page Not Found"</h2>
                    <p class="not-found-text">
                        "The page you're looking for doesn't exist or has been moved."
                    </p>
                    <a class="btn-primary" href=home>
                        "Return to Home"
                    </a>
                </div>
            </section>
        </main>
        <Footer anchor=footer />
    }
}
