//! Page shells, one per route.
//!
//! Each shell owns its footer's `NodeRef` and composes header, sections
//! and footer.

mod about;
mod home;
mod industries;
mod not_found;

pub use about::AboutPage;
pub use home::{HomePage, split_chars};
pub use industries::IndustriesPage;
pub use not_found::NotFoundPage;

use leptos::prelude::*;

use crate::config::Site;
use crate::routes::Page;

/// The shell for `page`.
pub fn page_view(page: Page, site: Site) -> AnyView {
    match page {
        Page::Home => view! { <HomePage site=site /> }.into_any(),
        Page::About => view! { <AboutPage site=site /> }.into_any(),
        Page::Industries => view! { <IndustriesPage site=site /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage site=site /> }.into_any(),
    }
}
