//! Client-side router.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use super::{FaultBoundary, PageLoading};
use crate::config::Site;
use crate::pages::{AboutPage, HomePage, IndustriesPage, NotFoundPage};

/// Routed application mounted by the browser bundle.
///
/// Paths are matched below `site.base`; anything unmatched renders the
/// not-found page. A routed page that suspends shows [`PageLoading`].
#[component]
pub fn App(site: Site) -> impl IntoView {
    let base = router_base(&site);

    view! {
        <FaultBoundary>
            <Router base=base>
                <Suspense fallback=|| view! { <PageLoading /> }>
                    <SiteRoutes site=site.clone() />
                </Suspense>
            </Router>
        </FaultBoundary>
    }
}

/// `Router` base: empty at the domain root, the prefix otherwise.
fn router_base(site: &Site) -> String {
    if site.base.is_root() {
        String::new()
    } else {
        site.base.as_str().to_string()
    }
}

/// Route table. Must sit inside a `Router`.
#[component]
pub fn SiteRoutes(site: Site) -> impl IntoView {
    let home = site.clone();
    let about = site.clone();
    let industries = site.clone();
    let fallback = site;

    view! {
        <Routes fallback=move || view! { <NotFoundPage site=fallback.clone() /> }>
            <Route path=path!("/") view=move || view! { <HomePage site=home.clone() /> } />
            <Route path=path!("/about") view=move || view! { <AboutPage site=about.clone() /> } />
            <Route
                path=path!("/industries")
                view=move || view! { <IndustriesPage site=industries.clone() /> }
            />
        </Routes>
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::routes::BasePath;
    use leptos::tachys::view::RenderHtml;
    use leptos_router::location::RequestUrl;

    /// Server-side render of the route table for one request URL.
    fn route(request: &str, site: Site) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new(request));
            let base = router_base(&site);
            view! {
                <Router base=base>
                    <SiteRoutes site=site.clone() />
                </Router>
            }
            .to_html()
        })
    }

    #[test]
    fn unknown_path_routes_to_not_found() {
        let html = route("/xyz", Site::default());
        assert!(html.contains("Page Not Found"));
        let button = html.find("Return to Home").expect("home control");
        let anchor = &html[html[..button].rfind("<a").unwrap()..button];
        assert!(anchor.contains("href=\"/\""), "{anchor}");
    }

    #[test]
    fn about_path_routes_to_about() {
        let html = route("/about", Site::default());
        assert!(html.contains("Our Team"));
        assert!(!html.contains("Page Not Found"));
    }

    #[test]
    fn routes_match_below_the_base_path() {
        let site = Site::with_base(BasePath::new("/abc"));

        let html = route("/abc/industries", site.clone());
        assert!(html.contains("Industries We Have Served"));
        assert!(html.contains("/abc/photos/industries1.avif"));

        let html = route("/abc/xyz", site);
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("href=\"/abc/\""));
    }

    #[test]
    fn home_route_carries_the_autoplay_period() {
        let site = Site {
            autoplay: Duration::from_millis(4000),
            ..Site::default()
        };
        let html = route("/", site);
        assert!(html.contains("Core Services"));
        assert!(html.contains("data-interval-ms=\"4000\""));
    }

    #[test]
    fn router_base_is_empty_at_the_root() {
        assert_eq!(router_base(&Site::default()), "");
        assert_eq!(router_base(&Site::with_base(BasePath::new("abc/"))), "/abc");
    }
}
