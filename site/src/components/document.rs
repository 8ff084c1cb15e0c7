//! Root document component - the complete HTML page of a static build.

use leptos::prelude::*;

use super::FaultBoundary;
use crate::config::Site;
use crate::content::BRAND;
use crate::pages::page_view;
use crate::routes::Page;
use crate::styles::SITE_CSS;

/// Id of the element the browser bundle mounts into.
pub const APP_ROOT_ID: &str = "app";

/// App root attribute holding the base path.
pub const BASE_PATH_ATTR: &str = "data-base-path";

/// App root attribute holding the carousel autoplay period in milliseconds.
pub const AUTOPLAY_ATTR: &str = "data-autoplay-ms";

/// The complete HTML document for one page.
#[component]
pub fn SiteDocument(page: Page, site: Site) -> impl IntoView {
    let title = format!("{BRAND} | {}", page.title());
    // Read back by the browser bundle (BASE_PATH_ATTR, AUTOPLAY_ATTR).
    let base_path = site.base.as_str().to_string();
    let autoplay_ms = site.autoplay.as_millis().to_string();
    // wasm-pack `--target web` glue: the default export instantiates the
    // module, whose start function mounts the app.
    let boot = site
        .client_script
        .as_deref()
        .map(|script| format!("import init from '{}'; init();", site.base.join(script)));

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content="AI-driven accounting automation, ERP integration and compliance consulting in Hong Kong." />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <div id=APP_ROOT_ID data-base-path=base_path data-autoplay-ms=autoplay_ms>
                    <FaultBoundary>{page_view(page, site)}</FaultBoundary>
                </div>
                {boot.map(|code| view! { <script type="module">{code}</script> })}
            </body>
        </html>
    }
}
