//! Browser bundle for the Alpha Business Compliance website.
//!
//! Mounts the routed [`App`] into the `#app` element of the prerendered
//! document, replacing the static markup with live components: autoplaying
//! carousel, reveal-on-scroll cards, header menu and client-side routing.
//!
//! Base path and autoplay period are read from the attributes the static
//! build writes on `#app`. Without them the base path falls back to
//! `SITE_BASE_PATH` at compile time, the same variable the CLI reads.

use abc_site::components::{APP_ROOT_ID, AUTOPLAY_ATTR, App, BASE_PATH_ATTR};
use abc_site::config::Site;
use abc_site::routes::BasePath;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Base path baked in at build time, used when the document has none.
pub fn base_path() -> BasePath {
    BasePath::new(option_env!("SITE_BASE_PATH").unwrap_or("/"))
}

/// Mount the app. Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(APP_ROOT_ID))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(root) => {
            let base = root
                .get_attribute(BASE_PATH_ATTR)
                .unwrap_or_else(|| base_path().as_str().to_string());
            let autoplay = root.get_attribute(AUTOPLAY_ATTR);
            let site = Site::from_root_attributes(Some(&base), autoplay.as_deref());

            // Drop the prerendered markup; the app renders its own.
            root.set_inner_html("");
            leptos::mount::mount_to(root, move || view! { <App site=site.clone() /> }).forget();
        }
        None => {
            let site = Site::with_base(base_path());
            leptos::logging::warn!("#{APP_ROOT_ID} not found, mounting to <body>");
            leptos::mount::mount_to_body(move || view! { <App site=site.clone() /> });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_is_root() {
        if option_env!("SITE_BASE_PATH").is_none() {
            assert!(base_path().is_root());
        }
    }
}
