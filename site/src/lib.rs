//! # abc-site
//!
//! The Alpha Business Compliance website as Leptos components.
//!
//! The same component tree serves two purposes:
//!
//! - **Static build** - every page is server-side rendered to a complete
//!   HTML document ([`render_page`], [`write_site`]), so the site can be
//!   hosted as plain files.
//! - **Browser app** - the `abc-site-wasm` crate mounts [`components::App`]
//!   over the prerendered markup and takes over routing, the carousel
//!   timer and the reveal-on-scroll observers.
//!
//! ## Quick Start
//!
//! ```rust
//! use abc_site::{render_page, config::Site, routes::Page};
//!
//! let html = render_page(Page::Home, &Site::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Core Services"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - static content tables
//! - [`carousel`] - carousel state machine and autoplay lifecycle
//! - [`reveal`] - reveal latch, stagger delay and observer lifecycle
//! - [`routes`] - base path, page table, header navigation
//! - [`components`] / [`pages`] - Leptos UI
//! - [`browser`] - `setInterval` / `IntersectionObserver` bindings
//! - [`config`] - `site.toml` loading
//! - [`styles`] - CSS constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod carousel;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod pages;
pub mod reveal;
pub mod routes;
pub mod styles;

use std::path::{Path, PathBuf};

use components::SiteDocument;
use config::Site;
use error::{Result, SiteError};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use routes::Page;
use serde::Serialize;

/// Render one page to a complete HTML document (with `<!DOCTYPE html>`).
pub fn render_page(page: Page, site: &Site) -> String {
    let _span = tracing::debug_span!("render_page", ?page).entered();

    let owner = Owner::new();
    let html = owner.with(|| {
        let doc = view! { <SiteDocument page=page site=site.clone() /> };
        doc.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Resolve a request path and render the page it lands on.
///
/// ```rust
/// use abc_site::{render_path, config::Site, routes::Page};
///
/// let (page, html) = render_path("/xyz", &Site::default());
/// assert_eq!(page, Page::NotFound);
/// assert!(html.contains("href=\"/\""));
/// ```
pub fn render_path(request: &str, site: &Site) -> (Page, String) {
    let page = Page::resolve(&site.base, request);
    (page, render_page(page, site))
}

/// One document emitted by [`write_site`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedPage {
    /// Which page
    pub page: Page,
    /// Public URL, base path included
    pub url: String,
    /// File written, relative to the output directory
    pub file: PathBuf,
    /// Document size in bytes
    pub bytes: usize,
}

/// Render every page into `out_dir` and write `routes.json` next to them.
pub fn write_site(site: &Site, out_dir: &Path) -> Result<Vec<RenderedPage>> {
    let mut rendered = Vec::with_capacity(Page::ALL.len());

    for page in Page::ALL {
        let html = render_page(page, site);
        let file = PathBuf::from(page.output_file());
        let target = out_dir.join(&file);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
        }
        std::fs::write(&target, &html).map_err(|e| SiteError::io(&target, e))?;
        tracing::info!(page = ?page, file = %target.display(), bytes = html.len(), "wrote page");

        rendered.push(RenderedPage {
            page,
            url: site.base.href(page),
            file,
            bytes: html.len(),
        });
    }

    let manifest = out_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&rendered).map_err(|e| SiteError::Io {
        path: manifest.clone(),
        message: e.to_string(),
    })?;
    std::fs::write(&manifest, json).map_err(|e| SiteError::io(&manifest, e))?;

    Ok(rendered)
}

/// Page listing written by [`write_site`].
pub const MANIFEST_FILE: &str = "routes.json";
