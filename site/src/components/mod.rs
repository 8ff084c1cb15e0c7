//! Leptos UI components shared by the pages.
//!
//! # Component Hierarchy
//!
//! ```text
//! App (client router) / SiteDocument (static render)
//! └── FaultBoundary
//!     └── Page shell (Home, About, Industries, NotFound)
//!         ├── Header ── contact NodeRef ──┐
//!         ├── sections                    │
//!         │   ├── Carousel (Home)         │
//!         │   └── IndustryCard (Industries)
//!         └── Footer <────────────────────┘
//! ```
//!
//! The page shell owns the footer's `NodeRef` and hands it to the header,
//! so "Contact" scrolls to the footer of the page it lives on.

mod app;
mod carousel;
mod document;
mod fault;
mod footer;
mod header;
mod industry_card;
mod loading;

pub use app::{App, SiteRoutes};
pub use carousel::Carousel;
pub use document::{APP_ROOT_ID, AUTOPLAY_ATTR, BASE_PATH_ATTR, SiteDocument};
pub use fault::{FaultBoundary, FaultFallback};
pub use footer::Footer;
pub use header::Header;
pub use industry_card::IndustryCard;
pub use loading::PageLoading;
