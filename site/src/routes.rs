//! Route table, base-path handling and header navigation actions.
//!
//! Every URL the site produces goes through [`BasePath`], so the whole site
//! can be served from a sub-directory (`/abc/`, GitHub pages, ...) as well as
//! from the domain root.

use serde::Serialize;

use crate::error::{Result, SiteError};

/// URL prefix the site is served under. Always starts with `/`, never ends
/// with one unless it is the root itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// Normalise a user supplied prefix (`""`, `"abc"`, `"/abc/"` ...).
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self("/".into())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    /// The prefix itself.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Is the site mounted at the domain root?
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Join a site-absolute path onto the prefix.
    pub fn join(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if self.is_root() {
            format!("/{path}")
        } else if path.is_empty() {
            format!("{}/", self.0)
        } else {
            format!("{}/{path}", self.0)
        }
    }

    /// Link target for a page.
    pub fn href(&self, page: Page) -> String {
        self.join(page.path())
    }

    /// Public URL of a static asset. Asset paths in content tables must be
    /// site-absolute (`/photos/x.avif`).
    pub fn asset(&self, path: &str) -> Result<String> {
        if !path.starts_with('/') || path.contains("..") {
            return Err(SiteError::AssetPath(path.to_string()));
        }
        Ok(self.join(path))
    }

    /// Strip the prefix from a request path. Paths outside the prefix have
    /// no page.
    pub fn strip<'a>(&self, request: &'a str) -> Option<&'a str> {
        if self.is_root() {
            return Some(request);
        }
        let rest = request.strip_prefix(self.0.as_str())?;
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self("/".into())
    }
}

/// The pages of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// `/`
    Home,
    /// `/about`
    About,
    /// `/industries`
    Industries,
    /// Anything else
    NotFound,
}

impl Page {
    /// Pages with a route of their own, in navigation order.
    pub const ROUTED: [Page; 3] = [Page::Home, Page::About, Page::Industries];

    /// Every page the static build emits.
    pub const ALL: [Page; 4] = [Page::Home, Page::About, Page::Industries, Page::NotFound];

    /// Route path relative to the base path. The fallback page has none of
    /// its own and reports `/404`.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Industries => "/industries",
            Page::NotFound => "/404",
        }
    }

    /// Document title suffix.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Us",
            Page::Industries => "Industries Served",
            Page::NotFound => "Page Not Found",
        }
    }

    /// File the static build writes this page to, relative to the output
    /// directory.
    pub fn output_file(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::About => "about/index.html",
            Page::Industries => "industries/index.html",
            Page::NotFound => "404.html",
        }
    }

    /// Resolve a request path (query and fragment allowed) to a page.
    /// Trailing slashes and a final `/index.html` segment resolve like the
    /// bare path.
    pub fn resolve(base: &BasePath, request: &str) -> Page {
        let path = request
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let Some(path) = base.strip(path) else {
            return Page::NotFound;
        };
        let path = path.strip_suffix("/index.html").unwrap_or(path);
        let path = path.trim_end_matches('/');

        match path {
            "" => Page::Home,
            "/about" => Page::About,
            "/industries" => Page::Industries,
            _ => Page::NotFound,
        }
    }
}

/// What a header control does when activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// Client-side navigation to a page
    Route(Page),
    /// Smooth scroll to the contact block of the current page
    Contact,
}

/// The four header actions, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Go home
    Home,
    /// Go to the About page
    About,
    /// Go to the Industries page
    Industries,
    /// Scroll to the footer
    Contact,
}

impl NavAction {
    /// All actions in header order.
    pub const ALL: [NavAction; 4] = [
        NavAction::Home,
        NavAction::About,
        NavAction::Industries,
        NavAction::Contact,
    ];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            NavAction::Home => "Home",
            NavAction::About => "About Us",
            NavAction::Industries => "Industries Served",
            NavAction::Contact => "Contact",
        }
    }

    /// Where the action leads.
    pub fn target(self) -> NavTarget {
        match self {
            NavAction::Home => NavTarget::Route(Page::Home),
            NavAction::About => NavTarget::Route(Page::About),
            NavAction::Industries => NavTarget::Route(Page::Industries),
            NavAction::Contact => NavTarget::Contact,
        }
    }
}

/// Collapsible header menu (mobile hamburger).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderMenu {
    open: bool,
}

impl HeaderMenu {
    /// Is the menu expanded?
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger button.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Any navigation action closes the menu and yields its target.
    pub fn activate(&mut self, action: NavAction) -> NavTarget {
        self.open = false;
        action.target()
    }
}
