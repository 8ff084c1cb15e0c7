//! Configuration file support.
//!
//! Loads an optional `site.toml`; the CLI layers its flags on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::carousel::DEFAULT_INTERVAL;
use crate::error::{Result, SiteError};
use crate::routes::BasePath;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "site.toml";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// URL prefix the site is served under
    pub base_path: String,
    /// Where `build` writes the static site
    pub out_dir: PathBuf,
    /// Static files (images, fonts) copied verbatim into the output
    pub assets_dir: PathBuf,
    /// Carousel autoplay period
    pub autoplay_interval_ms: u64,
    /// Module script that boots the browser bundle, relative to the base
    /// path. `None` ships plain HTML.
    pub client_script: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: "/".into(),
            out_dir: PathBuf::from("dist"),
            assets_dir: PathBuf::from("public"),
            autoplay_interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            client_script: Some("pkg/abc_site_wasm.js".into()),
        }
    }
}

impl SiteConfig {
    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Runtime settings handed to the components.
    pub fn site(&self) -> Result<Site> {
        if self.autoplay_interval_ms == 0 {
            return Err(SiteError::Config(
                "autoplay_interval_ms must be greater than zero".into(),
            ));
        }
        Ok(Site {
            base: BasePath::new(&self.base_path),
            autoplay: Duration::from_millis(self.autoplay_interval_ms),
            client_script: self.client_script.clone(),
        })
    }
}

/// Settings every page and widget reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Site {
    /// URL prefix
    pub base: BasePath,
    /// Carousel autoplay period
    pub autoplay: Duration,
    /// Browser bundle entry, relative to the base path
    pub client_script: Option<String>,
}

impl Site {
    /// Settings for a site served under `base`, other values default.
    pub fn with_base(base: BasePath) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }
}

impl Site {
    /// Settings recovered from the attributes a prerendered document puts
    /// on its app root ([`crate::components::BASE_PATH_ATTR`],
    /// [`crate::components::AUTOPLAY_ATTR`]). Missing or unusable values
    /// keep their defaults.
    pub fn from_root_attributes(base_path: Option<&str>, autoplay_ms: Option<&str>) -> Self {
        let mut site = Self::default();
        if let Some(base) = base_path {
            site.base = BasePath::new(base);
        }
        match autoplay_ms.map(str::parse::<u64>) {
            Some(Ok(ms)) if ms > 0 => site.autoplay = Duration::from_millis(ms),
            Some(_) => tracing::warn!(value = ?autoplay_ms, "ignoring unusable autoplay interval"),
            None => {}
        }
        site
    }
}

impl Default for Site {
    fn default() -> Self {
        Self {
            base: BasePath::default(),
            autoplay: DEFAULT_INTERVAL,
            client_script: None,
        }
    }
}
