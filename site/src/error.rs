//! Error type shared by the content tables, asset resolution and the
//! static renderer.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while turning content into pages.
#[derive(Debug, Clone, Error)]
pub enum SiteError {
    /// An embedded content table failed to decode.
    #[error("content table `{table}` is malformed: {message}")]
    Content {
        /// Name of the table (`slides`, `industries`, ...)
        table: &'static str,
        /// Decoder message
        message: String,
    },

    /// A static asset path is not site-absolute.
    #[error("asset path `{0}` must be site-absolute (leading `/`, no `..`)")]
    AssetPath(String),

    /// Configuration rejected after loading.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Filesystem failure while writing the static build.
    #[error("cannot write {}: {message}", path.display())]
    Io {
        /// Target path
        path: PathBuf,
        /// OS error message
        message: String,
    },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
