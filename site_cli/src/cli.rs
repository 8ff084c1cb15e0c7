//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use abc_site::config::CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "abc-site")]
#[command(about = "Build and inspect the Alpha Business Compliance website")]
#[command(version)]
pub struct Args {
    /// Config file (missing file means defaults)
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// URL prefix the site is served under, e.g. /abc
    #[arg(long, global = true, env = "SITE_BASE_PATH")]
    pub base_path: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render every page to static HTML and copy the assets
    Build {
        /// Output directory [default: from config, else dist]
        #[arg(long)]
        out: Option<PathBuf>,

        /// Static assets to copy [default: from config, else public]
        #[arg(long)]
        assets: Option<PathBuf>,
    },

    /// Render the page a request path resolves to and print it
    Render {
        /// Request path, base path included (e.g. /about)
        path: String,
    },

    /// List routes and the files they are written to
    Routes {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
