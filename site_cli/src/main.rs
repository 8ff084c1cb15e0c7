//! # abc-site
//!
//! Command line front end for the Alpha Business Compliance website.
//!
//! ## Usage
//!
//! ```bash
//! # Static build into ./dist (pages, routes.json, copied assets)
//! abc-site build
//!
//! # Served under a prefix
//! SITE_BASE_PATH=/abc abc-site build --out public_html
//!
//! # One page to stdout; unknown paths render the 404 page
//! abc-site render /industries
//!
//! # Route table
//! abc-site routes --json
//! ```

mod assets;
mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use abc_site::config::{Site, SiteConfig};
use abc_site::routes::Page;

use cli::{Args, Command};

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

/// Config file values with command line overrides applied.
fn resolve_config(args: &Args) -> SiteConfig {
    let mut config = SiteConfig::load_from_path(&args.config);
    if let Some(base) = &args.base_path {
        config.base_path = base.clone();
    }
    config
}

/// One row of `abc-site routes`.
#[derive(Debug, Serialize)]
struct RouteRow {
    page: Page,
    path: &'static str,
    url: String,
    title: &'static str,
    file: &'static str,
}

fn route_rows(site: &Site) -> Vec<RouteRow> {
    Page::ALL
        .into_iter()
        .map(|page| RouteRow {
            page,
            path: page.path(),
            url: site.base.href(page),
            title: page.title(),
            file: page.output_file(),
        })
        .collect()
}

fn run(args: Args) -> Result<()> {
    let config = resolve_config(&args);
    let site = config.site().context("invalid site configuration")?;
    debug!(base = site.base.as_str(), autoplay = ?site.autoplay, "resolved site settings");

    match args.command {
        Command::Build { out, assets } => {
            let out_dir = out.unwrap_or_else(|| config.out_dir.clone());
            let assets_dir = assets.unwrap_or_else(|| config.assets_dir.clone());

            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;

            // Assets first so a stray index.html never shadows a rendered page.
            let copied = assets::copy_dir(&assets_dir, &out_dir)?;
            let pages = abc_site::write_site(&site, &out_dir)
                .with_context(|| format!("failed to build site into {}", out_dir.display()))?;

            info!(
                pages = pages.len(),
                assets = copied,
                out = %out_dir.display(),
                "site built"
            );
            println!(
                "Built {} pages and {} assets into {}",
                pages.len(),
                copied,
                out_dir.display()
            );
        }
        Command::Render { path } => {
            let (page, html) = abc_site::render_path(&path, &site);
            debug!(?page, %path, "rendered");
            println!("{html}");
        }
        Command::Routes { json } => {
            let rows = route_rows(&site);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    println!("{:<24} {:<22} {}", row.url, row.file, row.title);
                }
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[abc-site] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
