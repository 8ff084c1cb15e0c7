//! End-to-End CLI Tests for abc-site
//!
//! Every test runs in a fresh temp directory so no stray `site.toml`
//! or `SITE_BASE_PATH` leaks in.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Get a command pointing to the abc-site binary, running inside `dir`
fn abc_site(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("abc-site");
    cmd.current_dir(dir).env_remove("SITE_BASE_PATH").env_remove("RUST_LOG");
    cmd
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let temp = TempDir::new().unwrap();
        abc_site(temp.path())
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("routes"))
            .stdout(predicate::str::contains("--base-path"));
    }

    #[test]
    fn shows_version() {
        let temp = TempDir::new().unwrap();
        abc_site(temp.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_a_subcommand() {
        let temp = TempDir::new().unwrap();
        abc_site(temp.path()).assert().failure();
    }
}

// ============================================
// Static Build Tests
// ============================================

mod build {
    use super::*;

    #[test]
    fn writes_pages_manifest_and_assets() {
        let temp = TempDir::new().unwrap();
        let public = temp.path().join("public/photos");
        std::fs::create_dir_all(&public).unwrap();
        std::fs::write(public.join("industries1.avif"), b"img").unwrap();

        abc_site(temp.path())
            .arg("build")
            .assert()
            .success()
            .stdout(predicate::str::contains("Built 4 pages and 1 assets"));

        let dist = temp.path().join("dist");
        for file in [
            "index.html",
            "about/index.html",
            "industries/index.html",
            "404.html",
            "routes.json",
            "photos/industries1.avif",
        ] {
            assert!(dist.join(file).is_file(), "missing {file}");
        }

        let home = std::fs::read_to_string(dist.join("index.html")).unwrap();
        assert!(home.starts_with("<!DOCTYPE html>"));
        assert!(home.contains("Core Services"));
    }

    #[test]
    fn honours_out_and_base_path_flags() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("site-out");

        abc_site(temp.path())
            .args(["--base-path", "/abc", "build", "--out"])
            .arg(&out)
            .assert()
            .success();

        let about = std::fs::read_to_string(out.join("about/index.html")).unwrap();
        assert!(about.contains("href=\"/abc/industries\""));
    }

    #[test]
    fn reads_site_toml() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("site.toml"),
            "base_path = \"/abc\"\nout_dir = \"public_html\"\nclient_script = \"app.js\"\n",
        )
        .unwrap();

        abc_site(temp.path()).arg("build").assert().success();

        let home = std::fs::read_to_string(temp.path().join("public_html/index.html")).unwrap();
        assert!(home.contains("import init from '/abc/app.js'"));
    }

    #[test]
    fn rejects_zero_autoplay_interval() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("site.toml"), "autoplay_interval_ms = 0\n").unwrap();

        abc_site(temp.path())
            .arg("build")
            .assert()
            .failure()
            .stderr(predicate::str::contains("autoplay_interval_ms"));
    }
}

// ============================================
// Render / Routes Tests
// ============================================

mod inspect {
    use super::*;

    #[test]
    fn renders_known_page() {
        let temp = TempDir::new().unwrap();
        abc_site(temp.path())
            .args(["render", "/about"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Our Team"));
    }

    #[test]
    fn unknown_path_renders_not_found() {
        let temp = TempDir::new().unwrap();
        abc_site(temp.path())
            .args(["render", "/xyz"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Page Not Found"))
            .stdout(predicate::str::contains("Return to Home"));
    }

    #[test]
    fn lists_routes_as_json() {
        let temp = TempDir::new().unwrap();
        let output = abc_site(temp.path())
            .args(["--base-path", "/abc", "routes", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 4);
        assert_eq!(rows[0]["url"], "/abc/");
        assert_eq!(rows[3]["page"], "not-found");
        assert_eq!(rows[3]["file"], "404.html");
    }

    #[test]
    fn lists_routes_as_table() {
        let temp = TempDir::new().unwrap();
        abc_site(temp.path())
            .arg("routes")
            .assert()
            .success()
            .stdout(predicate::str::contains("/industries"))
            .stdout(predicate::str::contains("about/index.html"));
    }
}
