//! CSS for the site.
//!
//! Inlined into every rendered document so a page works from a single
//! request; images are the only other static assets.
//!
//! # Customization
//!
//! ```rust
//! use abc_site::styles::SITE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```

/// Complete stylesheet: header shell, hero, mission waves, carousel,
/// reveal cards, about sections, footer and the 404 page.
pub const SITE_CSS: &str = r#"
:root {
  --ink: #1d1d1f;
  --paper: #f6f4ef;
  --sand: rgb(179, 171, 151);
  --navy: #13233f;
  --accent: #c8a96a;
  --muted: #6b6b70;
  --radius: 14px;
}

* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
  margin: 0;
  font-family: "Inter", "Helvetica Neue", Arial, sans-serif;
  color: var(--ink);
  background: var(--paper);
  line-height: 1.6;
}

/* ---------- header ---------- */

.header {
  position: sticky;
  top: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.8em 2em;
  background: rgba(19, 35, 63, 0.95);
  color: #fff;
}

.company-name { margin: 0; font-size: 1.3em; letter-spacing: 0.02em; }

.right-header { display: flex; gap: 0.5em; }

.header-buttons {
  background: none;
  border: none;
  color: #fff;
  font: inherit;
  padding: 0.5em 0.9em;
  border-radius: 999px;
  cursor: pointer;
  text-decoration: none;
}

.header-buttons:hover { background: rgba(255, 255, 255, 0.12); }

.hamburger-menu {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
}

.hamburger-menu span {
  width: 24px;
  height: 2px;
  background: #fff;
  transition: transform 0.3s ease, opacity 0.3s ease;
}

.hamburger-menu.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.hamburger-menu.active span:nth-child(2) { opacity: 0; }
.hamburger-menu.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

@media (max-width: 820px) {
  .hamburger-menu { display: flex; }
  .right-header {
    position: absolute;
    top: 100%;
    right: 0;
    left: 0;
    flex-direction: column;
    background: var(--navy);
    max-height: 0;
    overflow: hidden;
    transition: max-height 0.3s ease;
  }
  .right-header.active { max-height: 320px; }
}

/* ---------- hero ---------- */

.hero-section {
  position: relative;
  overflow: hidden;
  min-height: 70vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  padding: 4em 2em;
  background: var(--navy);
  color: #fff;
  text-align: center;
}

.hero-code-overlay {
  position: absolute;
  inset: 0;
  padding: 2em;
  font-family: "JetBrains Mono", monospace;
  font-size: 0.75em;
  white-space: pre;
  text-align: left;
  opacity: 0.08;
  pointer-events: none;
}

.shimmer-text {
  position: relative;
  font-size: clamp(2em, 5vw, 3.4em);
  background: linear-gradient(90deg, #fff 0%, var(--accent) 50%, #fff 100%);
  background-size: 200% auto;
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  animation: shimmer 4s linear infinite;
}

@keyframes shimmer { to { background-position: 200% center; } }

.hero-section-paragraph { position: relative; max-width: 40em; opacity: 0.85; }

/* ---------- mission ---------- */

.mission-section {
  position: relative;
  overflow: hidden;
  padding: 5em 2em;
  background: linear-gradient(180deg, #1f3b66 0%, #2d5a8c 100%);
  color: #fff;
  text-align: center;
}

.water-wave { position: absolute; left: 0; right: 0; bottom: 0; height: 120px; }
.water-wave svg { width: 200%; height: 100%; }
.water-wave-1 svg { animation: wave 12s linear infinite; }
.water-wave-2 svg { animation: wave 18s linear infinite reverse; }
.water-wave-3 svg { animation: wave 24s linear infinite; }

@keyframes wave { to { transform: translateX(-50%); } }

.mission-title .char {
  display: inline-block;
  animation: rise 0.6s ease both;
  animation-delay: calc(var(--char-index) * 40ms);
}

@keyframes rise { from { opacity: 0; transform: translateY(0.5em); } }

.mission-divider { width: 6em; border: 0; border-top: 2px solid var(--accent); }

.mission { position: relative; max-width: 48em; margin: 0 auto; }

/* ---------- carousel ---------- */

.carousel-section { padding: 4em 2em; }

.carousel-heading { text-align: right; margin-right: 1em; color: var(--sand); }

.carousel-spacer { display: block; height: 2.5em; }

.carousel-container { position: relative; height: 22em; }

.carousel-slide {
  position: absolute;
  top: 0;
  left: 50%;
  width: min(28em, 80vw);
  padding: 2em;
  border-radius: var(--radius);
  background: #fff;
  box-shadow: 0 12px 32px rgba(0, 0, 0, 0.12);
  cursor: pointer;
  transition: transform 0.5s ease, opacity 0.5s ease;
}

.carousel-slide.active { cursor: default; }

.carousel-arrows { display: flex; justify-content: center; gap: 1em; margin-top: 1em; }

.carousel-arrow {
  width: 2.5em;
  height: 2.5em;
  border-radius: 50%;
  border: 1px solid var(--sand);
  background: #fff;
  cursor: pointer;
}

.carousel-dots { display: flex; justify-content: center; gap: 0.6em; margin-top: 1em; }

.dot {
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: #d6d2c8;
  cursor: pointer;
}

.dot.active { background: var(--accent); }

/* ---------- projects ---------- */

.projects-section { padding: 4em 2em; }

.project-boxes {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 1.5em;
}

.project {
  min-height: 14em;
  padding: 2em;
  border-radius: var(--radius);
  background: #fff;
  background-size: cover;
  background-position: center;
}

@media (max-width: 820px) { .project-boxes { grid-template-columns: 1fr; } }

/* ---------- industries ---------- */

.industries-hero { padding: 4em 2em 1em; text-align: center; }

.industries-section { padding: 2em; }

.industries-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(16em, 1fr));
  gap: 1.5em;
}

.industry-card {
  overflow: hidden;
  border-radius: var(--radius);
  background: #fff;
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.industry-card.visible { opacity: 1; transform: none; }

.card-image { height: 10em; background-size: cover; background-position: center; }

.card-content { padding: 1.2em; }

/* ---------- about ---------- */

.team, .sustainability-section, .value-section { padding: 4em 2em; }

.team-container, .sustainability-container, .value-container { max-width: 56em; margin: 0 auto; }

.certs-list, .value-list { columns: 2; }

@media (max-width: 820px) { .certs-list, .value-list { columns: 1; } }

/* ---------- footer ---------- */

footer {
  padding: 3em 2em;
  background: var(--navy);
  color: #fff;
}

footer a { color: var(--accent); }

.footer-content {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(14em, 1fr));
  gap: 2em;
}

address { font-style: normal; }

/* ---------- 404, loading, fault ---------- */

.not-found-section, .fault-section, .page-loading {
  min-height: 60vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 3em 2em;
}

.not-found-title { font-size: 6em; margin: 0; color: var(--sand); }

.btn-primary {
  display: inline-block;
  padding: 0.8em 1.8em;
  border-radius: 999px;
  background: var(--navy);
  color: #fff;
  text-decoration: none;
}

.page-loading .spinner {
  width: 2.5em;
  height: 2.5em;
  border-radius: 50%;
  border: 3px solid #d6d2c8;
  border-top-color: var(--accent);
  animation: spin 0.8s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }
"#;
