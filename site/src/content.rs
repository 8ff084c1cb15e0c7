//! Static content tables.
//!
//! The ordered record tables (carousel slides, industry case studies, lab
//! projects) ship as JSON embedded at build time and are decoded with serde.
//! Short fixed copy (contact details, certification lists) lives in plain
//! constants next to it.
//!
//! # Example
//!
//! ```rust
//! use abc_site::content;
//!
//! let slides = content::slides().unwrap();
//! assert_eq!(slides[0].title, "AI-Powered Bookkeeping");
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

const SLIDES_JSON: &str = include_str!("../content/slides.json");
const INDUSTRIES_JSON: &str = include_str!("../content/industries.json");
const PROJECTS_JSON: &str = include_str!("../content/projects.json");

/// One "Core Services" carousel slide.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Stable key
    pub id: u32,
    /// Headline
    pub title: String,
    /// Body copy
    pub description: String,
}

/// One industry case study shown on the Industries page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    /// Stable key
    pub id: u32,
    /// Industry name
    pub title: String,
    /// Case-study text
    pub description: String,
    /// Site-absolute image path, resolved against the base path at render time
    pub image: String,
}

/// A text box of the "ABC Lab Projects" grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub title: String,
    /// Short pitch
    pub description: String,
}

/// Contact block rendered by the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    /// Legal company name
    pub company: &'static str,
    /// Copyright line
    pub copyright: &'static str,
    /// Phone number as displayed
    pub whatsapp_label: &'static str,
    /// Click-to-chat link
    pub whatsapp_url: &'static str,
    /// Contact mailbox
    pub email: &'static str,
    /// Postal address, one entry per line
    pub address: &'static [&'static str],
}

/// Company contact details.
pub const CONTACT: Contact = Contact {
    company: "Alpha Business Compliance Limited",
    copyright: "© 2026 All Rights Reserved",
    whatsapp_label: "+852 6992 3774",
    whatsapp_url: "https://wa.me/85269923774",
    email: "info@alphabusiness.pro",
    address: &[
        "Workshop 6, Unit 806, 8/F,",
        "Eight Commercial Tower,",
        "8 Sun Yip Street, Chai Wan,",
        "Hong Kong",
    ],
};

/// Brand name shown in the header and document titles.
pub const BRAND: &str = "Alpha Business Compliance";

/// Certifications held by the team (About page).
pub const CERTIFICATIONS: &[&str] = &[
    "AWS Certified Cloud Practitioner",
    "Azure AI Fundamentals",
    "AWS Certified Solutions Architect – Associate",
    "IBM Data Science Professional Certificate",
    "IBM AI Engineering Professional Certificate",
    "Databricks Certified Data Analyst Associate",
    "Alibaba Cloud Certified Professional - Data Analyst",
    "Deep Learning Specialization by DeepLearning.AI",
    "HKICPA - Practising Certificates",
    "Certified Information Systems Auditor® (CISA®)",
    "CISSP - Certified Information Systems Security Professional",
];

/// What partners gain (About page, value proposition).
pub const VALUE_POINTS: &[&str] = &[
    "Cutting-edge technological solutions",
    "Industry-leading expertise",
    "Innovative compliance strategies",
    "Sustainable operational models",
];

/// Carousel slides, in display order.
pub fn slides() -> Result<Vec<Slide>> {
    decode("slides", SLIDES_JSON)
}

/// Industry case studies, in display order.
pub fn industries() -> Result<Vec<Industry>> {
    decode("industries", INDUSTRIES_JSON)
}

/// Lab project text boxes, in display order.
pub fn projects() -> Result<Vec<Project>> {
    decode("projects", PROJECTS_JSON)
}

fn decode<T: DeserializeOwned>(table: &'static str, raw: &str) -> Result<Vec<T>> {
    serde_json::from_str(raw).map_err(|e| SiteError::Content {
        table,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_keep_their_order() {
        let slides = slides().unwrap();
        let titles: Vec<_> = slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "AI-Powered Bookkeeping",
                "RPA Workflow Automation",
                "Smart Financial Reporting",
                "ERP System Design & Integration",
            ]
        );
    }

    #[test]
    fn industries_have_site_absolute_images() {
        let industries = industries().unwrap();
        assert_eq!(industries.len(), 16);
        assert_eq!(industries[0].title, "Music Production Studio");
        assert_eq!(industries[15].title, "IT Company");
        assert!(industries.iter().all(|i| i.image.starts_with("/photos/")));
    }

    #[test]
    fn industry_ids_are_unique() {
        let industries = industries().unwrap();
        let mut ids: Vec<_> = industries.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), industries.len());
    }

    #[test]
    fn malformed_table_reports_its_name() {
        let err = decode::<Slide>("slides", "[{\"id\": \"zero\"}]").unwrap_err();
        assert!(matches!(err, SiteError::Content { table: "slides", .. }));
        assert!(err.to_string().contains("slides"));
    }
}
