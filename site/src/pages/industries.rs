// Industries page - grid of reveal-on-scroll case studies
use leptos::html;
use leptos::prelude::*;

use crate::components::{Footer, Header, IndustryCard};
use crate::config::Site;
use crate::content::{self, Industry};
use crate::error::Result;

/// Grid of industry case studies, revealed as they scroll into view.
#[component]
pub fn IndustriesPage(site: Site) -> impl IntoView {
    let footer = NodeRef::<html::Footer>::new();

    view! {
        <Header base=site.base.clone() contact=footer />
        <main>
            <section class="industries-hero">
                <h1>"Industries We Have Served"</h1>
            </section>

            <section class="industries-section">
                <div class="industries-grid">{content::industries().and_then(|table| industry_cards(&site, table))}</div>
            </section>
        </main>
        <Footer anchor=footer />
    }
}

/// Cards in table order. A record with an unusable image path fails the
/// whole grid; the fault boundary above shows the fallback.
fn industry_cards(site: &Site, industries: Vec<Industry>) -> Result<Vec<AnyView>> {
    industries
        .into_iter()
        .enumerate()
        .map(|(index, industry)| {
            let image_url = site.base.asset(&industry.image)?;
            Ok(view! { <IndustryCard industry=industry index=index image_url=image_url /> }.into_any())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::BasePath;

    fn cards(site: &Site) -> Result<Vec<AnyView>> {
        industry_cards(site, content::industries().unwrap())
    }

    #[test]
    fn one_card_per_industry() {
        let cards = cards(&Site::default()).unwrap();
        assert_eq!(cards.len(), 16);
    }

    #[test]
    fn card_images_follow_the_base_path() {
        use leptos::tachys::view::RenderHtml;

        let site = Site::with_base(BasePath::new("/abc"));
        let html = cards(&site).unwrap().to_html();
        assert!(html.contains("url('/abc/photos/industries1.avif')"));
        assert!(html.contains("url('/abc/photos/industries16.avif')"));
    }

    #[test]
    fn relative_image_fails_the_grid_into_the_fault_boundary() {
        use crate::components::FaultBoundary;
        use crate::error::SiteError;
        use leptos::tachys::view::RenderHtml;

        let mut table = content::industries().unwrap();
        table[3].image = "photos/industries4.avif".into();
        let site = Site::default();

        assert!(matches!(
            industry_cards(&site, table.clone()),
            Err(SiteError::AssetPath(path)) if path == "photos/industries4.avif"
        ));

        let html = Owner::new().with(|| {
            view! {
                <FaultBoundary>
                    <div class="industries-grid">{industry_cards(&site, table)}</div>
                </FaultBoundary>
            }
            .to_html()
        });
        assert!(html.contains("Something went wrong"));
        assert!(!html.contains("industry-card"));
    }
}
