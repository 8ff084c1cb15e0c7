//! Industry case-study card with reveal-on-scroll.

use leptos::html;
use leptos::prelude::*;

use crate::browser::IntersectionTarget;
use crate::content::Industry;
use crate::reveal::{RevealLatch, RevealOnScroll, css_seconds};

/// One card of the industries grid. `index` is the card's position in the
/// grid and drives the stagger delay; `image_url` is already base-resolved.
#[component]
pub fn IndustryCard(industry: Industry, index: usize, image_url: String) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let latch = RwSignal::new(RevealLatch::new(index));
    let watch = StoredValue::new_local(None::<RevealOnScroll<IntersectionTarget>>);

    let reveal_now = move || {
        latch.update(|l| {
            l.observe(true);
        })
    };

    Effect::new(move || {
        let Some(element) = card.get() else {
            return;
        };
        let mut reveal = RevealOnScroll::new(IntersectionTarget::new(element.into()), index);
        if !reveal.start(move |_| reveal_now()) {
            reveal_now();
        }
        watch.set_value(Some(reveal));
    });
    on_cleanup(move || {
        watch.try_update_value(Option::take);
    });

    let delay_style = move || {
        latch
            .get()
            .delay()
            .map(|d| format!("transition-delay: {}", css_seconds(d)))
            .unwrap_or_default()
    };

    view! {
        <div class=move || latch.get().class() style=delay_style node_ref=card>
            <div class="card-image" style=format!("background-image: url('{image_url}')")></div>
            <div class="card-content">
                <h3>{industry.title}</h3>
                <p>{industry.description}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn card(index: usize) -> String {
        let industry = Industry {
            id: 9,
            title: "Multinational Company".into(),
            description: "A modern ERP system.".into(),
            image: "/photos/industries9.avif".into(),
        };
        view! {
            <IndustryCard
                industry=industry
                index=index
                image_url="/abc/photos/industries9.avif".to_string()
            />
        }
        .to_html()
    }

    #[test]
    fn cards_render_hidden() {
        let html = card(5);
        assert!(html.contains("class=\"industry-card\""));
        assert!(!html.contains("visible"));
        assert!(!html.contains("transition-delay"));
    }

    #[test]
    fn image_and_copy_are_rendered() {
        let html = card(0);
        assert!(html.contains("url('/abc/photos/industries9.avif')"));
        assert!(html.contains("Multinational Company"));
        assert!(html.contains("A modern ERP system."));
    }
}
