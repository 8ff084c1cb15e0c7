//! "Core Services" carousel.
//!
//! State lives in a [`CarouselState`] signal; the one autoplay timer lives
//! in a local [`AutoPlay`] that is started by an effect (client only) and
//! stopped on cleanup.

use std::time::Duration;

use leptos::prelude::*;

use crate::browser::IntervalTicker;
use crate::carousel::{AutoPlay, CarouselState, DEFAULT_INTERVAL};
use crate::content::Slide;

/// Rotating slide stack with prev/next arrows and dot indicators.
/// Renders nothing for an empty slide list.
#[component]
pub fn Carousel(
    slides: Vec<Slide>,
    /// Autoplay period
    #[prop(default = DEFAULT_INTERVAL)]
    interval: Duration,
) -> impl IntoView {
    if slides.is_empty() {
        return ().into_any();
    }

    let state = RwSignal::new(CarouselState::new(slides.len()));
    let autoplay = StoredValue::new_local(AutoPlay::new(IntervalTicker, interval, move || {
        state.update(CarouselState::tick)
    }));

    Effect::new(move || autoplay.update_value(AutoPlay::start));
    on_cleanup(move || {
        autoplay.try_update_value(AutoPlay::stop);
    });

    let restart = move || autoplay.update_value(AutoPlay::restart);
    let go_prev = move |_| {
        state.update(CarouselState::prev);
        restart();
    };
    let go_next = move |_| {
        state.update(CarouselState::next);
        restart();
    };

    let slide_views = slides
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            let position = move || state.get().position(index);
            view! {
                <div
                    class=move || position().class()
                    style=move || position().style()
                    id=format!("slide{index}")
                    on:click=move |_| {
                        if state.try_update(|s| s.select_adjacent(index)).unwrap_or(false) {
                            restart();
                        }
                    }
                >
                    <h3>{slide.title.clone()}</h3>
                    <p>{slide.description.clone()}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let dots = (0..slides.len())
        .map(|index| {
            view! {
                <span
                    class=move || if state.get().active() == index { "dot active" } else { "dot" }
                    data-slide=index.to_string()
                    role="button"
                    aria-label=format!("Show slide {}", index + 1)
                    on:click=move |_| {
                        if state.try_update(|s| s.select(index)).unwrap_or(false) {
                            restart();
                        }
                    }
                ></span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section
            class="carousel-section"
            data-interval-ms=interval.as_millis().to_string()
            on:mouseenter=move |_| autoplay.update_value(AutoPlay::stop)
            on:mouseleave=move |_| autoplay.update_value(AutoPlay::start)
        >
            <h1 class="carousel-heading">"Core Services"</h1>
            <div class="carousel-spacer"></div>

            <div class="carousel-container">{slide_views}</div>

            <div class="carousel-arrows">
                <button class="carousel-arrow" type="button" aria-label="Previous slide" on:click=go_prev>
                    "‹"
                </button>
                <button class="carousel-arrow" type="button" aria-label="Next slide" on:click=go_next>
                    "›"
                </button>
            </div>

            <div class="carousel-dots">{dots}</div>
        </section>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn first_slide_starts_active() {
        let slides = content::slides().unwrap();
        let html = view! { <Carousel slides=slides /> }.to_html();

        assert!(html.contains("Core Services"));
        assert!(html.contains("carousel-slide active"));
        assert!(html.contains("carousel-slide next"));
        assert!(html.contains("carousel-slide prev"));
        assert!(html.contains("id=\"slide3\""));
        assert_eq!(html.matches("class=\"dot active\"").count(), 1);
        assert_eq!(html.matches("class=\"dot").count(), 4);
    }

    #[test]
    fn slide_copy_is_rendered_in_order() {
        let slides = content::slides().unwrap();
        let html = view! { <Carousel slides=slides /> }.to_html();
        let first = html.find("AI-Powered Bookkeeping").unwrap();
        let last = html.find("ERP System Design &amp; Integration").unwrap();
        assert!(first < last);
    }

    #[test]
    fn interval_is_exposed_on_the_section() {
        let slides = content::slides().unwrap();
        let html = view! { <Carousel slides=slides interval=Duration::from_millis(4000) /> }.to_html();
        assert!(html.contains("data-interval-ms=\"4000\""));
    }

    #[test]
    fn empty_carousel_renders_nothing() {
        let html = view! { <Carousel slides=Vec::new() /> }.to_html();
        assert!(!html.contains("carousel-section"));
    }
}
