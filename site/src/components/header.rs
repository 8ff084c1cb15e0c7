//! Top bar: brand, hamburger toggle and the four navigation actions.

use leptos::html;
use leptos::prelude::*;

use crate::browser::scroll_into_view;
use crate::content::BRAND;
use crate::routes::{BasePath, HeaderMenu, NavAction, NavTarget};

/// Site header. `contact` is the footer of the current page.
#[component]
pub fn Header(base: BasePath, contact: NodeRef<html::Footer>) -> impl IntoView {
    let menu = RwSignal::new(HeaderMenu::default());
    let is_open = move || menu.get().is_open();

    let actions = NavAction::ALL
        .into_iter()
        .map(|action| match action.target() {
            NavTarget::Route(page) => view! {
                <a
                    class="header-buttons"
                    href=base.href(page)
                    on:click=move |_| {
                        menu.update(|m| {
                            m.activate(action);
                        });
                    }
                >
                    {action.label()}
                </a>
            }
            .into_any(),
            NavTarget::Contact => view! {
                <button
                    class="header-buttons"
                    type="button"
                    on:click=move |_| {
                        menu.update(|m| {
                            m.activate(action);
                        });
                        if let Some(footer) = contact.get_untracked() {
                            scroll_into_view(&footer);
                        }
                    }
                >
                    {action.label()}
                </button>
            }
            .into_any(),
        })
        .collect::<Vec<_>>();

    view! {
        <header class="header">
            <div class="left-header">
                <h1 class="company-name">{BRAND}</h1>
            </div>

            <button
                class=move || if is_open() { "hamburger-menu active" } else { "hamburger-menu" }
                type="button"
                aria-label="Toggle navigation menu"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| menu.update(HeaderMenu::toggle)
            >
                <span></span>
                <span></span>
                <span></span>
            </button>

            <nav class=move || if is_open() { "right-header active" } else { "right-header" }>
                {actions}
            </nav>
        </header>
    }
}
