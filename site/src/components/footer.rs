//! Contact footer.

use leptos::html;
use leptos::prelude::*;

use crate::content::CONTACT;

/// Contact footer. `anchor` lets the header scroll here.
#[component]
pub fn Footer(anchor: NodeRef<html::Footer>) -> impl IntoView {
    let address = CONTACT
        .address
        .iter()
        .map(|line| view! { {*line} <br /> })
        .collect::<Vec<_>>();

    view! {
        <footer id="footer" role="contentinfo" node_ref=anchor>
            <div class="footer-content">
                <div class="footer-section">
                    <h3>{CONTACT.company}</h3>
                    <p>{CONTACT.copyright}</p>
                </div>

                <div class="footer-section">
                    <h4>"Contact Us"</h4>
                    <p>
                        <a
                            href=CONTACT.whatsapp_url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="Contact us on WhatsApp"
                        >
                            "WhatsApp: "
                            {CONTACT.whatsapp_label}
                        </a>
                    </p>
                    <p>
                        <a href=format!("mailto:{}", CONTACT.email) aria-label="Send us an email">
                            "Email: "
                            {CONTACT.email}
                        </a>
                    </p>
                </div>

                <div class="footer-section">
                    <h4>"Address"</h4>
                    <address>{address}</address>
                </div>
            </div>
        </footer>
    }
}
