// About page - team, sustainability, value proposition
use leptos::html;
use leptos::prelude::*;

use crate::components::{Footer, Header};
use crate::config::Site;
use crate::content::{CERTIFICATIONS, VALUE_POINTS};

/// About page: team, certifications, sustainability and value points.
#[component]
pub fn AboutPage(site: Site) -> impl IntoView {
    let footer = NodeRef::<html::Footer>::new();

    view! {
        <Header base=site.base.clone() contact=footer />
        <main>
            <section class="team">
                <div class="team-container">
                    <h1>"Our Team"</h1>
                    <p>
                        "Our consulting team comprises a diverse group of seasoned professionals, including experienced consultants, former industry leaders, risk and technology specialists, compliance solution experts, and financial regulation authorities. Each team member brings unique insights and deep expertise to address the complex challenges our clients face."
                    </p>
                    <p>
                        "This collective expertise allows us to harness knowledge and innovation to help our clients effectively manage compliance risks in an ever-changing regulatory landscape. We are committed to delivering tailored solutions that meet the evolving needs of businesses across various industries."
                    </p>
                    <p class="certs-intro">
                        "Our team holds industry-recognized certifications from leading technology and professional bodies:"
                    </p>
                    <BulletList list_class="certs-list" items=CERTIFICATIONS />
                </div>
            </section>

            <section class="sustainability-section">
                <div class="sustainability-container">
                    <h1>"Our Commitment to Sustainability"</h1>
                    <p>
                        "As a forward-thinking consultancy, we are deeply committed to sustainability across all facets of our operations. Our goal extends beyond delivering financial returns; we strive to generate tangible social and environmental benefits for our clients and the communities we serve. This responsible approach is a reflection of our core values and our vision for a more sustainable future."
                    </p>
                </div>
            </section>

            <section class="value-section">
                <div class="value-container">
                    <h1>"Our Value Proposition"</h1>
                    <p class="value-intro">"By partnering with us, you gain access to:"</p>
                    <BulletList list_class="value-list" items=VALUE_POINTS />
                    <p class="value-closing">
                        "We invite you to join us in reshaping traditional operations through the power of technology. Together, we can drive meaningful change, enhance compliance practices, and create lasting value in an increasingly complex business environment."
                    </p>
                </div>
            </section>
        </main>
        <Footer anchor=footer />
    }
}

#[component]
fn BulletList(list_class: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class=list_class>
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}
        </ul>
    }
}
