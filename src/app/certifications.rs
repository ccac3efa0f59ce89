use leptos::prelude::*;

use crate::motion::CARD_STAGGER;
use crate::nav::Section;
use crate::portfolio::{Certification, CERTIFICATIONS};

use super::reveal::{Reveal, SectionHeading};

#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <section id=Section::Certifications.id() class="py-20 bg-navy-light px-6 md:px-16 lg:px-32">
            <SectionHeading text="Certifications" class="text-center mb-12" />
            <div class="grid gap-10 md:grid-cols-2 lg:grid-cols-3">
                {CERTIFICATIONS
                    .into_iter()
                    .enumerate()
                    .map(|(index, cert)| view! { <CertificationCard index cert /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CertificationCard(index: usize, cert: Certification) -> impl IntoView {
    view! {
        <Reveal
            index
            stagger=CARD_STAGGER
            class="bg-navy p-6 rounded-xl shadow-md hover:shadow-lg transition-shadow duration-300"
        >
            <img
                src=cert.image
                alt=cert.name
                width="300"
                height="200"
                loading="lazy"
                class="rounded-lg mb-4 mx-auto"
            />
            <h3 class="text-xl font-semibold text-accent mb-2">{cert.name}</h3>
            <p class="text-muted text-sm">{cert.description}</p>
        </Reveal>
    }
}
