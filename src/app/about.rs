use leptos::prelude::*;

use crate::motion::HEADING_DURATION;
use crate::nav::Section;
use crate::prose::Prose;

use super::prose::ProseLoader;
use super::reveal::{Reveal, SectionHeading};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section
            id=Section::About.id()
            class="bg-navy-light text-center py-20 px-6 md:px-16 lg:px-32"
        >
            <SectionHeading text="About Me" class="mb-10" />
            <Reveal
                duration=HEADING_DURATION
                class="max-w-4xl mx-auto text-left text-muted text-base md:text-lg leading-relaxed"
            >
                <ProseLoader
                    name="about"
                    render=|p: Prose| view! { <div class="space-y-4 prose-body" inner_html=p.html></div> }
                />
            </Reveal>
        </section>
    }
}
