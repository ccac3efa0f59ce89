use leptos::prelude::*;

use crate::glyph::Glyph;
use crate::nav::Section;
use crate::prose::Prose;

use super::icon::Icon;
use super::prose::ProseLoader;
use super::reveal::{Reveal, SectionHeading};

#[component]
pub fn Resume() -> impl IntoView {
    view! {
        <section id=Section::Resume.id() class="py-20 bg-navy-light px-6 md:px-16 lg:px-32">
            <SectionHeading text="Resume" class="text-center mb-12" />
            <Reveal class="max-w-3xl mx-auto bg-navy p-8 rounded-2xl shadow-xl text-muted leading-relaxed">
                <ProseLoader name="resume" render=|p: Prose| view! { <ResumeBody prose=p /> } />
            </Reveal>
        </section>
    }
}

#[component]
fn ResumeBody(prose: Prose) -> impl IntoView {
    view! {
        <div class="space-y-4 prose-body" inner_html=prose.html></div>
        {prose
            .meta
            .download
            .map(|href| {
                let file_name = href.rsplit('/').next().unwrap_or_default().to_string();
                view! {
                    <a
                        href=href
                        download=file_name
                        class="inline-flex items-center gap-2 px-6 py-2 mt-6 text-sm font-semibold bg-accent text-navy rounded-xl hover:bg-accent-dark transition duration-300"
                    >
                        <Icon glyph=Glyph::Download class="w-4 h-4" />
                        "Download PDF"
                    </a>
                }
            })}
    }
}
