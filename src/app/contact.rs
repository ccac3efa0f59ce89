use leptos::{either::Either, prelude::*};

use crate::glyph::Glyph;
use crate::motion::BLOCK_DURATION;
use crate::nav::Section;
use crate::portfolio::{ContactField, FieldKind, CONTACT_FIELDS, OWNER};

use super::icon::Icon;
use super::reveal::{Reveal, SectionHeading};

const FIELD_CLASS: &str = "w-full px-4 py-2 rounded-lg bg-field text-white focus:outline-none focus:ring-2 focus:ring-accent";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-20 px-6 md:px-16 lg:px-32 bg-navy-light">
            <SectionHeading text="Contact Me" class="text-center mb-12" />
            <div class="max-w-4xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-10">
                <Reveal duration=BLOCK_DURATION>
                    <ContactForm />
                </Reveal>
                <Reveal duration=BLOCK_DURATION class="text-muted space-y-6">
                    <ContactDetails />
                </Reveal>
            </div>
        </section>
    }
}

/// Client-only form. The browser enforces the required fields; a valid submit goes nowhere.
#[component]
fn ContactForm() -> impl IntoView {
    view! {
        <form
            class="bg-navy p-8 rounded-2xl shadow-xl space-y-6"
            on:submit=move |ev| {
                ev.prevent_default();
                log::debug!("contact form submitted; no delivery is configured");
            }
        >
            {CONTACT_FIELDS.into_iter().map(|field| view! { <FormField field /> }).collect_view()}
            <button
                type="submit"
                class="bg-accent text-navy font-semibold py-2 px-6 rounded-xl hover:bg-accent-dark hover:scale-105 active:scale-95 transition duration-300"
            >
                "Send Message"
            </button>
        </form>
    }
}

#[component]
fn FormField(field: ContactField) -> impl IntoView {
    let id = format!("contact-{}", field.name);
    let input = match field.kind {
        FieldKind::Multiline { rows } => Either::Left(view! {
            <textarea
                id=id.clone()
                name=field.name
                rows=rows.to_string()
                placeholder=field.placeholder
                required=field.required
                class=FIELD_CLASS
            ></textarea>
        }),
        FieldKind::Text | FieldKind::Email => {
            let kind = if field.kind == FieldKind::Email { "email" } else { "text" };
            Either::Right(view! {
                <input
                    id=id.clone()
                    type=kind
                    name=field.name
                    placeholder=field.placeholder
                    required=field.required
                    class=FIELD_CLASS
                />
            })
        }
    };
    view! {
        <div>
            <label for=id class="block text-sm text-ink mb-1">
                {field.label}
            </label>
            {input}
        </div>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <h3 class="text-2xl font-semibold text-accent">"Let's Connect"</h3>
        <p>
            "If you'd like to collaborate, discuss a project, or just want to say hi, feel free to reach out!"
        </p>
        <div class="space-y-4">
            <div class="flex items-center gap-3">
                <Icon glyph=Glyph::Mail class="w-6 h-6 text-accent" />
                <a href=OWNER.mailto_href() class="hover:text-accent">{OWNER.email}</a>
            </div>
            <div class="flex items-center gap-3">
                <Icon glyph=Glyph::User class="w-6 h-6 text-accent" />
                <span>{OWNER.full_name()}</span>
            </div>
            <div class="flex items-center gap-3">
                <Icon glyph=Glyph::Briefcase class="w-6 h-6 text-accent" />
                <span>{OWNER.role}</span>
            </div>
        </div>
        <div class="flex space-x-6 text-accent">
            <a
                href=OWNER.github
                target="_blank"
                rel="noopener noreferrer"
                aria-label="GitHub Profile"
            >
                <Icon glyph=Glyph::Code class="w-8 h-8" />
            </a>
            <a
                href=OWNER.linkedin
                target="_blank"
                rel="noopener noreferrer"
                aria-label="LinkedIn Profile"
            >
                <Icon glyph=Glyph::Briefcase class="w-8 h-8" />
            </a>
        </div>
        <div class="flex items-center gap-2 text-lg text-ink mt-4">
            <Icon glyph=Glyph::Phone class="w-5 h-5 text-accent" />
            <a href=OWNER.tel_href() class="hover:text-accent">{OWNER.phone}</a>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields_required() {
        let html = Owner::new().with(|| view! { <Contact /> }.to_html());
        assert_eq!(html.matches(" required").count(), CONTACT_FIELDS.len());
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("rows=\"5\""));
        for field in CONTACT_FIELDS {
            assert!(html.contains(&format!("for=\"contact-{}\"", field.name)));
        }
        assert!(html.contains(&format!("href=\"{}\"", OWNER.tel_href())));
    }
}
