use leptos::prelude::*;

use crate::motion::CARD_STAGGER;
use crate::nav::Section;
use crate::portfolio::{Project, PROJECTS};

use super::reveal::{Reveal, SectionHeading};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 bg-navy px-6 md:px-16 lg:px-32">
            <SectionHeading text="Projects" class="text-center mb-12" />
            <div class="grid gap-10 md:grid-cols-2 lg:grid-cols-3">
                {PROJECTS
                    .into_iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard index project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(index: usize, project: Project) -> impl IntoView {
    view! {
        <Reveal
            index
            stagger=CARD_STAGGER
            class="bg-navy p-6 rounded-xl shadow-md hover:shadow-lg transition-shadow duration-300"
        >
            <img
                src=project.image
                alt=project.title
                width="400"
                height="250"
                loading="lazy"
                class="rounded-lg mb-4 mx-auto"
            />
            <h3 class="text-xl font-semibold text-accent mb-2">{project.title}</h3>
            <p class="text-muted text-sm mb-4">{project.description}</p>
            {project
                .source_code_url
                .map(|url| {
                    view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-block px-6 py-2 mt-4 text-sm font-semibold bg-accent text-navy rounded-xl hover:bg-accent-dark transition duration-300"
                        >
                            "View Source Code"
                        </a>
                    }
                })}
        </Reveal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::super::reveal::tests::reveal_delays;
    use super::*;

    fn render() -> String {
        Owner::new().with(|| view! { <Projects /> }.to_html())
    }

    #[test]
    fn test_source_link_only_with_url() {
        let html = render();
        let with_source = PROJECTS
            .iter()
            .filter_map(|project| project.source_code_url)
            .collect::<Vec<_>>();
        assert_eq!(html.matches("View Source Code").count(), with_source.len());
        for url in with_source {
            assert!(html.contains(&format!("href=\"{url}\"")), "missing {url}");
        }
        for project in PROJECTS {
            assert!(html.contains(project.title));
        }
    }

    #[test]
    fn test_project_cards_stagger() {
        assert_eq!(reveal_delays(&render()), vec![0, 200, 400, 600]);
    }
}
