use leptos::prelude::*;

use crate::motion::SKILL_STAGGER;
use crate::nav::Section;
use crate::portfolio::{SkillGroup, SkillRating, SKILL_GROUPS};

use super::reveal::{Reveal, SectionHeading};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 bg-navy px-6 md:px-16 lg:px-32">
            <SectionHeading text="Skills" class="text-center mb-12" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                {SKILL_GROUPS.into_iter().map(|group| view! { <SkillColumn group /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillColumn(group: SkillGroup) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-semibold text-white mb-4">{group.title}</h3>
            {group
                .entries
                .iter()
                .enumerate()
                .map(|(index, &rating)| {
                    view! {
                        <Reveal index stagger=SKILL_STAGGER offset=group.enter_from class="mb-5">
                            <SkillBar rating />
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SkillBar(rating: SkillRating) -> impl IntoView {
    let level = rating.level;
    view! {
        <div class="flex justify-between mb-1 text-sm text-ink">
            <span>{rating.name}</span>
            <span>{format!("{}%", level.get())}</span>
        </div>
        <div class="w-full bg-navy-light rounded-full h-2.5">
            <div
                class="bg-accent h-2.5 rounded-full transition-all duration-500"
                style=level.width_style()
            ></div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::super::reveal::tests::reveal_delays;
    use super::*;

    #[test]
    fn test_skill_bar_widths() {
        let html = Owner::new().with(|| view! { <Skills /> }.to_html());
        for group in SKILL_GROUPS {
            assert!(html.contains(group.title));
            for rating in group.entries {
                let bar = format!("style=\"width: {}%", rating.level.get());
                assert!(html.contains(&bar), "no bar for {}", rating.name);
            }
        }
        // each column restarts its cascade
        assert_eq!(
            reveal_delays(&html),
            vec![0, 100, 200, 300, 400, 0, 100, 200, 300, 400]
        );
        assert!(html.contains("translate(-20px, 0px)"));
        assert!(html.contains("translate(20px, 0px)"));
    }
}
