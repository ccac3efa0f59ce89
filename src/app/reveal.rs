use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::{
    Offset, RevealLatch, RevealSpec, Stagger, DEFAULT_DURATION, HEADING_DURATION,
    VIEWPORT_MARGIN,
};

/// When a [`Reveal`] plays its entrance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Trigger {
    /// First time the element enters the viewport.
    #[default]
    InView,
    /// As soon as the component mounts in the browser.
    Mount,
}

/// Wraps `children` in a block that starts offset and transparent and settles into place once.
///
/// `index` and `stagger` delay the entrance so repeated cards cascade. `margin` is the observer's
/// root margin and only matters for [`Trigger::InView`].
#[component]
pub fn Reveal(
    #[prop(optional)] index: usize,
    #[prop(optional)] stagger: Stagger,
    #[prop(optional)] offset: Offset,
    #[prop(default = DEFAULT_DURATION)] duration: Duration,
    #[prop(optional)] trigger: Trigger,
    #[prop(default = VIEWPORT_MARGIN)] margin: &'static str,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let spec = RevealSpec::new(offset, duration).delayed(stagger.delay_for(index));
    let latch = RwSignal::new(RevealLatch::default());

    match trigger {
        Trigger::Mount => {
            // effects only run in the browser, so the server renders the hidden state
            Effect::new(move |_| {
                latch.update(|l| {
                    l.observe(true);
                });
            });
        }
        Trigger::InView => {
            use_intersection_observer_with_options(
                node,
                move |entries, observer| {
                    let visible = entries.iter().any(|entry| entry.is_intersecting());
                    let mut fired = false;
                    latch.update(|l| fired = l.observe(visible));
                    if fired {
                        log::debug!("revealed element {index} after {:?}", spec.delay);
                        observer.disconnect();
                    }
                },
                UseIntersectionObserverOptions::default().root_margin(margin),
            );
        }
    }

    view! {
        <div
            node_ref=node
            class=class
            style=move || spec.style(latch.with(RevealLatch::is_revealed))
        >
            {children()}
        </div>
    }
}

/// Section title that rises into place.
#[component]
pub fn SectionHeading(
    #[prop(into)] text: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <Reveal duration=HEADING_DURATION>
            <h2 class=format!("text-3xl md:text-4xl font-bold text-accent {class}")>{text}</h2>
        </Reveal>
    }
}
