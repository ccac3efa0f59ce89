use leptos::{html, prelude::*};
use leptos_use::{
    use_mouse_in_element, use_raf_fn_with_options, utils::Pausable, UseMouseInElementReturn,
    UseRafFnCallbackArgs, UseRafFnOptions,
};
use rand::{rngs::StdRng, SeedableRng};

use crate::motion::{pointer_pull, Offset, Spring, SpringConfig, Vec2, BLOCK_DURATION};
use crate::nav::Section;
use crate::portfolio::OWNER;
use crate::shapes::{ShapeSpec, POINTER_PULL, SHAPE_COUNT};

use super::reveal::{Reveal, Trigger};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative overflow-hidden pt-24 px-6 md:px-16 lg:px-32 min-h-screen flex flex-col md:flex-row items-center justify-between">
            <FloatingShapes />
            <Reveal trigger=Trigger::Mount duration=BLOCK_DURATION class="relative text-left space-y-6">
                <h1 class="text-4xl md:text-6xl font-bold leading-tight text-accent">
                    "Hi, I'm " <span class="text-white">{OWNER.full_name()}</span>
                </h1>
                <p class="text-xl md:text-2xl text-gray-300 max-w-xl">
                    "I'm a passionate " <span class="text-accent">"DevOps"</span> " and "
                    <span class="text-accent">"Backend Developer"</span>
                    " who loves building scalable infrastructure and automation pipelines."
                </p>
                <a
                    href=Section::Projects.href()
                    class="inline-block px-6 py-3 mt-4 text-lg font-semibold bg-accent text-navy rounded-xl hover:bg-accent-dark transition duration-300"
                >
                    "View My Work"
                </a>
            </Reveal>
            <Reveal
                trigger=Trigger::Mount
                offset=Offset::FromRight(40.0)
                duration=BLOCK_DURATION
                class="relative mt-10 md:mt-0"
            >
                <img
                    src=OWNER.photo
                    alt=OWNER.full_name()
                    width="400"
                    height="400"
                    class="rounded-2xl shadow-lg"
                />
            </Reveal>
        </section>
    }
}

/// Decorative layer behind the hero text.
///
/// Rendered only once the page is live in the browser: the shapes are random per page load, so
/// server markup could never match them.
#[component]
fn FloatingShapes() -> impl IntoView {
    let (shapes, set_shapes) = signal(Vec::<ShapeSpec>::new());

    Effect::new(move |_| {
        let seed = chrono::Utc::now().timestamp_millis().unsigned_abs();
        log::debug!("seeding {SHAPE_COUNT} hero shapes with {seed}");
        let mut rng = StdRng::seed_from_u64(seed);
        set_shapes.set(ShapeSpec::scatter(&mut rng, SHAPE_COUNT));
    });

    view! {
        <div class="pointer-events-none absolute inset-0" aria-hidden="true">
            {move || {
                shapes
                    .get()
                    .into_iter()
                    .map(|spec| view! { <Shape spec /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn Shape(spec: ShapeSpec) -> impl IntoView {
    let frame = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        is_outside,
        ..
    } = use_mouse_in_element(frame);

    // the target only moves while the pointer is over the shape; it keeps the last value after
    let target = RwSignal::new(Vec2::ZERO);
    let settled = RwSignal::new(true);
    Effect::new(move |_| {
        if is_outside.get() {
            return;
        }
        let pointer = Vec2::new(element_x.get(), element_y.get());
        let size = Vec2::new(element_width.get(), element_height.get());
        target.set(pointer_pull(pointer, size, POINTER_PULL));
        settled.set(false);
    });

    let spring = StoredValue::new(Spring::new(SpringConfig::GENTLE));
    let (offset, set_offset) = signal(Vec2::ZERO);
    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |UseRafFnCallbackArgs { delta, .. }| {
            let target = target.get_untracked();
            let mut next = Vec2::ZERO;
            let mut at_rest = false;
            spring.update_value(|s| {
                next = s.step(target, delta / 1000.0);
                at_rest = s.is_settled(target);
            });
            if next != offset.get_untracked() {
                set_offset.set(next);
            }
            if at_rest {
                settled.set(true);
            }
        },
        UseRafFnOptions::default().immediate(false),
    );

    // the frame loop only runs while the spring is still travelling
    Effect::new(move |_| {
        if settled.get() {
            pause();
        } else {
            resume();
        }
    });

    view! {
        <div node_ref=frame class="absolute" style=spec.frame_style()>
            <div class="w-full h-full animate-drift" style=spec.drift_style()>
                <div class="w-full h-full" style=move || spec.body_style(offset.get())></div>
            </div>
        </div>
    }
}
