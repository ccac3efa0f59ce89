use leptos::prelude::*;

use crate::nav::{MenuState, NavItem, NAV_ITEMS};
use crate::portfolio::OWNER;

use super::icon::Icon;

#[component]
pub fn NavBar(menu: RwSignal<MenuState>) -> impl IntoView {
    let toggle = move |_| {
        menu.update(|state| *state = state.toggled());
        log::debug!("mobile menu {:?}", menu.get_untracked());
    };

    view! {
        <nav class="fixed w-full z-50 bg-navy shadow-md">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#" class="text-xl font-bold text-accent">
                        {OWNER.first_name}
                        " "
                        <span class="text-white">{OWNER.last_name}</span>
                    </a>

                    <div class="hidden md:flex space-x-6">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|item| view! { <NavLink item class="flex items-center gap-2" /> })
                            .collect_view()}
                    </div>

                    <div class="md:hidden">
                        <button
                            type="button"
                            aria-controls="mobile-menu"
                            aria-expanded=move || menu.get().is_open().to_string()
                            aria-label=move || menu.get().toggle_label()
                            on:click=toggle
                        >
                            {move || {
                                view! {
                                    <Icon glyph=menu.get().toggle_glyph() class="w-6 h-6 text-white" />
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            {move || {
                menu.get()
                    .is_open()
                    .then(|| {
                        view! {
                            <div
                                id="mobile-menu"
                                class="md:hidden bg-navy px-4 pb-4 space-y-2 text-center"
                            >
                                {NAV_ITEMS
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <NavLink
                                                item
                                                class="flex items-center justify-center gap-2 text-ink"
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

#[component]
fn NavLink(item: NavItem, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <a href=item.href() class=format!("{class} hover:text-accent transition duration-200")>
            <Icon glyph=item.icon class="w-[18px] h-[18px]" />
            {item.label()}
        </a>
    }
}
