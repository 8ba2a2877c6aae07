//! Fixed site header with a slide-in navigation panel.
//!
//! The header hides while the visitor scrolls down and comes back on scroll
//! up (see [`ScrollState::on_scroll`]). The menu button opens a side panel
//! holding the nav links, the social icon row and the support action; while
//! the panel is open the page behind it does not scroll.

use icondata::{FiArrowRight, FiPhone, FiX};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use super::{icons, listeners, support_modal};
use crate::{
    nav::{BodyScroll, Menu, NAV_ITEMS, ScrollLock, ScrollState, resolve_phone},
    types::SiteSettings,
};

/// Renders the header, overlay, side panel and support modal.
///
/// Reactive state:
/// - `scroll`: [`ScrollState`] updated from a passive window scroll listener
///   that is removed when the component is cleaned up.
/// - `menu`: the [`Menu`] controller, stored so that disposing the component
///   drops it and releases the body scroll lock.
/// - `is_open`: mirrors the menu state for the view.
/// - `support_open`: visibility of the support modal.
pub fn component(settings: SiteSettings) -> impl IntoView {
    let SiteSettings {
        social_links,
        setting_data,
    } = settings;
    let phone_number = resolve_phone(setting_data.as_ref());

    let location = use_location();
    let pathname = location.pathname;

    let scroll = RwSignal::new(ScrollState::default());
    let is_open = RwSignal::new(false);
    let support_open = RwSignal::new(false);

    let lock = use_context::<ScrollLock<BodyScroll>>()
        .unwrap_or_else(|| ScrollLock::new(BodyScroll));
    let menu = StoredValue::new(Menu::new(lock));

    let toggle_menu = move || {
        if let Some(state) = menu.try_update_value(Menu::toggle) {
            is_open.set(state.is_open());
        }
    };
    let close_menu = move || {
        if let Some(state) = menu.try_update_value(Menu::close) {
            is_open.set(state.is_open());
        }
    };

    listeners::passive_scroll_listener(move || {
        let offset = window().scroll_y().unwrap_or_default();
        scroll.update(|state| *state = state.on_scroll(offset));
    });
    on_cleanup(move || {
        // Release the lock even if the panel is unmounted while open.
        let _ = menu.try_update_value(Menu::close);
    });

    let is_visible = move || scroll.with(|state| state.is_visible);
    let is_scrolled = move || scroll.with(|state| state.is_scrolled);

    view! {
        {support_modal::component(support_open, Signal::derive(move || phone_number.clone()))}

        // Overlay
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 transition-opacity duration-300 bg-black/40 z-[60]"
                on:click=move |_| close_menu()
            />
        </Show>

        // Header
        <nav
            class="fixed top-0 right-0 left-0 transition-all duration-500 z-[70]"
            class=("bg-white", is_scrolled)
            class=("shadow-md", is_scrolled)
            class=("py-2", is_scrolled)
            class=("bg-transparent", move || !is_scrolled())
            class=("py-4", move || !is_scrolled())
            class=("-translate-y-full", move || !is_visible())
        >
            <div class="flex justify-between items-center px-6 mx-auto h-16 md:h-20">
                <A href="/">
                    <img
                        src="/logo.svg"
                        alt="Logo"
                        class="w-auto h-10 transition-transform duration-300 md:h-20 hover:scale-[1.02]"
                        class=("brightness-100", is_scrolled)
                        class=("drop-shadow-xl", move || !is_scrolled())
                    />
                </A>

                <div class="flex flex-1 justify-end">
                    <button
                        class="flex gap-3 items-center py-2.5 px-5 rounded-full border transition-all hover:scale-105 active:scale-95 group bg-primary/10 border-primary/20 hover:bg-primary/20"
                        aria-label="Toggle menu"
                        aria-expanded=move || is_open.get().to_string()
                        on:click=move |_| toggle_menu()
                    >
                        <span class="hidden font-black uppercase md:block text-md tracking-[0.2em] text-primary">
                            "Menu"
                        </span>
                        <div class="flex flex-col justify-between items-end w-5 h-3">
                            <span
                                class="w-full rounded-full transition-transform duration-300 origin-right h-[1.5px] bg-primary"
                                class=("rotate-45", move || is_open.get())
                                class=("translate-y-[5.5px]", move || is_open.get())
                            />
                            <span
                                class="w-2/3 rounded-full transition-opacity duration-300 h-[1.5px] bg-primary"
                                class=("opacity-0", move || is_open.get())
                            />
                            <span
                                class="w-full rounded-full transition-transform duration-300 origin-right h-[1.5px] bg-primary"
                                class=("-rotate-45", move || is_open.get())
                                class=("-translate-y-[5.5px]", move || is_open.get())
                            />
                        </div>
                    </button>
                </div>
            </div>
        </nav>

        // Side panel
        <div
            class="overflow-y-auto fixed top-0 right-0 w-full h-screen bg-white transition-transform duration-500 ease-out max-w-112.5 z-[80]"
            class=("translate-x-full", move || !is_open.get())
            aria-hidden=move || (!is_open.get()).to_string()
        >
            <div class="flex relative flex-col p-12 h-full">
                <div class="flex justify-between items-center mb-7">
                    <span class="text-xl font-black uppercase tracking-[0.5em]">"Navigation"</span>
                    <button aria-label="Close menu" on:click=move |_| close_menu()>
                        {icons::glyph(FiX, "size-6")}
                    </button>
                </div>

                <nav class="flex-1 space-y-2">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            let is_active = move || pathname.with(|path| item.is_active(path));
                            view! {
                                <A
                                    href=item.path
                                    on:click=move |_| close_menu()
                                    attr:class=move || {
                                        if is_active() {
                                            "group flex items-center justify-between py-5 text-4xl font-normal text-primary"
                                        } else {
                                            "group flex items-center justify-between py-5 text-4xl font-light text-black/60 hover:text-black"
                                        }
                                    }
                                >
                                    {item.label}
                                    {icons::glyph(FiArrowRight, "size-7")}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="pt-10 mt-auto">
                    {icons::component(social_links)}
                    <button
                        class="flex gap-4 justify-center items-center py-5 w-full text-white rounded-xl bg-primary"
                        on:click=move |_| support_open.set(true)
                    >
                        {icons::glyph(FiPhone, "size-[18px]")}
                        "Contact Support"
                    </button>
                </div>
            </div>
        </div>
    }
}
