//! The "Contact Support" dialog opened from the side panel.

use icondata::{FiPhone, FiX};
use leptos::{ev, prelude::*};

use super::icons::glyph;

/// Renders the support dialog while `is_open` is true.
///
/// Backdrop clicks, the close button and the Escape key all close it by
/// writing `false` back into `is_open`.
pub fn component(is_open: RwSignal<bool>, phone_number: Signal<String>) -> impl IntoView {
    let close = move || is_open.set(false);

    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && is_open.get_untracked() {
            close();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <Show when=move || is_open.get()>
            <div
                class="flex fixed inset-0 justify-center items-center px-4 bg-black/50 z-[90]"
                on:click=move |_| close()
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="support-modal-title"
                    class="relative p-8 w-full max-w-sm text-center bg-white rounded-2xl shadow-2xl"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        class="absolute top-4 right-4 text-black/50 hover:text-black"
                        aria-label="Close"
                        on:click=move |_| close()
                    >
                        {glyph(FiX, "size-5")}
                    </button>
                    <h2 id="support-modal-title" class="mb-2 text-2xl font-black uppercase tracking-[0.2em]">
                        "Contact Support"
                    </h2>
                    <p class="mb-6 text-black/60">"Call us and our team will help you right away."</p>
                    <p class="mb-8 text-3xl font-light text-primary">{move || phone_number.get()}</p>
                    <a
                        href=move || format!("tel:{}", phone_number.get())
                        class="flex gap-4 justify-center items-center py-4 w-full text-white rounded-xl bg-primary"
                    >
                        {glyph(FiPhone, "size-5")}
                        "Call now"
                    </a>
                </div>
            </div>
        </Show>
    }
}
