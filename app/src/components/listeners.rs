//! Window listeners that leptos' `window_event_listener` cannot express.

/// Calls `handler` on every window `scroll` event.
///
/// The listener is registered as passive, so the browser never waits on the
/// handler before scrolling. It is removed when the current owner is cleaned
/// up. Does nothing when rendering on the server.
pub fn passive_scroll_listener(handler: impl Fn() + 'static) {
    #[cfg(feature = "ssr")]
    drop(handler);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::prelude::*;
        use wasm_bindgen::{JsCast, closure::Closure};
        use web_sys::AddEventListenerOptions;

        let callback = Closure::<dyn Fn()>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);

        if let Err(err) = window().add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            tracing::warn!(?err, "failed to register scroll listener");
            return;
        }

        let callback = StoredValue::new_local(Some(callback));
        on_cleanup(move || {
            let Some(Some(callback)) = callback.try_update_value(Option::take) else {
                return;
            };
            if let Err(err) = window()
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                tracing::warn!(?err, "failed to remove scroll listener");
            }
        });
    }
}
