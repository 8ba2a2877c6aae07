//! WebAssembly entry point of the site.
//!
//! Hydrates the server-rendered page so the navigation bar's scroll listener,
//! menu toggle and support modal become interactive in the browser.

/// Log level for the browser console.
pub const CONSOLE_LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates `app::component` over the server-rendered body.
///
/// Console logging and the panic hook are installed first so that failures
/// during hydration show up in the browser console.
pub fn hydrate() {
    _ = console_log::init_with_level(CONSOLE_LOG_LEVEL);
    console_error_panic_hook::set_once();
    tracing::debug!("hydrating site navigation");

    leptos::mount::hydrate_body(app::component);
}
