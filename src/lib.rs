#![recursion_limit = "256"]
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod glyph;
pub mod motion;
pub mod nav;
pub mod portfolio;
pub mod prose;
#[cfg(feature = "ssr")]
pub mod server;
pub mod shapes;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(App);
}
