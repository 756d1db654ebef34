#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod hooks;
pub mod i18n;
pub mod pages;
pub mod services;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Ensure <html lang, dir> reflect the saved locale before first paint
    crate::i18n::apply_lang(crate::i18n::saved_lang());
    yew::Renderer::<app::App>::new().render();
}
