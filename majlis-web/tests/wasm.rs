//! Browser-only checks, run with `wasm-pack test --headless`.
#![cfg(target_arch = "wasm32")]

use majlis_web::i18n::{Lang, apply_lang, saved_lang};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn apply_lang_sets_document_direction_and_persists() {
    apply_lang(Lang::Ar);
    let el = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .expect("document element");
    assert_eq!(el.get_attribute("dir").as_deref(), Some("rtl"));
    assert_eq!(el.get_attribute("lang").as_deref(), Some("ar"));
    assert_eq!(saved_lang(), Lang::Ar);

    apply_lang(Lang::En);
    assert_eq!(el.get_attribute("dir").as_deref(), Some("ltr"));
    assert_eq!(saved_lang(), Lang::En);
}
