//! Callbacks the screens receive from the view controller.
use majlis_core::model::Profile;
use yew::prelude::*;

use crate::app::screen::Screen;
use crate::app::state::AppState;
use crate::i18n::Lang;

#[derive(Clone, PartialEq)]
pub struct AppHandlers {
    pub navigate: Callback<Screen>,
    pub signed_in: Callback<Profile>,
    pub sign_out: Callback<()>,
    pub lang_change: Callback<Lang>,
    pub open_code_modal: Callback<()>,
    pub close_code_modal: Callback<()>,
    pub code_verified: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            navigate: build_navigate(state),
            signed_in: build_signed_in(state),
            sign_out: build_sign_out(state),
            lang_change: build_lang_change(state),
            open_code_modal: build_open_code_modal(state),
            close_code_modal: build_close_code_modal(state),
            code_verified: build_code_verified(state),
        }
    }
}

pub fn build_navigate(state: &AppState) -> Callback<Screen> {
    let screen = state.screen.clone();
    Callback::from(move |next: Screen| {
        screen.set(next);
        crate::dom::scroll_to_top();
    })
}

pub fn build_signed_in(state: &AppState) -> Callback<Profile> {
    let identity = state.identity.clone();
    let profile = state.profile.clone();
    let language = state.language.clone();
    let screen = state.screen.clone();
    let auth = state.auth.clone();
    Callback::from(move |signed_in: Profile| {
        let lang = Lang::from_tag(&signed_in.preferred_language);
        crate::i18n::apply_lang(lang);
        language.set(lang);
        identity.set(auth.current_identity());
        profile.set(Some(signed_in));
        screen.set(Screen::Home);
        crate::dom::scroll_to_top();
    })
}

pub fn build_sign_out(state: &AppState) -> Callback<()> {
    let identity = state.identity.clone();
    let profile = state.profile.clone();
    let screen = state.screen.clone();
    let auth = state.auth.clone();
    Callback::from(move |()| {
        identity.set(None);
        profile.set(None);
        screen.set(Screen::Home);
        let auth = auth.clone();
        crate::dom::spawn(async move {
            if let Err(err) = auth.sign_out().await {
                log::error!("sign-out failed: {err}");
            }
        });
    })
}

pub fn build_lang_change(state: &AppState) -> Callback<Lang> {
    let language = state.language.clone();
    Callback::from(move |lang: Lang| {
        crate::i18n::apply_lang(lang);
        language.set(lang);
    })
}

pub fn build_open_code_modal(state: &AppState) -> Callback<()> {
    let open = state.code_modal_open.clone();
    Callback::from(move |()| open.set(true))
}

pub fn build_close_code_modal(state: &AppState) -> Callback<()> {
    let open = state.code_modal_open.clone();
    Callback::from(move |()| open.set(false))
}

pub fn build_code_verified(state: &AppState) -> Callback<()> {
    let epoch = state.discussion_epoch.clone();
    Callback::from(move |()| epoch.set(*epoch + 1))
}
