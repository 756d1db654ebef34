use majlis_core::model::{Identity, Profile};
use yew::prelude::*;

use crate::app::screen::Screen;
use crate::i18n::Lang;
use crate::services::{AuthHandle, StoreHandle};

#[derive(Clone)]
pub struct AppState {
    pub screen: UseStateHandle<Screen>,
    pub language: UseStateHandle<Lang>,
    pub identity: UseStateHandle<Option<Identity>>,
    pub profile: UseStateHandle<Option<Profile>>,
    /// Bumped when an access code is verified; keys the discussion screen so
    /// a grant forces a full remount and re-fetch.
    pub discussion_epoch: UseStateHandle<u32>,
    pub code_modal_open: UseStateHandle<bool>,
    pub store: StoreHandle,
    pub auth: AuthHandle,
}

#[hook]
pub fn use_app_state(store: StoreHandle, auth: AuthHandle) -> AppState {
    // A persisted session token makes the identity available immediately;
    // the profile row follows from the bootstrap fetch.
    let identity = use_state(|| auth.current_identity());
    AppState {
        screen: use_state(Screen::default),
        language: use_state(crate::i18n::saved_lang),
        identity,
        profile: use_state(|| None),
        discussion_epoch: use_state(|| 0_u32),
        code_modal_open: use_state(|| false),
        store,
        auth,
    }
}
