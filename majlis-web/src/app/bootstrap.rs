//! Session restore on first mount.
use yew::prelude::*;

use crate::app::state::AppState;
use crate::i18n::Lang;

/// When a persisted session produced an identity, fetch its profile row and
/// switch the UI to the member's preferred language.
#[hook]
pub fn use_bootstrap(state: &AppState) {
    let auth = state.auth.clone();
    let store = state.store.clone();
    let profile = state.profile.clone();
    let language = state.language.clone();

    use_effect_with((), move |()| {
        if let Some(identity) = auth.current_identity() {
            crate::dom::spawn(async move {
                match store.profile(&identity.id).await {
                    Ok(Some(found)) => {
                        let lang = Lang::from_tag(&found.preferred_language);
                        crate::i18n::apply_lang(lang);
                        language.set(lang);
                        profile.set(Some(found));
                    }
                    // A session without a profile row renders as signed-in
                    // with no member card; nothing else to do.
                    Ok(None) => {}
                    Err(err) => log::error!("profile restore failed: {err}"),
                }
            });
        }
        || {}
    });
}
