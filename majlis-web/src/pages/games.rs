//! Full games catalogue with a client-side title search.
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::app::screen::Screen;
use crate::hooks::use_remote;
use crate::i18n::Lang;
use crate::pages::home::game_card;
use crate::services::StoreHandle;

struct Text {
    title: &'static str,
    search: &'static str,
    no_data: &'static str,
}

const AR: Text = Text {
    title: "جميع الألعاب",
    search: "البحث عن لعبة...",
    no_data: "لا توجد ألعاب",
};

const EN: Text = Text {
    title: "All Games",
    search: "Search for a game...",
    no_data: "No games available",
};

impl Text {
    const fn for_lang(lang: Lang) -> &'static Self {
        match lang {
            Lang::Ar => &AR,
            Lang::En => &EN,
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub store: StoreHandle,
    pub lang: Lang,
    pub on_navigate: Callback<Screen>,
}

/// Case-insensitive substring match over both titles. Local filtering only;
/// the query never re-hits the store.
fn matches_query(title_ar: &str, title_en: &str, query: &str) -> bool {
    let query = query.to_lowercase();
    title_ar.to_lowercase().contains(&query) || title_en.to_lowercase().contains(&query)
}

#[function_component(GamesPage)]
pub fn games_page(props: &Props) -> Html {
    let text = Text::for_lang(props.lang);
    let query = use_state(String::new);

    let games = use_remote(props.store.clone(), |store| async move {
        store.games_by_rating().await
    });

    let on_query = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                query.set(input.value());
            }
        })
    };

    let filtered: Vec<_> = games
        .rows()
        .iter()
        .filter(|game| matches_query(&game.title_ar, &game.title_en, &query))
        .collect();

    html! {
        <div class="page games-page" dir={props.lang.dir()}>
            <h1 class="page__title">{ text.title }</h1>

            <input
                type="text"
                class="form-input games-page__search"
                value={(*query).clone()}
                oninput={on_query}
                placeholder={text.search}
            />

            <div class="card-grid card-grid--wide">
                { if filtered.is_empty() {
                    html! { <div class="empty-state">{ text.no_data }</div> }
                } else {
                    filtered.iter().map(|game| game_card(game, props.lang, &props.on_navigate)).collect()
                } }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_matches_either_title_ignoring_case() {
        assert!(matches_query("سيف النار", "Sword of Fire", "sword"));
        assert!(matches_query("سيف النار", "Sword of Fire", "سيف"));
        assert!(matches_query("سيف النار", "Sword of Fire", ""));
        assert!(!matches_query("سيف النار", "Sword of Fire", "axe"));
    }
}
