//! Top-level render: navbar, the mounted screen, and the access-code modal.
use yew::prelude::*;

use crate::app::handlers::AppHandlers;
use crate::app::screen::Screen;
use crate::app::state::AppState;
use crate::components::access_modal::AccessCodeModal;
use crate::components::navbar::Navbar;
use crate::pages;

pub fn render_app(state: &AppState, handlers: &AppHandlers) -> Html {
    let lang = *state.language;
    let identity = (*state.identity).clone();

    let home = || {
        html! {
            <pages::home::HomePage
                store={state.store.clone()}
                lang={lang}
                on_navigate={handlers.navigate.clone()}
            />
        }
    };

    let main_view = match &*state.screen {
        Screen::Home => home(),
        // A game navigation without a payload falls back to home.
        Screen::Game(game_id) if game_id.is_empty() => home(),
        Screen::SignIn => html! {
            <pages::sign_in::SignInPage
                auth={state.auth.clone()}
                lang={lang}
                on_navigate={handlers.navigate.clone()}
                on_signed_in={handlers.signed_in.clone()}
            />
        },
        Screen::SignUp => html! {
            <pages::sign_up::SignUpPage
                auth={state.auth.clone()}
                on_navigate={handlers.navigate.clone()}
                on_signed_in={handlers.signed_in.clone()}
            />
        },
        Screen::Games => html! {
            <pages::games::GamesPage
                store={state.store.clone()}
                lang={lang}
                on_navigate={handlers.navigate.clone()}
            />
        },
        Screen::Game(game_id) => html! {
            <pages::game::GamePage
                store={state.store.clone()}
                lang={lang}
                game_id={game_id.clone()}
                identity={identity.clone()}
            />
        },
        Screen::Posts => html! {
            <pages::posts::PostsPage
                store={state.store.clone()}
                lang={lang}
                identity={identity.clone()}
            />
        },
        Screen::Reviews => html! {
            <pages::reviews::ReviewsPage store={state.store.clone()} lang={lang} />
        },
        Screen::Wiki(article_id) => html! {
            <pages::wiki::WikiPage
                store={state.store.clone()}
                lang={lang}
                article_id={article_id.clone()}
            />
        },
        Screen::Discussion => html! {
            <pages::discussion::DiscussionPage
                key={*state.discussion_epoch}
                store={state.store.clone()}
                lang={lang}
                identity={identity.clone()}
            />
        },
        Screen::Profile => html! {
            <pages::profile::ProfilePage
                store={state.store.clone()}
                lang={lang}
                profile={(*state.profile).clone()}
            />
        },
    };

    html! {
        <div class="site-shell">
            <Navbar
                current={(*state.screen).clone()}
                lang={lang}
                profile={(*state.profile).clone()}
                signed_in={state.identity.is_some()}
                on_navigate={handlers.navigate.clone()}
                on_sign_out={handlers.sign_out.clone()}
                on_open_code={handlers.open_code_modal.clone()}
                on_lang_change={handlers.lang_change.clone()}
            />
            <main id="main" role="main">{ main_view }</main>
            <AccessCodeModal
                open={*state.code_modal_open}
                lang={lang}
                store={state.store.clone()}
                auth={state.auth.clone()}
                on_close={handlers.close_code_modal.clone()}
                on_verified={handlers.code_verified.clone()}
            />
        </div>
    }
}
