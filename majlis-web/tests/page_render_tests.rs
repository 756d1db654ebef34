//! Server-render smoke tests for every screen in both languages.
//!
//! Effects do not run under the server renderer, so screens show their
//! loading and empty states; the assertions cover the static chrome and the
//! role/identity gating that is decided synchronously.
use std::rc::Rc;

use futures::executor::block_on;
use majlis_core::memory::{MemoryAuth, MemoryStore};
use majlis_core::model::{Identity, Profile};
use majlis_web::i18n::Lang;
use majlis_web::pages::{
    discussion::DiscussionPage, game::GamePage, games::GamesPage, home::HomePage,
    posts::PostsPage, profile::ProfilePage, reviews::ReviewsPage, sign_in::SignInPage,
    sign_up::SignUpPage, wiki::WikiPage,
};
use majlis_web::services::{AuthHandle, StoreHandle};
use yew::{Callback, LocalServerRenderer};

fn store() -> StoreHandle {
    StoreHandle(Rc::new(MemoryStore::default()))
}

fn auth() -> AuthHandle {
    AuthHandle(Rc::new(MemoryAuth::new(Rc::new(MemoryStore::default()))))
}

fn identity(id: &str) -> Identity {
    Identity {
        id: id.to_string(),
        email: format!("{id}@example.com"),
    }
}

fn profile(id: &str, username: &str) -> Profile {
    Profile {
        id: id.to_string(),
        username: username.to_string(),
        avatar_url: None,
        bio: String::new(),
        xp: 250,
        level: 3,
        preferred_language: String::from("ar"),
        created_at: String::new(),
    }
}

#[test]
fn home_page_renders_sections_in_both_languages() {
    let props = majlis_web::pages::home::Props {
        store: store(),
        lang: Lang::Ar,
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("موسوعة الألعاب العربية"));
    assert!(html.contains("الألعاب الرائجة"));
    assert!(html.contains("dir=\"rtl\""));

    let props = majlis_web::pages::home::Props {
        store: store(),
        lang: Lang::En,
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("Trending Games"));
    assert!(html.contains("Latest Reviews"));
    assert!(html.contains("dir=\"ltr\""));
}

#[test]
fn games_page_shows_title_search_and_empty_state() {
    let props = majlis_web::pages::games::Props {
        store: store(),
        lang: Lang::En,
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GamesPage>::with_props(props).render());
    assert!(html.contains("All Games"));
    assert!(html.contains("Search for a game..."));
    assert!(html.contains("No games available"));
}

#[test]
fn game_detail_shows_loading_until_the_row_lands() {
    let props = majlis_web::pages::game::Props {
        store: store(),
        lang: Lang::En,
        game_id: "g1".into(),
        identity: None,
    };
    let html = block_on(LocalServerRenderer::<GamePage>::with_props(props).render());
    assert!(html.contains("Loading..."));
}

#[test]
fn posts_page_gates_create_on_identity() {
    let signed_out = majlis_web::pages::posts::Props {
        store: store(),
        lang: Lang::En,
        identity: None,
    };
    let html = block_on(LocalServerRenderer::<PostsPage>::with_props(signed_out).render());
    assert!(html.contains("Community Posts"));
    assert!(html.contains("Newest"));
    assert!(html.contains("Popular"));
    assert!(!html.contains("Create Post"));

    let signed_in = majlis_web::pages::posts::Props {
        store: store(),
        lang: Lang::En,
        identity: Some(identity("u1")),
    };
    let html = block_on(LocalServerRenderer::<PostsPage>::with_props(signed_in).render());
    assert!(html.contains("Create Post"));
}

#[test]
fn reviews_page_renders_star_filter_row() {
    let props = majlis_web::pages::reviews::Props {
        store: store(),
        lang: Lang::Ar,
    };
    let html = block_on(LocalServerRenderer::<ReviewsPage>::with_props(props).render());
    assert!(html.contains("مراجعات الألعاب"));
    assert!(html.contains("الكل"));
    assert!(html.contains("5 ★"));
}

#[test]
fn wiki_index_renders_empty_state() {
    let props = majlis_web::pages::wiki::Props {
        store: store(),
        lang: Lang::En,
        article_id: None,
    };
    let html = block_on(LocalServerRenderer::<WikiPage>::with_props(props).render());
    assert!(html.contains("Game Encyclopedia"));
    assert!(html.contains("No articles available"));
}

#[test]
fn discussion_page_gating_messages_follow_identity() {
    // Signed out: the sign-in prompt, never the create control.
    let props = majlis_web::pages::discussion::Props {
        store: store(),
        lang: Lang::En,
        identity: None,
    };
    let html = block_on(LocalServerRenderer::<DiscussionPage>::with_props(props).render());
    assert!(html.contains("Discussion"));
    assert!(html.contains("Sign in first"));
    assert!(!html.contains("Create Post"));

    // Signed in without a role row: the enter-code prompt is shown.
    let props = majlis_web::pages::discussion::Props {
        store: store(),
        lang: Lang::En,
        identity: Some(identity("u1")),
    };
    let html = block_on(LocalServerRenderer::<DiscussionPage>::with_props(props).render());
    assert!(html.contains("Enter access code to create posts"));
    assert!(!html.contains("Create Post"));
}

#[test]
fn profile_page_renders_member_card_and_progress() {
    let props = majlis_web::pages::profile::Props {
        store: store(),
        lang: Lang::En,
        profile: Some(profile("u1", "amira")),
    };
    let html = block_on(LocalServerRenderer::<ProfilePage>::with_props(props).render());
    assert!(html.contains("amira"));
    assert!(html.contains("Level 3"));
    assert!(html.contains("250 / 300"));
    assert!(html.contains("width: 50%"));

    let props = majlis_web::pages::profile::Props {
        store: store(),
        lang: Lang::En,
        profile: None,
    };
    let html = block_on(LocalServerRenderer::<ProfilePage>::with_props(props).render());
    assert!(html.contains("Loading..."));
}

#[test]
fn auth_pages_render_their_forms() {
    let props = majlis_web::pages::sign_in::Props {
        auth: auth(),
        lang: Lang::Ar,
        on_navigate: Callback::noop(),
        on_signed_in: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SignInPage>::with_props(props).render());
    assert!(html.contains("تسجيل الدخول"));
    assert!(html.contains("كلمة المرور"));

    let props = majlis_web::pages::sign_up::Props {
        auth: auth(),
        on_navigate: Callback::noop(),
        on_signed_in: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SignUpPage>::with_props(props).render());
    assert!(html.contains("Create Account"));
    assert!(html.contains("العربية"));
    assert!(html.contains("Preferred Language"));
}
