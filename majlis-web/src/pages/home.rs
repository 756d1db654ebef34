//! Landing screen: hero, trending games, latest posts, latest reviews.
use majlis_core::model::{Game, Post, Review};
use yew::prelude::*;

use crate::app::screen::Screen;
use crate::hooks::use_remote;
use crate::i18n::{Lang, fmt_date};
use crate::services::StoreHandle;

struct Text {
    hero: &'static str,
    hero_desc: &'static str,
    search: &'static str,
    search_btn: &'static str,
    trending: &'static str,
    latest_posts: &'static str,
    latest_reviews: &'static str,
    view_all: &'static str,
    no_data: &'static str,
    unknown: &'static str,
}

const AR: Text = Text {
    hero: "موسوعة الألعاب العربية",
    hero_desc: "اكتشف، شارك، وتواصل مع مجتمع الألعاب العربي",
    search: "ابحث عن لعبة...",
    search_btn: "بحث",
    trending: "الألعاب الرائجة",
    latest_posts: "أحدث المنشورات",
    latest_reviews: "أحدث المراجعات",
    view_all: "عرض الكل",
    no_data: "لا توجد بيانات",
    unknown: "غير معروف",
};

const EN: Text = Text {
    hero: "Arabic Gaming Encyclopedia",
    hero_desc: "Discover, share, and connect with the Arab gaming community",
    search: "Search for a game...",
    search_btn: "Search",
    trending: "Trending Games",
    latest_posts: "Latest Posts",
    latest_reviews: "Latest Reviews",
    view_all: "View All",
    no_data: "No data available",
    unknown: "Unknown",
};

impl Text {
    const fn for_lang(lang: Lang) -> &'static Self {
        match lang {
            Lang::Ar => &AR,
            Lang::En => &EN,
        }
    }
}

const TRENDING_LIMIT: usize = 6;
const LATEST_LIMIT: usize = 3;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub store: StoreHandle,
    pub lang: Lang,
    pub on_navigate: Callback<Screen>,
}

/// Star row for a 1-5 rating.
pub(crate) fn star_row(rating: u8) -> Html {
    (1..=5_u8)
        .map(|star| {
            let class = if star <= rating {
                "star star--filled"
            } else {
                "star"
            };
            html! { <span class={class}>{ "★" }</span> }
        })
        .collect()
}

pub(crate) fn game_card(game: &Game, lang: Lang, on_navigate: &Callback<Screen>) -> Html {
    let open = {
        let on_navigate = on_navigate.clone();
        let id = game.id.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Screen::Game(id.clone().into())))
    };
    html! {
        <button class="game-card" onclick={open}>
            { game.thumbnail_url.as_ref().map(|url| html! {
                <img class="game-card__thumb" src={url.clone()} alt={game.title(lang.tag()).to_string()} />
            }).unwrap_or_default() }
            <div class="game-card__overlay">
                <h3 class="game-card__title">{ game.title(lang.tag()) }</h3>
                <div class="game-card__rating">
                    <span class="star star--filled">{ "★" }</span>
                    <span>{ format!("{:.1}", game.average_rating) }</span>
                    <span class="game-card__count">{ format!("({})", game.total_ratings) }</span>
                </div>
            </div>
        </button>
    }
}

fn post_card(post: &Post, lang: Lang, text: &Text) -> Html {
    let author = post
        .author
        .as_ref()
        .map_or(text.unknown, |profile| profile.username.as_str());
    html! {
        <div class="card post-card">
            <h3 class="card__title">{ &post.title }</h3>
            <p class="card__excerpt">{ &post.content }</p>
            <div class="card__meta">
                <span>{ author }</span>
                <span>{ fmt_date(&post.created_at, lang) }</span>
            </div>
        </div>
    }
}

fn review_card(review: &Review, lang: Lang, text: &Text) -> Html {
    let author = review
        .author
        .as_ref()
        .map_or(text.unknown, |profile| profile.username.as_str());
    html! {
        <div class="card review-card">
            <div class="review-card__stars">{ star_row(review.rating) }</div>
            <h3 class="card__title">{ &review.title }</h3>
            <p class="card__excerpt">{ &review.content }</p>
            <div class="card__meta">
                <span>{ author }</span>
                <span>{ fmt_date(&review.created_at, lang) }</span>
            </div>
        </div>
    }
}

#[function_component(HomePage)]
pub fn home_page(props: &Props) -> Html {
    let text = Text::for_lang(props.lang);
    let lang = props.lang;

    let games = use_remote(props.store.clone(), |store| async move {
        store.trending_games(TRENDING_LIMIT).await
    });
    let posts = use_remote(props.store.clone(), |store| async move {
        store.latest_posts(LATEST_LIMIT).await
    });
    let reviews = use_remote(props.store.clone(), |store| async move {
        store.latest_reviews(LATEST_LIMIT).await
    });

    let view_all = |target: Screen| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(target.clone()))
    };

    let empty = || html! { <div class="empty-state">{ text.no_data }</div> };

    html! {
        <div class="page home-page" dir={lang.dir()}>
            <section class="hero">
                <h1 class="hero__title">{ text.hero }</h1>
                <p class="hero__subtitle">{ text.hero_desc }</p>
                <div class="hero__search">
                    <input type="text" class="form-input" placeholder={text.search} />
                    <button class="btn btn-primary">{ text.search_btn }</button>
                </div>
            </section>

            <section class="home-section">
                <div class="home-section__header">
                    <h2>{ text.trending }</h2>
                    <button class="link-btn" onclick={view_all(Screen::Games)}>{ text.view_all }</button>
                </div>
                <div class="card-grid">
                    { if games.rows().is_empty() { empty() } else {
                        games.rows().iter().map(|game| game_card(game, lang, &props.on_navigate)).collect()
                    } }
                </div>
            </section>

            <section class="home-section">
                <div class="home-section__header">
                    <h2>{ text.latest_posts }</h2>
                    <button class="link-btn" onclick={view_all(Screen::Posts)}>{ text.view_all }</button>
                </div>
                <div class="card-grid">
                    { if posts.rows().is_empty() { empty() } else {
                        posts.rows().iter().map(|post| post_card(post, lang, text)).collect()
                    } }
                </div>
            </section>

            <section class="home-section">
                <div class="home-section__header">
                    <h2>{ text.latest_reviews }</h2>
                    <button class="link-btn" onclick={view_all(Screen::Reviews)}>{ text.view_all }</button>
                </div>
                <div class="card-grid">
                    { if reviews.rows().is_empty() { empty() } else {
                        reviews.rows().iter().map(|review| review_card(review, lang, text)).collect()
                    } }
                </div>
            </section>
        </div>
    }
}
