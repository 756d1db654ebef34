//! Game detail: banner, tabbed content, info sidebar.
//!
//! The four fetches are independent and keyed on the game id; each populates
//! its own slice of state, so one failing leaves the others rendered.
use majlis_core::model::Identity;
use yew::prelude::*;

use crate::hooks::use_remote;
use crate::i18n::{Lang, fmt_date};
use crate::pages::home::star_row;
use crate::services::StoreHandle;

struct Text {
    wiki: &'static str,
    posts: &'static str,
    reviews: &'static str,
    media: &'static str,
    discussion: &'static str,
    release_date: &'static str,
    developer: &'static str,
    platforms: &'static str,
    add_review: &'static str,
    create_post: &'static str,
    no_data: &'static str,
    info: &'static str,
    loading: &'static str,
}

const AR: Text = Text {
    wiki: "الموسوعة",
    posts: "المنشورات",
    reviews: "المراجعات",
    media: "الوسائط",
    discussion: "النقاشات",
    release_date: "تاريخ الإصدار",
    developer: "المطور",
    platforms: "المنصات",
    add_review: "أضف مراجعة",
    create_post: "إنشاء منشور",
    no_data: "لا توجد بيانات",
    info: "معلومات اللعبة",
    loading: "جار التحميل...",
};

const EN: Text = Text {
    wiki: "Wiki",
    posts: "Posts",
    reviews: "Reviews",
    media: "Media",
    discussion: "Discussion",
    release_date: "Release Date",
    developer: "Developer",
    platforms: "Platforms",
    add_review: "Add Review",
    create_post: "Create Post",
    no_data: "No data available",
    info: "Game Info",
    loading: "Loading...",
};

impl Text {
    const fn for_lang(lang: Lang) -> &'static Self {
        match lang {
            Lang::Ar => &AR,
            Lang::En => &EN,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    Wiki,
    Posts,
    Reviews,
    Media,
    Discussion,
}

impl Tab {
    const ALL: [Self; 5] = [Self::Wiki, Self::Posts, Self::Reviews, Self::Media, Self::Discussion];

    fn label(self, text: &Text) -> &'static str {
        match self {
            Self::Wiki => text.wiki,
            Self::Posts => text.posts,
            Self::Reviews => text.reviews,
            Self::Media => text.media,
            Self::Discussion => text.discussion,
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub store: StoreHandle,
    pub lang: Lang,
    pub game_id: AttrValue,
    pub identity: Option<Identity>,
}

#[function_component(GamePage)]
pub fn game_page(props: &Props) -> Html {
    let text = Text::for_lang(props.lang);
    let lang = props.lang;
    let tab = use_state(Tab::default);

    let deps = (props.store.clone(), props.game_id.clone());
    let game = use_remote(deps.clone(), |(store, id)| async move {
        store.game(&id).await
    });
    let posts = use_remote(deps.clone(), |(store, id)| async move {
        store.posts_for_game(&id).await
    });
    let reviews = use_remote(deps.clone(), |(store, id)| async move {
        store.reviews_for_game(&id).await
    });
    let wiki = use_remote(deps, |(store, id)| async move {
        store.wiki_for_game(&id).await
    });

    // Detail screens show a loading placeholder until the primary row lands.
    let Some(game) = game.ready().and_then(|found| found.as_ref()) else {
        return html! {
            <div class="page game-page game-page--loading" dir={lang.dir()}>
                <div class="loading-placeholder">{ text.loading }</div>
            </div>
        };
    };

    let set_tab = |next: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(next))
    };

    let empty = || html! { <div class="empty-state">{ text.no_data }</div> };

    let tab_body = match *tab {
        Tab::Wiki => {
            if wiki.rows().is_empty() {
                empty()
            } else {
                wiki.rows()
                    .iter()
                    .map(|article| {
                        html! {
                            <div class="card wiki-entry">
                                <h3 class="card__title">{ article.title(lang.tag()) }</h3>
                                <div class="wiki-entry__content">{ article.content(lang.tag()) }</div>
                            </div>
                        }
                    })
                    .collect()
            }
        }
        Tab::Posts => html! {
            <>
                { if props.identity.is_some() {
                    html! { <button class="btn btn-primary tab-action">{ text.create_post }</button> }
                } else {
                    Html::default()
                } }
                { if posts.rows().is_empty() { empty() } else {
                    posts.rows().iter().map(|post| html! {
                        <div class="card">
                            <h3 class="card__title">{ &post.title }</h3>
                            <p class="card__body-text">{ &post.content }</p>
                            <div class="card__meta">
                                <span>{ post.author.as_ref().map(|a| a.username.clone()).unwrap_or_default() }</span>
                                <span>{ fmt_date(&post.created_at, lang) }</span>
                            </div>
                        </div>
                    }).collect::<Html>()
                } }
            </>
        },
        Tab::Reviews => html! {
            <>
                { if props.identity.is_some() {
                    html! { <button class="btn btn-primary tab-action">{ text.add_review }</button> }
                } else {
                    Html::default()
                } }
                { if reviews.rows().is_empty() { empty() } else {
                    reviews.rows().iter().map(|review| html! {
                        <div class="card">
                            <div class="review-card__stars">{ star_row(review.rating) }</div>
                            <h3 class="card__title">{ &review.title }</h3>
                            <p class="card__body-text">{ &review.content }</p>
                            <div class="card__meta">
                                <span>{ review.author.as_ref().map(|a| a.username.clone()).unwrap_or_default() }</span>
                                <span>{ fmt_date(&review.created_at, lang) }</span>
                            </div>
                        </div>
                    }).collect::<Html>()
                } }
            </>
        },
        Tab::Media | Tab::Discussion => empty(),
    };

    html! {
        <div class="page game-page" dir={lang.dir()}>
            <div class="game-banner">
                { game.banner_url.as_ref().map(|url| html! {
                    <img class="game-banner__img" src={url.clone()} alt={game.title(lang.tag()).to_string()} />
                }).unwrap_or_default() }
                <div class="game-banner__overlay">
                    <h1 class="game-banner__title">{ game.title(lang.tag()) }</h1>
                    <div class="game-banner__rating">
                        <span class="star star--filled">{ "★" }</span>
                        <span class="game-banner__score">{ format!("{:.1}", game.average_rating) }</span>
                        <span>{ format!("({})", game.total_ratings) }</span>
                    </div>
                </div>
            </div>

            <div class="game-layout">
                <div class="game-layout__main">
                    <div class="tab-row">
                        { for Tab::ALL.iter().map(|&entry| {
                            let class = if *tab == entry { "tab-btn tab-btn--active" } else { "tab-btn" };
                            html! {
                                <button class={class} onclick={set_tab(entry)}>{ entry.label(text) }</button>
                            }
                        }) }
                    </div>
                    <div class="tab-body">{ tab_body }</div>
                </div>

                <aside class="game-layout__side">
                    <div class="card info-card">
                        <h3 class="card__title">{ text.info }</h3>
                        <dl class="info-card__rows">
                            <dt>{ text.release_date }</dt>
                            <dd>{ game.release_date.as_ref().map_or_else(|| String::from("TBA"), |date| fmt_date(date, lang)) }</dd>
                            <dt>{ text.developer }</dt>
                            <dd>{ game.developer.clone().unwrap_or_else(|| String::from("Unknown")) }</dd>
                            <dt>{ text.platforms }</dt>
                            <dd>{ if game.platforms.is_empty() { String::from("N/A") } else { game.platforms.join(", ") } }</dd>
                        </dl>
                    </div>
                </aside>
            </div>
        </div>
    }
}
