//! Community posts with a newest/popular ordering switch.
use majlis_core::model::{Identity, Post};
use majlis_core::query::PostOrder;
use yew::prelude::*;

use crate::hooks::use_remote;
use crate::i18n::{Lang, fmt_date};
use crate::services::StoreHandle;

struct Text {
    title: &'static str,
    newest: &'static str,
    popular: &'static str,
    create_post: &'static str,
    no_data: &'static str,
    filters: &'static str,
}

const AR: Text = Text {
    title: "منشورات المجتمع",
    newest: "الأحدث",
    popular: "الأكثر شعبية",
    create_post: "إنشاء منشور",
    no_data: "لا توجد منشورات",
    filters: "الفلاتر",
};

const EN: Text = Text {
    title: "Community Posts",
    newest: "Newest",
    popular: "Popular",
    create_post: "Create Post",
    no_data: "No posts available",
    filters: "Filters",
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
    pub identity: Option<Identity>,
}

fn initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

fn post_card(post: &Post, lang: Lang) -> Html {
    let author = post.author.as_ref();
    html! {
        <div class="card post-card">
            <div class="post-card__byline">
                <div class="avatar">{ author.map(|a| initial(&a.username)).unwrap_or_default() }</div>
                <div>
                    <div class="post-card__author">{ author.map(|a| a.username.clone()).unwrap_or_default() }</div>
                    <div class="post-card__date">{ fmt_date(&post.created_at, lang) }</div>
                </div>
            </div>
            { post.game.as_ref().map(|game| html! {
                <div class="post-card__game">{ game.title(lang.tag()) }</div>
            }).unwrap_or_default() }
            <h3 class="card__title">{ &post.title }</h3>
            <p class="card__excerpt">{ &post.content }</p>
            <div class="card__meta">
                <span>{ format!("💬 {}", post.comments_count) }</span>
                <span>{ format!("▲ {}", post.likes_count) }</span>
            </div>
        </div>
    }
}

#[function_component(PostsPage)]
pub fn posts_page(props: &Props) -> Html {
    let text = Text::for_lang(props.lang);
    let order = use_state(PostOrder::default);

    // One fresh query per ordering switch.
    let posts = use_remote((props.store.clone(), *order), |(store, order)| async move {
        store.posts(order).await
    });

    let set_order = |next: PostOrder| {
        let order = order.clone();
        Callback::from(move |_: MouseEvent| order.set(next))
    };
    let filter_class = |this: PostOrder| {
        if *order == this {
            "filter-btn filter-btn--active"
        } else {
            "filter-btn"
        }
    };

    html! {
        <div class="page posts-page" dir={props.lang.dir()}>
            <div class="page__header">
                <h1 class="page__title">{ text.title }</h1>
                { if props.identity.is_some() {
                    html! { <button class="btn btn-primary">{ text.create_post }</button> }
                } else {
                    Html::default()
                } }
            </div>

            <div class="filter-row">
                <span class="filter-row__label">{ format!("{}:", text.filters) }</span>
                <button class={filter_class(PostOrder::Newest)} onclick={set_order(PostOrder::Newest)}>
                    { text.newest }
                </button>
                <button class={filter_class(PostOrder::Popular)} onclick={set_order(PostOrder::Popular)}>
                    { text.popular }
                </button>
            </div>

            <div class="card-grid">
                { if posts.rows().is_empty() {
                    html! { <div class="empty-state">{ text.no_data }</div> }
                } else {
                    posts.rows().iter().map(|post| post_card(post, props.lang)).collect()
                } }
            </div>
        </div>
    }
}
