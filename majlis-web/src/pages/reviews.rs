//! Game reviews with a star-rating filter.
use majlis_core::model::Review;
use majlis_core::query::ReviewFilter;
use yew::prelude::*;

use crate::hooks::use_remote;
use crate::i18n::{Lang, fmt_date};
use crate::pages::home::star_row;
use crate::services::StoreHandle;

struct Text {
    title: &'static str,
    all: &'static str,
    filters: &'static str,
    no_data: &'static str,
}

const AR: Text = Text {
    title: "مراجعات الألعاب",
    all: "الكل",
    filters: "تصفية حسب التقييم",
    no_data: "لا توجد مراجعات",
};

const EN: Text = Text {
    title: "Game Reviews",
    all: "All",
    filters: "Filter by Rating",
    no_data: "No reviews available",
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
}

fn initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

fn review_card(review: &Review, lang: Lang) -> Html {
    let author = review.author.as_ref();
    html! {
        <div class="card review-card review-card--row">
            <div class="avatar avatar--lg">{ author.map(|a| initial(&a.username)).unwrap_or_default() }</div>
            <div class="review-card__body">
                <div class="review-card__top">
                    <div>
                        <div class="review-card__author">{ author.map(|a| a.username.clone()).unwrap_or_default() }</div>
                        <div class="review-card__date">{ fmt_date(&review.created_at, lang) }</div>
                    </div>
                    <div class="review-card__stars">{ star_row(review.rating) }</div>
                </div>
                { review.game.as_ref().map(|game| html! {
                    <div class="review-card__game">{ game.title(lang.tag()) }</div>
                }).unwrap_or_default() }
                <h3 class="card__title">{ &review.title }</h3>
                <p class="card__body-text">{ &review.content }</p>
            </div>
        </div>
    }
}

#[function_component(ReviewsPage)]
pub fn reviews_page(props: &Props) -> Html {
    let text = Text::for_lang(props.lang);
    let filter = use_state(ReviewFilter::default);

    // One fresh query per filter switch; nothing cached across them.
    let reviews = use_remote((props.store.clone(), *filter), |(store, filter)| async move {
        store.reviews(filter).await
    });

    let set_filter = |next: ReviewFilter| {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| filter.set(next))
    };
    let filter_class = |this: ReviewFilter| {
        if *filter == this {
            "filter-btn filter-btn--active"
        } else {
            "filter-btn"
        }
    };

    html! {
        <div class="page reviews-page" dir={props.lang.dir()}>
            <h1 class="page__title">{ text.title }</h1>

            <div class="filter-row">
                <span class="filter-row__label">{ format!("{}:", text.filters) }</span>
                <button class={filter_class(ReviewFilter::All)} onclick={set_filter(ReviewFilter::All)}>
                    { text.all }
                </button>
                { for (1..=5_u8).rev().map(|stars| html! {
                    <button
                        class={filter_class(ReviewFilter::Stars(stars))}
                        onclick={set_filter(ReviewFilter::Stars(stars))}
                    >
                        { format!("{stars} ★") }
                    </button>
                }) }
            </div>

            <div class="card-list">
                { if reviews.rows().is_empty() {
                    html! { <div class="empty-state">{ text.no_data }</div> }
                } else {
                    reviews.rows().iter().map(|review| review_card(review, props.lang)).collect()
                } }
            </div>
        </div>
    }
}
