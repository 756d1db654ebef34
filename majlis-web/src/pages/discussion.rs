//! Discussion area: role-gated create/edit/delete over discussion posts.
//!
//! The composer follows `Browsing -> Composing -> Submitting -> Browsing`.
//! Whichever way a submission ends the form closes and the list re-queries;
//! failures leave only a console trace. The edit and delete affordances are
//! hidden from non-authors without admin, but that is a UI gate, not a
//! security boundary.
use majlis_core::authoring::{
    ComposeMode, Composer, DiscussionForm, PLATFORM_OPTIONS, can_create_post, can_delete_post,
    can_edit_post,
};
use majlis_core::model::{DiscussionPost, Identity};
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::hooks::use_remote;
use crate::i18n::{Lang, fmt_date};
use crate::services::StoreHandle;

struct Text {
    title: &'static str,
    create_post: &'static str,
    no_perm: &'static str,
    sign_in: &'static str,
    post_title: &'static str,
    content: &'static str,
    platforms: &'static str,
    save: &'static str,
    cancel: &'static str,
    edit: &'static str,
    delete: &'static str,
    today: &'static str,
    comments: &'static str,
    no_data: &'static str,
    confirm_delete: &'static str,
    edit_post: &'static str,
    new_post: &'static str,
}

const AR: Text = Text {
    title: "منطقة النقاش",
    create_post: "إنشاء منشور",
    no_perm: "أدخل رمز الوصول لإنشاء منشورات",
    sign_in: "سجل الدخول أولاً",
    post_title: "عنوان المنشور",
    content: "المحتوى",
    platforms: "المنصات (PC, PS5, iOS, Android)",
    save: "حفظ",
    cancel: "إلغاء",
    edit: "تعديل",
    delete: "حذف",
    today: "اليوم",
    comments: "تعليقات",
    no_data: "لا توجد منشورات",
    confirm_delete: "هل أنت متأكد من حذف هذا المنشور؟",
    edit_post: "تعديل المنشور",
    new_post: "منشور جديد",
};

const EN: Text = Text {
    title: "Discussion",
    create_post: "Create Post",
    no_perm: "Enter access code to create posts",
    sign_in: "Sign in first",
    post_title: "Post Title",
    content: "Content",
    platforms: "Platforms (PC, PS5, iOS, Android)",
    save: "Save",
    cancel: "Cancel",
    edit: "Edit",
    delete: "Delete",
    today: "today",
    comments: "comments",
    no_data: "No posts available",
    confirm_delete: "Are you sure you want to delete this post?",
    edit_post: "Edit Post",
    new_post: "New Post",
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

#[function_component(DiscussionPage)]
pub fn discussion_page(props: &Props) -> Html {
    let text = Text::for_lang(props.lang);
    let lang = props.lang;

    let refresh = use_state(|| 0_u32);
    let composer = use_state(Composer::default);
    let form = use_state(DiscussionForm::default);

    let posts = use_remote((props.store.clone(), *refresh), |(store, _)| async move {
        store.discussion_posts().await
    });
    let role = use_remote(
        (props.store.clone(), props.identity.clone()),
        |(store, identity)| async move {
            match identity {
                Some(identity) => store.role_for(&identity.id).await,
                None => Ok(None),
            }
        },
    );
    let role_row = role.ready().and_then(|row| row.clone());

    let reload = {
        let refresh = refresh.clone();
        move || refresh.set(*refresh + 1)
    };

    let toggle_create = {
        let composer = composer.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(DiscussionForm::default());
            if composer.is_open() {
                composer.set(Composer::Browsing);
            } else {
                composer.set(Composer::Composing(ComposeMode::New));
            }
        })
    };

    let close_form = {
        let composer = composer.clone();
        Callback::from(move |_: MouseEvent| composer.set(Composer::Browsing))
    };

    let open_edit = |post: &DiscussionPost| {
        let composer = composer.clone();
        let form = form.clone();
        let prefilled = DiscussionForm::prefill(post);
        let id = post.id.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(prefilled.clone());
            composer.set(Composer::Composing(ComposeMode::Edit(id.clone())));
        })
    };

    let on_title = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                let mut next = (*form).clone();
                next.title = input.value();
                form.set(next);
            }
        })
    };
    let on_content = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
            {
                let mut next = (*form).clone();
                next.content = area.value();
                form.set(next);
            }
        })
    };
    let toggle_platform = |platform: &'static str| {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.toggle_platform(platform);
            form.set(next);
        })
    };

    let on_submit = {
        let composer = composer.clone();
        let form = form.clone();
        let store = props.store.clone();
        let identity = props.identity.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Composer::Composing(mode) = (*composer).clone() else {
                return;
            };
            let Some(identity) = identity.clone() else {
                return;
            };
            composer.set(Composer::Submitting(mode.clone()));

            let store = store.clone();
            let fields = (*form).clone();
            let composer = composer.clone();
            let form = form.clone();
            let reload = reload.clone();
            crate::dom::spawn(async move {
                let outcome = match mode {
                    ComposeMode::New => {
                        store
                            .create_discussion_post(fields.into_new(&identity.id, lang.tag()))
                            .await
                    }
                    ComposeMode::Edit(id) => {
                        store
                            .update_discussion_post(&id, fields.into_patch(crate::dom::now_iso()))
                            .await
                    }
                };
                // Success or failure, the form closes and the list re-queries.
                if let Err(err) = outcome {
                    log::error!("discussion submit failed: {err}");
                }
                form.set(DiscussionForm::default());
                composer.set(Composer::Browsing);
                reload();
            });
        })
    };

    let delete_post = |post_id: String| {
        let store = props.store.clone();
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| {
            if !crate::dom::confirm(Text::for_lang(lang).confirm_delete) {
                return;
            }
            let store = store.clone();
            let post_id = post_id.clone();
            let reload = reload.clone();
            crate::dom::spawn(async move {
                if let Err(err) = store.delete_discussion_post(&post_id).await {
                    log::error!("discussion delete failed: {err}");
                }
                reload();
            });
        })
    };

    let header_action = if props.identity.is_none() {
        html! { <p class="discussion-hint">{ text.sign_in }</p> }
    } else if can_create_post(props.identity.as_ref(), role_row.as_ref()) {
        html! { <button class="btn btn-primary" onclick={toggle_create.clone()}>{ text.create_post }</button> }
    } else {
        html! { <p class="discussion-hint">{ text.no_perm }</p> }
    };

    let composer_view = if composer.is_open() {
        let busy = composer.is_submitting();
        html! {
            <div class="card composer">
                <div class="composer__header">
                    <h2>{ if composer.is_editing() { text.edit_post } else { text.new_post } }</h2>
                    <button class="modal__close" onclick={close_form}>{ "X" }</button>
                </div>
                <form onsubmit={on_submit}>
                    <label class="form-label" for="composer-title">{ text.post_title }</label>
                    <input
                        id="composer-title"
                        type="text"
                        class="form-input"
                        value={form.title.clone()}
                        oninput={on_title}
                        required={true}
                    />

                    <label class="form-label" for="composer-content">{ text.content }</label>
                    <textarea
                        id="composer-content"
                        class="form-input composer__content"
                        rows="5"
                        value={form.content.clone()}
                        oninput={on_content}
                        required={true}
                    />

                    <span class="form-label">{ text.platforms }</span>
                    <div class="platform-row">
                        { for PLATFORM_OPTIONS.iter().map(|&platform| {
                            let class = if form.has_platform(platform) {
                                "platform-chip platform-chip--active"
                            } else {
                                "platform-chip"
                            };
                            html! {
                                <button type="button" class={class} onclick={toggle_platform(platform)}>
                                    { platform }
                                </button>
                            }
                        }) }
                    </div>

                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary" disabled={busy}>
                            { if busy { "..." } else { text.save } }
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={toggle_create.clone()}>
                            { text.cancel }
                        </button>
                    </div>
                </form>
            </div>
        }
    } else {
        Html::default()
    };

    let post_cards: Html = posts
        .rows()
        .iter()
        .map(|post| {
            let can_edit = can_edit_post(props.identity.as_ref(), role_row.as_ref(), post);
            let can_delete = can_delete_post(props.identity.as_ref(), role_row.as_ref(), post);
            html! {
                <div class="card discussion-card">
                    <div class="discussion-card__top">
                        <div>
                            <h3 class="card__title">{ &post.title }</h3>
                            <div class="card__meta">
                                <span>{ post.author.as_ref().map(|a| a.username.clone()).unwrap_or_default() }</span>
                                <span>{ fmt_date(&post.created_at, lang) }</span>
                            </div>
                        </div>
                        <div class="discussion-card__actions">
                            { if can_edit {
                                html! {
                                    <button class="icon-btn icon-btn--edit" title={text.edit} onclick={open_edit(post)}>
                                        { text.edit }
                                    </button>
                                }
                            } else {
                                Html::default()
                            } }
                            { if can_delete {
                                html! {
                                    <button class="icon-btn icon-btn--delete" title={text.delete} onclick={delete_post(post.id.clone())}>
                                        { text.delete }
                                    </button>
                                }
                            } else {
                                Html::default()
                            } }
                        </div>
                    </div>

                    { if post.platforms.is_empty() { Html::default() } else {
                        html! {
                            <div class="platform-row">
                                { for post.platforms.iter().map(|platform| html! {
                                    <span class="platform-chip platform-chip--tag">{ platform.clone() }</span>
                                }) }
                            </div>
                        }
                    } }

                    <p class="discussion-card__content">{ &post.content }</p>

                    <div class="card__meta">
                        <span>{ format!("{} {}", post.today_comments, text.today) }</span>
                        <span>{ format!("{} {}", post.comments_count, text.comments) }</span>
                    </div>
                </div>
            }
        })
        .collect();

    html! {
        <div class="page discussion-page" dir={lang.dir()}>
            <div class="page__header">
                <h1 class="page__title">{ text.title }</h1>
                { header_action }
            </div>

            { composer_view }

            <div class="card-list">
                { if posts.rows().is_empty() {
                    html! { <div class="empty-state">{ text.no_data }</div> }
                } else {
                    post_cards
                } }
            </div>
        </div>
    }
}
