use majlis_core::model::Profile;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::app::screen::Screen;
use crate::i18n::Lang;

struct Text {
    home: &'static str,
    games: &'static str,
    posts: &'static str,
    reviews: &'static str,
    discussion: &'static str,
    wiki: &'static str,
    search: &'static str,
    sign_in: &'static str,
    sign_up: &'static str,
    profile: &'static str,
    sign_out: &'static str,
}

const AR: Text = Text {
    home: "الرئيسية",
    games: "الألعاب",
    posts: "المنشورات",
    reviews: "المراجعات",
    discussion: "النقاش",
    wiki: "الموسوعة",
    search: "بحث...",
    sign_in: "تسجيل الدخول",
    sign_up: "إنشاء حساب",
    profile: "الملف الشخصي",
    sign_out: "تسجيل الخروج",
};

const EN: Text = Text {
    home: "Home",
    games: "Games",
    posts: "Posts",
    reviews: "Reviews",
    discussion: "Discussion",
    wiki: "Wiki",
    search: "Search...",
    sign_in: "Sign In",
    sign_up: "Sign Up",
    profile: "Profile",
    sign_out: "Sign Out",
};

impl Text {
    const fn for_lang(lang: Lang) -> &'static Self {
        match lang {
            Lang::Ar => &AR,
            Lang::En => &EN,
        }
    }
}

const fn nav_items(text: &Text) -> [(Screen, &'static str); 6] {
    [
        (Screen::Home, text.home),
        (Screen::Games, text.games),
        (Screen::Posts, text.posts),
        (Screen::Reviews, text.reviews),
        (Screen::Discussion, text.discussion),
        (Screen::Wiki(None), text.wiki),
    ]
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: Screen,
    pub lang: Lang,
    pub profile: Option<Profile>,
    pub signed_in: bool,
    pub on_navigate: Callback<Screen>,
    pub on_sign_out: Callback<()>,
    pub on_open_code: Callback<()>,
    pub on_lang_change: Callback<Lang>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let text = Text::for_lang(props.lang);
    let mobile_open = use_state(|| false);
    let search_query = use_state(String::new);

    let nav_to = |target: Screen| {
        let on_navigate = props.on_navigate.clone();
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| {
            on_navigate.emit(target.clone());
            mobile_open.set(false);
        })
    };

    let on_search_input = {
        let search_query = search_query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                search_query.set(input.value());
            }
        })
    };

    let on_lang_select = {
        let cb = props.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(Lang::from_tag(&select.value()));
            }
        })
    };

    let open_code = {
        let cb = props.on_open_code.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let sign_out = {
        let cb = props.on_sign_out.clone();
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(());
            mobile_open.set(false);
        })
    };
    let toggle_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| mobile_open.set(!*mobile_open))
    };

    let nav_buttons = |extra_class: &'static str| -> Html {
        nav_items(text)
            .into_iter()
            .map(|(target, label)| {
                let active = props.current.is_same_section(&target);
                let class = if active {
                    format!("nav-link nav-link--active {extra_class}")
                } else {
                    format!("nav-link {extra_class}")
                };
                html! {
                    <button class={class} onclick={nav_to(target)}>{ label }</button>
                }
            })
            .collect()
    };

    let account_buttons = |extra_class: &'static str| -> Html {
        if let (true, Some(member)) = (props.signed_in, props.profile.clone()) {
            html! {
                <>
                    <button class={format!("nav-profile {extra_class}")} title={text.profile} onclick={nav_to(Screen::Profile)}>
                        <span class="nav-profile__name">{ member.username }</span>
                        <span class="nav-profile__level">{ format!("Lv.{}", member.level) }</span>
                    </button>
                    <button class={format!("nav-signout {extra_class}")} onclick={sign_out.clone()}>
                        { text.sign_out }
                    </button>
                </>
            }
        } else {
            html! {
                <>
                    <button class={format!("nav-link {extra_class}")} onclick={nav_to(Screen::SignIn)}>
                        { text.sign_in }
                    </button>
                    <button class={format!("btn btn-primary {extra_class}")} onclick={nav_to(Screen::SignUp)}>
                        { text.sign_up }
                    </button>
                </>
            }
        }
    };

    html! {
        <nav class="navbar" dir={props.lang.dir()}>
            <div class="navbar__inner">
                <div class="navbar__left">
                    <button class="navbar__code" title="Enter access code" onclick={open_code.clone()}>
                        {"Code"}
                    </button>
                    <button class="navbar__brand" onclick={nav_to(Screen::Home)}>{ "Majlis" }</button>
                    <div class="navbar__links">{ nav_buttons("") }</div>
                </div>

                <div class="navbar__search">
                    <input
                        type="text"
                        class="form-input"
                        value={(*search_query).clone()}
                        oninput={on_search_input.clone()}
                        placeholder={text.search}
                    />
                </div>

                <div class="navbar__right">
                    <label class="sr-only" for="nav-lang">{ "Language" }</label>
                    <select id="nav-lang" class="navbar__lang" onchange={on_lang_select} value={props.lang.tag()}>
                        <option value="ar" selected={props.lang == Lang::Ar}>{ "العربية" }</option>
                        <option value="en" selected={props.lang == Lang::En}>{ "English" }</option>
                    </select>
                    { account_buttons("") }
                </div>

                <button class="navbar__mobile-toggle" onclick={toggle_mobile}>
                    { if *mobile_open { "✕" } else { "☰" } }
                </button>
            </div>

            { if *mobile_open {
                html! {
                    <div class="navbar__mobile">
                        <input
                            type="text"
                            class="form-input"
                            value={(*search_query).clone()}
                            oninput={on_search_input}
                            placeholder={text.search}
                        />
                        { nav_buttons("nav-link--mobile") }
                        <div class="navbar__mobile-account">
                            { account_buttons("nav-link--mobile") }
                        </div>
                    </div>
                }
            } else {
                Html::default()
            } }
        </nav>
    }
}
