//! Password sign-in screen.
use majlis_core::model::Profile;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::app::screen::Screen;
use crate::i18n::Lang;
use crate::services::AuthHandle;

struct Text {
    title: &'static str,
    email: &'static str,
    password: &'static str,
    sign_in: &'static str,
    no_account: &'static str,
    sign_up: &'static str,
    error: &'static str,
}

const AR: Text = Text {
    title: "تسجيل الدخول",
    email: "البريد الإلكتروني",
    password: "كلمة المرور",
    sign_in: "دخول",
    no_account: "ليس لديك حساب؟",
    sign_up: "إنشاء حساب",
    error: "خطأ في البريد الإلكتروني أو كلمة المرور",
};

const EN: Text = Text {
    title: "Sign In",
    email: "Email",
    password: "Password",
    sign_in: "Sign In",
    no_account: "Don't have an account?",
    sign_up: "Sign Up",
    error: "Invalid email or password",
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
    pub auth: AuthHandle,
    pub lang: Lang,
    pub on_navigate: Callback<Screen>,
    pub on_signed_in: Callback<Profile>,
}

fn input_value(e: &InputEvent) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
}

#[function_component(SignInPage)]
pub fn sign_in_page(props: &Props) -> Html {
    let text = Text::for_lang(props.lang);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<&'static str>);
    let busy = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                email.set(value);
            }
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                password.set(value);
            }
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        let auth = props.auth.clone();
        let on_signed_in = props.on_signed_in.clone();
        let lang = props.lang;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            busy.set(true);

            let email = (*email).clone();
            let password = (*password).clone();
            let auth = auth.clone();
            let error = error.clone();
            let busy = busy.clone();
            let on_signed_in = on_signed_in.clone();
            crate::dom::spawn(async move {
                match auth.sign_in(&email, &password).await {
                    Ok(profile) => on_signed_in.emit(profile),
                    // Any failure collapses to the generic credentials error.
                    Err(err) => {
                        log::error!("sign-in failed: {err}");
                        error.set(Some(Text::for_lang(lang).error));
                    }
                }
                busy.set(false);
            });
        })
    };

    let go_sign_up = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Screen::SignUp))
    };

    html! {
        <div class="page auth-page" dir={props.lang.dir()}>
            <div class="card auth-card">
                <h2 class="auth-card__title">{ text.title }</h2>

                { (*error).map(|message| html! {
                    <div class="form-message form-message--error">{ message }</div>
                }).unwrap_or_default() }

                <form onsubmit={on_submit}>
                    <label class="form-label" for="signin-email">{ text.email }</label>
                    <input
                        id="signin-email"
                        type="email"
                        class="form-input"
                        value={(*email).clone()}
                        oninput={on_email}
                        required={true}
                    />

                    <label class="form-label" for="signin-password">{ text.password }</label>
                    <input
                        id="signin-password"
                        type="password"
                        class="form-input"
                        value={(*password).clone()}
                        oninput={on_password}
                        required={true}
                    />

                    <button type="submit" class="btn btn-primary btn--full" disabled={*busy}>
                        { if *busy { "..." } else { text.sign_in } }
                    </button>
                </form>

                <div class="auth-card__switch">
                    <span>{ text.no_account }</span>
                    <button class="link-btn" onclick={go_sign_up}>{ text.sign_up }</button>
                </div>
            </div>
        </div>
    }
}
