//! Registration screen. Always English; the preferred language chosen here
//! becomes the member's UI language after sign-in.
use majlis_core::model::Profile;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::app::screen::Screen;
use crate::i18n::Lang;
use crate::services::AuthHandle;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub auth: AuthHandle,
    pub on_navigate: Callback<Screen>,
    pub on_signed_in: Callback<Profile>,
}

fn input_value(e: &InputEvent) -> Option<String> {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
}

#[function_component(SignUpPage)]
pub fn sign_up_page(props: &Props) -> Html {
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let preferred = use_state(|| Lang::Ar);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                username.set(value);
            }
        })
    };
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

    let pick_lang = |lang: Lang| {
        let preferred = preferred.clone();
        Callback::from(move |_: MouseEvent| preferred.set(lang))
    };
    let lang_class = |lang: Lang| {
        if *preferred == lang {
            "choice-btn choice-btn--active"
        } else {
            "choice-btn"
        }
    };

    let on_submit = {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let preferred = preferred.clone();
        let error = error.clone();
        let busy = busy.clone();
        let auth = props.auth.clone();
        let on_signed_in = props.on_signed_in.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            busy.set(true);

            let username = (*username).clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let preferred = *preferred;
            let auth = auth.clone();
            let error = error.clone();
            let busy = busy.clone();
            let on_signed_in = on_signed_in.clone();
            crate::dom::spawn(async move {
                match auth
                    .sign_up(&email, &password, &username, preferred.tag())
                    .await
                {
                    Ok(profile) => on_signed_in.emit(profile),
                    // Provider message shown as-is, matching the source app.
                    Err(err) => {
                        log::error!("sign-up failed: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
                busy.set(false);
            });
        })
    };

    let go_sign_in = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Screen::SignIn))
    };

    html! {
        <div class="page auth-page">
            <div class="card auth-card">
                <h2 class="auth-card__title">{ "Create Account" }</h2>

                { error.as_ref().map(|message| html! {
                    <div class="form-message form-message--error">{ message.clone() }</div>
                }).unwrap_or_default() }

                <form onsubmit={on_submit}>
                    <label class="form-label" for="signup-username">{ "Username" }</label>
                    <input
                        id="signup-username"
                        type="text"
                        class="form-input"
                        value={(*username).clone()}
                        oninput={on_username}
                        required={true}
                    />

                    <label class="form-label" for="signup-email">{ "Email" }</label>
                    <input
                        id="signup-email"
                        type="email"
                        class="form-input"
                        value={(*email).clone()}
                        oninput={on_email}
                        required={true}
                    />

                    <label class="form-label" for="signup-password">{ "Password" }</label>
                    <input
                        id="signup-password"
                        type="password"
                        class="form-input"
                        value={(*password).clone()}
                        oninput={on_password}
                        minlength={MIN_PASSWORD_LEN.to_string()}
                        required={true}
                    />

                    <span class="form-label">{ "Preferred Language" }</span>
                    <div class="choice-row">
                        <button type="button" class={lang_class(Lang::Ar)} onclick={pick_lang(Lang::Ar)}>
                            { "العربية" }
                        </button>
                        <button type="button" class={lang_class(Lang::En)} onclick={pick_lang(Lang::En)}>
                            { "English" }
                        </button>
                    </div>

                    <button type="submit" class="btn btn-primary btn--full" disabled={*busy}>
                        { if *busy { "..." } else { "Sign Up" } }
                    </button>
                </form>

                <div class="auth-card__switch">
                    <span>{ "Already have an account?" }</span>
                    <button class="link-btn" onclick={go_sign_in}>{ "Sign In" }</button>
                </div>
            </div>
        </div>
    }
}
