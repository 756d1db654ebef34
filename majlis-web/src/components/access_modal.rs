//! Access-code entry dialog.
//!
//! Redemption itself lives in `majlis_core::access`; this component owns the
//! localized messaging, the busy state, and the 1.5 s auto-close on success.
use majlis_core::access::{AccessCodes, AccessGrant, redeem_access_code};
use majlis_core::error::Error;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::i18n::Lang;
use crate::services::{AuthHandle, StoreHandle};

const AUTO_CLOSE_MS: i32 = 1500;

struct Text {
    title: &'static str,
    description: &'static str,
    code: &'static str,
    submit: &'static str,
    close: &'static str,
    invalid_code: &'static str,
    admin_success: &'static str,
    posting_success: &'static str,
    sign_in_required: &'static str,
}

const AR: Text = Text {
    title: "إدخال رمز الوصول",
    description: "أدخل رمز الوصول لفتح المزيد من الميزات",
    code: "الرمز",
    submit: "تحقق",
    close: "إغلاق",
    invalid_code: "رمز غير صحيح",
    admin_success: "تم تفعيل صلاحيات الإدارة",
    posting_success: "تم تفعيل إمكانية النشر",
    sign_in_required: "يجب تسجيل الدخول أولاً",
};

const EN: Text = Text {
    title: "Enter Access Code",
    description: "Enter an access code to unlock more features",
    code: "Code",
    submit: "Verify",
    close: "Close",
    invalid_code: "Invalid code",
    admin_success: "Admin privileges activated",
    posting_success: "Posting enabled",
    sign_in_required: "Please sign in first",
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
    pub open: bool,
    pub lang: Lang,
    pub store: StoreHandle,
    pub auth: AuthHandle,
    pub on_close: Callback<()>,
    /// Fired after a successful grant so the caller can refresh role-gated
    /// screens.
    pub on_verified: Callback<()>,
}

#[function_component(AccessCodeModal)]
pub fn access_code_modal(props: &Props) -> Html {
    let text = Text::for_lang(props.lang);
    let code = use_state(String::new);
    let error = use_state(|| None::<&'static str>);
    let success = use_state(|| None::<&'static str>);
    let busy = use_state(|| false);

    let on_input = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                code.set(input.value());
            }
        })
    };

    let on_submit = {
        let code = code.clone();
        let error = error.clone();
        let success = success.clone();
        let busy = busy.clone();
        let store = props.store.clone();
        let auth = props.auth.clone();
        let on_close = props.on_close.clone();
        let on_verified = props.on_verified.clone();
        let lang = props.lang;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            success.set(None);
            busy.set(true);

            let input = (*code).clone();
            let identity = auth.current_identity();
            let store = store.clone();
            let code = code.clone();
            let error = error.clone();
            let success = success.clone();
            let busy = busy.clone();
            let on_close = on_close.clone();
            let on_verified = on_verified.clone();
            crate::dom::spawn(async move {
                let text = Text::for_lang(lang);
                let outcome = redeem_access_code(
                    &*store.0,
                    identity.as_ref(),
                    &AccessCodes::default(),
                    &input,
                )
                .await;
                busy.set(false);
                match outcome {
                    Ok(grant) => {
                        success.set(Some(match grant {
                            AccessGrant::Admin => text.admin_success,
                            AccessGrant::Posting => text.posting_success,
                        }));
                        code.set(String::new());
                        on_verified.emit(());
                        let _ = crate::dom::sleep_ms(AUTO_CLOSE_MS).await;
                        on_close.emit(());
                    }
                    Err(Error::NotAuthorized) => error.set(Some(text.sign_in_required)),
                    // Store failures collapse into the same generic message.
                    Err(err) => {
                        log::error!("access code redemption failed: {err}");
                        error.set(Some(text.invalid_code));
                    }
                }
            });
        })
    };

    let on_close_btn = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <Modal
            open={props.open}
            title={text.title}
            description={Some(AttrValue::from(text.description))}
            on_close={props.on_close.clone()}
        >
            <div dir={props.lang.dir()} class="access-form">
                { (*error).map(|message| html! {
                    <div class="form-message form-message--error">{ message }</div>
                }).unwrap_or_default() }
                { (*success).map(|message| html! {
                    <div class="form-message form-message--success">{ message }</div>
                }).unwrap_or_default() }

                <form onsubmit={on_submit}>
                    <label class="form-label" for="access-code-input">{ text.code }</label>
                    <input
                        id="access-code-input"
                        type="password"
                        class="form-input access-form__code"
                        placeholder="••••••••"
                        value={(*code).clone()}
                        oninput={on_input}
                    />
                    <div class="form-actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={*busy || code.is_empty()}
                        >
                            { if *busy { "..." } else { text.submit } }
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_close_btn}>
                            { text.close }
                        </button>
                    </div>
                </form>
            </div>
        </Modal>
    }
}
