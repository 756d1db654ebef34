//! Browser plumbing shared by the screens.
//!
//! Everything here compiles on the host too; the functions either no-op or
//! return inert defaults there so native render tests can exercise the
//! components without a browser.
use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Schedule a UI future. On the web target it runs on the microtask queue;
/// in host builds the work is dropped, so handlers must stay sensible
/// without it.
pub fn spawn<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(future);
    #[cfg(not(target_arch = "wasm32"))]
    drop(future);
}

/// Smooth-scroll the viewport back to the top; every navigation does this.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    if let Some(win) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// Native browser confirm dialog. Host builds refuse, so destructive
/// handlers are inert in native tests.
#[must_use]
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        false
    }
}

/// Current instant as an ISO 8601 string for `updated_at` columns. The host
/// fallback is a fixed epoch so tests stay deterministic.
#[must_use]
pub fn now_iso() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::from("1970-01-01T00:00:00.000Z")
    }
}

/// Yield for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying
/// JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;

    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });
    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;

    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error when no window is available or storage is disabled.
pub fn local_storage() -> Result<web_sys::Storage, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_fallbacks_stay_inert() {
        assert!(!confirm("are you sure?"));
        assert_eq!(now_iso(), "1970-01-01T00:00:00.000Z");
        scroll_to_top();
        spawn(async {});
    }
}
