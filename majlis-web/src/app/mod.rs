#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

pub mod bootstrap;
pub mod handlers;
pub mod screen;
pub mod state;
pub mod view;

pub use handlers::AppHandlers;
pub use screen::Screen;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    use std::rc::Rc;

    use majlis_core::{RestAuth, RestClient, RestStore, SiteConfig};

    use crate::services::{AuthHandle, StoreHandle};

    let services = use_memo((), |()| {
        let config = SiteConfig::from_env()
            .expect("service endpoint and key must be provided at build time");
        let client = Rc::new(RestClient::new(config));
        (
            StoreHandle(Rc::new(RestStore::new(client.clone()))),
            AuthHandle(Rc::new(RestAuth::new(client))),
        )
    });
    let (store, auth) = (*services).clone();

    let app_state = state::use_app_state(store, auth);
    bootstrap::use_bootstrap(&app_state);
    let app_handlers = AppHandlers::new(&app_state);

    view::render_app(&app_state, &app_handlers)
}
