//! Turf Booking storefront
//!
//! Context-driven layout:
//! - `web::route`: route definitions
//! - `web::router`: History-API router
//! - `session`: persisted session store, injected through context
//! - `api`: typed backend client, injected through context
//! - `auth`: login/signup screen state
//! - `components`: UI layer

mod api;
mod auth;
mod catalog;
mod components {
    pub mod home;
    mod location_modal;
    pub mod login;
    mod slot_list;
}
mod config;
mod session;

use crate::api::TurfApi;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::config::AppConfig;
use crate::session::SessionStore;

use leptos::logging::log;
use leptos::prelude::*;

// Thin wrappers over browser APIs
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::{GlooHttpClient, HttpClient, HttpError, HttpRequest, HttpResponse};
    pub use storage::{BrowserStorage, MemoryStorage, StorageBackend, StorageError};

    #[cfg(test)]
    pub use http::tests;
}

use web::GlooHttpClient;
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    let api = TurfApi::new(config.api_base_url, GlooHttpClient);
    log!("[App] API base URL: {}", api.base_url());

    provide_context(SessionStore::browser());
    provide_context(api);

    view! {
        <Router>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
