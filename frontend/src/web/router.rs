//! Router service
//!
//! All `window.history` access lives here. Navigation resolves the path,
//! rewrites unknown paths to home, updates History and then the route signal.

use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// Current browser path
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Used for redirects so the bad path does not stay in the back stack
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Resolve `path`, rewriting the address bar when it had to be redirected.
fn resolve_and_rewrite(path: &str) -> AppRoute {
    match AppRoute::from_path(path) {
        Some(route) => route,
        None => {
            let fallback = AppRoute::fallback();
            log!("[Router] Unknown path {}, redirecting to {}", path, fallback);
            replace_history_state(fallback.to_path());
            fallback
        }
    }
}

/// Router service, shared through context
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
}

impl RouterService {
    fn new() -> Self {
        let initial_route = resolve_and_rewrite(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Push a History entry and show the matching screen.
    ///
    /// Navigating to the current route re-renders it, which is how the home
    /// screen picks up a cleared session after logout.
    pub fn navigate(&self, path: &str) {
        let target = AppRoute::resolve(path);
        push_history_state(target.to_path());
        self.set_route.set(target);
    }

    /// Back/forward buttons
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(resolve_and_rewrite(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // The listener lives as long as the page
        closure.forget();
    }
}

fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// Router service provided by `<Router>`
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// Components
// ============================================================================

/// Provides the router context; place at the application root.
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();
    children()
}

/// Renders the view for the current route.
#[component]
pub fn RouterOutlet(
    /// Maps the current route to its view
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
