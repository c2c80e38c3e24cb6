use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use nexus_core::{NavigationState, Site};
use wasm_bindgen::JsValue;

use super::{Footer, Header};
use crate::pages::{NotFound, page_view};

/// Header, routed outlet and footer around one shared `NavigationState`.
///
/// Must be rendered inside a `<Router>`: the browser location is the input,
/// `NavigationState` is the single source both the outlet and the header
/// read from.
#[component]
pub fn Shell(site: Arc<Site>) -> impl IntoView {
    let pathname = use_location().pathname;
    let nav = RwSignal::new(NavigationState::new(pathname.get_untracked()));

    // Back/forward, direct loads and in-page links all land here.
    Effect::new(move || {
        let path = pathname.get();
        nav.maybe_update(|state| state.sync_location(&path));
    });

    // Menu toggles must not re-render the page.
    let current_path = Memo::new(move |_| nav.with(|state| state.current_path().to_string()));

    let outlet_site = site.clone();
    let outlet = move || {
        let path = current_path.get();
        match outlet_site.routes.match_path(&path) {
            Ok(entry) => page_view(entry.page),
            Err(err) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!("[nexus][warn] {err}")));
                view! { <NotFound path=path /> }.into_any()
            }
        }
    };

    view! {
        <Header site=site.clone() nav=nav />
        <main class="page">{outlet}</main>
        <Footer config=site.config.clone() />
    }
}
