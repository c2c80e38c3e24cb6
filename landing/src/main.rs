// Nexus Corp site - Leptos 0.8 CSR

mod components;
mod pages;
mod sections;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::Router;
use nexus_core::Site;
use sections::Shell;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    match Site::load() {
        Ok(site) => {
            let site = Arc::new(site);
            leptos::mount::mount_to_body(move || view! { <App site=site.clone() /> });
        }
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "[nexus][error] site failed to load: {err}"
            )));
        }
    }
}

#[component]
fn App(site: Arc<Site>) -> impl IntoView {
    view! {
        <Router>
            <Shell site=site.clone() />
        </Router>
    }
}
