// Routed pages

mod home;
mod industry;
mod not_found;

use leptos::prelude::*;
use nexus_core::PageId;
use nexus_core::content::PageBody;

pub use home::HomePage;
pub use industry::IndustryPage;
pub use not_found::NotFound;

/// View for a matched route. Industry pages share one template.
pub fn page_view(page: PageId) -> AnyView {
    match PageBody::for_page(page) {
        PageBody::Home(content) => view! { <HomePage content=content /> }.into_any(),
        PageBody::Industry(payload) => view! { <IndustryPage payload=payload /> }.into_any(),
    }
}
