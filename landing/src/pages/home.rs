// Home page - parallax hero, about, industries grid
use crate::sections::{About, HomeHero, Industries};
use leptos::html;
use leptos::prelude::*;
use nexus_core::content::HomeContent;

/// The hero's parallax tracks this whole container, not just the hero.
#[component]
pub fn HomePage(content: &'static HomeContent) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();

    view! {
        <div node_ref=container class="home">
            <HomeHero content=content container=container />
            <About content=content />
            <Industries content=content />
        </div>
    }
}
