use leptos::prelude::*;
use nexus_core::animation::RevealOnce;
use nexus_core::choreography;
use nexus_core::content::{HomeContent, IndustryCard};
use nexus_core::{IconRef, normalize};

use crate::components::{Icon, Reveal};

/// Home grid linking to every industry page.
#[component]
pub fn Industries(content: &'static HomeContent) -> impl IntoView {
    let in_view = RwSignal::new(RevealOnce::new());

    view! {
        <section class="industries-section">
            <Reveal spec=choreography::industries_section() state=in_view>
                <div class="container">
                    <Reveal spec=choreography::industries_heading() state=in_view class="section-header">
                        <h2 class="section-title">{content.industries_heading}</h2>
                        <p class="section-description">{content.industries_intro}</p>
                    </Reveal>
                    <div class="industries-grid">
                        {content
                            .industries
                            .iter()
                            .enumerate()
                            .map(|(index, card)| {
                                view! {
                                    <Reveal spec=choreography::industry_card(index) state=in_view>
                                        <IndustryLink card=card />
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn IndustryLink(card: &'static IndustryCard) -> impl IntoView {
    view! {
        <a href=normalize(card.link) class=format!("industry-card {}", card.accent.class())>
            <div class="industry-card-icon">
                <Icon icon=card.icon class="icon-lg" />
            </div>
            <h3 class="industry-card-title">{card.title}</h3>
            <p class="industry-card-description">{card.description}</p>
            <span class="industry-card-more">
                "Learn more" <Icon icon=IconRef::ArrowRight class="icon-sm" />
            </span>
        </a>
    }
}
