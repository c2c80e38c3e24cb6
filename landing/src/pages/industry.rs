use crate::sections::{CallToActionBlock, IndustryHero, SolutionsGrid, StatsGrid};
use leptos::prelude::*;
use nexus_core::content::ContentPayload;

/// Shared template for the industry verticals: hero, stats, solutions, CTA.
#[component]
pub fn IndustryPage(payload: &'static ContentPayload) -> impl IntoView {
    view! {
        <div class=format!("industry-page {}", payload.accent.class())>
            <IndustryHero payload=payload />
            <StatsGrid stats=payload.stats />
            <SolutionsGrid payload=payload />
            <CallToActionBlock cta=&payload.cta accent=payload.accent />
        </div>
    }
}
