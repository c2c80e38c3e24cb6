use leptos::prelude::*;
use nexus_core::animation::AnimationSpec;
use nexus_core::content::ContentPayload;

use crate::components::{Icon, Reveal};

/// Full-height hero for an industry page. Both layers animate on mount.
#[component]
pub fn IndustryHero(payload: &'static ContentPayload) -> impl IntoView {
    let section_fade = AnimationSpec::fade_in().on_mount().with_duration(1000);
    let content_rise = AnimationSpec::fade_up(50.0)
        .on_mount()
        .with_duration(800)
        .with_delay(200);

    view! {
        <section class=format!("industry-hero {}", payload.accent.class())>
            <Reveal spec=section_fade class="hero-layer">
                <div class="hero-backdrop">
                    <div class="blob blob-spin-a"></div>
                    <div class="blob blob-spin-b"></div>
                </div>
                <div class="hero-content">
                    <Reveal spec=content_rise>
                        <div class="hero-badge">
                            <Icon icon=payload.hero_icon class="icon-xl" />
                        </div>
                        <h1 class="hero-title">
                            {payload.hero_title}
                            <span class="hero-title-accent">{payload.hero_title_accent}</span>
                        </h1>
                        <p class="hero-subtitle">{payload.hero_subtitle}</p>
                    </Reveal>
                </div>
            </Reveal>
        </section>
    }
}
