use leptos::html;
use leptos::prelude::*;
use nexus_core::animation::{ParallaxFrame, container_parallax, hero_parallax};
use nexus_core::choreography;
use nexus_core::content::HomeContent;
use nexus_core::style::{ButtonSize, ButtonStyle, ButtonVariant};
use nexus_core::IconRef;

use crate::components::{Button, Icon, Reveal};

/// Anchor the hero CTA scrolls to.
pub const ABOUT_ANCHOR: &str = "about";

/// Home hero. The whole section drifts down and fades out while `container`
/// (the full home page) scrolls past the top of the viewport; the copy
/// animates in on mount.
#[component]
pub fn HomeHero(content: &'static HomeContent, container: NodeRef<html::Div>) -> impl IntoView {
    let parallax = RwSignal::new(hero_parallax(0.0));

    // First measurement once the container is mounted, for loads mid-page.
    Effect::new(move || {
        if container.get().is_some() {
            if let Some(frame) = measure_parallax(&container) {
                parallax.set(frame);
            }
        }
    });

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        if let Some(frame) = measure_parallax(&container) {
            parallax.set(frame);
        }
    });
    on_cleanup(move || handle.remove());

    let [line_one, line_two] = content.hero_lines;

    view! {
        <section class="home-hero" style=move || parallax.get().to_css()>
            <div class="home-hero-backdrop">
                <div class="blob blob-pulse-a"></div>
                <div class="blob blob-pulse-b"></div>
            </div>

            <div class="home-hero-content">
                <Reveal spec=choreography::hero_heading()>
                    <h1 class="home-hero-title">
                        <Reveal spec=choreography::hero_first_line() class="home-hero-line">
                            {line_one}
                        </Reveal>
                        <Reveal spec=choreography::hero_second_line() class="home-hero-line home-hero-line-accent">
                            {line_two}
                        </Reveal>
                    </h1>
                </Reveal>
                <Reveal spec=choreography::hero_subtitle()>
                    <p class="home-hero-subtitle">{content.hero_subtitle}</p>
                </Reveal>
                <Reveal spec=choreography::hero_cta()>
                    <Button
                        style=ButtonStyle::new(ButtonVariant::Solid, ButtonSize::Large)
                        on_click=move |_| scroll_to_anchor(ABOUT_ANCHOR)
                    >
                        <span>{content.hero_cta}</span>
                        <Icon icon=IconRef::ArrowRight class="btn-icon-trailing" />
                    </Button>
                </Reveal>
            </div>

            <Reveal spec=choreography::scroll_indicator() class="scroll-indicator">
                <div class="scroll-indicator-track">
                    <div class="scroll-indicator-thumb"></div>
                </div>
            </Reveal>
        </section>
    }
}

fn measure_parallax(container: &NodeRef<html::Div>) -> Option<ParallaxFrame> {
    let element = container.get_untracked()?;
    let rect = element.get_bounding_client_rect();
    Some(container_parallax(rect.top(), rect.height()))
}

fn scroll_to_anchor(id: &str) {
    let Some(target) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
