use leptos::prelude::*;
use nexus_core::animation::RevealOnce;
use nexus_core::choreography;
use nexus_core::content::{HomeContent, IconStat};
use nexus_core::style::{ButtonSize, ButtonStyle, ButtonVariant, CardStyle};
use nexus_core::IconRef;

use super::home_hero::ABOUT_ANCHOR;
use crate::components::{Button, Card, Icon, Reveal};

/// About block. One intersection of the section reveals everything in it.
#[component]
pub fn About(content: &'static HomeContent) -> impl IntoView {
    let in_view = RwSignal::new(RevealOnce::new());
    let [lead, highlight, tail] = content.about_heading;

    view! {
        <section id=ABOUT_ANCHOR class="about-section">
            <Reveal spec=choreography::about_section() state=in_view>
                <div class="container about-grid">
                    <Reveal spec=choreography::about_copy() state=in_view>
                        <h2 class="section-title">
                            {lead} " " <span class="text-highlight">{highlight}</span> " " {tail}
                        </h2>
                        {content
                            .about_paragraphs
                            .iter()
                            .map(|paragraph| view! { <p class="about-paragraph">{*paragraph}</p> })
                            .collect_view()}
                        <Button style=ButtonStyle::new(ButtonVariant::Solid, ButtonSize::Regular)>
                            <span>{content.about_cta}</span>
                            <Icon icon=IconRef::ArrowRight class="btn-icon-trailing" />
                        </Button>
                    </Reveal>

                    <Reveal spec=choreography::about_stats() state=in_view>
                        <div class="about-stats">
                            {content
                                .stats
                                .iter()
                                .enumerate()
                                .map(|(index, stat)| {
                                    view! {
                                        <Reveal spec=choreography::about_stat(index) state=in_view>
                                            <StatCard stat=stat />
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn StatCard(stat: &'static IconStat) -> impl IntoView {
    view! {
        <Card style=CardStyle::default().with_class("stat-card")>
            <Icon icon=stat.icon class="icon-lg stat-card-icon" />
            <div class="stat-value">{stat.value}</div>
            <div class="stat-label">{stat.label}</div>
        </Card>
    }
}
