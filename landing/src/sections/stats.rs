use leptos::prelude::*;
use nexus_core::animation::AnimationSpec;
use nexus_core::content::Stat;

use crate::components::Reveal;

/// Four-up statistics band; tiles cascade in 100ms apart.
#[component]
pub fn StatsGrid(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <section class="stats-section">
            <div class="container stats-grid">
                {stats
                    .iter()
                    .enumerate()
                    .map(|(index, stat)| {
                        view! {
                            <Reveal spec=AnimationSpec::fade_up(30.0).staggered(index, 100) class="stat">
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
