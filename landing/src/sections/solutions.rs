use leptos::prelude::*;
use nexus_core::animation::AnimationSpec;
use nexus_core::content::{ContentPayload, Solution};

use crate::components::{Card, Icon, Reveal};

#[component]
pub fn SolutionsGrid(payload: &'static ContentPayload) -> impl IntoView {
    view! {
        <section class="solutions-section">
            <div class="container">
                <Reveal spec=AnimationSpec::fade_up(30.0).with_duration(800) class="section-header">
                    <h2 class="section-title">{payload.solutions_heading}</h2>
                    <p class="section-description">{payload.solutions_intro}</p>
                </Reveal>
                <div class="solutions-grid">
                    {payload
                        .solutions
                        .iter()
                        .enumerate()
                        .map(|(index, solution)| view! { <SolutionCard solution=solution index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SolutionCard(solution: &'static Solution, index: usize) -> impl IntoView {
    view! {
        <Reveal spec=AnimationSpec::fade_up(50.0).staggered(index, 200)>
            <Card>
                <div class="solution-icon">
                    <Icon icon=solution.icon class="icon-lg" />
                </div>
                <h3 class="solution-title">{solution.title}</h3>
                <p class="solution-description">{solution.description}</p>
                <ul class="feature-list">
                    {solution
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="feature-item">
                                    <span class="feature-dot"></span>
                                    <span>{*feature}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Card>
        </Reveal>
    }
}
