use leptos::prelude::*;
use nexus_core::animation::AnimationSpec;
use nexus_core::content::{Accent, CallToAction};
use nexus_core::style::{ButtonSize, ButtonStyle, ButtonVariant};

use crate::components::{Button, Icon, Reveal};

/// Closing band with a single button.
#[component]
pub fn CallToActionBlock(cta: &'static CallToAction, accent: Accent) -> impl IntoView {
    view! {
        <section class=format!("cta-section {}", accent.class())>
            <div class="container cta-inner">
                <Reveal spec=AnimationSpec::fade_up(30.0).with_duration(800)>
                    <Icon icon=cta.icon class="icon-xl cta-icon" />
                    <h2 class="cta-title">{cta.title}</h2>
                    <p class="cta-text">{cta.text}</p>
                    <Button style=ButtonStyle::new(ButtonVariant::Inverse, ButtonSize::Large)>
                        {cta.button_label}
                    </Button>
                </Reveal>
            </div>
        </section>
    }
}
