use leptos::ev::MouseEvent;
use leptos::prelude::*;
use nexus_core::style::ButtonStyle;

#[component]
pub fn Button(
    #[prop(optional)] style: ButtonStyle,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    /// Accessible name for icon-only buttons
    #[prop(optional)]
    aria_label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=style.class_list()
            aria-label=aria_label
            on:click=move |ev| {
                if let Some(cb) = on_click.as_ref() {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
