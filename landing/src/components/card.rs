use leptos::prelude::*;
use nexus_core::style::CardStyle;

#[component]
pub fn Card(#[prop(optional)] style: CardStyle, children: Children) -> impl IntoView {
    view! {
        <div class=style.class_list()>
            <div class=style.content_class()>{children()}</div>
        </div>
    }
}
