use leptos::prelude::*;

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <section class="not-found">
            <div class="container">
                <h1 class="section-title">"Page not found"</h1>
                <p class="section-description">
                    "Nothing lives at " <code>{path}</code> "."
                </p>
                <a href="/" class="btn btn-solid btn-md">"Back to home"</a>
            </div>
        </section>
    }
}
