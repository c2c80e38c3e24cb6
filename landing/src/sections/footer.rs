use leptos::prelude::*;
use nexus_core::config::SiteConfig;

use crate::components::Icon;

#[component]
pub fn Footer(config: SiteConfig) -> impl IntoView {
    let copyright = config.copyright_line();
    let SiteConfig {
        brand,
        footer,
        contact,
    } = config;

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <span class="footer-logo">
                                <Icon icon=brand.icon />
                            </span>
                            <h3 class="footer-title">{brand.name}</h3>
                        </div>
                        <p class="footer-description">{brand.description}</p>
                    </div>
                    <div>
                        <h4 class="footer-heading">{footer.industries_heading}</h4>
                        <ul class="footer-list">
                            {footer
                                .industries
                                .into_iter()
                                .map(|name| view! { <li>{name}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="footer-heading">{contact.heading}</h4>
                        <p class="footer-contact">
                            {contact
                                .address
                                .into_iter()
                                .map(|line| view! { {line} <br /> })
                                .collect_view()}
                            <a href=format!("mailto:{}", contact.email)>{contact.email.clone()}</a>
                        </p>
                    </div>
                </div>
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}
