use std::sync::Arc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use nexus_core::animation::AnimationSpec;
use nexus_core::style::{ButtonSize, ButtonStyle, ButtonVariant, mobile_menu_class};
use nexus_core::{IconRef, NavigationState, Site};

use crate::components::{Button, Icon, Reveal};

/// Fixed site header: brand, desktop links, mobile menu toggle.
#[component]
pub fn Header(site: Arc<Site>, nav: RwSignal<NavigationState>) -> impl IntoView {
    let brand = site.config.brand.clone();
    let menu_site = site.clone();
    let toggle_style =
        ButtonStyle::new(ButtonVariant::Ghost, ButtonSize::Icon).with_class("menu-toggle");

    let desktop_links = site
        .registry
        .iter()
        .map(|entry| {
            let path = entry.path.clone();
            let href = path.clone();
            let active_path = path.clone();
            view! {
                <a
                    href=href
                    class=move || link_class("nav-link", nav.with(|s| s.is_active(&active_path)))
                    on:click=move |ev: MouseEvent| {
                        if is_plain_click(&ev) {
                            nav.update(|s| s.navigate(path.clone()));
                        }
                    }
                >
                    <Icon icon=entry.icon class="nav-link-icon" />
                    <span>{entry.display_title}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <Reveal spec=AnimationSpec::slide_down(100.0) class="site-header">
            <div class="container header-inner">
                <a href="/" class="brand">
                    <div class="brand-logo">
                        <Icon icon=brand.icon />
                    </div>
                    <div>
                        <span class="brand-name">{brand.name.clone()}</span>
                        <span class="brand-tagline">{brand.tagline.clone()}</span>
                    </div>
                </a>

                <nav class="nav-links">{desktop_links}</nav>

                <Button
                    style=toggle_style
                    aria_label="Toggle navigation"
                    on_click=move |_| nav.update(|s| s.toggle_menu())
                >
                    {move || {
                        let icon = if nav.with(|s| s.mobile_menu_open()) {
                            IconRef::X
                        } else {
                            IconRef::Menu
                        };
                        view! { <Icon icon=icon /> }
                    }}
                </Button>
            </div>

            <MobileMenu site=menu_site nav=nav />
        </Reveal>
    }
}

/// Drop-down link list for small screens. Activating a link navigates and
/// closes the menu in one state update. The panel stays mounted; its class
/// animates it open and shut, and `inert` keeps closed links out of reach.
#[component]
fn MobileMenu(site: Arc<Site>, nav: RwSignal<NavigationState>) -> impl IntoView {
    let links = site
        .registry
        .iter()
        .map(|entry| {
            let path = entry.path.clone();
            let href = path.clone();
            let active_path = path.clone();
            view! {
                <a
                    href=href
                    class=move || link_class("mobile-link", nav.with(|s| s.is_active(&active_path)))
                    on:click=move |ev: MouseEvent| {
                        if is_plain_click(&ev) {
                            nav.update(|s| s.activate_link(path.clone()));
                        }
                    }
                >
                    <Icon icon=entry.icon class="mobile-link-icon" />
                    <span>{entry.display_title}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <div
            class=move || mobile_menu_class(nav.with(|s| s.menu()))
            aria-hidden=move || (!nav.with(|s| s.mobile_menu_open())).to_string()
            inert=move || !nav.with(|s| s.mobile_menu_open())
        >
            <div class="mobile-menu-links">{links}</div>
        </div>
    }
}

fn link_class(base: &'static str, active: bool) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

/// Clicks the router handles in-page: primary button, no modifier keys.
fn is_plain_click(ev: &MouseEvent) -> bool {
    ev.button() == 0 && !(ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key())
}
