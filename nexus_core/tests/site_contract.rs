//! End-to-end checks of routing, navigation and animation behaviour
//! through the public API only.

use nexus_core::animation::{AnimationSpec, RevealOnce, VisualState};
use nexus_core::content::{ContentPayload, HOME};
use nexus_core::{normalize, NavigationState, PageId, RouteError, Site};
use pretty_assertions::assert_eq;

fn site() -> Site {
    Site::load().expect("standard site")
}

#[test]
fn empty_and_absent_titles_normalize_to_root() {
    assert_eq!(normalize(""), "/");
    assert_eq!(normalize(None::<&str>), "/");
}

#[test]
fn home_normalizes_to_root_in_any_case() {
    assert_eq!(normalize("Home"), "/");
    assert_eq!(normalize("HOME"), "/");
}

#[test]
fn multi_word_titles_become_hyphenated_paths() {
    assert_eq!(normalize("AI Solutions"), "/ai-solutions");
}

#[test]
fn every_non_home_identity_routes_to_its_own_page() {
    let site = site();
    for identity in site.registry.iter().filter(|i| i.id != PageId::Home) {
        assert_eq!(normalize(identity.canonical_name), identity.path);

        let entry = site
            .routes
            .match_path(&identity.path)
            .unwrap_or_else(|e| panic!("{} should route: {e}", identity.path));
        assert_eq!(entry.page, identity.id);

        let payload = ContentPayload::for_page(entry.page).expect("vertical payload");
        assert_eq!(payload.page, identity.id);
        assert!(!payload.heading().is_empty());
    }
}

#[test]
fn fintech_route_renders_financial_technology() {
    let site = site();
    let entry = site.routes.match_path("/fintech").expect("fintech route");
    let payload = ContentPayload::for_page(entry.page).expect("fintech payload");
    assert_eq!(payload.heading(), "Financial Technology");
}

#[test]
fn root_routes_to_home() {
    let site = site();
    assert_eq!(site.routes.match_path("/").map(|e| e.page), Ok(PageId::Home));
}

#[test]
fn unknown_path_is_not_found() {
    let site = site();
    assert_eq!(
        site.routes.match_path("/careers").map(|e| e.page),
        Err(RouteError::NotFound {
            path: "/careers".into()
        })
    );
}

#[test]
fn navigating_to_fintech_activates_only_fintech() {
    let site = site();
    let mut nav = NavigationState::default();
    nav.navigate("/fintech");

    let active: Vec<&str> = site
        .registry
        .iter()
        .filter(|entry| nav.is_active(&entry.path))
        .map(|entry| entry.display_title)
        .collect();
    assert_eq!(active, vec!["Fintech"]);
}

#[test]
fn menu_toggle_and_link_activation() {
    let site = site();
    let mut nav = NavigationState::default();

    nav.toggle_menu();
    nav.toggle_menu();
    assert!(!nav.mobile_menu_open());

    nav.toggle_menu();
    assert!(nav.mobile_menu_open());
    let energy = site.registry.get(PageId::Energy).expect("energy entry");
    nav.activate_link(energy.path.clone());
    assert!(!nav.mobile_menu_open());
    assert_eq!(nav.current_path(), "/energy");
    assert_eq!(nav.active_entry(&site.registry).map(|e| e.id), Some(PageId::Energy));
}

#[test]
fn animated_block_ignores_second_intersection() {
    let spec = AnimationSpec::fade_up(50.0).staggered(2, 200);
    let mut reveal = RevealOnce::new();

    assert!(reveal.trigger());
    let settled = reveal.style(&spec);
    assert!(!reveal.trigger());
    assert_eq!(reveal.style(&spec), settled);
    assert_eq!(reveal.state(&spec), VisualState::REST);
}

#[test]
fn home_industry_links_resolve_to_routes() {
    let site = site();
    for card in HOME.industries {
        let path = normalize(card.link);
        assert!(
            site.routes.match_path(&path).is_ok(),
            "{} links to unrouted {path}",
            card.title
        );
    }
}
