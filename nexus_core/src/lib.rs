//! # nexus-core
//!
//! Everything the Nexus Corp site knows that isn't markup: how page names
//! become paths, which pages exist, how a path picks a page, what the shell
//! remembers between clicks, and when an animated block is allowed to move.
//!
//! The crate has no browser dependencies, so all of it runs under plain
//! `cargo test`. The `landing` crate renders it with Leptos.
//!
//! ## Architecture
//!
//! - [`slug`] - page name → canonical path
//! - [`registry`] - ordered [`PageIdentity`](registry::PageIdentity) table
//! - [`routes`] - exact-match [`RouteTable`](routes::RouteTable)
//! - [`navigation`] - [`NavigationState`](navigation::NavigationState) and the mobile menu
//! - [`animation`] - visual states, triggers, "animate once", hero parallax
//! - [`choreography`] - home page entrance timing
//! - [`style`] - Button / Card options
//! - [`content`] - per-page content payloads
//! - [`config`] - brand, footer and contact config (`site.toml`)
//! - [`site`] - all of the above bundled for the UI
//!
//! ## Example
//!
//! ```rust
//! use nexus_core::{Site, registry::PageId};
//!
//! let site = Site::load().expect("standard site");
//! let entry = site.routes.match_path("/fintech").expect("route");
//! assert_eq!(entry.page, PageId::Fintech);
//! ```

pub mod animation;
pub mod choreography;
pub mod config;
pub mod content;
pub mod icons;
pub mod navigation;
pub mod registry;
pub mod routes;
pub mod site;
pub mod slug;
pub mod style;

pub use icons::IconRef;
pub use navigation::{MenuState, NavigationState};
pub use registry::{NavRegistry, PageId, PageIdentity};
pub use routes::{RouteEntry, RouteError, RouteTable};
pub use site::{Site, SiteError};
pub use slug::normalize;
