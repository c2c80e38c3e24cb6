//! Inline SVG icon provider.
//!
//! Glyphs follow the [Lucide](https://lucide.dev/) 24×24 stroke style. Each
//! [`IconRef`] maps to one or more path strings; circles and rects are
//! written as paths so a single element type covers the whole set.

use leptos::prelude::*;
use nexus_core::IconRef;

/// Renders the glyph for `icon`.
///
/// ```rust,ignore
/// view! { <Icon icon=IconRef::Heart class="icon-lg" /> }
/// ```
#[component]
pub fn Icon(
    icon: IconRef,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let class = if class.is_empty() {
        "icon".to_string()
    } else {
        format!("icon {class}")
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=icon.name()
            class=class
        >
            {glyph(icon).iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

fn glyph(icon: IconRef) -> &'static [&'static str] {
    match icon {
        IconRef::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
        IconRef::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
        IconRef::Award => &[
            "M12 2a6 6 0 1 0 0 12a6 6 0 1 0 0-12z",
            "M15.477 12.89 17 22l-5-3-5 3 1.523-9.11",
        ],
        IconRef::Banknote => &[
            "M4 6h16a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
            "M12 10a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
            "M6 12h.01M18 12h.01",
        ],
        IconRef::Battery => &[
            "M4 7h12a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
            "M22 11v2",
        ],
        IconRef::Bot => &[
            "M12 8V4H8",
            "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
            "M2 14h2M20 14h2",
            "M15 13v2M9 13v2",
        ],
        IconRef::Brain => &[
            "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z",
            "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z",
            "M12 5v13",
        ],
        IconRef::Building => &[
            "M6 2h12a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M9 22v-4h6v4",
            "M8 6h.01M12 6h.01M16 6h.01M8 10h.01M12 10h.01M16 10h.01M8 14h.01M12 14h.01M16 14h.01",
        ],
        IconRef::Building2 => &[
            "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z",
            "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
            "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
            "M10 6h4M10 10h4M10 14h4M10 18h4",
        ],
        IconRef::Cpu => &[
            "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
            "M9 9h6v6H9z",
            "M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2",
        ],
        IconRef::CreditCard => &[
            "M4 5h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2z",
            "M2 10h20",
        ],
        IconRef::Gauge => &["m12 14 4-4", "M3.34 19a10 10 0 1 1 17.32 0"],
        IconRef::Globe => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
            "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
            "M2 12h20",
        ],
        IconRef::Heart => &[
            "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
        ],
        IconRef::Leaf => &[
            "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
            "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
        ],
        IconRef::Menu => &["M4 6h16M4 12h16M4 18h16"],
        IconRef::Microscope => &[
            "M6 18h8",
            "M3 22h18",
            "M14 22a7 7 0 1 0 0-14h-1",
            "M9 14h2",
            "M9 12a2 2 0 0 1-2-2V6h6v4a2 2 0 0 1-2 2Z",
            "M12 6V3a1 1 0 0 0-1-1H9a1 1 0 0 0-1 1v3",
        ],
        IconRef::Plane => &[
            "M17.8 19.2 16 11l3.5-3.5C21 6 21.5 4 21 3c-1-.5-3 0-4.5 1.5L13 8 4.8 6.2c-.5-.1-.9.1-1.1.5l-.3.5c-.2.5-.1 1 .3 1.3L9 12l-2 3H4l-1 1 3 2 2 3 1-1v-3l3-2 3.5 5.3c.3.4.8.5 1.3.3l.5-.2c.4-.3.6-.7.5-1.2z",
        ],
        IconRef::Rocket => &[
            "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
            "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
            "M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0",
            "M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5",
        ],
        IconRef::Satellite => &[
            "M13 7 9 3 5 7l4 4",
            "m17 11 4 4-4 4-4-4",
            "m8 12 4 4 6-6-4-4Z",
            "m16 8 3-3",
            "M9 21a6 6 0 0 0-6-6",
        ],
        IconRef::Shield => &[
            "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
        ],
        IconRef::Smartphone => &[
            "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
            "M12 18h.01",
        ],
        IconRef::Stethoscope => &[
            "M11 2v2M5 2v2",
            "M5 3H4a2 2 0 0 0-2 2v4a6 6 0 0 0 12 0V5a2 2 0 0 0-2-2h-1",
            "M8 15a6 6 0 0 0 12 0v-3",
            "M20 8a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
        ],
        IconRef::Sun => &[
            "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41",
        ],
        IconRef::Target => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
            "M12 6a6 6 0 1 0 0 12a6 6 0 1 0 0-12z",
            "M12 10a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
        ],
        IconRef::TrendingUp => &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"],
        IconRef::Users => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        IconRef::Wind => &[
            "M17.7 7.7a2.5 2.5 0 1 1 1.8 4.3H2",
            "M9.6 4.6A2 2 0 1 1 11 8H2",
            "M12.6 19.4A2 2 0 1 0 14 16H2",
        ],
        IconRef::X => &["M18 6 6 18", "m6 6 12 12"],
        IconRef::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
    }
}
