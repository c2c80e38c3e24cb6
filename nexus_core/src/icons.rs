//! Symbolic icon references.
//!
//! The core never renders glyphs; it stores an [`IconRef`] and the icon
//! provider in the landing crate turns it into SVG.

use serde::Deserialize;

/// A glyph from the site's icon set (Lucide naming).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconRef {
    Activity,
    ArrowRight,
    Award,
    Banknote,
    Battery,
    Bot,
    Brain,
    Building,
    #[serde(rename = "building-2")]
    Building2,
    Cpu,
    CreditCard,
    Gauge,
    Globe,
    Heart,
    Leaf,
    Menu,
    Microscope,
    Plane,
    Rocket,
    Satellite,
    Shield,
    Smartphone,
    Stethoscope,
    Sun,
    Target,
    TrendingUp,
    Users,
    Wind,
    X,
    Zap,
}

impl IconRef {
    /// Lucide name, used for `data-icon` attributes and accessible labels.
    pub fn name(self) -> &'static str {
        match self {
            IconRef::Activity => "activity",
            IconRef::ArrowRight => "arrow-right",
            IconRef::Award => "award",
            IconRef::Banknote => "banknote",
            IconRef::Battery => "battery",
            IconRef::Bot => "bot",
            IconRef::Brain => "brain",
            IconRef::Building => "building",
            IconRef::Building2 => "building-2",
            IconRef::Cpu => "cpu",
            IconRef::CreditCard => "credit-card",
            IconRef::Gauge => "gauge",
            IconRef::Globe => "globe",
            IconRef::Heart => "heart",
            IconRef::Leaf => "leaf",
            IconRef::Menu => "menu",
            IconRef::Microscope => "microscope",
            IconRef::Plane => "plane",
            IconRef::Rocket => "rocket",
            IconRef::Satellite => "satellite",
            IconRef::Shield => "shield",
            IconRef::Smartphone => "smartphone",
            IconRef::Stethoscope => "stethoscope",
            IconRef::Sun => "sun",
            IconRef::Target => "target",
            IconRef::TrendingUp => "trending-up",
            IconRef::Users => "users",
            IconRef::Wind => "wind",
            IconRef::X => "x",
            IconRef::Zap => "zap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_serde_representation() {
        #[derive(Deserialize)]
        struct Holder {
            icon: IconRef,
        }

        for icon in [IconRef::Building2, IconRef::TrendingUp, IconRef::CreditCard, IconRef::X] {
            let doc = format!("icon = \"{}\"", icon.name());
            let parsed: Holder = toml::from_str(&doc).expect("icon name parses");
            assert_eq!(parsed.icon, icon);
        }
    }
}
