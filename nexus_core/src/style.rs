//! Styling options for the shared Button and Card widgets.
//!
//! Each widget takes one of these structs instead of an open-ended bag of
//! attributes; `class_list()` yields the final `class` value.

use crate::navigation::MenuState;

/// Button colour treatment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Dark fill, light text.
    #[default]
    Solid,
    /// Transparent until hovered (mobile menu toggle).
    Ghost,
    /// Light fill on a coloured band (call-to-action blocks).
    Inverse,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Solid => "btn-solid",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Inverse => "btn-inverse",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Regular,
    /// Square padding for icon-only buttons.
    Icon,
    Large,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Regular => "btn-md",
            ButtonSize::Icon => "btn-icon",
            ButtonSize::Large => "btn-lg",
        }
    }
}

/// Options recognised by the Button widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    /// Extra classes appended after the generated ones.
    pub class: &'static str,
}

impl ButtonStyle {
    pub fn new(variant: ButtonVariant, size: ButtonSize) -> Self {
        Self {
            variant,
            size,
            class: "",
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    pub fn class_list(&self) -> String {
        join_classes(&["btn", self.variant.class(), self.size.class(), self.class])
    }
}

/// Options recognised by the Card widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardStyle {
    /// Inner padding on the content block.
    pub padded: bool,
    /// Drop shadow that deepens on hover.
    pub elevated: bool,
    pub class: &'static str,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            padded: true,
            elevated: true,
            class: "",
        }
    }
}

impl CardStyle {
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    pub fn flat(mut self) -> Self {
        self.elevated = false;
        self
    }

    pub fn unpadded(mut self) -> Self {
        self.padded = false;
        self
    }

    pub fn class_list(&self) -> String {
        join_classes(&[
            "card",
            if self.elevated { "card-elevated" } else { "" },
            self.class,
        ])
    }

    pub fn content_class(&self) -> &'static str {
        if self.padded {
            "card-content"
        } else {
            "card-content card-content-flush"
        }
    }
}

/// Class for the mobile menu panel. The panel stays mounted so the
/// stylesheet can transition height and opacity both ways.
pub fn mobile_menu_class(menu: MenuState) -> &'static str {
    match menu {
        MenuState::Closed => "mobile-menu",
        MenuState::Open => "mobile-menu mobile-menu-open",
    }
}

fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_button_is_solid_regular() {
        assert_eq!(ButtonStyle::default().class_list(), "btn btn-solid btn-md");
    }

    #[test]
    fn ghost_icon_button_for_menu_toggle() {
        let style = ButtonStyle::new(ButtonVariant::Ghost, ButtonSize::Icon).with_class("menu-toggle");
        assert_eq!(style.class_list(), "btn btn-ghost btn-icon menu-toggle");
    }

    #[test]
    fn card_flags_shape_classes() {
        assert_eq!(CardStyle::default().class_list(), "card card-elevated");
        assert_eq!(
            CardStyle::default().flat().with_class(" stat-card ").class_list(),
            "card stat-card"
        );
        assert_eq!(CardStyle::default().content_class(), "card-content");
        assert_eq!(
            CardStyle::default().unpadded().content_class(),
            "card-content card-content-flush"
        );
    }

    #[test]
    fn mobile_menu_panel_opens_and_collapses_by_class() {
        assert_eq!(mobile_menu_class(MenuState::Closed), "mobile-menu");
        assert_eq!(mobile_menu_class(MenuState::Open), "mobile-menu mobile-menu-open");
    }
}
