//! Shell navigation state: current path plus the mobile menu state machine.
//!
//! ```text
//!   Closed --toggle--> Open
//!   Open   --toggle--> Closed
//!   Open   --link----> Closed   (path updated in the same step)
//! ```
//!
//! Every navigation resets the menu to `Closed`. Nothing else closes it.

use tracing::debug;

use crate::registry::{NavRegistry, PageIdentity};

/// Mobile menu visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

/// State owned by the Shell. Other components only read it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    current_path: String,
    menu: MenuState,
}

impl NavigationState {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            current_path: path.into(),
            menu: MenuState::Closed,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    /// Move to `path` and reset the menu.
    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        debug!(from = %self.current_path, to = %path, "navigate");
        self.current_path = path;
        self.menu = MenuState::Closed;
    }

    /// Follow an external location change (back/forward, direct load).
    ///
    /// Returns `false` when the path is already current, in which case the
    /// menu is left untouched.
    pub fn sync_location(&mut self, path: &str) -> bool {
        if self.current_path == path {
            return false;
        }
        self.navigate(path);
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggled();
        debug!(menu = ?self.menu, "menu toggled");
    }

    /// A link inside the mobile menu: navigate and close as one step.
    pub fn activate_link(&mut self, path: impl Into<String>) {
        self.navigate(path);
    }

    /// Exact, case-sensitive comparison. `/ai/` is not `/ai`.
    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }

    pub fn active_entry<'r>(&self, registry: &'r NavRegistry) -> Option<&'r PageIdentity> {
        registry.iter().find(|entry| self.is_active(&entry.path))
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(crate::slug::ROOT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PageId;

    #[test]
    fn starts_closed_at_requested_path() {
        let state = NavigationState::new("/energy");
        assert_eq!(state.current_path(), "/energy");
        assert_eq!(state.menu(), MenuState::Closed);
        assert!(!state.mobile_menu_open());
    }

    #[test]
    fn toggle_twice_round_trips() {
        let mut state = NavigationState::default();
        state.toggle_menu();
        assert!(state.mobile_menu_open());
        state.toggle_menu();
        assert!(!state.mobile_menu_open());
    }

    #[test]
    fn activating_link_closes_menu_and_moves() {
        let mut state = NavigationState::default();
        state.toggle_menu();
        state.activate_link("/aerospace");
        assert_eq!(state, NavigationState::new("/aerospace"));
    }

    #[test]
    fn navigation_resets_menu() {
        let mut state = NavigationState::new("/ai");
        state.toggle_menu();
        state.navigate("/medical");
        assert!(!state.mobile_menu_open());
        assert_eq!(state.current_path(), "/medical");
    }

    #[test]
    fn sync_to_same_path_keeps_menu_open() {
        let mut state = NavigationState::new("/ai");
        state.toggle_menu();
        assert!(!state.sync_location("/ai"));
        assert!(state.mobile_menu_open());

        assert!(state.sync_location("/energy"));
        assert!(!state.mobile_menu_open());
    }

    #[test]
    fn exactly_one_active_entry_after_navigation() {
        let registry = NavRegistry::standard();
        let mut state = NavigationState::default();
        state.navigate("/fintech");

        let active: Vec<PageId> = registry
            .iter()
            .filter(|entry| state.is_active(&entry.path))
            .map(|entry| entry.id)
            .collect();
        assert_eq!(active, vec![PageId::Fintech]);
        assert_eq!(state.active_entry(&registry).map(|e| e.id), Some(PageId::Fintech));
    }

    #[test]
    fn unknown_or_trailing_slash_path_activates_nothing() {
        let registry = NavRegistry::standard();
        for path in ["/fintech/", "/missing", "/FINTECH"] {
            let state = NavigationState::new(path);
            assert!(state.active_entry(&registry).is_none(), "{path} should not be active");
        }
    }
}
