//! Navigation registry: the ordered list of navigable pages.
//!
//! Built once at startup and shared read-only by the header, the footer
//! and the route table. Paths are derived from canonical names through
//! [`normalize`], so a registry entry and its route can't disagree.

use crate::icons::IconRef;
use crate::slug::normalize;

/// Identity of a routed page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    Medical,
    Ai,
    Aerospace,
    Fintech,
    Energy,
}

impl PageId {
    /// All pages, in navigation order.
    pub const ALL: [PageId; 6] = [
        PageId::Home,
        PageId::Medical,
        PageId::Ai,
        PageId::Aerospace,
        PageId::Fintech,
        PageId::Energy,
    ];

    /// Name the page's path is derived from.
    pub fn canonical_name(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Medical => "Medical",
            PageId::Ai => "AI",
            PageId::Aerospace => "Aerospace",
            PageId::Fintech => "Fintech",
            PageId::Energy => "Energy",
        }
    }

    /// Label shown in the header and the mobile menu.
    pub fn display_title(self) -> &'static str {
        match self {
            PageId::Ai => "AI Solutions",
            other => other.canonical_name(),
        }
    }

    pub fn icon(self) -> IconRef {
        match self {
            PageId::Home => IconRef::Building2,
            PageId::Medical => IconRef::Heart,
            PageId::Ai => IconRef::Brain,
            PageId::Aerospace => IconRef::Plane,
            PageId::Fintech => IconRef::Banknote,
            PageId::Energy => IconRef::Zap,
        }
    }
}

/// Display metadata and canonical path for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageIdentity {
    pub id: PageId,
    pub canonical_name: &'static str,
    pub display_title: &'static str,
    pub icon: IconRef,
    pub path: String,
}

impl PageIdentity {
    pub fn new(id: PageId) -> Self {
        Self {
            id,
            canonical_name: id.canonical_name(),
            display_title: id.display_title(),
            icon: id.icon(),
            path: normalize(id.canonical_name()),
        }
    }
}

/// Immutable, ordered table of [`PageIdentity`].
#[derive(Clone, Debug)]
pub struct NavRegistry {
    entries: Vec<PageIdentity>,
}

impl NavRegistry {
    /// The six Nexus Corp pages: Home, Medical, AI, Aerospace, Fintech, Energy.
    pub fn standard() -> Self {
        Self {
            entries: PageId::ALL.into_iter().map(PageIdentity::new).collect(),
        }
    }

    pub fn entries(&self) -> &[PageIdentity] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageIdentity> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: PageId) -> Option<&PageIdentity> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Exact, case-sensitive lookup by path.
    pub fn find_by_path(&self, path: &str) -> Option<&PageIdentity> {
        self.entries.iter().find(|entry| entry.path == path)
    }
}

impl<'a> IntoIterator for &'a NavRegistry {
    type Item = &'a PageIdentity;
    type IntoIter = std::slice::Iter<'a, PageIdentity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn standard_registry_order_and_paths() {
        let registry = NavRegistry::standard();
        let paths: Vec<&str> = registry.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/", "/medical", "/ai", "/aerospace", "/fintech", "/energy"]
        );
    }

    #[test]
    fn ai_entry_keeps_short_path_with_long_title() {
        let registry = NavRegistry::standard();
        let ai = registry.get(PageId::Ai).expect("ai entry");
        assert_eq!(ai.display_title, "AI Solutions");
        assert_eq!(ai.canonical_name, "AI");
        assert_eq!(ai.path, "/ai");
        assert_eq!(ai.icon, IconRef::Brain);
    }

    #[test]
    fn paths_are_normalized_canonical_names() {
        let registry = NavRegistry::standard();
        for entry in &registry {
            if entry.id == PageId::Home {
                assert_eq!(entry.path, "/");
            } else {
                assert_eq!(normalize(entry.canonical_name), entry.path);
            }
        }
    }

    #[test]
    fn find_by_path_is_exact() {
        let registry = NavRegistry::standard();
        assert_eq!(
            registry.find_by_path("/fintech").map(|e| e.id),
            Some(PageId::Fintech)
        );
        assert!(registry.find_by_path("/Fintech").is_none());
        assert!(registry.find_by_path("/fintech/").is_none());
    }
}
