//! Route table: exact path to page matching.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::registry::{NavRegistry, PageId};
use crate::slug::ROOT_PATH;

/// Errors raised while building or querying the route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No route is registered for the requested path.
    #[error("no route registered for {path:?}")]
    NotFound { path: String },
    #[error("path {path:?} is registered more than once")]
    DuplicatePath { path: String },
    #[error("route table has no entry for \"/\"")]
    MissingRoot,
}

/// One routable page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub page: PageId,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, page: PageId) -> Self {
        Self {
            path: path.into(),
            page,
        }
    }
}

/// Declarative path → page mapping.
///
/// Paths are unique and exactly one entry is `/`; both are checked in
/// [`RouteTable::new`].
#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(RouteError::DuplicatePath {
                    path: entry.path.clone(),
                });
            }
        }
        if !seen.contains(ROOT_PATH) {
            return Err(RouteError::MissingRoot);
        }
        Ok(Self { entries })
    }

    /// One route per registry entry, in registry order.
    pub fn from_registry(registry: &NavRegistry) -> Result<Self, RouteError> {
        Self::new(
            registry
                .iter()
                .map(|identity| RouteEntry::new(identity.path.clone(), identity.id))
                .collect(),
        )
    }

    /// Exact string match. Unmatched paths are reported, never coerced to `/`.
    pub fn match_path(&self, requested: &str) -> Result<&RouteEntry, RouteError> {
        match self.entries.iter().find(|entry| entry.path == requested) {
            Some(entry) => Ok(entry),
            None => {
                debug!(path = requested, "no route matched");
                Err(RouteError::NotFound {
                    path: requested.to_string(),
                })
            }
        }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn path_of(&self, page: PageId) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.page == page)
            .map(|entry| entry.path.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::from_registry(&NavRegistry::standard()).expect("standard table is valid")
    }

    #[test]
    fn matches_every_registered_route() {
        let table = table();
        assert_eq!(table.match_path("/").map(|e| e.page), Ok(PageId::Home));
        assert_eq!(table.match_path("/medical").map(|e| e.page), Ok(PageId::Medical));
        assert_eq!(table.match_path("/ai").map(|e| e.page), Ok(PageId::Ai));
        assert_eq!(table.match_path("/aerospace").map(|e| e.page), Ok(PageId::Aerospace));
        assert_eq!(table.match_path("/fintech").map(|e| e.page), Ok(PageId::Fintech));
        assert_eq!(table.match_path("/energy").map(|e| e.page), Ok(PageId::Energy));
    }

    #[test]
    fn unmatched_paths_are_not_coerced_to_root() {
        let table = table();
        for path in ["/unknown", "/Medical", "/medical/", "", "/ai-solutions"] {
            assert_eq!(
                table.match_path(path),
                Err(RouteError::NotFound {
                    path: path.to_string()
                })
            );
        }
    }

    #[test]
    fn rejects_duplicate_paths() {
        let result = RouteTable::new(vec![
            RouteEntry::new("/", PageId::Home),
            RouteEntry::new("/ai", PageId::Ai),
            RouteEntry::new("/ai", PageId::Medical),
        ]);
        assert_eq!(
            result.err(),
            Some(RouteError::DuplicatePath {
                path: "/ai".into()
            })
        );
    }

    #[test]
    fn rejects_table_without_root() {
        let result = RouteTable::new(vec![RouteEntry::new("/ai", PageId::Ai)]);
        assert_eq!(result.err(), Some(RouteError::MissingRoot));
    }

    #[test]
    fn path_of_reverses_the_mapping() {
        let table = table();
        assert_eq!(table.path_of(PageId::Aerospace), Some("/aerospace"));
        assert_eq!(table.path_of(PageId::Home), Some("/"));
    }

    #[test]
    fn error_messages_name_the_path() {
        let err = RouteError::NotFound {
            path: "/nope".into(),
        };
        assert_eq!(err.to_string(), "no route registered for \"/nope\"");
    }
}
