//! The assembled, immutable site description.

use thiserror::Error;
use tracing::debug;

use crate::config::SiteConfig;
use crate::registry::NavRegistry;
use crate::routes::{RouteError, RouteTable};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Configuration, navigation registry and route table, built once at
/// startup and handed to every consumer by reference.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub registry: NavRegistry,
    pub routes: RouteTable,
}

impl Site {
    pub fn new(config: SiteConfig, registry: NavRegistry) -> Result<Self, SiteError> {
        let routes = RouteTable::from_registry(&registry)?;
        debug!(pages = registry.len(), brand = %config.brand.name, "site assembled");
        Ok(Self {
            config,
            registry,
            routes,
        })
    }

    /// Embedded config and the standard six-page registry.
    pub fn load() -> Result<Self, SiteError> {
        Self::new(SiteConfig::load_embedded(), NavRegistry::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_site_loads() {
        let site = Site::load().expect("standard site is valid");
        assert_eq!(site.registry.len(), 6);
        assert_eq!(site.routes.entries().len(), 6);
        assert_eq!(site.config.brand.name, "Nexus Corp");
    }
}
