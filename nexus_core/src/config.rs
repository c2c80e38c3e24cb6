//! Site configuration: brand, footer and contact details.
//!
//! Parsed from the `site.toml` embedded in the crate. Every field has a
//! default, so a partial document still yields a complete config.

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::icons::IconRef;

const EMBEDDED: &str = include_str!("../site.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    pub footer: FooterConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub tagline: String,
    /// Short blurb under the footer logo.
    pub description: String,
    pub icon: IconRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub industries_heading: String,
    pub industries: Vec<String>,
    pub copyright_year: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub heading: String,
    pub address: Vec<String>,
    pub email: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Nexus Corp".into(),
            tagline: "INNOVATION REDEFINED".into(),
            description: "Pioneering innovation across multiple industries, \
                          transforming the future through technology."
                .into(),
            icon: IconRef::Building2,
        }
    }
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            industries_heading: "Industries".into(),
            industries: [
                "Medical Technology",
                "Artificial Intelligence",
                "Aerospace Engineering",
                "Financial Technology",
                "Renewable Energy",
            ]
            .map(String::from)
            .to_vec(),
            copyright_year: 2024,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            heading: "Contact".into(),
            address: vec!["1 Innovation Drive".into(), "Tech Valley, CA 94043".into()],
            email: "info@nexuscorp.com".into(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load the embedded `site.toml`.
    /// Falls back to the default config if it fails to parse.
    pub fn load_embedded() -> Self {
        match Self::from_toml_str(EMBEDDED) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "embedded site.toml is invalid, using defaults");
                Self::default()
            }
        }
    }

    /// "© 2024 Nexus Corp. All rights reserved."
    pub fn copyright_line(&self) -> String {
        format!(
            "\u{a9} {} {}. All rights reserved.",
            self.footer.copyright_year, self.brand.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::from_toml_str(EMBEDDED).expect("embedded site.toml parses");
        assert_eq!(config.brand.name, "Nexus Corp");
        assert_eq!(config.brand.icon, IconRef::Building2);
        assert_eq!(config.footer.industries.len(), 5);
        assert_eq!(config.contact.email, "info@nexuscorp.com");
    }

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(SiteConfig::load_embedded(), SiteConfig::default());
    }

    #[test]
    fn partial_document_fills_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[brand]
name = "Nexus Labs"

[contact]
email = "hello@nexuslabs.test"
"#,
        )
        .expect("partial config parses");

        assert_eq!(config.brand.name, "Nexus Labs");
        assert_eq!(config.brand.tagline, "INNOVATION REDEFINED");
        assert_eq!(config.contact.email, "hello@nexuslabs.test");
        assert_eq!(config.contact.address, ContactConfig::default().address);
        assert_eq!(config.footer, FooterConfig::default());
    }

    #[test]
    fn empty_document_is_default() {
        let config = SiteConfig::from_toml_str("").expect("empty config parses");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = SiteConfig::from_toml_str("[brand\nname = ").unwrap_err();
        assert!(err.to_string().starts_with("invalid site config"));
    }

    #[test]
    fn unknown_icon_is_an_error() {
        assert!(SiteConfig::from_toml_str("[brand]\nicon = \"teapot\"").is_err());
    }

    #[test]
    fn copyright_line_uses_brand_and_year() {
        assert_eq!(
            SiteConfig::default().copyright_line(),
            "\u{a9} 2024 Nexus Corp. All rights reserved."
        );
    }
}
