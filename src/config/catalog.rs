//! Registry catalog data structures
//!
//! The catalog lists every published component and class with its versions.

use serde::{Deserialize, Serialize};

use crate::domain::ArtifactKind;
use crate::error::{Result, catalog_empty, config_parse_failed, entry_not_found, version_not_found};

/// A dependency recorded for a published version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDependency {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
}

/// One published version of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogVersion {
    pub version: String,
    pub description: String,
    pub hash: String,
    #[serde(default)]
    pub staticresources: Vec<String>,
    #[serde(rename = "registryDependencies", default)]
    pub registry_dependencies: Vec<CatalogDependency>,
}

/// A component or class with all of its published versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub versions: Vec<CatalogVersion>,
}

impl CatalogEntry {
    /// Find an exact version
    pub fn version(&self, version: &str) -> Result<&CatalogVersion> {
        self.versions
            .iter()
            .find(|v| v.version == version)
            .ok_or_else(|| version_not_found(self.name.clone(), version))
    }

    /// Most recently published version (last in the list)
    pub fn latest(&self) -> Option<&CatalogVersion> {
        self.versions.last()
    }
}

/// Full registry listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub component: Vec<CatalogEntry>,
    #[serde(default)]
    pub class: Vec<CatalogEntry>,
}

impl Catalog {
    /// Parse catalog JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| config_parse_failed("catalog", e.to_string()))
    }

    pub fn entries(&self, kind: ArtifactKind) -> &[CatalogEntry] {
        match kind {
            ArtifactKind::Component => &self.component,
            ArtifactKind::Class => &self.class,
        }
    }

    /// Entries of a kind, failing when there are none
    pub fn non_empty(&self, kind: ArtifactKind) -> Result<&[CatalogEntry]> {
        let entries = self.entries(kind);
        if entries.is_empty() {
            Err(catalog_empty(kind))
        } else {
            Ok(entries)
        }
    }

    /// Find an entry by kind and name
    pub fn entry(&self, kind: ArtifactKind, name: &str) -> Result<&CatalogEntry> {
        self.non_empty(kind)?
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| entry_not_found(kind, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;

    const SAMPLE: &str = r#"{
        "component": [
            {
                "name": "card",
                "versions": [
                    {
                        "version": "1.0.0",
                        "description": "First",
                        "hash": "abc",
                        "staticresources": ["logo"],
                        "registryDependencies": [
                            { "name": "badge", "type": "component", "version": "1.0.0" }
                        ]
                    },
                    {
                        "version": "1.1.0",
                        "description": "Second",
                        "hash": "def",
                        "staticresources": [],
                        "registryDependencies": []
                    }
                ]
            }
        ],
        "class": []
    }"#;

    #[test]
    fn test_parse_and_lookup() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let card = catalog.entry(ArtifactKind::Component, "card").unwrap();
        assert_eq!(card.latest().unwrap().version, "1.1.0");

        let first = card.version("1.0.0").unwrap();
        assert_eq!(first.staticresources, vec!["logo"]);
        assert_eq!(first.registry_dependencies[0].kind, "component");
    }

    #[test]
    fn test_empty_kind() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let err = catalog.entry(ArtifactKind::Class, "Repo").unwrap_err();
        assert!(matches!(err, RegistryError::CatalogEmpty { kind: ArtifactKind::Class }));
    }

    #[test]
    fn test_missing_entry_and_version() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert!(matches!(
            catalog.entry(ArtifactKind::Component, "nope").unwrap_err(),
            RegistryError::EntryNotFound { .. }
        ));
        let card = catalog.entry(ArtifactKind::Component, "card").unwrap();
        assert!(matches!(
            card.version("9.9.9").unwrap_err(),
            RegistryError::VersionNotFound { .. }
        ));
    }

    #[test]
    fn test_malformed_catalog() {
        assert!(matches!(
            Catalog::from_json("{\"component\": 3}").unwrap_err(),
            RegistryError::ConfigParseFailed { .. }
        ));
    }
}
