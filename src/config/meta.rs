//! Root input resolution
//!
//! The version and description of a deployment come from, in order of
//! precedence, explicit overrides and the artifact's own `registry-meta.json`.
//! A meta file that fails to parse or validate is ignored with a warning.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{ArtifactKey, ArtifactKind, PackageMetadata};
use crate::error::{Result, config_invalid, config_parse_failed, file_read_failed};
use crate::scanner::SourceIndex;

/// Deployment defaults file inside an artifact directory
pub const REGISTRY_META_FILE: &str = "registry-meta.json";

/// `registry-meta.json` contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryMeta {
    pub version: String,
    pub description: String,
}

/// True for `x.y.z` with non-negative integer parts
pub fn is_valid_version(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
}

fn check_version(version: &str) -> Result<()> {
    if is_valid_version(version) {
        Ok(())
    } else {
        Err(config_invalid(format!(
            "version '{version}' must have the form x.y.z"
        )))
    }
}

fn check_description(description: &str) -> Result<()> {
    if description.is_empty() {
        Err(config_invalid("description must not be empty"))
    } else {
        Ok(())
    }
}

impl RegistryMeta {
    /// Parse and validate meta JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let meta: Self = serde_json::from_str(json)
            .map_err(|e| config_parse_failed(REGISTRY_META_FILE, e.to_string()))?;
        meta.validate()?;
        Ok(meta)
    }

    pub fn validate(&self) -> Result<()> {
        check_version(&self.version)?;
        check_description(&self.description)
    }

    /// Load the meta file of an artifact directory
    ///
    /// Returns `Ok(None)` when there is no file.
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(REGISTRY_META_FILE);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(file_read_failed(&path, e)),
        };
        Self::from_json(&content).map(Some)
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOverrides {
    pub version: Option<String>,
    pub description: Option<String>,
}

/// Fully resolved identity and metadata of the artifact being deployed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootInput {
    pub key: ArtifactKey,
    pub version: String,
    pub description: String,
}

impl RootInput {
    /// Resolve the root input for `(kind, name)` in a scanned project
    pub fn resolve(
        index: &SourceIndex,
        kind: ArtifactKind,
        name: &str,
        overrides: InputOverrides,
    ) -> Result<Self> {
        let key = ArtifactKey::new(kind, name);
        index.require(&key)?;

        let meta = match RegistryMeta::load(&index.locate(&key)?) {
            Ok(Some(meta)) => {
                debug!("Using {} of {}", REGISTRY_META_FILE, key);
                Some(meta)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Ignoring {} of {}: {}", REGISTRY_META_FILE, key, e);
                None
            }
        };

        let version = overrides
            .version
            .or_else(|| meta.as_ref().map(|m| m.version.clone()))
            .ok_or_else(|| {
                config_invalid(format!(
                    "no version for {key}: pass --version or add {REGISTRY_META_FILE}"
                ))
            })?;
        let description = overrides
            .description
            .or_else(|| meta.map(|m| m.description))
            .ok_or_else(|| {
                config_invalid(format!(
                    "no description for {key}: pass --description or add {REGISTRY_META_FILE}"
                ))
            })?;
        check_version(&version)?;
        check_description(&description)?;

        Ok(Self {
            key,
            version,
            description,
        })
    }

    pub fn metadata(&self) -> PackageMetadata {
        PackageMetadata {
            name: self.key.name.clone(),
            kind: self.key.kind,
            version: self.version.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use crate::scanner;
    use crate::test_fixtures::{create_project, write_class, write_component};

    #[test]
    fn test_version_format() {
        assert!(is_valid_version("1.0.0"));
        assert!(is_valid_version("10.20.30"));
        assert!(!is_valid_version("1.0"));
        assert!(!is_valid_version("1.0.0-beta"));
        assert!(!is_valid_version("v1.0.0"));
        assert!(!is_valid_version("1..0"));
    }

    #[test]
    fn test_from_json_rejects_empty_description() {
        let err = RegistryMeta::from_json(r#"{"version":"1.0.0","description":""}"#).unwrap_err();
        assert!(matches!(err, RegistryError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_from_json_accepts_blank_description() {
        let meta = RegistryMeta::from_json(r#"{"version":"1.0.0","description":" "}"#).unwrap();
        assert_eq!(meta.description, " ");
    }

    #[test]
    fn test_from_json_rejects_missing_field() {
        let err = RegistryMeta::from_json(r#"{"version":"1.0.0"}"#).unwrap_err();
        assert!(matches!(err, RegistryError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_resolve_from_meta_file() {
        let (_temp, layout) = create_project();
        let dir = write_component(&layout, "card", &[]);
        std::fs::write(
            dir.join(REGISTRY_META_FILE),
            r#"{"version":"2.1.0","description":"Card"}"#,
        )
        .unwrap();
        let index = scanner::scan(&layout).unwrap();

        let input =
            RootInput::resolve(&index, ArtifactKind::Component, "card", InputOverrides::default())
                .unwrap();
        assert_eq!(input.version, "2.1.0");
        assert_eq!(input.description, "Card");
        assert_eq!(input.metadata().kind, ArtifactKind::Component);
    }

    #[test]
    fn test_overrides_win_over_meta_file() {
        let (_temp, layout) = create_project();
        let dir = write_class(&layout, "Repo", "Repo", "public class Repo {}");
        std::fs::write(
            dir.join(REGISTRY_META_FILE),
            r#"{"version":"2.1.0","description":"Repo"}"#,
        )
        .unwrap();
        let index = scanner::scan(&layout).unwrap();

        let overrides = InputOverrides {
            version: Some("3.0.0".to_string()),
            description: None,
        };
        let input = RootInput::resolve(&index, ArtifactKind::Class, "Repo", overrides).unwrap();
        assert_eq!(input.version, "3.0.0");
        assert_eq!(input.description, "Repo");
    }

    #[test]
    fn test_invalid_meta_file_is_ignored() {
        let (_temp, layout) = create_project();
        let dir = write_component(&layout, "card", &[]);
        std::fs::write(dir.join(REGISTRY_META_FILE), r#"{"version":"one"}"#).unwrap();
        let index = scanner::scan(&layout).unwrap();

        let err =
            RootInput::resolve(&index, ArtifactKind::Component, "card", InputOverrides::default())
                .unwrap_err();
        assert!(matches!(err, RegistryError::ConfigInvalid { .. }));

        let overrides = InputOverrides {
            version: Some("1.0.0".to_string()),
            description: Some("Card".to_string()),
        };
        assert!(RootInput::resolve(&index, ArtifactKind::Component, "card", overrides).is_ok());
    }

    #[test]
    fn test_bad_override_version_is_rejected() {
        let (_temp, layout) = create_project();
        write_component(&layout, "card", &[]);
        let index = scanner::scan(&layout).unwrap();
        let overrides = InputOverrides {
            version: Some("latest".to_string()),
            description: Some("Card".to_string()),
        };
        let err =
            RootInput::resolve(&index, ArtifactKind::Component, "card", overrides).unwrap_err();
        assert!(err.to_string().contains("x.y.z"));
    }

    #[test]
    fn test_unknown_root() {
        let (_temp, layout) = create_project();
        let index = scanner::scan(&layout).unwrap();
        let err =
            RootInput::resolve(&index, ArtifactKind::Class, "Nope", InputOverrides::default())
                .unwrap_err();
        assert!(matches!(err, RegistryError::ArtifactNotFound { .. }));
    }
}
