//! Artifact identity
//!
//! An artifact is either a UI component or a server-side class. Its identity
//! is the pair `(kind, name)`; names are unique within a kind only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two kinds of artifact tracked by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Component,
    Class,
}

impl ArtifactKind {
    /// All kinds, in the order the registry lists them
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Component, ArtifactKind::Class];

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Component => "component",
            ArtifactKind::Class => "class",
        }
    }

    /// Subdirectory of a placement target that receives artifacts of this kind
    pub fn destination_dir(self) -> &'static str {
        match self {
            ArtifactKind::Component => "lwc",
            ArtifactKind::Class => "classes",
        }
    }

    /// Human readable label used in terminal output
    pub fn label(self, plural: bool) -> &'static str {
        match (self, plural) {
            (ArtifactKind::Component, false) => "LWC component",
            (ArtifactKind::Component, true) => "LWC components",
            (ArtifactKind::Class, false) => "Apex class",
            (ArtifactKind::Class, true) => "Apex classes",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "component" => Ok(ArtifactKind::Component),
            "class" => Ok(ArtifactKind::Class),
            other => Err(format!("unknown artifact type '{other}'")),
        }
    }
}

/// Identity of one artifact, rendered as `kind:name`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactKey {
    pub kind: ArtifactKind,
    pub name: String,
}

impl ArtifactKey {
    pub fn new(kind: ArtifactKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn component(name: impl Into<String>) -> Self {
        Self::new(ArtifactKind::Component, name)
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(ArtifactKind::Class, name)
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        assert_eq!(ArtifactKey::component("myCard").to_string(), "component:myCard");
        assert_eq!(ArtifactKey::class("Util").to_string(), "class:Util");
    }

    #[test]
    fn test_same_name_different_kind_are_distinct() {
        assert_ne!(ArtifactKey::component("x"), ArtifactKey::class("x"));
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("class".parse::<ArtifactKind>(), Ok(ArtifactKind::Class));
        assert!("widget".parse::<ArtifactKind>().is_err());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ArtifactKind::Component).unwrap();
        assert_eq!(json, "\"component\"");
    }
}
