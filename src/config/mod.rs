//! Configuration file handling
//!
//! This module contains data structures for:
//! - `registry-meta.json` - Per-artifact deployment defaults
//! - The registry catalog JSON returned by the transport

pub mod catalog;
pub mod meta;

pub use catalog::{Catalog, CatalogDependency, CatalogEntry, CatalogVersion};
pub use meta::{InputOverrides, REGISTRY_META_FILE, RegistryMeta, RootInput};
