//! Static reference extraction
//!
//! Each reference shape is a named [`ReferenceMatcher`] that turns source text
//! into a list of candidate names. A [`MatcherSet`] pairs matchers with the
//! artifact files they read, so new shapes can be added without touching the
//! resolver.
//!
//! Candidate names are not checked here; the resolver drops names that are not
//! known artifacts.

pub mod patterns;

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use rayon::prelude::*;

use crate::error::{Result, file_read_failed};

pub use patterns::{CapturePattern, ClassMentionMatcher, class_matchers, component_matchers};

/// What a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceTarget {
    Component,
    Class,
    StaticResource,
}

/// A name found in an artifact's source, with what it refers to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub target: ReferenceTarget,
    pub name: String,
}

/// One reference shape
pub trait ReferenceMatcher: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    fn target(&self) -> ReferenceTarget;

    /// Extensions of the artifact's own source files this matcher reads, in scan order
    fn extensions(&self) -> &[&'static str];

    /// Candidate names in order of first occurrence, without duplicates
    fn find(&self, source: &str) -> Vec<String>;
}

/// Read a source file, treating a missing file as absent rather than an error
pub fn read_source(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(file_read_failed(path, e)),
    }
}

/// Apply one matcher to one file
///
/// Returns an empty list when the file does not exist.
pub fn extract_from_file(path: &Path, matcher: &dyn ReferenceMatcher) -> Result<Vec<String>> {
    Ok(read_source(path)?
        .map(|source| matcher.find(&source))
        .unwrap_or_default())
}

/// Keep the first occurrence of each item
pub(crate) fn dedup_preserving_order<T, I>(items: I) -> Vec<T>
where
    T: Eq + std::hash::Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Ordered list of matchers applied to one kind of artifact
#[derive(Default)]
pub struct MatcherSet {
    matchers: Vec<Box<dyn ReferenceMatcher>>,
}

impl MatcherSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, matcher: impl ReferenceMatcher + 'static) -> Self {
        self.push(matcher);
        self
    }

    pub fn push(&mut self, matcher: impl ReferenceMatcher + 'static) {
        self.matchers.push(Box::new(matcher));
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ReferenceMatcher> {
        self.matchers
            .iter()
            .map(|m| -> &dyn ReferenceMatcher { m.as_ref() })
    }

    /// Scan the files `<dir>/<base_name>.<ext>` of one artifact
    ///
    /// Each file is read once, files are read concurrently, and the result
    /// follows matcher order then extension order with duplicates removed.
    pub fn scan_artifact(&self, dir: &Path, base_name: &str) -> Result<Vec<Reference>> {
        let extensions =
            dedup_preserving_order(self.iter().flat_map(|m| m.extensions().iter().copied()));

        let sources: Vec<(&str, Option<String>)> = extensions
            .par_iter()
            .map(|ext| {
                let path = dir.join(format!("{base_name}.{ext}"));
                read_source(&path).map(|source| (*ext, source))
            })
            .collect::<Result<_>>()?;

        let mut found = Vec::new();
        for matcher in self.iter() {
            for ext in matcher.extensions() {
                let source = sources
                    .iter()
                    .find(|(e, _)| e == ext)
                    .and_then(|(_, s)| s.as_deref());
                if let Some(source) = source {
                    found.extend(matcher.find(source).into_iter().map(|name| Reference {
                        target: matcher.target(),
                        name,
                    }));
                }
            }
        }
        Ok(dedup_preserving_order(found))
    }
}

impl std::fmt::Debug for MatcherSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.matchers.iter().map(|m| m.name()))
            .finish()
    }
}
