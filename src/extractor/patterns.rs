//! Built-in reference shapes
//!
//! | matcher            | files        | example                                            |
//! |--------------------|--------------|----------------------------------------------------|
//! | `markup-component` | `.html`      | `<c-badge>`                                        |
//! | `import-component` | `.ts`, `.js` | `import Badge from 'c/badge'`                      |
//! | `import-class`     | `.ts`, `.js` | `import load from '@salesforce/apex/Repo.load'`    |
//! | `import-resource`  | `.ts`, `.js` | `import logo from '@salesforce/resourceUrl/logo'`  |
//! | `class-mention`    | `.cls`       | any whole-word occurrence of a known class name    |
//!
//! `class-mention` is a textual heuristic: a class name inside a string literal
//! or comment still counts as a reference.

use regex::Regex;

use super::{MatcherSet, ReferenceMatcher, ReferenceTarget, dedup_preserving_order};
use crate::error::{Result, config_invalid};
use crate::scanner::CLASS_EXTENSION;

const MARKUP: &[&str] = &["html"];
const SCRIPT: &[&str] = &["ts", "js"];
const CLASS_SOURCE: &[&str] = &[CLASS_EXTENSION];

const MARKUP_COMPONENT: &str = r"<c-([a-zA-Z0-9_]+)[\s>]";
const IMPORT_COMPONENT: &str = r#"import\s+\w+\s+from\s+["']c/([a-zA-Z0-9_]+)["']"#;
const IMPORT_CLASS: &str = r#"import\s+\w+\s+from\s+['"]@salesforce/apex/([a-zA-Z0-9_]+)\.[^'"]+['"]"#;
const IMPORT_RESOURCE: &str =
    r#"import\s+\w+\s+from\s+["']@salesforce/resourceUrl/([a-zA-Z0-9_]+)["']"#;

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| config_invalid(format!("invalid reference pattern '{name}': {e}")))
}

/// A matcher whose first capture group is the referenced name
#[derive(Debug, Clone)]
pub struct CapturePattern {
    name: &'static str,
    target: ReferenceTarget,
    extensions: &'static [&'static str],
    regex: Regex,
}

impl CapturePattern {
    pub fn new(
        name: &'static str,
        target: ReferenceTarget,
        extensions: &'static [&'static str],
        pattern: &str,
    ) -> Result<Self> {
        Ok(Self {
            name,
            target,
            extensions,
            regex: compile(name, pattern)?,
        })
    }
}

impl ReferenceMatcher for CapturePattern {
    fn name(&self) -> &str {
        self.name
    }

    fn target(&self) -> ReferenceTarget {
        self.target
    }

    fn extensions(&self) -> &[&'static str] {
        self.extensions
    }

    fn find(&self, source: &str) -> Vec<String> {
        dedup_preserving_order(
            self.regex
                .captures_iter(source)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().to_string()),
        )
    }
}

/// Whole-word mentions of any known class name
///
/// The word boundary keeps `Foo` from matching inside `FooBar`.
#[derive(Debug, Clone)]
pub struct ClassMentionMatcher {
    classes: Vec<(String, Regex)>,
}

impl ClassMentionMatcher {
    pub fn new(known_classes: &[String]) -> Result<Self> {
        let classes = known_classes
            .iter()
            .map(|name| {
                let pattern = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(name));
                compile("class-mention", &pattern).map(|re| (name.clone(), re))
            })
            .collect::<Result<_>>()?;
        Ok(Self { classes })
    }
}

impl ReferenceMatcher for ClassMentionMatcher {
    fn name(&self) -> &str {
        "class-mention"
    }

    fn target(&self) -> ReferenceTarget {
        ReferenceTarget::Class
    }

    fn extensions(&self) -> &[&'static str] {
        CLASS_SOURCE
    }

    fn find(&self, source: &str) -> Vec<String> {
        self.classes
            .iter()
            .filter(|(_, re)| re.is_match(source))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// Matchers applied to a component's markup and script files
pub fn component_matchers() -> Result<MatcherSet> {
    Ok(MatcherSet::new()
        .with(CapturePattern::new(
            "markup-component",
            ReferenceTarget::Component,
            MARKUP,
            MARKUP_COMPONENT,
        )?)
        .with(CapturePattern::new(
            "import-component",
            ReferenceTarget::Component,
            SCRIPT,
            IMPORT_COMPONENT,
        )?)
        .with(CapturePattern::new(
            "import-class",
            ReferenceTarget::Class,
            SCRIPT,
            IMPORT_CLASS,
        )?)
        .with(CapturePattern::new(
            "import-resource",
            ReferenceTarget::StaticResource,
            SCRIPT,
            IMPORT_RESOURCE,
        )?))
}

/// Matchers applied to a class source file
pub fn class_matchers(known_classes: &[String]) -> Result<MatcherSet> {
    Ok(MatcherSet::new().with(ClassMentionMatcher::new(known_classes)?))
}
