//! Static resource validation
//!
//! Every static resource referenced in a closure must have exactly one
//! payload file (`<name>` or `<name>.<ext>`) and a `<name>.resource-meta.xml`
//! descriptor in the project's static resource directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use rayon::prelude::*;

use crate::error::{Result, file_read_failed, missing_descriptor, missing_resource};

/// Suffix of static resource descriptor files
pub const DESCRIPTOR_SUFFIX: &str = ".resource-meta.xml";

/// A validated static resource ready for packaging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticResource {
    pub name: String,
    pub payload: PathBuf,
    pub descriptor: PathBuf,
}

/// Descriptor file name for a resource
pub fn descriptor_name(resource: &str) -> String {
    format!("{resource}{DESCRIPTOR_SUFFIX}")
}

/// Sorted file names of the resource directory; missing directory yields none
fn list_files(dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(file_read_failed(dir, e)),
    };
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| file_read_failed(dir, e))?;
        if entry.file_type().is_ok_and(|ft| ft.is_file()) {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Payload file name for `resource` among `files`, excluding descriptors
pub fn find_payload<'a>(files: &'a [String], resource: &str) -> Option<&'a str> {
    let dotted = format!("{resource}.");
    files
        .iter()
        .map(String::as_str)
        .filter(|file| !file.ends_with(DESCRIPTOR_SUFFIX))
        .find(|file| *file == resource || file.starts_with(&dotted))
}

/// Check every referenced resource concurrently
///
/// Any missing payload or descriptor fails the whole validation. The result
/// keeps the order of `names`.
pub fn validate(dir: &Path, names: &[String]) -> Result<Vec<StaticResource>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }
    let files = list_files(dir)?;

    let resources = names
        .par_iter()
        .map(|name| {
            let payload = find_payload(&files, name).ok_or_else(|| missing_resource(name.clone()))?;
            let descriptor = descriptor_name(name);
            if !files.contains(&descriptor) {
                return Err(missing_descriptor(name.clone()));
            }
            Ok(StaticResource {
                name: name.clone(),
                payload: dir.join(payload),
                descriptor: dir.join(descriptor),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Validated {} static resources", resources.len());
    Ok(resources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use tempfile::TempDir;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_find_payload_exact_or_dotted() {
        let files = names(&["chartjs.resource-meta.xml", "chartjs.zip", "chartjsExtra.js"]);
        assert_eq!(find_payload(&files, "chartjs"), Some("chartjs.zip"));

        let files = names(&["logo", "logo.resource-meta.xml"]);
        assert_eq!(find_payload(&files, "logo"), Some("logo"));

        let files = names(&["logoLarge.png", "logo.resource-meta.xml"]);
        assert_eq!(find_payload(&files, "logo"), None);
    }

    #[test]
    fn test_validate_ok() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        std::fs::write(temp.path().join("chartjs.zip"), "zip").unwrap();
        std::fs::write(temp.path().join("chartjs.resource-meta.xml"), "<xml/>").unwrap();

        let resources = validate(temp.path(), &names(&["chartjs"])).unwrap();
        assert_eq!(
            resources,
            vec![StaticResource {
                name: "chartjs".to_string(),
                payload: temp.path().join("chartjs.zip"),
                descriptor: temp.path().join("chartjs.resource-meta.xml"),
            }]
        );
    }

    #[test]
    fn test_missing_descriptor_names_resource() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        std::fs::write(temp.path().join("chartjs.zip"), "zip").unwrap();

        let err = validate(temp.path(), &names(&["chartjs"])).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::MissingResourceDescriptor { ref name } if name == "chartjs"
        ));
    }

    #[test]
    fn test_missing_payload_names_resource() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        std::fs::write(temp.path().join("logo.resource-meta.xml"), "<xml/>").unwrap();

        let err = validate(temp.path(), &names(&["logo"])).unwrap_err();
        assert!(matches!(err, RegistryError::MissingResource { ref name } if name == "logo"));
    }

    #[test]
    fn test_missing_directory_reports_missing_resource() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        let err = validate(&temp.path().join("staticresources"), &names(&["logo"])).unwrap_err();
        assert!(matches!(err, RegistryError::MissingResource { .. }));
    }

    #[test]
    fn test_no_references_skips_directory() {
        assert!(validate(Path::new("/does/not/matter"), &[]).unwrap().is_empty());
    }
}
