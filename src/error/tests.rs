//! Error type tests
//!
//! Tests for RegistryError enum and its conversions.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::Path;

use miette::Diagnostic;

use super::*;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_code() {
    let err = forbidden_file("/p/lwc/a/run.sh", "sh");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("sf_registry::guard::forbidden_file".to_string())
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: RegistryError = io_err.into();
    assert!(matches!(err, RegistryError::IoError { .. }));
}

#[test]
fn test_json_error_conversion() {
    let parse_result: std::result::Result<serde_json::Value, _> =
        serde_json::from_str("invalid json content");
    let err: RegistryError = parse_result.unwrap_err().into();
    assert!(matches!(err, RegistryError::ConfigParseFailed { .. }));
}

#[test]
fn test_zip_error_conversion() {
    let err: RegistryError = zip::result::ZipError::FileNotFound.into();
    assert!(matches!(err, RegistryError::ArchiveFailed { .. }));
}

#[test]
fn test_auth_error_is_transparent() {
    let err: RegistryError = AuthError::TokenExpired {
        message: "jwt expired".to_string(),
    }
    .into();
    assert_eq!(err.to_string(), "Registry token expired: jwt expired");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("sf_registry::auth::token_expired".to_string())
    );
    assert!(matches!(
        err,
        RegistryError::Auth(AuthError::TokenExpired { .. })
    ));
}

test_error_contains!(
    test_forbidden_file_names_path,
    forbidden_file("/p/lwc/a/run.sh", "sh"),
    "/p/lwc/a/run.sh",
    ".sh"
);

test_error_contains!(
    test_missing_resource_names_resource,
    missing_resource("chartjs"),
    "chartjs",
    "no payload"
);

test_error_contains!(
    test_missing_descriptor_names_resource,
    missing_descriptor("chartjs"),
    "chartjs",
    ".resource-meta.xml"
);

test_error_contains!(
    test_artifact_not_found,
    artifact_not_found(ArtifactKind::Class, "Util"),
    "class",
    "Util"
);

test_error_contains!(
    test_unresolved_directory,
    unresolved_directory("Util"),
    "Util"
);

test_error_contains!(
    test_scan_failed,
    scan_failed("/p/force-app", "permission denied"),
    "/p/force-app",
    "permission denied"
);

test_error_contains!(
    test_unrecognized_artifact,
    unrecognized_artifact("/tmp/x/readme"),
    "/tmp/x/readme"
);

test_error_contains!(test_no_token, AuthError::NoToken, "no registry token");

test_error_contains!(
    test_version_not_found,
    version_not_found("myCard", "9.9.9"),
    "9.9.9",
    "myCard"
);

test_error_contains!(
    test_catalog_empty,
    catalog_empty(ArtifactKind::Component),
    "component"
);

test_error_contains!(
    test_file_read_failed,
    file_read_failed(Path::new("/a/b.txt"), "denied"),
    "/a/b.txt"
);

test_error_contains!(
    test_config_invalid,
    config_invalid("version must be x.y.z"),
    "Invalid configuration"
);
