use elmkit_util::errors::ElmkitError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = ElmkitError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_manifest_error_display() {
    let err = ElmkitError::Manifest {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Manifest error: bad syntax");
}

#[test]
fn test_no_entrypoints_error_display() {
    let err = ElmkitError::NoEntrypoints {
        message: "0 files matched".to_string(),
    };
    assert_eq!(err.to_string(), "No entrypoints found: 0 files matched");
}

#[test]
fn test_version_constraint_error_display() {
    let err = ElmkitError::VersionConstraint {
        message: "no match".to_string(),
    };
    assert_eq!(err.to_string(), "Version constraint error: no match");
}

#[test]
fn test_generic_error_display() {
    let err = ElmkitError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: ElmkitError = io_err.into();
    matches!(err, ElmkitError::Io(_));
}
