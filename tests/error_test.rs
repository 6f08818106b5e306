use std::io;
use std::path::PathBuf;

use app_init::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ManifestRead {
        path: PathBuf::from("app/package.json"),
        message: "expected value".to_string(),
    };
    assert_eq!(err.to_string(), "Failed to read manifest 'app/package.json': expected value.");

    let err = Error::DefaultsError("invalid defaults".to_string());
    assert_eq!(err.to_string(), "Defaults error: invalid defaults.");
}
