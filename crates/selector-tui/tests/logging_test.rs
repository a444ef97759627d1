//! Logging setup. Installs the global subscriber, so it runs in its own
//! test binary.

use selector_tui::logging::{self, LoggingError};

#[test]
fn logs_go_to_the_file_only_once_installed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("selector.log");

    assert!(logging::init("info", None).is_ok());
    assert!(!path.exists());

    logging::init("info", Some(&path)).expect("install subscriber");
    tracing::error!(option = "red", "picked");

    let contents = std::fs::read_to_string(&path).expect("read log");
    assert!(contents.contains("picked"));
    assert!(contents.contains("option=\"red\""));
    assert!(!contents.contains('\x1b'));

    let again = logging::init("info", Some(&path));
    assert!(matches!(again, Err(LoggingError::Init(_))));
}

#[test]
fn unopenable_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("selector.log");

    let err = logging::init("info", Some(&path));
    assert!(matches!(err, Err(LoggingError::Io(_))));
}
