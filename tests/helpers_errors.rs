use std::io;
use std::path::Path;

use batch_rename::fs_ops::{describe_io_error, io_error_with_help, io_error_with_help_io};

#[test]
fn notfound_fallback_hint_includes_path() {
    let p = Path::new("/nonexistent/history.json");
    let f = io_error_with_help("read history", p);
    let err = f(io::Error::from(io::ErrorKind::NotFound));
    let msg = format!("{}", err);
    assert!(msg.contains("read history"));
    assert!(msg.contains(p.to_string_lossy().as_ref()));
    assert!(msg.contains("path not found"));
}

#[test]
fn io_variant_keeps_error_kind() {
    let p = Path::new("/tmp/x");
    let f = io_error_with_help_io("rename", p);
    let err = f(io::Error::from(io::ErrorKind::PermissionDenied));
    assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    assert!(err.to_string().contains("permission denied"));
}

#[cfg(unix)]
#[test]
fn exdev_hint_present() {
    let msg = describe_io_error(&io::Error::from_raw_os_error(libc::EXDEV));
    assert!(msg.contains("cross-filesystem"), "msg was: {}", msg);
    assert!(msg.contains("os code"), "should include os code in message");
}

#[cfg(unix)]
#[test]
fn eexist_and_enotempty_hint_target_exists() {
    for code in [libc::EEXIST, libc::ENOTEMPTY] {
        let msg = describe_io_error(&io::Error::from_raw_os_error(code));
        assert!(msg.contains("target already exists"), "msg was: {}", msg);
    }
}

#[cfg(unix)]
#[test]
fn erofs_hint_present() {
    let msg = describe_io_error(&io::Error::from_raw_os_error(libc::EROFS));
    assert!(msg.contains("read-only filesystem"), "msg was: {}", msg);
}

#[test]
fn unknown_kind_has_no_hint() {
    let msg = describe_io_error(&io::Error::other("odd failure"));
    assert_eq!(msg, "odd failure");
}
