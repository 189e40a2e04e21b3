//! End-to-end behaviour of the `intconv` binary.

use crate::common::{intconv, run_intconv, stdout_lines};

#[test]
fn no_arguments_prints_two_lines_and_succeeds() {
    let output = run_intconv(&[]);
    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(stdout_lines(&output), ["constructor called", "1"]);
}

#[test]
fn arguments_are_converted_after_the_demo() {
    let output = run_intconv(&["-42", "+7", "-2147483648"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        ["constructor called", "1", "-42", "7", "-2147483648"]
    );
}

#[test]
fn malformed_argument_exits_non_zero() {
    let output = run_intconv(&["abc"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to convert argument 1"), "{stderr}");
    assert!(stderr.contains("unexpected character 'a' at byte 0"), "{stderr}");
}

#[test]
fn overflowing_argument_exits_non_zero() {
    let output = run_intconv(&["2147483648"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not fit in i32"), "{stderr}");
    // Demo lines are written before the failing argument.
    assert_eq!(stdout_lines(&output), ["constructor called", "1"]);
}

#[test]
fn logs_never_reach_stdout() {
    let output = intconv()
        .env("INTCONV_LOG", "trace")
        .arg("5")
        .output()
        .expect("failed to spawn intconv");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["constructor called", "1", "5"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("starting demo"), "{stderr}");
}

#[test]
fn unknown_log_level_is_reported_and_ignored() {
    let output = intconv()
        .env("INTCONV_LOG", "chatty")
        .output()
        .expect("failed to spawn intconv");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["constructor called", "1"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown INTCONV_LOG value"), "{stderr}");
}

#[test]
fn rust_log_overrides_intconv_log() {
    let output = intconv()
        .env("RUST_LOG", "off")
        .env("INTCONV_LOG", "trace")
        .output()
        .expect("failed to spawn intconv");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["constructor called", "1"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("starting demo"), "{stderr}");
}

#[test]
fn blank_rust_log_falls_back_to_intconv_log() {
    let output = intconv()
        .env("RUST_LOG", "")
        .env("INTCONV_LOG", "chatty")
        .output()
        .expect("failed to spawn intconv");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown INTCONV_LOG value"), "{stderr}");
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_exits_non_zero() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = intconv()
        .arg(OsStr::from_bytes(b"\xff1"))
        .output()
        .expect("failed to spawn intconv");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("argument is not valid UTF-8"), "{stderr}");
}

#[cfg(unix)]
#[test]
fn non_utf8_log_level_is_reported_and_ignored() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = intconv()
        .env("INTCONV_LOG", OsStr::from_bytes(b"\xffdebug"))
        .output()
        .expect("failed to spawn intconv");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["constructor called", "1"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Ignoring INTCONV_LOG"), "{stderr}");
}
