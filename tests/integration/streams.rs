//! Behaviour that depends on what the standard streams are attached to.
#![cfg(target_os = "linux")]

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::process::{Command, Stdio};

use crate::common::{binary_path, make_temp_dir, today_input};

#[test]
fn stdout_write_failure_exits_with_code_one() {
    let dir = make_temp_dir("full");
    let full = OpenOptions::new().write(true).open("/dev/full").unwrap();
    let mut child = Command::new(binary_path())
        .current_dir(&dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::from(full))
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"2024\n6\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1), "{stderr}");
    assert!(stderr.contains("I/O error"), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}

#[test]
fn redirected_stdout_gets_plain_marker_while_stderr_is_a_terminal() {
    let dir = make_temp_dir("redirect");
    let (input, day) = today_input();
    let input_path = dir.join("input.txt");
    let out_path = dir.join("cal.txt");
    fs::write(&input_path, input).unwrap();

    // `script` gives the inner shell a pty, so only stderr stays a terminal.
    let inner = format!(
        "'{}' < '{}' > '{}'",
        binary_path().display(),
        input_path.display(),
        out_path.display()
    );
    let Ok(mut child) = Command::new("script")
        .args(["-qec", &inner, "/dev/null"])
        .current_dir(&dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        eprintln!("skipping: `script` is not available");
        return;
    };
    // Keep script's stdin open until the inner command is done.
    let _stdin = child.stdin.take();
    let status = child.wait().unwrap();
    assert!(status.success());

    let written = fs::read_to_string(&out_path).unwrap();
    assert!(!written.contains('\x1b'), "{written:?}");
    assert_eq!(written.matches(&format!("*{day:>2}*")).count(), 1, "{written}");
}
