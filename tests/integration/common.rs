use chrono::{Datelike, Local};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> PathBuf {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_calprint"));
    if raw.is_absolute() {
        return raw;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(raw)
}

/// Stdin lines that request the current month, plus today's day number.
pub fn today_input() -> (String, u32) {
    let today = Local::now().date_naive();
    (format!("{}\n{}\n", today.year(), today.month()), today.day())
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "calprint-{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn write_config(dir: &Path, emphasis: &str, file_logging: &str) {
    let cfg = format!(
        r#"{{
      "emphasis": {{ "value": "{emphasis}", "description": "highlight" }},
      "file_logging_enabled": {{ "value": "{file_logging}", "description": "file logging" }},
      "log_dir": {{ "value": "logs", "description": "logs" }}
    }}"#
    );
    fs::write(dir.join("calprint.json"), cfg).unwrap();
}

pub fn run_with_input(dir: &Path, input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for nc in chars.by_ref() {
                if nc.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

pub fn stdout_text(output: &Output) -> String {
    strip_ansi(&String::from_utf8_lossy(&output.stdout))
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let mut entries = fs::read_dir(dir.join("logs")).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
