use crate::common::{
    make_temp_dir, read_log_contents, run_with_input, stdout_text, today_input, write_config,
};

#[test]
fn prints_requested_month_after_valid_input() {
    let dir = make_temp_dir("basic");
    let output = run_with_input(&dir, "2023\n2\n");
    assert!(output.status.success());

    let stdout = stdout_text(&output);
    assert!(stdout.contains("      February 2023\n"), "{stdout}");
    assert!(stdout.contains("Mo Tu We Th Fr Sa Su\n"));
    assert!(stdout.contains(" 6  7  8  9 10 11 12\n"));
    assert!(stdout.contains("27 28\n\n"));
    assert!(!stdout.contains("29"));
}

#[test]
fn recovers_from_bad_input_before_rendering() {
    let dir = make_temp_dir("retry");
    let output = run_with_input(&dir, "abc\n-5\n2024\n13\n0\n7.5\n2\n");
    assert!(output.status.success());

    let stdout = stdout_text(&output);
    assert_eq!(stdout.matches("Enter year: ").count(), 3);
    assert_eq!(stdout.matches("Enter month (1-12): ").count(), 4);
    assert!(stdout.contains("Invalid input. Please enter a whole number for the year."));
    assert!(stdout.contains("Year cannot be negative."));
    assert_eq!(stdout.matches("Month must be between 1 and 12.").count(), 2);
    assert!(stdout.contains("Invalid input. Please enter a whole number for the month."));
    assert!(stdout.contains("      February 2024\n"));
    assert!(stdout.contains("26 27 28 29\n"));
}

#[test]
fn piped_output_uses_plain_marker_by_default() {
    let dir = make_temp_dir("today");
    let (input, day) = today_input();
    let output = run_with_input(&dir, &input);
    assert!(output.status.success());

    let raw = String::from_utf8_lossy(&output.stdout);
    assert!(!raw.contains('\x1b'), "piped output should not carry ANSI codes");
    let marker = format!("*{:>2}*", day);
    assert_eq!(raw.matches(&marker).count(), 1, "{raw}");
}

#[test]
fn configured_ansi_emphasis_is_used_when_piped() {
    let dir = make_temp_dir("ansi");
    write_config(&dir, "ansi", "False");
    let (input, _) = today_input();
    let output = run_with_input(&dir, &input);
    assert!(output.status.success());

    let raw = String::from_utf8_lossy(&output.stdout);
    assert_eq!(raw.matches("\x1b[1m\x1b[94m").count(), 1, "{raw}");
    assert!(!raw.contains('*'));
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    let dir = make_temp_dir("badcfg");
    std::fs::write(dir.join("calprint.json"), "{ nope").unwrap();
    let output = run_with_input(&dir, "2024\n1\n");
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using default settings."), "{stderr}");
    assert!(stdout_text(&output).contains("      January 2024\n"));
}

#[test]
fn file_logging_records_rejections_and_render() {
    let dir = make_temp_dir("logs");
    write_config(&dir, "plain", "True");
    let output = run_with_input(&dir, "-1\n1999\n12\n");
    assert!(output.status.success());

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("EMPHASIS = plain"));
    assert!(log.contains("Rejected year input '-1': Year cannot be negative."));
    assert!(log.contains("Rendered calendar for 1999-12"));
}

#[test]
fn no_log_directory_without_file_logging() {
    let dir = make_temp_dir("nologs");
    let output = run_with_input(&dir, "2024\n6\n");
    assert!(output.status.success());
    assert!(!dir.join("logs").exists());
}

#[test]
fn closed_input_exits_with_failure() {
    let dir = make_temp_dir("eof");
    let output = run_with_input(&dir, "2024\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Input closed before a valid month was entered."),
        "{stderr}"
    );
}
