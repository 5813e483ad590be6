use std::fs;

use crate::common::{make_temp_dir, run_in, stdout_of, write_config};

#[test]
fn emits_raw_sequence_without_newline() {
    let dir = make_temp_dir("cli");
    let output = run_in(&dir, &["down", "5"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\x1B[5B");
}

#[test]
fn escaped_flag_prints_readable_form() {
    let dir = make_temp_dir("cli");
    let output = run_in(&dir, &["--escaped", "move-to", "2", "3"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\\e[4;3H\n");
}

#[test]
fn negative_offsets_reach_the_move_command() {
    let dir = make_temp_dir("cli");
    let output = run_in(&dir, &["move", "-2", "-3"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\x1B[2D\x1B[3B");
}

#[test]
fn save_follows_configured_platform() {
    let dir = make_temp_dir("cli");
    write_config(&dir, "windows", "False");
    assert_eq!(stdout_of(&run_in(&dir, &["save"])), "\x1B[s");

    write_config(&dir, "ansi", "False");
    assert_eq!(stdout_of(&run_in(&dir, &["restore"])), "\x1B8");
}

#[test]
fn half_coordinate_fails_with_message() {
    let dir = make_temp_dir("cli");
    let output = run_in(&dir, &["move-to", "4"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid argument"), "stderr was: {stderr}");
}

#[test]
fn oversized_clear_lines_count_is_rejected() {
    let dir = make_temp_dir("cli");
    let output = run_in(&dir, &["clear-lines", "4294967295"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exceeds the maximum"), "stderr was: {stderr}");
}

#[test]
fn failure_is_printed_once_and_journaled() {
    let dir = make_temp_dir("cli");
    write_config(&dir, "auto", "True");
    let output = run_in(&dir, &["move-to", "4"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Invalid argument").count(), 1, "stderr was: {stderr}");

    let logs: Vec<_> = fs::read_dir(dir.join("logs"))
        .expect("log dir should exist")
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(logs.len(), 1);
    let contents = fs::read_to_string(logs[0].path()).unwrap();
    assert!(contents.contains("ERROR Invalid argument"));
}

#[test]
fn unknown_command_fails() {
    let dir = make_temp_dir("cli");
    let output = run_in(&dir, &["teleport"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown command"));
}

#[test]
fn help_lists_commands() {
    let dir = make_temp_dir("cli");
    let output = run_in(&dir, &["--help"]);
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("clear-lines [N] [up|down]"));
    assert!(stdout.contains("move DX DY"));
}

#[test]
fn config_set_persists_and_changes_output() {
    let dir = make_temp_dir("cli");
    let output = run_in(&dir, &["config", "set", "ESCAPED_OUTPUT", "true"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("ESCAPED_OUTPUT changed: False -> True"));
    assert!(dir.join("tty-cursor.json").exists());

    assert_eq!(stdout_of(&run_in(&dir, &["clear-char"])), "\\e[X\n");

    let listing = stdout_of(&run_in(&dir, &["config"]));
    assert!(listing.contains("ESCAPED_OUTPUT = True"));
}

#[test]
fn file_logging_records_emitted_sequences() {
    let dir = make_temp_dir("cli");
    write_config(&dir, "auto", "True");
    let output = run_in(&dir, &["clear-lines", "2", "down"]);
    assert!(output.status.success());

    let logs: Vec<_> = fs::read_dir(dir.join("logs"))
        .expect("log dir should exist")
        .filter_map(|e| e.ok())
        .collect();
    assert_eq!(logs.len(), 1);
    let contents = fs::read_to_string(logs[0].path()).unwrap();
    assert!(contents.contains("INFO"));
    assert!(contents.contains("\\e[2K\\e[1G\\e[1B\\e[2K\\e[1G"));
}

#[test]
fn file_logging_disabled_by_default() {
    let dir = make_temp_dir("cli");
    let output = run_in(&dir, &["hide"]);
    assert!(output.status.success());
    assert!(!dir.join("logs").exists());
}
