//! End-to-end runs of the `ozz` binary.

use std::io::Write;

use pretty_assertions::assert_eq;

use super::common::{run_ozz, run_ozz_with_config};

const TOP_LEVEL_HELP: &str = "echo\n    Print the arguments\n\n\
sum add\n    Add up integers\n\n    <integer>...\n\n\
count wc\n    Count the arguments\n\n";

#[test]
fn test_help_prints_listing_and_exits_zero() {
    let (code, stdout, _) = run_ozz(&["help"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with(TOP_LEVEL_HELP));
    assert!(stdout.contains("text\n    Transform text\n\n    upper\n"));
    assert!(stdout.ends_with("    path\n        Print the configuration file path\n\n"));
}

#[test]
fn test_echo_passes_arguments_unchanged() {
    let (code, stdout, _) = run_ozz(&["echo", "a  b", "--c", "-v"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "a  b --c -v\n");
}

#[test]
fn test_alias_dispatch() {
    let (code, stdout, _) = run_ozz(&["add", "2", "40"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "42\n");

    let (code, stdout, _) = run_ozz(&["wc", "a", "b", "c"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "3\n");
}

#[test]
fn test_nested_dispatch() {
    let (code, stdout, _) = run_ozz(&["text", "rev", "one", "two"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "two one\n");

    let (code, stdout, _) = run_ozz(&["text", "join", "-", "a", "b"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "a-b\n");
}

#[test]
fn test_handler_failure_exits_one() {
    let (code, stdout, stderr) = run_ozz(&["sum", "1", "two"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Not an integer: two"));
}

#[test]
fn test_unknown_command_exits_two() {
    let (code, stdout, stderr) = run_ozz(&["frobnicate"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Unknown command: frobnicate"));
}

#[test]
fn test_no_command_prints_help() {
    let (code, stdout, _) = run_ozz(&[]);
    assert_eq!(code, 2);
    assert!(stdout.starts_with(TOP_LEVEL_HELP));
}

#[test]
fn test_config_file_changes_help_keyword() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[help]\nkeyword = \"usage\"").unwrap();

    let (code, stdout, _) = run_ozz_with_config(file.path(), &["usage"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with(TOP_LEVEL_HELP));

    let (code, _, stderr) = run_ozz_with_config(file.path(), &["help"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Run `ozz usage`"));

    let (code, stdout, _) = run_ozz_with_config(file.path(), &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("keyword = \"usage\""));
}

#[test]
fn test_config_help_keyword_reaches_nested_groups() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[help]\nkeyword = \"usage\"").unwrap();

    let (code, stdout, _) = run_ozz_with_config(file.path(), &["text", "usage"]);
    assert_eq!(code, 1);
    assert!(stdout.starts_with("upper\n    Print the arguments in upper case\n\n"));

    let (code, stdout, _) = run_ozz_with_config(file.path(), &["text", "help"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
}

#[test]
fn test_config_help_success_reaches_nested_groups() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[help]\nkeyword = \"usage\"\nhelp_is_success = true").unwrap();

    let (code, stdout, _) = run_ozz_with_config(file.path(), &["config", "usage"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("show\n"));
}

#[test]
fn test_sum_overflow_fails_cleanly() {
    let (code, stdout, stderr) = run_ozz(&["sum", "9223372036854775807", "1"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("overflows"));
}

#[test]
fn test_invalid_config_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[help]\nkeyword = \"\"").unwrap();

    let (code, stdout, stderr) = run_ozz_with_config(file.path(), &["echo", "x"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("help.keyword"));
}
