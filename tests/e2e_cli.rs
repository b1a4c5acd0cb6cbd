//! Black-box test of the `pp` binary itself: wires `--input-file` and
//! `--output-file` together and checks the process exit code and the
//! emitted bytes by spawning the built binary with
//! `env!("CARGO_BIN_EXE_...")`.

use std::fs;
use std::process::Command;

fn pp_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pp"))
}

#[test]
fn reads_input_file_and_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("words.txt");
    let output_path = dir.path().join("out.txt");
    fs::write(&input_path, "a\nb\nc\n").unwrap();

    let status = pp_cmd()
        .arg("--input-file")
        .arg(&input_path)
        .arg("--output-file")
        .arg(&output_path)
        .arg("--pw-min")
        .arg("2")
        .arg("--pw-max")
        .arg("2")
        .status()
        .unwrap();

    assert!(status.success());
    let out = fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec!["aa", "ba", "ca", "ab", "bb", "cb", "ac", "bc", "cc"]
    );
}

#[test]
fn keyspace_flag_prints_total_and_exits_without_candidates() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("words.txt");
    fs::write(&input_path, "ab\ncd\n").unwrap();

    let output = pp_cmd()
        .arg("--input-file")
        .arg(&input_path)
        .arg("--keyspace")
        .arg("--pw-min")
        .arg("2")
        .arg("--pw-max")
        .arg("2")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "2\n");
}

#[test]
fn invalid_pw_range_exits_nonzero_with_a_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("words.txt");
    fs::write(&input_path, "a\n").unwrap();

    let output = pp_cmd()
        .arg("--input-file")
        .arg(&input_path)
        .arg("--pw-min")
        .arg("5")
        .arg("--pw-max")
        .arg("2")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("--pw-min"));
    assert!(stderr.contains("--pw-max"));
}
