//! CLI tests for `pilosa-sync generate`

use flate2::read::MultiGzDecoder;
use std::io::Read;
use std::process::{Command, Output};
use tempfile::TempDir;

fn pilosa_sync(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pilosa-sync"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to run pilosa-sync")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn test_random_generation_to_stdout() {
    let output = pilosa_sync(&["generate", "random", "42", "10", "5", "3"]);
    assert!(output.status.success(), "{output:?}");

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        let (row, col) = line.split_once(',').expect("row,col");
        assert!((0..10).contains(&row.parse::<i64>().unwrap()));
        assert!((0..5).contains(&col.parse::<i64>().unwrap()));
    }
}

#[test]
fn test_same_seed_same_output() {
    let first = pilosa_sync(&["generate", "random", "7", "1_000", "1_000", "200"]);
    let second = pilosa_sync(&["generate", "random", "7", "1_000", "1_000", "200"]);
    let other = pilosa_sync(&["generate", "random", "8", "1_000", "1_000", "200"]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_ne!(first.stdout, other.stdout);
}

#[test]
fn test_negative_seed_is_accepted() {
    let output = pilosa_sync(&["generate", "random", "-5", "10", "10", "2"]);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output).lines().count(), 2);
}

#[test]
fn test_zero_count_produces_empty_output() {
    let output = pilosa_sync(&["generate", "random", "1", "10", "10", "0"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_sequential_generation() {
    let output = pilosa_sync(&["generate", "sequential", "2", "2", "5"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0,0\n0,1\n1,0\n1,1\n0,0\n");
}

#[test]
fn test_gzip_output_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bits.csv.gz");
    let path_str = path.to_str().unwrap();

    let output = pilosa_sync(&["generate", "--output", path_str, "sequential", "3", "3", "4"]);
    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());

    let mut text = String::new();
    MultiGzDecoder::new(std::fs::File::open(&path).unwrap())
        .read_to_string(&mut text)
        .unwrap();
    assert_eq!(text, "0,0\n0,1\n0,2\n1,0\n");
}

#[test]
fn test_bad_arguments_exit_with_one() {
    let cases: &[&[&str]] = &[
        &["generate", "random", "42", "10", "5"],
        &["generate", "random", "42", "ten", "5", "3"],
        &["generate", "random", "42", "0", "5", "3"],
        &["generate", "random", "42", "10", "5", "-1"],
        &["generate", "zipf", "1", "2", "3"],
        &["generate"],
        &[],
    ];

    for args in cases {
        let output = pilosa_sync(args);
        assert_eq!(output.status.code(), Some(1), "args {args:?}: {output:?}");
        assert!(!output.stderr.is_empty(), "args {args:?} should explain the failure");
    }
}

#[test]
fn test_help_exits_zero() {
    let output = pilosa_sync(&["generate", "--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("STRATEGY"));
}
