use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;

#[test]
fn converts_a_directory() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("sample1.fq"), "@x\nACGTN\n+\nIIIII\n").unwrap();
    let out_path = output.path().join("out.fasta");

    Command::cargo_bin("fq2fasta")
        .unwrap()
        .arg("-d")
        .arg(input.path())
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&out_path).unwrap(),
        ">sample1 Low Quality Positions: 1\nACGTN\n"
    );
}

#[test]
fn missing_output_option_is_a_usage_error() {
    let input = tempfile::tempdir().unwrap();

    Command::cargo_bin("fq2fasta")
        .unwrap()
        .arg("-d")
        .arg(input.path())
        .assert()
        .failure()
        .code(2)
        .stderr(contains("-o <FILE>"));
}

#[test]
fn missing_directory_option_is_a_usage_error() {
    Command::cargo_bin("fq2fasta")
        .unwrap()
        .args(&["-o", "out.fasta"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("-d <DIR>"));
}

#[test]
fn malformed_input_fails() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("bad.fq"), "@r1\nACGT\n+\nIII\n").unwrap();
    let out_path = output.path().join("out.fasta");

    Command::cargo_bin("fq2fasta")
        .unwrap()
        .arg("-d")
        .arg(input.path())
        .arg("-o")
        .arg(&out_path)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("UnequalLengths"));

    assert!(!out_path.exists());
}
