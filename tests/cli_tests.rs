use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_castagnoli-frame"))
        .args(args)
        .env_remove("CRC_FRAME_READ_BUFFER")
        .output()
        .expect("Failed to execute process")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_crc_ascii_and_hex() {
    let output = run(&["crc", "hiiamtom"]);
    assert!(output.status.success(), "crc failed: {:?}", output);
    assert_eq!(stdout(&output), "0x3c58999e");

    let output = run(&["--hex", "crc", "686969616d746f6d", "--reference"]);
    assert!(output.status.success(), "crc --reference failed: {:?}", output);
    assert_eq!(stdout(&output), "0x3c58999e");
}

#[test]
fn test_crc_rejects_wrong_length() {
    let output = run(&["crc", "hello"]);
    assert!(!output.status.success(), "Expected failure on short message");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("exactly 8 bytes"),
        "Unexpected error message: {:?}",
        stderr
    );
}

#[test]
fn test_seal_and_validate() {
    let output = run(&["seal", "hiiamtom"]);
    assert!(output.status.success(), "seal failed: {:?}", output);
    let frame = stdout(&output);
    assert_eq!(frame, "686969616d746f6d9e99583c");

    let output = run(&["validate", &frame]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "VALID");

    let output = run(&["validate", "676969616d746f6d9e99583c"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "INVALID");
}

#[test]
fn test_table_dump() {
    let output = run(&["table"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 32);
    assert!(lines[0].starts_with("0x00: 0x00000000 0x1edc6f41"), "{}", lines[0]);
}

#[test]
fn test_seal_file_and_verify_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("messages.bin");
    let output_path = dir.path().join("frames.bin");

    fs::write(&input, b"hiiamtom12345678").unwrap();

    let output = run(&[
        "seal-file",
        input.to_str().unwrap(),
        output_path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "seal-file failed: {:?}", output);
    assert_eq!(fs::read(&output_path).unwrap().len(), 24);

    let output = run(&["verify-file", output_path.to_str().unwrap()]);
    assert!(output.status.success(), "verify-file failed: {:?}", output);
    assert!(stdout(&output).contains("INVALID FRAMES:           0"));

    // Corrupt the second frame
    let mut frames = fs::read(&output_path).unwrap();
    frames[14] ^= 0x01;
    fs::write(&output_path, &frames).unwrap();

    let output = run(&["verify-file", output_path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("INVALID INDICES:          1"));
}

#[test]
fn test_seal_file_rejects_partial_message() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("messages.bin");
    let output_path = dir.path().join("frames.bin");

    fs::write(&input, b"hiiamtom123").unwrap();

    let output = run(&[
        "seal-file",
        input.to_str().unwrap(),
        output_path.to_str().unwrap(),
    ]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid message length"), "{:?}", stderr);
}

#[test]
fn test_demo_reports_every_scenario() {
    let output = run(&["demo"]);
    assert!(output.status.success(), "demo failed: {:?}", output);

    let text = stdout(&output);
    assert!(text.contains("0x3c58999e"));
    assert_eq!(text.matches("INVALID").count(), 3);
    assert_eq!(text.lines().filter(|l| l.ends_with(" VALID")).count(), 2);
}
