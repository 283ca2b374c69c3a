#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn dcwproto(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dcwproto"))
        .args(args)
        .env_remove("DCWPROTO_LOG_LEVEL")
        .env_remove("DCWPROTO_LOG_FORMAT")
        .output()
        .expect("dcwproto should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn encode_join_prints_wire_hex() {
    let output = dcwproto(&[
        "encode",
        "sta-join",
        "--mac",
        "aa:bb:cc:dd:ee:ff",
        "--mac",
        "11-22-33-44-55-66",
        "--format",
        "json",
    ]);

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(stdout(&output).trim()).expect("stdout should be JSON");
    assert_eq!(value["hex"], "0102AABBCCDDEEFF112233445566");
    assert_eq!(value["length"], 14);
    assert_eq!(value["tag"], "0x01");
}

#[test]
fn encode_raw_writes_bytes() {
    let output = dcwproto(&["encode", "ap-quit", "--format", "raw"]);
    assert!(output.status.success());
    assert_eq!(output.stdout, vec![0x99]);
}

#[test]
fn encode_without_entries_is_usage_error() {
    let output = dcwproto(&["encode", "ap-reject-sta"]);
    assert_eq!(output.status.code(), Some(64));
    assert!(String::from_utf8_lossy(&output.stderr).contains("at least one entry"));
}

#[test]
fn decode_accept_as_json() {
    let output = dcwproto(&["decode", "21 02 03 6e 65 74 02 6f 6b", "--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(stdout(&output).trim()).expect("stdout should be JSON");
    assert_eq!(value["kind"], "AP Accept Station");
    assert_eq!(value["entry_count"], 2);
    assert_eq!(value["ssids"], serde_json::json!(["net", "ok"]));
}

#[test]
fn decode_unknown_tag_is_data_invalid() {
    let output = dcwproto(&["decode", "7f"]);
    assert_eq!(output.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown message tag 0x7F"));
}

#[test]
fn decode_strict_rejects_empty_list() {
    let lenient = dcwproto(&["decode", "2200", "--format", "json"]);
    assert!(lenient.status.success());

    let strict = dcwproto(&["decode", "2200", "--strict"]);
    assert_eq!(strict.status.code(), Some(60));
}

#[test]
fn decode_reads_hex_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dcwproto"))
        .args(["decode", "--format", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("dcwproto should spawn");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"41\n")
        .expect("stdin write should succeed");

    let output = child.wait_with_output().expect("dcwproto should exit");
    assert!(output.status.success());
    assert!(stdout(&output).contains("\"tag\":\"0x41\""));
}

#[test]
fn decode_reads_raw_file() {
    let path = std::env::temp_dir().join(format!("dcwproto-cli-{}.bin", std::process::id()));
    std::fs::write(&path, [0x12u8, 0x01, 1, 2, 3, 4, 5, 6]).expect("temp file should be writable");

    let output = dcwproto(&[
        "decode",
        "--file",
        path.to_str().expect("temp path should be UTF-8"),
        "--format",
        "json",
    ]);
    let _ = std::fs::remove_file(&path);

    assert!(output.status.success());
    assert!(stdout(&output).contains("01-02-03-04-05-06"));
}

#[test]
fn dump_quit() {
    let output = dcwproto(&["dump", "99"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "DCW Message Dump:\n  Type: AP Quit\n");
}

#[test]
fn dump_prints_text_regardless_of_format() {
    let output = dcwproto(&["dump", "99", "--format", "json"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "DCW Message Dump:\n  Type: AP Quit\n");
}

#[test]
fn dump_lists_bonded_channels() {
    let output = dcwproto(&["dump", "1101001122334455036e6574"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Bonded Data Channels:"));
    assert!(text.contains("00-11-22-33-44-55 -> 'net'"));
}

#[test]
fn version_extended_lists_tags() {
    let output = dcwproto(&["version", "--extended"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("name: dcwproto"));
    assert!(text.contains("max_message_size: 1250"));
    assert!(text.contains("0x99"));
}
