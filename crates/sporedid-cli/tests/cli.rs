use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

const MAINNET_CONTENT: &str =
    "0x0001b33e31e5b6085b23c542081743d36fec5bfc4744e46a6868000000006d6f626974782e626974";

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("sporedid"))
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> Value {
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    serde_json::from_str(&stdout).expect("valid json")
}

#[test]
fn help_supports_decode_and_parse() {
    cmd()
        .arg("record")
        .arg("decode")
        .arg("--help")
        .assert()
        .success();
    cmd()
        .arg("record")
        .arg("parse")
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn decode_hex_payload_to_stdout() {
    let assert = cmd()
        .arg("record")
        .arg("decode")
        .arg(MAINNET_CONTENT)
        .assert()
        .success();
    let value = stdout_json(&assert);
    let entry = &value[0];
    assert_eq!(entry["index"], 0);
    assert_eq!(entry["record"]["account"], "mobitx.bit");
    assert_eq!(entry["record"]["expireAt"], 1_751_673_572_000u64);
    assert_eq!(
        entry["record"]["witnessHash"],
        "b33e31e5b6085b23c542081743d36fec5bfc4744"
    );
    assert_eq!(entry["expireAtRfc3339"], "2025-07-04T23:59:32Z");
    assert!(entry.get("error").is_none());
}

#[test]
fn decode_reports_failures_inline() {
    let assert = cmd()
        .arg("record")
        .arg("decode")
        .arg("0x1")
        .arg(MAINNET_CONTENT)
        .assert()
        .success();
    let value = stdout_json(&assert);
    assert!(value[0]["error"].as_str().unwrap().contains("invalid hex string length"));
    assert_eq!(value[1]["record"]["account"], "mobitx.bit");
}

#[test]
fn strict_fails_when_a_payload_fails() {
    cmd()
        .arg("record")
        .arg("decode")
        .arg("0x00")
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("1 payload(s) failed to decode").and(contains("hint:")));
}

#[test]
fn decode_from_file_writes_output() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("payloads.txt");
    let output = temp.path().join("out").join("records.json");
    std::fs::write(
        &input,
        format!("# mainnet sample\n{MAINNET_CONTENT}\n\n[0, 1]\n"),
    )
    .expect("write payloads");

    cmd()
        .arg("record")
        .arg("decode")
        .arg("--file")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--pretty")
        .assert()
        .success()
        .stderr(contains("OK: 1 record(s) written"));

    let json = std::fs::read_to_string(&output).expect("read output");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert!(value[1]["error"].as_str().unwrap().contains("truncated record"));
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let output = temp.path().join("records.json");

    cmd()
        .arg("record")
        .arg("decode")
        .arg(MAINNET_CONTENT)
        .arg("-o")
        .arg(&output)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(contains("OK:").not());
}

#[test]
fn missing_file_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.txt");

    cmd()
        .arg("record")
        .arg("decode")
        .arg("--file")
        .arg(missing)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn pretty_and_compact_conflict() {
    cmd()
        .arg("record")
        .arg("decode")
        .arg(MAINNET_CONTENT)
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn lossy_utf8_flag_replaces_invalid_bytes() {
    let payload = format!("0x{}ff", "00".repeat(30));

    let assert = cmd()
        .arg("record")
        .arg("decode")
        .arg(&payload)
        .assert()
        .success();
    assert!(stdout_json(&assert)[0]["error"]
        .as_str()
        .unwrap()
        .contains("not valid UTF-8"));

    let assert = cmd()
        .arg("record")
        .arg("decode")
        .arg(&payload)
        .arg("--lossy-utf8")
        .assert()
        .success();
    assert_eq!(stdout_json(&assert)[0]["record"]["account"], "\u{fffd}");
}

#[test]
fn normalize_byte_list() {
    let assert = cmd()
        .arg("bytes")
        .arg("normalize")
        .arg("[0, 1, 255]")
        .assert()
        .success();
    let value = stdout_json(&assert);
    assert_eq!(value["hex"], "0x0001ff");
    assert_eq!(value["length"], 3);
}

#[test]
fn normalize_latin1_rejects_wide_characters() {
    cmd()
        .arg("bytes")
        .arg("normalize")
        .arg("--latin1")
        .arg("caf\u{e9}\u{20ac}")
        .assert()
        .failure()
        .stderr(contains("non latin-1 character"));
}

#[test]
fn check_decimal_rejects_bare_prefix() {
    cmd()
        .arg("bytes")
        .arg("check-decimal")
        .arg("0x")
        .assert()
        .failure()
        .stderr(contains("at least one digit"));
    cmd()
        .arg("bytes")
        .arg("check-decimal")
        .arg("0xfff")
        .arg("--max-bytes")
        .arg("2")
        .assert()
        .success();
}
