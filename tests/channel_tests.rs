//! Method channel integration tests over the binary's stdio
//!
//! Only calls that never reach the OS are exercised here.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

fn serve(input: impl Into<Vec<u8>>) -> Vec<Value> {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::cargo_bin("local-notifier")
        .unwrap()
        .args(["serve", "--no-permission-request", "--config"])
        .arg(dir.path().join("config.toml"))
        .env("RUST_LOG", "off")
        .write_stdin(input)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("reply is JSON"))
        .collect()
}

fn reply_for(replies: &[Value], id: i64) -> &Value {
    replies
        .iter()
        .find(|r| r["id"] == json!(id))
        .unwrap_or_else(|| panic!("no reply for id {}: {:?}", id, replies))
}

#[test]
fn invalid_notify_arguments() {
    let replies = serve(concat!(
        r#"{"id":1,"method":"notify","arguments":{"title":"T","body":"B"}}"#,
        "\n",
        r#"{"id":2,"method":"notify","arguments":{"identifier":"a","title":5,"body":"B"}}"#,
        "\n",
    ));

    assert_eq!(replies.len(), 2);
    for id in [1, 2] {
        let error = &reply_for(&replies, id)["error"];
        assert_eq!(error["code"], "INVALID_ARGUMENTS");
        assert_eq!(error["message"], "Invalid arguments for notification");
        assert_eq!(error["details"], Value::Null);
    }
}

#[test]
fn close_unknown_and_invalid() {
    let replies = serve(concat!(
        r#"{"id":1,"method":"close","arguments":{"identifier":"never-shown"}}"#,
        "\n",
        r#"{"id":2,"method":"close","arguments":{}}"#,
        "\n",
    ));

    assert_eq!(reply_for(&replies, 1)["result"], json!(true));
    assert_eq!(
        reply_for(&replies, 2)["error"]["message"],
        "Invalid arguments for closing notification"
    );
}

#[test]
fn unknown_method_and_foreign_channel() {
    let replies = serve(concat!(
        r#"{"id":1,"method":"foo"}"#,
        "\n",
        r#"{"id":2,"channel":"other","method":"close","arguments":{"identifier":"a"}}"#,
        "\n",
    ));

    assert_eq!(reply_for(&replies, 1)["notImplemented"], json!(true));
    assert_eq!(reply_for(&replies, 2)["notImplemented"], json!(true));
}

#[test]
fn malformed_line_does_not_stop_the_channel() {
    let replies = serve(concat!(
        "this is not json\n",
        r#"{"id":7,"method":"close","arguments":{"identifier":"x"}}"#,
        "\n",
    ));

    assert_eq!(replies.len(), 2);
    assert!(replies
        .iter()
        .any(|r| r["id"].is_null() && r["error"]["code"] == "MALFORMED_CALL"));
    assert_eq!(reply_for(&replies, 7)["result"], json!(true));
}

#[test]
fn invalid_utf8_line_does_not_stop_the_channel() {
    let mut input = Vec::new();
    input.extend_from_slice(br#"{"id":1,"method":"close","arguments":{"identifier":"a"}}"#);
    input.extend_from_slice(b"\n\xff\xfe\n");
    input.extend_from_slice(br#"{"id":2,"method":"close","arguments":{"identifier":"b"}}"#);
    input.push(b'\n');

    let replies = serve(input);

    assert_eq!(replies.len(), 3);
    assert_eq!(reply_for(&replies, 1)["result"], json!(true));
    assert_eq!(reply_for(&replies, 2)["result"], json!(true));
    assert!(replies
        .iter()
        .any(|r| r["id"].is_null() && r["error"]["code"] == "MALFORMED_CALL"));
}

#[test]
fn bad_envelope_echoes_id() {
    let replies = serve(concat!(r#"{"id":5,"method":7}"#, "\n"));

    assert_eq!(reply_for(&replies, 5)["error"]["code"], "MALFORMED_CALL");
}

#[test]
fn empty_input_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("local-notifier")
        .unwrap()
        .args(["--no-permission-request", "--config"])
        .arg(dir.path().join("config.toml"))
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
