use std::fs;
use tempfile::tempdir;

use receipt_token_cli::commands::{decode, inspect};
use receipt_token_core::{encode, share_url, ReceiptData};

fn run(link: &str, with_display: bool, strict: bool) -> anyhow::Result<serde_json::Value> {
    let mut out = Vec::new();
    decode::execute(link, None, with_display, strict, &mut out)?;
    Ok(serde_json::from_slice(&out)?)
}

#[test]
fn decode_bare_token() {
    let token = encode(&ReceiptData::sample()).unwrap();
    let json = run(&token, false, true).unwrap();

    assert_eq!(json["companyName"], "株式会社ランディット");
    assert_eq!(json["parkingFee"], 1000);
    assert_eq!(json["recipientName"], "");
}

#[test]
fn decode_link_with_display() {
    let link = share_url("https://receipts.example.com/?lang=ja", &ReceiptData::sample()).unwrap();
    let json = run(link.as_str(), true, true).unwrap();

    assert_eq!(json["receipt"]["discount"], 100);
    assert_eq!(json["display"]["receiptDate"], "2024/04/03");
    assert_eq!(json["display"]["total"], "¥900");
    assert!(json["display"]["recipientName"].is_null());
}

#[test]
fn decode_bad_token_falls_back_to_blank() {
    let json = run("not-a-valid-token!!!", false, false).unwrap();
    let receipt: ReceiptData = serde_json::from_value(json).unwrap();
    assert_eq!(receipt, ReceiptData::default());
}

#[test]
fn decode_bad_token_strict_fails() {
    assert!(run("not-a-valid-token!!!", false, true).is_err());
}

#[test]
fn decode_writes_output_file() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("receipt.json");
    let token = encode(&ReceiptData::sample()).unwrap();

    let mut out = Vec::new();
    decode::execute(&token, Some(out_path.to_str().unwrap()), false, true, &mut out).unwrap();
    assert!(out.is_empty());

    let written: ReceiptData =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(written, ReceiptData::sample());
}

#[test]
fn inspect_reports_stages() {
    let token = encode(&ReceiptData::sample()).unwrap();
    let mut out = Vec::new();
    inspect::execute(&token, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains(&format!("Length:             {} chars", token.len())));
    assert!(text.contains("Compressed (hex):   789c"));
    assert!(text.contains("Present:            9 of 9"));
    assert!(text.contains("[4] parkingFee (number): 1000"));
    assert!(text.contains("Token decodes to a receipt"));
}

#[test]
fn inspect_reports_failure_without_error() {
    let mut out = Vec::new();
    inspect::execute("not-a-valid-token!!!", &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("=== Summary ==="));
    assert!(text.contains("Invalid base64"));
}
