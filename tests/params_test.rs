use std::collections::BTreeMap;

use pc_remote::utils::params::{collect_pairs, decode, encode, parse_pair};

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_decode_basic() {
    let params = decode("steps=5\nforce=true");
    assert_eq!(params, map(&[("steps", "5"), ("force", "true")]));
}

#[test]
fn test_decode_drops_malformed_lines() {
    assert_eq!(decode("bad_line\nkey=value"), map(&[("key", "value")]));
}

#[test]
fn test_decode_skips_blank_lines_and_trims() {
    let params = decode("\n   \n  path =  C:\\Tools\\app.exe  \r\n\n");
    assert_eq!(params, map(&[("path", "C:\\Tools\\app.exe")]));
}

#[test]
fn test_decode_splits_on_first_equals() {
    let params = decode("query=a=b=c");
    assert_eq!(params, map(&[("query", "a=b=c")]));
}

#[test]
fn test_decode_last_duplicate_wins() {
    let params = decode("steps=1\nsteps=2\nsteps=3");
    assert_eq!(params, map(&[("steps", "3")]));
}

#[test]
fn test_decode_empty_text() {
    assert!(decode("").is_empty());
}

#[test]
fn test_encode_one_pair_per_line() {
    let text = encode(&map(&[("steps", "5"), ("force", "true")]));
    let mut lines: Vec<_> = text.lines().collect();
    lines.sort();
    assert_eq!(lines, vec!["force=true", "steps=5"]);
}

#[test]
fn test_encode_empty_map() {
    assert_eq!(encode(&BTreeMap::new()), "");
}

#[test]
fn test_round_trip() {
    let original = map(&[
        ("path", "C:\\Windows\\System32\\notepad.exe"),
        ("steps", "10"),
        ("expr", "a=b"),
        ("empty", ""),
    ]);
    assert_eq!(decode(&encode(&original)), original);
}

#[test]
fn test_parse_pair() {
    assert_eq!(
        parse_pair("path = chrome.exe").unwrap(),
        ("path".to_string(), "chrome.exe".to_string())
    );
    assert!(parse_pair("no-separator").is_err());
    assert!(parse_pair("=value").is_err());
}

#[test]
fn test_collect_pairs_last_wins() {
    let args = vec!["steps=1".to_string(), "force=true".to_string(), "steps=5".to_string()];
    let params = collect_pairs(&args).unwrap();
    assert_eq!(params, map(&[("steps", "5"), ("force", "true")]));
}
