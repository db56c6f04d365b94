//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Wakalog.
//! The Wakalog project belongs to the Dunimd project team.

use chrono::{DateTime, FixedOffset, TimeZone};
use proptest::prelude::*;
use serde_json::Value;
use wakalog::log::{WkCallerContext, WkJsonFormatter, WkLogLevel, WkLogRecord, WkSessionMetadata};

const FULL_ORDER: [&str; 10] = [
    "now", "package", "lineno", "version", "plugin", "time", "isWrite", "file", "level", "message",
];

fn fixed_time(offset_secs: i32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(offset_secs)
        .unwrap()
        .timestamp_opt(1_700_000_000, 0)
        .unwrap()
}

fn configured(meta: WkSessionMetadata) -> WkJsonFormatter {
    let mut fmt = WkJsonFormatter::new();
    fmt.configure(meta);
    fmt
}

/// Keys of a single-line JSON object in the order they appear in the text.
fn key_order(line: &str) -> Vec<String> {
    let value: Value = serde_json::from_str(line).expect("valid json");
    let obj = value.as_object().expect("json object");
    let mut keys: Vec<(usize, String)> = obj
        .keys()
        .map(|k| {
            let needle = format!("\"{}\":", k);
            (line.find(&needle).expect("key in text"), k.clone())
        })
        .collect();
    keys.sort();
    keys.into_iter().map(|(_, k)| k).collect()
}

#[test]
fn test_full_record_field_order() {
    let meta = WkSessionMetadata::new(1_700_000_000.0, "4.0.0")
        .with_write(true)
        .with_target_file("/home/alice/project/main.rs")
        .with_plugin("vim-wakatime/4.0.0");
    let record = WkLogRecord::new(
        WkLogLevel::Debug,
        WkCallerContext::new("wakatime.heartbeat", 88),
        "Sending heartbeat",
    )
    .with_created(fixed_time(0));

    let line = configured(meta).format(&record);
    assert_eq!(
        line,
        concat!(
            r#"{"now":"2023/11/14 22:13:20 +0000","package":"wakatime.heartbeat","lineno":88,"#,
            r#""version":"4.0.0","plugin":"vim-wakatime/4.0.0","time":1700000000.0,"#,
            r#""isWrite":true,"file":"/home/alice/project/main.rs","level":"DEBUG","#,
            r#""message":"Sending heartbeat"}"#
        )
    );
    assert_eq!(key_order(&line), FULL_ORDER);
}

#[test]
fn test_optional_fields_are_absent_not_null() {
    let meta = WkSessionMetadata::new(1_700_000_000.0, "4.0.0").with_target_file("a.py");
    let record = WkLogRecord::new(WkLogLevel::Warning, WkCallerContext::unknown(), "offline")
        .with_created(fixed_time(0));

    let line = configured(meta).format(&record);
    let value: Value = serde_json::from_str(&line).unwrap();
    let obj = value.as_object().unwrap();

    for key in ["plugin", "isWrite", "package", "lineno"] {
        assert!(!obj.contains_key(key), "{key} should be omitted: {line}");
    }
    assert_eq!(
        key_order(&line),
        ["now", "version", "time", "file", "level", "message"]
    );
}

#[test]
fn test_false_write_flag_is_omitted() {
    let meta = WkSessionMetadata::new(1.0, "4.0.0").with_write(false);
    let record = WkLogRecord::new(WkLogLevel::Error, WkCallerContext::unknown(), "x");
    let line = configured(meta).format(&record);
    assert!(!line.contains("isWrite"), "{line}");
}

#[test]
fn test_invalid_utf8_bytes_message() {
    let meta = WkSessionMetadata::new(1_700_000_000.0, "4.0.0");
    let record = WkLogRecord::new(
        WkLogLevel::Warning,
        WkCallerContext::unknown(),
        b"caf\xe9".to_vec(),
    );

    let line = configured(meta).format(&record);
    let value: Value = serde_json::from_str(&line).expect("valid json");
    assert_eq!(value["message"], "caf\u{FFFD}");
}

#[test]
fn test_now_matches_date_pattern() {
    let meta = WkSessionMetadata::new(1_700_000_000.0, "4.0.0");
    let record = WkLogRecord::new(WkLogLevel::Warning, WkCallerContext::unknown(), "x")
        .with_created(fixed_time(-5 * 3600));

    let value: Value = serde_json::from_str(&configured(meta).format(&record)).unwrap();
    assert_eq!(value["now"], "2023/11/14 17:13:20 -0500");
    assert_eq!(value["time"].as_f64(), Some(1_700_000_000.0));
}

#[test]
fn test_now_shape_with_local_clock() {
    let record = WkLogRecord::new(WkLogLevel::Warning, WkCallerContext::unknown(), "x");
    let value: Value = serde_json::from_str(&WkJsonFormatter::new().format(&record)).unwrap();
    let now = value["now"].as_str().unwrap();

    let bytes = now.as_bytes();
    assert_eq!(now.len(), 25, "{now}");
    for (i, b) in bytes.iter().enumerate() {
        match i {
            4 | 7 => assert_eq!(*b, b'/', "{now}"),
            10 | 19 => assert_eq!(*b, b' ', "{now}"),
            13 | 16 => assert_eq!(*b, b':', "{now}"),
            20 => assert!(*b == b'+' || *b == b'-', "{now}"),
            _ => assert!(b.is_ascii_digit(), "{now}"),
        }
    }
}

#[test]
fn test_format_before_configure_is_minimal() {
    let record = WkLogRecord::new(
        WkLogLevel::Info,
        WkCallerContext::new("wakatime.main", 12),
        "starting",
    )
    .with_created(fixed_time(0));
    let fmt = WkJsonFormatter::new();
    assert!(!fmt.is_configured());
    assert_eq!(
        key_order(&fmt.format(&record)),
        ["now", "package", "lineno", "level", "message"]
    );
}

#[test]
fn test_configure_replaces_metadata() {
    let mut fmt = configured(WkSessionMetadata::new(1.0, "1.0.0").with_plugin("emacs"));
    fmt.configure(WkSessionMetadata::new(2.0, "2.0.0"));
    let record = WkLogRecord::new(WkLogLevel::Info, WkCallerContext::unknown(), "x");
    let value: Value = serde_json::from_str(&fmt.format(&record)).unwrap();
    assert_eq!(value["version"], "2.0.0");
    assert!(value.get("plugin").is_none());
}

fn arb_level() -> impl Strategy<Value = WkLogLevel> {
    prop_oneof![
        Just(WkLogLevel::Debug),
        Just(WkLogLevel::Info),
        Just(WkLogLevel::Warning),
        Just(WkLogLevel::Error),
        Just(WkLogLevel::Critical),
    ]
}

proptest! {
    #[test]
    fn test_field_order_is_stable(
        plugin in proptest::option::of("[a-z]{1,12}/[0-9]\\.[0-9]"),
        is_write in proptest::option::of(any::<bool>()),
        target in proptest::option::of("[a-z/]{1,20}\\.rs"),
        caller in proptest::option::of(("[a-z_]{1,10}", 1u32..5000)),
        level in arb_level(),
        message in any::<Vec<u8>>(),
    ) {
        let meta = WkSessionMetadata {
            timestamp: 1_700_000_000.5,
            is_write,
            target_file: target.clone(),
            version: "4.0.0".to_string(),
            plugin: plugin.clone(),
        };
        let caller = match caller {
            Some((package, lineno)) => WkCallerContext::new(package, lineno),
            None => WkCallerContext::unknown(),
        };
        let record = WkLogRecord::new(level, caller.clone(), message);
        let line = configured(meta).format(&record);

        let value: Value = serde_json::from_str(&line).expect("valid json");
        prop_assert_eq!(value.get("plugin").and_then(Value::as_str), plugin.as_deref());
        prop_assert_eq!(value.get("isWrite").is_some(), is_write == Some(true));
        prop_assert_eq!(value.get("package").is_some(), caller.package.is_some());
        prop_assert_eq!(value["file"].as_str(), target.as_deref());
        prop_assert_eq!(value["level"].as_str(), Some(level.as_str()));
        prop_assert!(!line.contains('\n'));

        let expected: Vec<&str> = FULL_ORDER
            .iter()
            .copied()
            .filter(|k| value.get(*k).is_some())
            .collect();
        prop_assert_eq!(key_order(&line), expected);
    }
}
