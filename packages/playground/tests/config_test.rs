//! Configuration file loading

use hashlab::config::PlaygroundConfig;
use hashlab_common::{ErrorKind, FailureMode};
use hashlab_hashing::XxhashVariant;
use hashlab_jwt::{Claims, Header, JwtError, issue, verify};
use hashlab_key::{Curve, KeyPair};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_empty_object_gives_defaults() {
    let config = PlaygroundConfig::from_json("{}").expect("Empty object should parse");
    assert_eq!(config, PlaygroundConfig::default());
    assert_eq!(config.failure_mode, FailureMode::Retain);
    assert_eq!(config.toast_duration(), Duration::from_secs(3));
    assert_eq!(config.jwt.leeway_seconds, 60);
    assert!(!config.surface_clipboard_errors);
}

#[test]
fn test_partial_sections_fill_in_defaults() {
    let config = PlaygroundConfig::from_json(
        r#"{
            "xxhash": { "variant": "xxh64" },
            "jwt": { "issuers": [] },
            "failure_mode": "clear"
        }"#,
    )
    .expect("Partial config should parse");

    assert_eq!(config.xxhash.variant, XxhashVariant::Xxh64);
    assert_eq!(config.xxhash.seed, 0);
    assert!(config.jwt.issuers.is_empty());
    assert_eq!(config.jwt.audiences, vec!["https://node-rs.dev".to_string()]);
    assert_eq!(config.failure_mode, FailureMode::Clear);
}

#[test]
fn test_mistyped_field_is_a_configuration_error() {
    let err = PlaygroundConfig::from_json(r#"{ "tick_rate_ms": "fast" }"#)
        .expect_err("A string tick rate should be rejected");
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_leeway_out_of_range_is_a_configuration_error() {
    for text in [
        r#"{ "jwt": { "leeway_seconds": 10000000000000000 } }"#,
        r#"{ "jwt": { "leeway_seconds": -5 } }"#,
    ] {
        let err = PlaygroundConfig::from_json(text).expect_err("Leeway should be rejected");
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}

#[test]
fn test_largest_leeway_builds_a_policy() {
    let config = PlaygroundConfig::from_json(r#"{ "jwt": { "leeway_seconds": 4294967295 } }"#)
        .expect("Should parse");
    let policy = config.verification_policy();
    assert_eq!(policy.leeway.num_seconds(), i64::from(u32::MAX));
}

#[test]
fn test_tick_rate_has_a_floor() {
    let config = PlaygroundConfig::from_json(r#"{ "tick_rate_ms": 0 }"#).expect("Should parse");
    assert_eq!(config.tick_rate(), Duration::from_millis(10));
}

#[test]
fn test_load_from_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().expect("Should create a temp file");
    write!(file, r#"{{ "bcrypt": {{ "cost": 6 }}, "toast_duration_ms": 500 }}"#)
        .expect("Should write config");

    let config = PlaygroundConfig::load(Some(file.path())).expect("Config should load");
    assert_eq!(config.bcrypt.cost, 6);
    assert_eq!(config.toast_duration(), Duration::from_millis(500));
}

#[test]
fn test_missing_explicit_path_is_an_error() {
    let dir = tempfile::tempdir().expect("Should create a temp dir");
    let missing = dir.path().join("nope.json");

    let err = PlaygroundConfig::load(Some(&missing)).expect_err("Missing file should fail");
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_log_file_override() {
    let config = PlaygroundConfig::from_json(r#"{ "log_file": "/tmp/hashlab-test.log" }"#)
        .expect("Should parse");
    assert_eq!(config.log_path(), std::path::PathBuf::from("/tmp/hashlab-test.log"));
}

#[test]
fn test_policy_follows_jwt_section() {
    let keys = KeyPair::generate(Curve::P256).expect("Key generation should succeed");
    let claims = Claims::demo(chrono::Utc::now().timestamp());
    let token = issue(&claims, &Header::default(), keys.private_key()).expect("Should issue");

    let defaults = PlaygroundConfig::default().verification_policy();
    assert!(verify(&token, keys.public_key(), &defaults).is_ok());

    let strict = PlaygroundConfig::from_json(r#"{ "jwt": { "audiences": ["other"] } }"#)
        .expect("Should parse")
        .verification_policy();
    assert_eq!(
        verify(&token, keys.public_key(), &strict),
        Err(JwtError::InvalidAudience)
    );
}
