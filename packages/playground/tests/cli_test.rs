//! Subcommand parsing and handlers

use clap::Parser;
use hashlab::cli::{BcryptCommand, Cli, Commands, JwtCommand, process_command};
use hashlab::config::PlaygroundConfig;
use hashlab_common::ErrorKind;
use hashlab_hashing::{Hash, XxhashVariant};
use hashlab_jwt::{ClaimsEditor, Header, issue};
use hashlab_key::{Curve, KeyPair};
use std::io::Write;
use std::path::PathBuf;

fn public_key_file(key_pair: &KeyPair) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(key_pair.public_key().as_bytes())
        .expect("Failed to write key");
    file
}

fn demo_token(key_pair: &KeyPair) -> String {
    let editor = ClaimsEditor::demo(chrono::Utc::now().timestamp());
    let header = Header {
        algorithm: key_pair.curve().jws_algorithm().parse().expect("Known algorithm"),
        ..Header::default()
    };
    issue(editor.claims(), &header, key_pair.private_key()).expect("Demo claims should sign")
}

fn verify_command(token: String, key_file: &tempfile::NamedTempFile) -> Commands {
    Commands::Jwt {
        action: JwtCommand::Verify {
            token,
            public_key_file: key_file.path().to_path_buf(),
            issuer: Vec::new(),
            audience: Vec::new(),
        },
    }
}

#[test]
fn test_no_subcommand_means_terminal_ui() {
    let cli = Cli::try_parse_from(["hashlab"]).expect("Bare invocation should parse");
    assert!(cli.command.is_none());
    assert!(!cli.json);
}

#[test]
fn test_global_flags_follow_subcommand() {
    let cli = Cli::try_parse_from([
        "hashlab", "xxhash", "--input", "abc", "--variant", "xxh3-xxh128", "--json",
    ])
    .expect("Should parse");
    assert!(cli.json);
    assert!(matches!(
        cli.command,
        Some(Commands::Xxhash {
            variant: Some(XxhashVariant::Xxh3Xxh128),
            seed: None,
            ..
        })
    ));
}

#[test]
fn test_unknown_variant_is_rejected_by_parser() {
    assert!(Cli::try_parse_from(["hashlab", "xxhash", "--input", "abc", "--variant", "md5"]).is_err());
}

#[test]
fn test_keygen_defaults_to_p256() {
    let cli = Cli::try_parse_from(["hashlab", "jwt", "keygen"]).expect("Should parse");
    match cli.command {
        Some(Commands::Jwt {
            action: JwtCommand::Keygen { curve },
        }) => assert_eq!(curve, Curve::P256),
        _ => panic!("Expected jwt keygen"),
    }
}

#[tokio::test]
async fn test_xxhash_command_succeeds() {
    let command = Commands::Xxhash {
        input: "hello".to_string(),
        variant: Some(XxhashVariant::Xxh64),
        seed: Some(7),
    };
    process_command(&PlaygroundConfig::default(), command, true)
        .await
        .expect("xxhash should succeed");
}

#[tokio::test]
async fn test_xxh32_seed_overflow_is_an_error() {
    let command = Commands::Xxhash {
        input: "hello".to_string(),
        variant: Some(XxhashVariant::Xxh32),
        seed: Some(u64::from(u32::MAX) + 1),
    };
    let err = process_command(&PlaygroundConfig::default(), command, false)
        .await
        .expect_err("Seed wider than 32 bits should fail");
    assert_eq!(err.kind(), ErrorKind::Operation);
}

#[tokio::test]
async fn test_bcrypt_mismatch_is_not_an_error() {
    let hashed = Hash::bcrypt()
        .cost(4)
        .hash("secret")
        .await
        .expect("bcrypt should hash");
    let command = Commands::Bcrypt {
        action: BcryptCommand::Verify {
            password: "not secret".to_string(),
            hash: hashed.value().clone(),
        },
    };
    process_command(&PlaygroundConfig::default(), command, true)
        .await
        .expect("A mismatch is reported, not raised");
}

#[tokio::test]
async fn test_bcrypt_malformed_hash_is_an_operation_error() {
    let command = Commands::Bcrypt {
        action: BcryptCommand::Verify {
            password: "secret".to_string(),
            hash: "not-a-hash".to_string(),
        },
    };
    let err = process_command(&PlaygroundConfig::default(), command, false)
        .await
        .expect_err("Malformed hash should fail");
    assert_eq!(err.kind(), ErrorKind::Operation);
}

#[tokio::test]
async fn test_issue_rejects_non_object_claims() {
    let command = Commands::Jwt {
        action: JwtCommand::Issue {
            claims: Some("[1, 2]".to_string()),
            private_key_file: None,
        },
    };
    let err = process_command(&PlaygroundConfig::default(), command, true)
        .await
        .expect_err("Array claims should be rejected");
    assert_eq!(err.kind(), ErrorKind::UserInput);
}

#[tokio::test]
async fn test_verify_with_missing_key_file_is_user_input() {
    let command = Commands::Jwt {
        action: JwtCommand::Verify {
            token: "a.b.c".to_string(),
            public_key_file: PathBuf::from("/nonexistent/hashlab/public.pem"),
            issuer: Vec::new(),
            audience: Vec::new(),
        },
    };
    let err = process_command(&PlaygroundConfig::default(), command, false)
        .await
        .expect_err("Missing key file should fail");
    assert_eq!(err.kind(), ErrorKind::UserInput);
}

#[tokio::test]
async fn test_verify_accepts_demo_token_under_default_policy() {
    let key_pair = KeyPair::generate(Curve::P256).expect("Key generation should succeed");
    let key_file = public_key_file(&key_pair);
    let command = verify_command(demo_token(&key_pair), &key_file);
    process_command(&PlaygroundConfig::default(), command, true)
        .await
        .expect("Demo token should verify");
}

#[tokio::test]
async fn test_verify_issuer_override_replaces_configured_issuers() {
    let key_pair = KeyPair::generate(Curve::P256).expect("Key generation should succeed");
    let key_file = public_key_file(&key_pair);
    let command = Commands::Jwt {
        action: JwtCommand::Verify {
            token: demo_token(&key_pair),
            public_key_file: key_file.path().to_path_buf(),
            issuer: vec!["someone-else".to_string()],
            audience: Vec::new(),
        },
    };
    let err = process_command(&PlaygroundConfig::default(), command, false)
        .await
        .expect_err("Demo issuer is no longer accepted");
    assert_eq!(err.kind(), ErrorKind::Operation);
}

#[tokio::test]
async fn test_verify_p384_token_with_p384_key() {
    let key_pair = KeyPair::generate(Curve::P384).expect("Key generation should succeed");
    let key_file = public_key_file(&key_pair);
    let command = verify_command(demo_token(&key_pair), &key_file);
    process_command(&PlaygroundConfig::default(), command, true)
        .await
        .expect("ES384 token should verify against its P-384 key");
}

#[tokio::test]
async fn test_verify_rejects_token_signed_for_another_curve() {
    let p256_pair = KeyPair::generate(Curve::P256).expect("Key generation should succeed");
    let p384_pair = KeyPair::generate(Curve::P384).expect("Key generation should succeed");
    let key_file = public_key_file(&p384_pair);
    let command = verify_command(demo_token(&p256_pair), &key_file);
    let err = process_command(&PlaygroundConfig::default(), command, false)
        .await
        .expect_err("ES256 token cannot verify against a P-384 key");
    assert_eq!(err.kind(), ErrorKind::Operation);
}
