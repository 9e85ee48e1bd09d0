//! Error taxonomy, context chaining and the failure policy

use hashlab_common::{Classify, Error, ErrorKind, FailureMode, OptionExt, ResultExt, bail, ensure, err};
use std::io;

#[derive(Debug, thiserror::Error)]
#[error("bad cost")]
struct CostError;

impl Classify for CostError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Operation
    }
}

fn parse_positive(n: i64) -> hashlab_common::Result<i64> {
    ensure!(n > 0, user_input, "expected a positive number, got {}", n);
    Ok(n)
}

fn always_fails() -> hashlab_common::Result<()> {
    bail!(environment, "no terminal")
}

#[test]
fn test_classified_takes_kind_from_source() {
    let error = Error::classified(CostError);
    assert_eq!(error.kind(), ErrorKind::Operation);
    assert_eq!(error.user_message(), "bad cost");
}

#[test]
fn test_context_is_kept_and_displayed() {
    let error = err!(configuration, "cannot read {}", "config.json");
    assert_eq!(error.kind(), ErrorKind::Configuration);
    assert_eq!(error.get_context(), Some("cannot read config.json"));
    assert!(error.to_string().contains("cannot read config.json"));
}

#[test]
fn test_second_context_wraps_the_first() {
    let error = err!(operation, "inner").context("outer");
    assert_eq!(error.kind(), ErrorKind::Operation);
    assert_eq!(error.get_context(), Some("outer"));
    assert!(error.to_string().contains("inner"));
}

#[test]
fn test_user_message_without_source_uses_context() {
    let error = err!(environment, "clipboard unavailable");
    assert_eq!(error.user_message(), "Environment error: clipboard unavailable");
    assert_eq!(Error::internal().user_message(), "Internal error");
}

#[test]
fn test_result_ext_attaches_kind_and_context() {
    let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
    let error = result
        .context(ErrorKind::Configuration, "loading config")
        .expect_err("Should fail");

    assert_eq!(error.kind(), ErrorKind::Configuration);
    assert_eq!(error.get_context(), Some("loading config"));
    assert_eq!(error.user_message(), "gone");
}

#[test]
fn test_io_errors_are_environment_errors() {
    let error: Error = io::Error::other("broken pipe").into();
    assert_eq!(error.kind(), ErrorKind::Environment);
}

#[test]
fn test_option_ext_and_macros() {
    let missing: Option<u8> = None;
    let error = missing
        .ok_or_context(ErrorKind::UserInput, "no key pair")
        .expect_err("None should fail");
    assert_eq!(error.kind(), ErrorKind::UserInput);

    assert_eq!(parse_positive(3).ok(), Some(3));
    let error = parse_positive(-1).expect_err("Negative should fail");
    assert_eq!(error.get_context(), Some("expected a positive number, got -1"));

    let error = always_fails().expect_err("Should bail");
    assert_eq!(error.kind(), ErrorKind::Environment);
}

#[test]
fn test_errors_clone_cheaply() {
    let error = err!(operation, "shared");
    let copy = error.clone();
    assert_eq!(copy.kind(), error.kind());
    assert_eq!(copy.get_context(), error.get_context());
}

#[test]
fn test_failure_mode_policy() {
    let mut shown = Some("previous hash");
    FailureMode::Retain.on_failure(&mut shown);
    assert_eq!(shown, Some("previous hash"));

    FailureMode::Clear.on_failure(&mut shown);
    assert_eq!(shown, None);

    assert_eq!(FailureMode::default(), FailureMode::Retain);
}
