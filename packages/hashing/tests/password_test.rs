//! Argon2 and bcrypt through the builder API

use hashlab_hashing::{Argon2Params, Argon2Variant, Hash, HashError, Verification};

const PASSWORD: &str = "correct horse battery staple";

#[tokio::test]
async fn test_argon2_hash_and_verify() {
    let hashed = Hash::argon2()
        .with_params(Argon2Params::minimum())
        .hash(PASSWORD)
        .await
        .expect("Argon2 hashing should succeed");
    assert!(hashed.value().starts_with("$argon2id$v=19$"));

    let outcome = Hash::argon2()
        .verify(PASSWORD, hashed.value().clone())
        .await
        .expect("Verification of a well-formed hash should succeed");
    assert_eq!(*outcome.value(), Verification::Verified);
}

#[tokio::test]
async fn test_argon2_wrong_password_is_not_an_error() {
    let hashed = Hash::argon2()
        .with_params(Argon2Params::minimum())
        .hash(PASSWORD)
        .await
        .expect("Argon2 hashing should succeed");

    let outcome = Hash::argon2()
        .verify("Tr0ub4dor&3", hashed.into_value())
        .await
        .expect("A mismatch must be an outcome, not an error");
    assert_eq!(*outcome.value(), Verification::NotVerified);
}

#[tokio::test]
async fn test_argon2_appended_character_does_not_verify() {
    let hashed = Hash::argon2()
        .with_params(Argon2Params::minimum())
        .hash("hunter2")
        .await
        .expect("Argon2 hashing should succeed");

    let outcome = Hash::argon2()
        .verify("hunter2x", hashed.into_value())
        .await
        .expect("Verification should complete");
    assert!(!outcome.value().is_verified());
}

#[tokio::test]
async fn test_argon2_variants_are_encoded_in_hash() {
    for (variant, prefix) in [
        (Argon2Variant::Argon2d, "$argon2d$"),
        (Argon2Variant::Argon2i, "$argon2i$"),
        (Argon2Variant::Argon2id, "$argon2id$"),
    ] {
        let hashed = Hash::argon2()
            .with_params(Argon2Params::minimum())
            .variant(variant)
            .hash(PASSWORD)
            .await
            .expect("Argon2 hashing should succeed");
        assert!(hashed.value().starts_with(prefix), "{variant} hash: {hashed}");

        // Verification reads the variant from the hash, not from the builder
        let outcome = Hash::argon2()
            .verify(PASSWORD, hashed.into_value())
            .await
            .expect("Verification should complete");
        assert!(outcome.value().is_verified());
    }
}

#[tokio::test]
async fn test_argon2_cost_parameters_are_encoded_in_hash() {
    let hashed = Hash::argon2()
        .memory_cost(64)
        .time_cost(2)
        .parallelism(2)
        .hash(PASSWORD)
        .await
        .expect("Argon2 hashing should succeed");
    assert!(hashed.value().contains("m=64,t=2,p=2"), "hash: {hashed}");
}

#[tokio::test]
async fn test_argon2_rejects_zero_time_cost() {
    let result = Hash::argon2().time_cost(0).hash(PASSWORD).await;
    assert!(matches!(result, Err(HashError::InvalidParameters(_))));
}

#[tokio::test]
async fn test_argon2_malformed_hash_is_an_error() {
    for hash in [
        "not-a-hash",
        "$argon2id$v=19$m=4096,t=3,p=1",
        "$argon2id$v=19$m=4096,t=3,p=1$c2FsdHNhbHQ",
    ] {
        let result = Hash::argon2().verify(PASSWORD, hash).await;
        assert!(
            matches!(result, Err(HashError::MalformedHash(_))),
            "{hash} should be malformed"
        );
    }
}

#[tokio::test]
async fn test_empty_password_is_rejected() {
    let result = Hash::argon2().hash("").await;
    assert_eq!(result, Err(HashError::EmptyPassword));

    let result = Hash::bcrypt().verify("", "$2b$04$abc").await;
    assert_eq!(result, Err(HashError::EmptyPassword));
}

#[tokio::test]
async fn test_bcrypt_hash_and_verify() {
    let hashed = Hash::bcrypt()
        .cost(4)
        .hash(PASSWORD)
        .await
        .expect("bcrypt hashing should succeed");
    assert!(hashed.value().starts_with("$2b$04$"));

    let verified = Hash::bcrypt()
        .verify(PASSWORD, hashed.value().clone())
        .await
        .expect("Verification should complete");
    assert_eq!(*verified.value(), Verification::Verified);

    let rejected = Hash::bcrypt()
        .verify(format!("{PASSWORD}x"), hashed.into_value())
        .await
        .expect("Verification should complete");
    assert_eq!(*rejected.value(), Verification::NotVerified);
}

#[tokio::test]
async fn test_bcrypt_cost_out_of_range() {
    let low = Hash::bcrypt().cost(3).hash(PASSWORD).await;
    assert!(matches!(low, Err(HashError::InvalidParameters(_))));

    let high = Hash::bcrypt().cost(32).hash(PASSWORD).await;
    assert!(matches!(high, Err(HashError::InvalidParameters(_))));
}

#[tokio::test]
async fn test_bcrypt_malformed_hash_is_an_error() {
    let result = Hash::bcrypt().verify(PASSWORD, "$2b$garbage").await;
    assert!(matches!(result, Err(HashError::MalformedHash(_))));
}

#[tokio::test]
async fn test_schemes_do_not_cross_verify() {
    let bcrypt_hash = Hash::bcrypt()
        .cost(4)
        .hash(PASSWORD)
        .await
        .expect("bcrypt hashing should succeed")
        .into_value();

    let result = Hash::argon2().verify(PASSWORD, bcrypt_hash).await;
    assert!(matches!(result, Err(HashError::MalformedHash(_))));
}

#[tokio::test]
async fn test_elapsed_time_is_recorded() {
    let hashed = Hash::bcrypt()
        .cost(4)
        .hash(PASSWORD)
        .await
        .expect("bcrypt hashing should succeed");
    assert!(hashed.elapsed() > std::time::Duration::ZERO);
}
