//! xxHash family through the builder API

use hashlab_hashing::fast::{self, Xxh3Stream};
use hashlab_hashing::{FastDigest, Hash, HashError, XxhashVariant};
use hex_literal::hex;
use proptest::prelude::*;

#[test]
fn test_empty_input_reference_digests() {
    let xxh32 = Hash::xxh32().compute(b"").expect("xxh32 should succeed");
    assert_eq!(*xxh32.value(), FastDigest::U32(0x02cc_5d05));

    let xxh64 = Hash::xxh64().compute(b"").expect("xxh64 should succeed");
    assert_eq!(*xxh64.value(), FastDigest::U64(0xef46_db37_51d8_e999));

    let xxh3 = Hash::xxh3().compute(b"").expect("xxh3 should succeed");
    assert_eq!(*xxh3.value(), FastDigest::U64(0x2d06_8005_38d3_94c2));

    let xxh128 = Hash::xxhash(XxhashVariant::Xxh3Xxh128)
        .compute(b"")
        .expect("xxh3-128 should succeed");
    assert_eq!(
        *xxh128.value(),
        FastDigest::U128(0x99aa_06d3_0147_98d8_6001_c324_468d_497f)
    );
}

#[test]
fn test_digest_bytes_are_big_endian() {
    let xxh128 = Hash::xxhash(XxhashVariant::Xxh3Xxh128)
        .compute(b"")
        .expect("xxh3-128 should succeed");
    assert_eq!(
        xxh128.value().to_bytes(),
        hex!("99aa06d3014798d86001c324468d497f")
    );

    let xxh32 = Hash::xxh32().compute(b"").expect("xxh32 should succeed");
    assert_eq!(xxh32.value().to_bytes(), hex!("02cc5d05"));
}

#[test]
fn test_selected_variant_is_honoured() {
    let input = b"node-rs playground";
    let widths: Vec<u32> = XxhashVariant::ALL
        .into_iter()
        .map(|variant| {
            let digest = Hash::xxhash(variant)
                .compute(input)
                .expect("digest should succeed")
                .into_value();
            assert_eq!(digest.bit_width(), variant.bit_width());
            digest.bit_width()
        })
        .collect();
    assert_eq!(widths, vec![32, 64, 64, 64, 128]);

    let xxh32 = Hash::xxh32().compute(input).expect("xxh32").into_value();
    let xxh64 = Hash::xxh64().compute(input).expect("xxh64").into_value();
    assert_ne!(xxh32.to_hex().len(), xxh64.to_hex().len());
}

#[test]
fn test_streaming_and_oneshot_xxh3_agree() {
    let oneshot = Hash::xxhash(XxhashVariant::Xxh3Xxh64)
        .with_seed(42)
        .compute(b"hello world")
        .expect("xxh3 one-shot should succeed");

    let mut stream = Xxh3Stream::with_seed(42);
    stream.update(b"hello").update(b" ").update(b"world");

    assert_eq!(*oneshot.value(), FastDigest::U64(stream.digest()));
}

#[test]
fn test_seed_changes_digest() {
    let unseeded = fast::digest(XxhashVariant::Xxh64, 0, b"abc").expect("digest");
    let seeded = fast::digest(XxhashVariant::Xxh64, 1, b"abc").expect("digest");
    assert_ne!(unseeded, seeded);
}

#[test]
fn test_xxh32_seed_must_fit_in_32_bits() {
    let result = Hash::xxh32().with_seed(u64::from(u32::MAX) + 1).compute(b"abc");
    assert!(matches!(result, Err(HashError::InvalidParameters(_))));

    let result = Hash::xxh32().with_seed(u64::from(u32::MAX)).compute(b"abc");
    assert!(result.is_ok());
}

#[test]
fn test_hex_is_zero_padded_to_width() {
    assert_eq!(FastDigest::U32(0xab).to_hex(), "000000ab");
    assert_eq!(FastDigest::U64(1).to_hex().len(), 16);
    assert_eq!(FastDigest::U128(1).to_hex().len(), 32);
}

#[test]
fn test_variant_names_parse() {
    assert_eq!(
        "xxh3-xxh128".parse::<XxhashVariant>(),
        Ok(XxhashVariant::Xxh3Xxh128)
    );
    assert_eq!("XXH32".parse::<XxhashVariant>(), Ok(XxhashVariant::Xxh32));
    assert!(matches!(
        "md5".parse::<XxhashVariant>(),
        Err(HashError::UnsupportedAlgorithm(_))
    ));

    let json = serde_json::to_string(&XxhashVariant::Xxh3Xxh64).expect("serialize");
    assert_eq!(json, "\"xxh3-xxh64\"");
}

proptest! {
    #[test]
    fn prop_digest_is_deterministic(input in proptest::collection::vec(any::<u8>(), 0..512), seed in any::<u32>()) {
        for variant in XxhashVariant::ALL {
            let first = fast::digest(variant, u64::from(seed), &input).expect("digest");
            let second = fast::digest(variant, u64::from(seed), &input).expect("digest");
            prop_assert_eq!(first, second);
            prop_assert_eq!(first.bit_width(), variant.bit_width());
        }
    }
}
