//! xxHash subcommand

use crate::config::PlaygroundConfig;
use hashlab_common::Error;
use hashlab_hashing::{Hash, XxhashVariant};
use serde_json::json;

/// `xxhash`; flags override the configured variant and seed
pub fn handle_xxhash(
    config: &PlaygroundConfig,
    input: &str,
    variant: Option<XxhashVariant>,
    seed: Option<u64>,
    use_json: bool,
) -> hashlab_common::Result<()> {
    let variant = variant.unwrap_or(config.xxhash.variant);
    let seed = seed.unwrap_or(config.xxhash.seed);
    let digest = Hash::xxhash(variant)
        .with_seed(seed)
        .compute(input)
        .map_err(Error::classified)?;

    if use_json {
        println!(
            "{}",
            json!({
                "success": true,
                "operation": "xxhash",
                "variant": variant.as_str(),
                "seed": seed,
                "digest": digest.value().to_hex(),
                "elapsed_us": digest.elapsed().as_micros() as u64,
            })
        );
    } else {
        println!("{}", digest.value());
    }
    Ok(())
}
