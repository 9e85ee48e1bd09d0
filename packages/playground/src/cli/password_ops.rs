//! Argon2 and bcrypt subcommands

use super::commands::{Argon2Command, BcryptCommand};
use crate::config::PlaygroundConfig;
use hashlab_common::{Error, LoggingTransformer};
use hashlab_hashing::{Hash, HashResult, Verification};
use serde_json::json;
use zeroize::Zeroizing;

/// `argon2 hash` and `argon2 verify`
pub async fn handle_argon2(
    config: &PlaygroundConfig,
    action: Argon2Command,
    use_json: bool,
) -> hashlab_common::Result<()> {
    match action {
        Argon2Command::Hash {
            password,
            variant,
            time_cost,
            memory_cost,
            parallelism,
        } => {
            let password = Zeroizing::new(password);
            let mut params = config.argon2;
            if let Some(variant) = variant {
                params.variant = variant;
            }
            if let Some(time_cost) = time_cost {
                params.time_cost = time_cost;
            }
            if let Some(memory_cost) = memory_cost {
                params.memory_cost = memory_cost;
            }
            if let Some(parallelism) = parallelism {
                params.parallelism = parallelism;
            }

            let hashed = Hash::argon2()
                .with_params(params)
                .hash(password.as_str())
                .await
                .map_err(Error::classified)?;
            print_hash("argon2", &hashed, use_json);
            Ok(())
        }
        Argon2Command::Verify { password, hash } => {
            let password = Zeroizing::new(password);
            let checked = Hash::argon2()
                .verify(password.as_str(), hash.as_str())
                .await
                .map_err(Error::classified)?;
            print_verification("argon2", &checked, use_json);
            Ok(())
        }
    }
}

/// `bcrypt hash` and `bcrypt verify`
pub async fn handle_bcrypt(
    config: &PlaygroundConfig,
    action: BcryptCommand,
    use_json: bool,
) -> hashlab_common::Result<()> {
    match action {
        BcryptCommand::Hash { password, cost } => {
            let password = Zeroizing::new(password);
            let hashed = Hash::bcrypt()
                .cost(cost.unwrap_or(config.bcrypt.cost))
                .hash(password.as_str())
                .await
                .map_err(Error::classified)?;
            print_hash("bcrypt", &hashed, use_json);
            Ok(())
        }
        BcryptCommand::Verify { password, hash } => {
            let password = Zeroizing::new(password);
            let checked = Hash::bcrypt()
                .verify(password.as_str(), hash.as_str())
                .await
                .map_err(Error::classified)?;
            print_verification("bcrypt", &checked, use_json);
            Ok(())
        }
    }
}

fn print_hash(scheme: &str, hashed: &HashResult<String>, use_json: bool) {
    LoggingTransformer::log_performance_metric(scheme, hashed.elapsed_ms(), true);
    if use_json {
        println!(
            "{}",
            json!({
                "success": true,
                "operation": "hash",
                "scheme": scheme,
                "hash": hashed.value(),
                "elapsed_ms": hashed.elapsed_ms(),
            })
        );
    } else {
        println!("{}", hashed.value());
    }
}

fn print_verification(scheme: &str, checked: &HashResult<Verification>, use_json: bool) {
    let verified = checked.value().is_verified();
    if !verified {
        LoggingTransformer::log_rejection(scheme, "password does not match");
    }
    if use_json {
        println!(
            "{}",
            json!({
                "success": true,
                "operation": "verify",
                "scheme": scheme,
                "verified": verified,
                "elapsed_ms": checked.elapsed_ms(),
            })
        );
    } else if verified {
        println!("Password matches");
    } else {
        println!("Password does not match");
    }
}
