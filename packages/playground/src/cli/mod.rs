//! Command-line interface
//!
//! Every panel operation is also reachable as a one-shot subcommand, which
//! is how the playground is scripted and smoke-tested.

pub mod commands;
pub mod jwt_ops;
pub mod password_ops;
pub mod xxhash_ops;

use crate::config::PlaygroundConfig;
pub use commands::{Argon2Command, BcryptCommand, Cli, Commands, JwtCommand};

/// Run one subcommand
pub async fn process_command(
    config: &PlaygroundConfig,
    command: Commands,
    use_json: bool,
) -> hashlab_common::Result<()> {
    match command {
        Commands::Argon2 { action } => password_ops::handle_argon2(config, action, use_json).await,
        Commands::Bcrypt { action } => password_ops::handle_bcrypt(config, action, use_json).await,
        Commands::Xxhash {
            input,
            variant,
            seed,
        } => xxhash_ops::handle_xxhash(config, &input, variant, seed, use_json),
        Commands::Jwt { action } => match action {
            JwtCommand::Keygen { curve } => jwt_ops::handle_keygen(curve, use_json),
            JwtCommand::Issue {
                claims,
                private_key_file,
            } => jwt_ops::handle_issue(claims.as_deref(), private_key_file.as_deref(), use_json),
            JwtCommand::Verify {
                token,
                public_key_file,
                issuer,
                audience,
            } => jwt_ops::handle_verify(config, &token, &public_key_file, issuer, audience, use_json),
        },
    }
}
