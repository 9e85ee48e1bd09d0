//! hashlab: a terminal playground for password hashing, fast hashing and
//! ECDSA-signed JSON Web Tokens
//!
//! Four panels share one tabbed shell:
//! - Argon2 and bcrypt: hash a password, check a password against a hash
//! - xxHash: digest text with any of the five variants and a seed
//! - JWT: edit claims and header, sign with a per-process P-256 key, verify
//!
//! Without a subcommand the binary runs the terminal UI; each subcommand runs
//! one panel operation and exits.

#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod edit;
pub mod notify;
pub mod panels;
pub mod tui;

use cli::Cli;
use config::PlaygroundConfig;
use hashlab_common::LoggingTransformer;
use serde_json::json;

/// Run what `cli` asks for
///
/// Subcommands log to stderr; the terminal UI logs to
/// [`PlaygroundConfig::log_path`].
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = PlaygroundConfig::load(cli.config.as_deref())?;

    match cli.command {
        Some(command) => {
            LoggingTransformer::init();
            if let Err(e) = cli::process_command(&config, command, cli.json).await {
                if cli.json {
                    println!(
                        "{}",
                        json!({
                            "success": false,
                            "kind": e.kind().to_string(),
                            "error": e.user_message(),
                        })
                    );
                }
                return Err(e.into());
            }
            Ok(())
        }
        None if cli.json => anyhow::bail!("--json needs a subcommand"),
        None => {
            LoggingTransformer::init_to_file(&config.log_path())?;
            tui::run_tui(config).await
        }
    }
}
