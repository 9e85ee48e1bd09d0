//! CLI command definitions

use clap::{Parser, Subcommand};
use hashlab_hashing::{Argon2Variant, XxhashVariant};
use hashlab_key::Curve;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "hashlab")]
#[command(about = "Interactive playground for password hashing, fast hashing and ES256/ES384 tokens")]
#[command(version)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (default: <config dir>/hashlab/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// One-shot operations; none starts the terminal UI
#[derive(Clone, Subcommand)]
pub enum Commands {
    /// Argon2 password hashing
    Argon2 {
        #[command(subcommand)]
        action: Argon2Command,
    },

    /// bcrypt password hashing
    Bcrypt {
        #[command(subcommand)]
        action: BcryptCommand,
    },

    /// xxHash fast hashing
    ///
    /// Prints the digest as fixed-width lowercase hex.
    Xxhash {
        /// Text to hash
        #[arg(long)]
        input: String,

        /// xxh32, xxh64, xxh3, xxh3-xxh64 or xxh3-xxh128 (default from config)
        #[arg(long)]
        variant: Option<XxhashVariant>,

        /// Seed (default from config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// ECDSA-signed JSON Web Tokens
    Jwt {
        #[command(subcommand)]
        action: JwtCommand,
    },
}

/// `argon2` actions
#[derive(Clone, Subcommand)]
pub enum Argon2Command {
    /// Hash a password into a PHC string
    Hash {
        /// Password to hash
        #[arg(long)]
        password: String,

        /// argon2d, argon2i or argon2id
        #[arg(long)]
        variant: Option<Argon2Variant>,

        /// Passes over memory
        #[arg(long)]
        time_cost: Option<u32>,

        /// Memory in KiB
        #[arg(long)]
        memory_cost: Option<u32>,

        /// Lanes
        #[arg(long)]
        parallelism: Option<u32>,
    },

    /// Check a password against a PHC string
    Verify {
        /// Password to check
        #[arg(long)]
        password: String,

        /// PHC string to check against
        #[arg(long)]
        hash: String,
    },
}

/// `bcrypt` actions
#[derive(Clone, Subcommand)]
pub enum BcryptCommand {
    /// Hash a password
    Hash {
        /// Password to hash
        #[arg(long)]
        password: String,

        /// Work factor, 4 to 31
        #[arg(long)]
        cost: Option<u32>,
    },

    /// Check a password against a bcrypt hash
    Verify {
        /// Password to check
        #[arg(long)]
        password: String,

        /// Hash to check against
        #[arg(long)]
        hash: String,
    },
}

/// `jwt` actions
#[derive(Clone, Subcommand)]
pub enum JwtCommand {
    /// Generate a key pair and print both halves as PEM
    Keygen {
        /// p256 or p384
        #[arg(long, default_value = "p256")]
        curve: Curve,
    },

    /// Sign claims into a compact token
    ///
    /// Without --private-key-file a fresh P-256 key is generated and its
    /// public half printed alongside the token.
    Issue {
        /// Claims object as JSON (default: demo claims issued now)
        #[arg(long)]
        claims: Option<String>,

        /// PKCS#8 PEM private key
        #[arg(long)]
        private_key_file: Option<PathBuf>,
    },

    /// Verify a token's signature and claims
    Verify {
        /// Compact token
        #[arg(long)]
        token: String,

        /// SPKI PEM public key
        #[arg(long)]
        public_key_file: PathBuf,

        /// Accepted issuer; repeatable (default from config)
        #[arg(long)]
        issuer: Vec<String>,

        /// Accepted audience; repeatable (default from config)
        #[arg(long)]
        audience: Vec<String>,
    },
}
