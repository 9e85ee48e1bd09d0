//! Demo panels
//!
//! Each panel owns its inputs and its last result. Panels never look at one
//! another, and switching away from a panel leaves its state as it was.

mod password;
mod token;
mod xxhash;

pub use password::{Argon2Form, BcryptForm, PasswordForm, PasswordPanel, VerifyOutcome};
pub use token::TokenPanel;
pub use xxhash::XxhashPanel;

use std::fmt;

/// Which panel is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PanelId {
    /// Argon2 hashing
    #[default]
    Argon2 = 0,
    /// bcrypt hashing
    Bcrypt = 1,
    /// xxHash digests
    Xxhash = 2,
    /// Token issue and verify
    Token = 3,
}

impl PanelId {
    /// Tab order
    pub const ALL: [PanelId; 4] = [
        PanelId::Argon2,
        PanelId::Bcrypt,
        PanelId::Xxhash,
        PanelId::Token,
    ];

    /// Position in the tab bar
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Tab to the right, wrapping
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Tab to the left, wrapping
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Panel for a `1`-based digit key
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        let n = digit.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelId::Argon2 => write!(f, "Argon2"),
            PanelId::Bcrypt => write!(f, "bcrypt"),
            PanelId::Xxhash => write!(f, "xxHash"),
            PanelId::Token => write!(f, "JWT"),
        }
    }
}
