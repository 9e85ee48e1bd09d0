//! Error handling with context propagation
//!
//! Provides:
//! - A cheaply clonable error with kind, context, source and backtrace
//! - The playground's failure taxonomy (`ErrorKind`)
//! - Extension traits for attaching context to results and options

pub mod constructors;
pub mod display;
pub mod extensions;
pub mod logging;
pub mod macros;
pub mod types;

pub use extensions::{OptionExt, ResultExt};
pub use logging::LoggingTransformer;
pub use types::{Classify, Error, ErrorKind, Result};
