//! Claims construction and validation

mod builder;
pub(crate) mod validation;

pub use builder::ClaimsBuilder;
