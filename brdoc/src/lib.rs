// brdoc library root
// Validation and formatting of Brazilian documents, plus the pieces the binary is built from.

pub mod cli;
pub mod config;
pub mod contacts;
pub mod data;
pub mod error;
pub mod identifiers;
pub mod services;

pub use error::BrDocError;
pub use identifiers::{validator_for, IdentifierValidator};
