// Identifier kinds, field states and reports, plus the digit helpers every consumer needs.
pub mod models;
pub mod utils;
