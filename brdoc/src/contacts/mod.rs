// Contact helpers: phone numbers and postal codes
pub mod cep;
pub mod phone;

pub use cep::format_cep;
