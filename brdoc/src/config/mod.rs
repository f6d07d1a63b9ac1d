// Configuration module
pub mod settings;

pub use settings::{BatchSettings, PhoneSettings, Settings};
