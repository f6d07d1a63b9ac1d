// Runtime settings, loaded from a JSON file or left at their defaults
use crate::error::BrDocError;
use serde::Deserialize;
use shared::models::IdentifierKind;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub phone: PhoneSettings,
    pub batch: BatchSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhoneSettings {
    /// DDD added to numbers typed without one.
    pub default_area_code: String,
}

impl Default for PhoneSettings {
    fn default() -> Self {
        PhoneSettings {
            default_area_code: "92".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BatchSettings {
    pub delimiter: String, // Should be a single byte, but JSON string is easier
    pub document_column: String,
    pub kind_column: String,
    /// Kind used when a row has no kind column; `None` infers it from the digit count.
    pub default_kind: Option<IdentifierKind>,
}

impl Default for BatchSettings {
    fn default() -> Self {
        BatchSettings {
            delimiter: ";".to_string(),
            document_column: "Documento".to_string(),
            kind_column: "Tipo".to_string(),
            default_kind: None,
        }
    }
}

impl BatchSettings {
    pub fn delimiter_byte(&self) -> Result<u8, BrDocError> {
        match self.delimiter.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(BrDocError::ConfigError(format!(
                "batch.delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ))),
        }
    }
}

impl Settings {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, BrDocError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&raw).map_err(|e| {
            BrDocError::ConfigError(format!("Invalid settings file '{}': {}", path.display(), e))
        })?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), ?settings, "Loaded settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), BrDocError> {
        let area = &self.phone.default_area_code;
        if area.len() != 2 || !area.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BrDocError::ConfigError(format!(
                "phone.default_area_code must be two digits, got '{}'",
                area
            )));
        }
        self.batch.delimiter_byte()?;
        if self.batch.document_column.trim().is_empty() {
            return Err(BrDocError::ConfigError("batch.document_column cannot be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_settings_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.phone.default_area_code, "92");
        assert_eq!(settings.batch.delimiter_byte().unwrap(), b';');
        assert_eq!(settings.batch.document_column, "Documento");
        assert_eq!(settings.batch.default_kind, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = create_settings_file(r#"{ "phone": { "default_area_code": "11" } }"#);
        let settings = Settings::load_from_file(file.path()).unwrap();
        assert_eq!(settings.phone.default_area_code, "11");
        assert_eq!(settings.batch, BatchSettings::default());
    }

    #[test]
    fn test_load_default_kind() {
        let file = create_settings_file(r#"{ "batch": { "delimiter": ",", "default_kind": "cnpj" } }"#);
        let settings = Settings::load_from_file(file.path()).unwrap();
        assert_eq!(settings.batch.delimiter_byte().unwrap(), b',');
        assert_eq!(settings.batch.default_kind, Some(IdentifierKind::Cnpj));
    }

    #[test]
    fn test_invalid_area_code_rejected() {
        let file = create_settings_file(r#"{ "phone": { "default_area_code": "092" } }"#);
        let err = Settings::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("two digits"));
    }

    #[test]
    fn test_invalid_delimiter_rejected() {
        let file = create_settings_file(r#"{ "batch": { "delimiter": ";;" } }"#);
        assert!(matches!(Settings::load_from_file(file.path()), Err(BrDocError::ConfigError(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let file = create_settings_file("{ not json");
        let err = Settings::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid settings file"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Settings::load_from_file("/definitely/not/here/brdoc.json");
        assert!(matches!(result, Err(BrDocError::IoError { .. })));
    }
}
