use anyhow::anyhow;
use csv::{ReaderBuilder, StringRecord, Trim};
use shared::models::{IdentifierKind, ValidationReport};
use shared::utils::digits_only;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::BatchSettings;
use crate::error::BrDocError;
use crate::identifiers;

pub struct BatchLoader;

impl BatchLoader {
    // CSV Header: Documento;Tipo (Tipo is optional, column names come from BatchSettings)
    // Example Row: 111.444.777-35;cpf
    pub fn load_reports(file_path: &Path, settings: &BatchSettings) -> Result<Vec<ValidationReport>, BrDocError> {
        let delimiter = settings.delimiter_byte()?;
        let file = File::open(file_path)
            .map_err(|e| anyhow!("Failed to open CSV file '{}': {}", file_path.display(), e))?;
        let mut rdr = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(BufReader::new(file));

        let headers = rdr.headers()?.clone();
        if !headers.iter().any(|h| h == settings.document_column) {
            return Err(BrDocError::CsvDataFormatError(format!(
                "Missing '{}' column in CSV header of '{}'",
                settings.document_column,
                file_path.display()
            )));
        }

        let mut reports = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2;
            let record = result?;

            let document = Self::get_field(&record, &headers, &settings.document_column).ok_or_else(|| {
                BrDocError::CsvDataFormatError(format!(
                    "Missing '{}' field in CSV record at line {}",
                    settings.document_column, line
                ))
            })?;

            let kind = match Self::get_field(&record, &headers, &settings.kind_column).filter(|k| !k.is_empty()) {
                Some(raw_kind) => raw_kind.parse::<IdentifierKind>().map_err(|_| {
                    BrDocError::UnknownKind(format!("'{}' in column '{}' at line {}", raw_kind, settings.kind_column, line))
                })?,
                None => settings.default_kind.unwrap_or_else(|| Self::infer_kind(document)),
            };

            tracing::trace!(line, %kind, document, "Checking batch record");
            reports.push(identifiers::report(kind, document));
        }

        tracing::debug!(path = %file_path.display(), count = reports.len(), "Loaded batch records");
        Ok(reports)
    }

    // Anything that is not clearly a CNPJ is checked as a CPF and will come out incomplete.
    fn infer_kind(document: &str) -> IdentifierKind {
        IdentifierKind::infer_from_len(digits_only(document).len()).unwrap_or(IdentifierKind::Cpf)
    }

    // Helper to get field by header name; None when the header or the cell is missing.
    fn get_field<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str) -> Option<&'a str> {
        headers
            .iter()
            .position(|header| header == name)
            .and_then(|pos| record.get(pos))
    }
}
