// DocumentService: the entry point used by the command line front end.
// Requests are logged here and dispatched to the identifier, contact and batch modules.
use shared::models::{BatchSummary, FieldState, IdentifierKind, ValidationReport};
use std::path::Path;

use crate::config::Settings;
use crate::contacts::{cep, phone};
use crate::data::BatchLoader;
use crate::error::BrDocError;
use crate::identifiers::{self, validator_for};

pub struct DocumentService {
    settings: Settings,
}

impl DocumentService {
    pub fn new(settings: Settings) -> Self {
        DocumentService { settings }
    }

    pub fn validate(&self, kind: IdentifierKind, input: &str) -> bool {
        let validator = validator_for(kind);
        let valid = validator.is_valid(Some(input));
        tracing::debug!(kind = validator.name(), input, valid, "Validated identifier");
        valid
    }

    pub fn format(&self, kind: IdentifierKind, input: &str) -> String {
        tracing::debug!(%kind, input, "Formatting identifier");
        identifiers::format_with_mask(input, kind.mask())
    }

    pub fn classify(&self, kind: IdentifierKind, input: &str) -> FieldState {
        validator_for(kind).classify(Some(input))
    }

    pub fn report(&self, kind: IdentifierKind, input: &str) -> ValidationReport {
        let report = identifiers::report(kind, input);
        tracing::debug!(%kind, input, state = %report.state, "Built validation report");
        report
    }

    pub fn normalize_phone(&self, input: &str) -> Option<String> {
        let normalized = phone::normalize(Some(input), &self.settings.phone.default_area_code);
        if normalized.is_none() {
            tracing::debug!(input, "Input is not a usable phone number");
        }
        normalized
    }

    pub fn format_phone(&self, input: &str, with_area_code: bool) -> Option<String> {
        self.normalize_phone(input)
            .map(|number| phone::format(&number, with_area_code))
    }

    pub fn format_cep(&self, input: &str) -> Option<String> {
        cep::format_cep(Some(input))
    }

    pub fn check_file(&self, file_path: &Path) -> Result<BatchSummary, BrDocError> {
        tracing::info!(path = %file_path.display(), "Checking identifier batch");
        // Failures are reported once, by the caller.
        let reports = BatchLoader::load_reports(file_path, &self.settings.batch)?;

        let summary = BatchSummary::from_reports(&file_path.display().to_string(), reports);
        tracing::info!(
            path = %file_path.display(),
            total = summary.total,
            valid = summary.valid,
            invalid = summary.invalid,
            incomplete = summary.incomplete,
            "Finished identifier batch"
        );
        Ok(summary)
    }
}

impl Default for DocumentService {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
