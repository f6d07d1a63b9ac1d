use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Brazilian national identifiers handled by the validators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    Cpf,
    Cnpj,
    Pis,
}

impl IdentifierKind {
    pub const ALL: [IdentifierKind; 3] = [IdentifierKind::Cpf, IdentifierKind::Cnpj, IdentifierKind::Pis];

    /// Number of digits of a complete identifier, check digits included.
    pub fn expected_len(&self) -> usize {
        match self {
            IdentifierKind::Cpf | IdentifierKind::Pis => 11,
            IdentifierKind::Cnpj => 14,
        }
    }

    /// Display mask, `#` marks a digit slot.
    pub fn mask(&self) -> &'static str {
        match self {
            IdentifierKind::Cpf => "###.###.###-##",
            IdentifierKind::Cnpj => "##.###.###/####-##",
            IdentifierKind::Pis => "###.#####.##-#",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IdentifierKind::Cpf => "CPF",
            IdentifierKind::Cnpj => "CNPJ",
            IdentifierKind::Pis => "PIS/PASEP",
        }
    }

    /// Guesses the kind from a digit count. 11 digits is ambiguous between CPF and PIS,
    /// CPF wins because it is by far the most common one on forms.
    pub fn infer_from_len(len: usize) -> Option<IdentifierKind> {
        match len {
            11 => Some(IdentifierKind::Cpf),
            14 => Some(IdentifierKind::Cnpj),
            _ => None,
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IdentifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cpf" => Ok(IdentifierKind::Cpf),
            "cnpj" => Ok(IdentifierKind::Cnpj),
            "pis" | "pasep" | "pis/pasep" | "nis" => Ok(IdentifierKind::Pis),
            other => Err(format!("Unknown identifier kind '{}'", other)),
        }
    }
}

/// Display state of an input field while the user is typing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    Valid,
    Invalid,
    /// Not enough (or too many) digits to judge yet.
    Incomplete,
}

impl FieldState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldState::Valid => "valid",
            FieldState::Invalid => "invalid",
            FieldState::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationReport {
    pub kind: IdentifierKind,
    pub input: String,
    pub digits: String,
    pub valid: bool,
    pub state: FieldState,
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub incomplete: usize,
    pub reports: Vec<ValidationReport>,
}

impl BatchSummary {
    pub fn from_reports(source: &str, reports: Vec<ValidationReport>) -> Self {
        let count = |state: FieldState| reports.iter().filter(|r| r.state == state).count();
        Self {
            source: source.to_string(),
            generated_at: Utc::now(),
            total: reports.len(),
            valid: count(FieldState::Valid),
            invalid: count(FieldState::Invalid),
            incomplete: count(FieldState::Incomplete),
            reports,
        }
    }
}
