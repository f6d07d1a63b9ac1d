// Brazilian identifier validators
pub mod cnpj;
pub mod cpf;
pub mod pis;

pub use cnpj::Cnpj;
pub use cpf::Cpf;
pub use pis::Pis;

use shared::models::{FieldState, IdentifierKind, ValidationReport};
use shared::utils::{apply_mask, digits_only, extract_digits};

// Common trait for all identifier kinds. Every method is total: malformed or absent
// input is "not valid" or passes through unchanged, never an error.
pub trait IdentifierValidator: Send + Sync {
    fn kind(&self) -> IdentifierKind;

    /// Whether digit strings longer than the expected length are cut down before checking.
    fn truncates_overflow(&self) -> bool {
        false
    }

    /// Compares the computed check digit(s) against the trailing digit(s).
    /// `digits` always has the expected length and only ASCII digits.
    fn check_digits_match(&self, digits: &[u32]) -> bool;

    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Extracted digits ready for the checksum, or `None` when the input is absent or absurd.
    fn prepare(&self, input: Option<&str>) -> Option<String> {
        let mut digits = extract_digits(input)?;
        let expected = self.kind().expected_len();
        if self.truncates_overflow() && digits.len() > expected {
            digits.truncate(expected);
        }
        if is_absurd(&digits, expected) {
            return None;
        }
        Some(digits)
    }

    fn is_valid(&self, input: Option<&str>) -> bool {
        match self.prepare(input) {
            Some(digits) => self.check_digits_match(&to_digit_vec(&digits)),
            None => false,
        }
    }

    fn format(&self, input: Option<&str>) -> Option<String> {
        input.map(|value| format_with_mask(value, self.kind().mask()))
    }

    /// Display state for a field being typed: anything but exactly the expected
    /// number of digits is still incomplete.
    fn classify(&self, input: Option<&str>) -> FieldState {
        let digits = extract_digits(input).unwrap_or_default();
        if digits.len() != self.kind().expected_len() {
            FieldState::Incomplete
        } else if self.is_valid(Some(&digits)) {
            FieldState::Valid
        } else {
            FieldState::Invalid
        }
    }
}

pub fn validator_for(kind: IdentifierKind) -> &'static dyn IdentifierValidator {
    match kind {
        IdentifierKind::Cpf => &Cpf,
        IdentifierKind::Cnpj => &Cnpj,
        IdentifierKind::Pis => &Pis,
    }
}

/// Full outcome for one value: digits, checksum verdict, field state and display form.
pub fn report(kind: IdentifierKind, input: &str) -> ValidationReport {
    let validator = validator_for(kind);
    let digits = digits_only(input);
    let state = validator.classify(Some(input));
    ValidationReport {
        kind,
        input: input.to_string(),
        valid: validator.is_valid(Some(input)),
        state,
        formatted: format_with_mask(&digits, kind.mask()),
        digits,
    }
}

/// True when the field holds no digit at all (mask characters are ignored).
pub fn is_empty(input: Option<&str>) -> bool {
    extract_digits(input).map_or(true, |digits| digits.is_empty())
}

/// Wrong length, or one of the ten repeated-digit placeholders (`000...0` to `999...9`).
/// Those pass the checksum for degenerate reasons and are never real identifiers.
pub fn is_absurd(digits: &str, expected_len: usize) -> bool {
    if digits.len() != expected_len {
        return true;
    }
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => true,
    }
}

pub(crate) fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

// Modulo-11 reduction shared by all three kinds. `11 - r >= 10` (the CPF wording) and
// `r < 2` (the CNPJ/PIS wording) select the same remainders, 0 and 1.
pub(crate) fn mod11_digit(sum: u32) -> u32 {
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

pub(crate) fn to_digit_vec(digits: &str) -> Vec<u32> {
    digits.chars().filter_map(|c| c.to_digit(10)).collect()
}

pub(crate) fn format_with_mask(value: &str, mask: &str) -> String {
    apply_mask(value, mask).unwrap_or_else(|| value.to_string())
}
