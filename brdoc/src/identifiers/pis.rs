// PIS/PASEP (NIS) validation and formatting
use super::{format_with_mask, mod11_digit, weighted_sum, IdentifierValidator};
use shared::models::IdentifierKind;

const WEIGHTS: [u32; 10] = [3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

pub struct Pis;

pub fn check_digit(base: &[u32; 10]) -> u32 {
    mod11_digit(weighted_sum(base, &WEIGHTS))
}

impl IdentifierValidator for Pis {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Pis
    }

    fn truncates_overflow(&self) -> bool {
        true
    }

    fn check_digits_match(&self, digits: &[u32]) -> bool {
        let mut base = [0u32; 10];
        base.copy_from_slice(&digits[..10]);
        check_digit(&base) == digits[10]
    }
}

pub fn is_valid(pis: &str) -> bool {
    Pis.is_valid(Some(pis))
}

/// `###.#####.##-#` for exactly 11 digits, anything else is returned as is.
pub fn format(pis: &str) -> String {
    format_with_mask(pis, IdentifierKind::Pis.mask())
}
