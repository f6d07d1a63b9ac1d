// CPF (Cadastro de Pessoas Físicas) validation and formatting
use super::{format_with_mask, mod11_digit, IdentifierValidator};
use shared::models::IdentifierKind;

const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

pub struct Cpf;

/// Both check digits for a 9-digit CPF base.
pub fn check_digits(base: &[u32; 9]) -> [u32; 2] {
    let first = mod11_digit(super::weighted_sum(base, &FIRST_WEIGHTS));

    let mut extended = [0u32; 10];
    extended[..9].copy_from_slice(base);
    extended[9] = first;
    let second = mod11_digit(super::weighted_sum(&extended, &SECOND_WEIGHTS));

    [first, second]
}

impl IdentifierValidator for Cpf {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Cpf
    }

    fn check_digits_match(&self, digits: &[u32]) -> bool {
        let mut base = [0u32; 9];
        base.copy_from_slice(&digits[..9]);
        check_digits(&base) == [digits[9], digits[10]]
    }
}

/// Validates a CPF given with or without its mask.
pub fn is_valid(cpf: &str) -> bool {
    Cpf.is_valid(Some(cpf))
}

/// `###.###.###-##` for exactly 11 digits, anything else is returned as is.
pub fn format(cpf: &str) -> String {
    format_with_mask(cpf, IdentifierKind::Cpf.mask())
}
