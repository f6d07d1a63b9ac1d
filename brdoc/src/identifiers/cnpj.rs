// CNPJ (Cadastro Nacional da Pessoa Jurídica) validation and formatting
use super::{format_with_mask, mod11_digit, weighted_sum, IdentifierValidator};
use shared::models::IdentifierKind;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 12] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3];

pub struct Cnpj;

/// Both check digits for a 12-digit CNPJ base (8-digit root + 4-digit branch).
pub fn check_digits(base: &[u32; 12]) -> [u32; 2] {
    let first = mod11_digit(weighted_sum(base, &FIRST_WEIGHTS));
    // The first check digit joins the second sum at weight 2.
    let second = mod11_digit(weighted_sum(base, &SECOND_WEIGHTS) + first * 2);
    [first, second]
}

impl IdentifierValidator for Cnpj {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Cnpj
    }

    fn truncates_overflow(&self) -> bool {
        true
    }

    fn check_digits_match(&self, digits: &[u32]) -> bool {
        let mut base = [0u32; 12];
        base.copy_from_slice(&digits[..12]);
        check_digits(&base) == [digits[12], digits[13]]
    }
}

/// Validates a CNPJ given with or without its mask. Extra trailing digits are ignored.
pub fn is_valid(cnpj: &str) -> bool {
    Cnpj.is_valid(Some(cnpj))
}

/// `##.###.###/####-##` for exactly 14 digits, anything else is returned as is.
pub fn format(cnpj: &str) -> String {
    format_with_mask(cnpj, IdentifierKind::Cnpj.mask())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use shared::models::FieldState;

    #[test]
    fn test_known_valid_cnpjs() {
        for cnpj in ["11222333000181", "11.222.333/0001-81", "11444777000161", "11.444.777/0001-61"] {
            assert!(is_valid(cnpj), "{} should be valid", cnpj);
        }
    }

    #[test]
    fn test_altered_check_digits_are_invalid() {
        assert!(!is_valid("11222333000182"));
        assert!(!is_valid("11222333000191"));
        assert!(!is_valid("11222333000180"));
    }

    #[test]
    fn test_repeated_digit_sentinels_are_invalid() {
        for d in 0..=9 {
            let cnpj = d.to_string().repeat(14);
            assert!(!is_valid(&cnpj), "{} must be rejected", cnpj);
        }
    }

    #[test]
    fn test_short_input_is_invalid() {
        assert!(!is_valid(""));
        assert!(!is_valid("1122233300018"));
        assert!(!is_valid("11144477735"));
    }

    #[test]
    fn test_overflow_is_truncated_before_checking() {
        assert!(is_valid("112223330001819"));
        assert!(is_valid("11.222.333/0001-81 ramal 42"));
        // Truncation happens before the sentinel check, so padding zeros cannot sneak through.
        assert!(!is_valid("000000000000000"));
    }

    #[test]
    fn test_check_digits() {
        assert_eq!(check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]), [8, 1]);
        assert_eq!(check_digits(&[1, 1, 4, 4, 4, 7, 7, 7, 0, 0, 0, 1]), [6, 1]);
    }

    // Weights from the position: 5..2 then 9..2 for the first digit, 6..2 then 9..2 for the second.
    fn reference_check_digits(d: &[u32]) -> (u32, u32) {
        let reduce = |sum: u32| {
            let r = sum % 11;
            if r < 2 { 0 } else { 11 - r }
        };
        let weight = |i: usize, head: u32, split: usize| if i < split { head - i as u32 } else { 9 + split as u32 - i as u32 };
        let first = reduce((0..12).map(|i| d[i] * weight(i, 5, 4)).sum());
        let second = reduce((0..13).map(|i| d[i] * weight(i, 6, 5)).sum());
        (first, second)
    }

    fn reference_is_valid(d: &[u32]) -> bool {
        if d.iter().all(|x| *x == d[0]) {
            return false;
        }
        reference_check_digits(d) == (d[12], d[13])
    }

    #[test]
    fn test_reference_weights() {
        let base = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1, 8, 1];
        assert_eq!(reference_check_digits(&base), (8, 1));
    }

    #[test]
    fn test_random_cnpjs_agree_with_reference() {
        let mut rng = StdRng::seed_from_u64(0xc4_91);
        let mut valid_seen = 0;
        for round in 0..5000 {
            let mut d: Vec<u32> = (0..14).map(|_| rng.random_range(0..10)).collect();
            if round % 2 == 0 {
                d[12] = reference_check_digits(&d).0;
                d[13] = reference_check_digits(&d).1;
            }
            let cnpj: String = d.iter().map(|x| char::from_digit(*x, 10).unwrap()).collect();
            let expected = reference_is_valid(&d);
            valid_seen += expected as usize;
            assert_eq!(is_valid(&cnpj), expected, "{}", cnpj);
        }
        assert!(valid_seen >= 2000);
    }

    #[test]
    fn test_format() {
        assert_eq!(format("11222333000181"), "11.222.333/0001-81");
        assert_eq!(format("1122233300018"), "1122233300018");
    }

    #[test]
    fn test_format_passes_through_its_own_output() {
        let formatted = format("11222333000181");
        assert_eq!(format(&formatted), formatted);
    }

    #[test]
    fn test_classify() {
        assert_eq!(Cnpj.classify(Some("11.222.333/0001-81")), FieldState::Valid);
        assert_eq!(Cnpj.classify(Some("11.222.333/0001-82")), FieldState::Invalid);
        assert_eq!(Cnpj.classify(Some("11.222.333/0001-8_")), FieldState::Incomplete);
    }
}
