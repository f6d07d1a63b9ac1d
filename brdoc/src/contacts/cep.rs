// CEP (Código de Endereçamento Postal) mask
use shared::utils::{apply_mask, extract_digits};

pub const CEP_MASK: &str = "#####-###";

/// `#####-###` when the input carries exactly 8 digits, `None` otherwise.
pub fn format_cep(cep: Option<&str>) -> Option<String> {
    let digits = extract_digits(cep)?;
    apply_mask(&digits, CEP_MASK)
}
