// Digit handling shared by the validators, the formatters and anything reading user input.

/// Keeps only the ASCII digits of `input`, in their original order.
/// An absent input stays absent.
pub fn extract_digits(input: Option<&str>) -> Option<String> {
    input.map(digits_only)
}

pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn is_all_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Fills the `#` slots of `mask` with `digits`.
/// Returns `None` unless `digits` is made only of digits and has exactly one per slot.
pub fn apply_mask(digits: &str, mask: &str) -> Option<String> {
    let slots = mask.chars().filter(|c| *c == '#').count();
    if !is_all_digits(digits) || digits.len() != slots {
        return None;
    }

    let mut source = digits.chars();
    let masked = mask
        .chars()
        .map(|c| if c == '#' { source.next().unwrap_or(c) } else { c })
        .collect();
    Some(masked)
}
