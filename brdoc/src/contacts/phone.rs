// Brazilian phone number normalization (DDD + number) and display masks
use shared::utils::{extract_digits, is_all_digits};

fn is_mobile_prefix(c: u8) -> bool {
    c == b'8' || c == b'9'
}

/// Brings a contact number, masked or not, to `DDD + number` form.
///
/// Legacy 7-digit landlines gain the area code and the `3` prefix, mobiles
/// missing the ninth digit get it inserted, numbers without area code get
/// `area_code`. Returns `None` for absent input, placeholder numbers made only
/// of zeros and ones, and lengths that cannot be a phone number.
pub fn normalize(contact: Option<&str>, area_code: &str) -> Option<String> {
    let digits = extract_digits(contact)?;
    if !digits.is_empty() && digits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }

    let bytes = digits.as_bytes();
    match digits.len() {
        7 => Some(format!("{}3{}", area_code, digits)),
        8 if is_mobile_prefix(bytes[0]) => Some(format!("{}9{}", area_code, digits)),
        8 | 9 => Some(format!("{}{}", area_code, digits)),
        10 if is_mobile_prefix(bytes[2]) => Some(format!("{}9{}", &digits[..2], &digits[2..])),
        10 | 11 => Some(digits),
        _ => None,
    }
}

/// `(AA) NNNN-NNNN` or `(AA) NNNNN-NNNN` for normalized numbers; without area code
/// only the local part is kept. Other input is returned unchanged.
pub fn format(contact: &str, with_area_code: bool) -> String {
    if !is_all_digits(contact) {
        return contact.to_string();
    }

    let split = match contact.len() {
        10 => 6,
        11 => 7,
        _ => return contact.to_string(),
    };
    let local = format!("{}-{}", &contact[2..split], &contact[split..]);
    if with_area_code {
        format!("({}) {}", &contact[..2], local)
    } else {
        local
    }
}
