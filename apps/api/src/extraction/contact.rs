use crate::extraction::patterns::{EMAIL_RE, PHONE_RE};
use crate::models::resume::ContactInfo;

const MIN_PHONE_DIGITS: usize = 10;

/// Finds the first email address and the first plausible phone number.
///
/// Line breaks are flattened to spaces first so a number or address wrapped
/// across lines by the PDF layout still matches.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    let flat = text.replace(['\n', '\r'], " ");

    let email = EMAIL_RE.find(&flat).map(|m| m.as_str().to_string());
    let phone = PHONE_RE
        .find(&flat)
        .and_then(|m| normalize_phone(m.as_str()));

    ContactInfo { email, phone }
}

/// Strips formatting, keeping digits and a leading `+`.
/// Returns `None` when fewer than ten digits remain.
fn normalize_phone(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    for (i, c) in raw.trim().chars().enumerate() {
        if c.is_ascii_digit() || (c == '+' && i == 0) {
            out.push(c);
        }
    }

    let digits = out.chars().filter(|c| c.is_ascii_digit()).count();
    (digits >= MIN_PHONE_DIGITS).then_some(out)
}
