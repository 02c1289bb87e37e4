//! Phone number utilities for the Pakistani market
//!
//! Customers register with a local mobile number (`03XXXXXXXXX`) or its
//! E.164 form (`+923XXXXXXXXX`). Everything that leaves the system (SMS
//! dispatch) uses E.164; everything that enters a log line is masked.

use once_cell::sync::Lazy;
use regex::Regex;

/// Local-format Pakistani mobile number: leading 03, eleven digits total
static PK_MOBILE_LOCAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^03[0-4]\d{8}$").unwrap()
});

/// E.164-format Pakistani mobile number
static PK_MOBILE_E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+923[0-4]\d{8}$").unwrap()
});

/// Validates a Pakistani mobile number in local or E.164 format
///
/// # Examples
///
/// ```
/// use fk_shared::utils::phone::is_valid_pk_mobile;
///
/// assert!(is_valid_pk_mobile("03001234567"));
/// assert!(is_valid_pk_mobile("+923001234567"));
/// assert!(!is_valid_pk_mobile("0300123456"));   // too short
/// assert!(!is_valid_pk_mobile("+13001234567")); // wrong country
/// ```
pub fn is_valid_pk_mobile(phone: &str) -> bool {
    PK_MOBILE_LOCAL_REGEX.is_match(phone) || PK_MOBILE_E164_REGEX.is_match(phone)
}

/// Normalize a Pakistani mobile number to E.164 form
///
/// Accepts local (`0300...`), bare (`300...`, `92300...`) and already
/// normalized (`+92300...`) inputs, stripping common separator characters.
/// Returns `None` when the number cannot be a Pakistani mobile.
pub fn normalize_to_e164(phone: &str) -> Option<String> {
    let cleaned: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    let candidate = if let Some(rest) = cleaned.strip_prefix("+92") {
        format!("+92{rest}")
    } else if let Some(rest) = cleaned.strip_prefix("92") {
        format!("+92{rest}")
    } else if let Some(rest) = cleaned.strip_prefix('0') {
        format!("+92{rest}")
    } else if !cleaned.starts_with('+') {
        format!("+92{cleaned}")
    } else {
        cleaned
    };

    if PK_MOBILE_E164_REGEX.is_match(&candidate) {
        Some(candidate)
    } else {
        None
    }
}

/// Mask a phone number for logging (show only the last 4 digits)
pub fn mask_phone(phone: &str) -> String {
    if phone.len() <= 4 {
        return "*".repeat(phone.len());
    }
    format!("***{}", &phone[phone.len() - 4..])
}
