//! Validation and status messages for the WhatsApp trial form.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^[0-9]{{{}}}$", config::PHONE_DIGITS)).expect("phone pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("no number entered")]
    Empty,
    #[error("expected {expected} digits, got {0} characters", expected = config::PHONE_DIGITS)]
    WrongLength(usize),
    #[error("unexpected character {0:?}")]
    NonDigit(char),
}

/// Trims the input and accepts it only if it is exactly ten ASCII digits.
pub fn validate_phone(raw: &str) -> Result<String, PhoneError> {
    let phone = raw.trim();
    if PHONE_RE.is_match(phone) {
        return Ok(phone.to_string());
    }
    if phone.is_empty() {
        return Err(PhoneError::Empty);
    }
    if let Some(bad) = phone.chars().find(|c| !c.is_ascii_digit()) {
        return Err(PhoneError::NonDigit(bad));
    }
    Err(PhoneError::WrongLength(phone.chars().count()))
}

/// Keeps only the last four digits, for logs.
pub fn mask_phone(phone: &str) -> String {
    let hidden = phone.chars().count().saturating_sub(4);
    phone
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { '*' } else { c })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormNote {
    #[default]
    Empty,
    Invalid,
    Accepted,
}

impl FormNote {
    pub fn text(&self) -> &'static str {
        match self {
            FormNote::Empty => "",
            FormNote::Invalid => "⚠️ Please enter a valid 10-digit WhatsApp number.",
            FormNote::Accepted => "✅ Thank you! We'll reach out on WhatsApp shortly.",
        }
    }

    pub fn color(&self) -> Option<&'static str> {
        match self {
            FormNote::Empty => None,
            FormNote::Invalid => Some(config::NOTE_ERROR_COLOR),
            FormNote::Accepted => Some(config::NOTE_SUCCESS_COLOR),
        }
    }

    pub fn style(&self) -> String {
        self.color().map(|c| format!("color: {}", c)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ten_digits_with_surrounding_space() {
        assert_eq!(validate_phone("  9876543210\n"), Ok("9876543210".to_string()));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert_eq!(validate_phone("987654321"), Err(PhoneError::WrongLength(9)));
        assert_eq!(validate_phone("98765432101"), Err(PhoneError::WrongLength(11)));
    }

    #[test]
    fn rejects_formatting_characters() {
        assert_eq!(validate_phone("98765-43210"), Err(PhoneError::NonDigit('-')));
        assert_eq!(validate_phone("+919876543210"), Err(PhoneError::NonDigit('+')));
        assert_eq!(validate_phone("98765 43210"), Err(PhoneError::NonDigit(' ')));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Devanagari digits are still digits to Unicode, not to us
        assert_eq!(validate_phone("९८७६५४३२१०"), Err(PhoneError::NonDigit('९')));
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(validate_phone(""), Err(PhoneError::Empty));
        assert_eq!(validate_phone("   "), Err(PhoneError::Empty));
    }

    #[test]
    fn error_messages_read_well() {
        assert_eq!(PhoneError::WrongLength(9).to_string(), "expected 10 digits, got 9 characters");
    }

    #[test]
    fn masks_all_but_last_four() {
        assert_eq!(mask_phone("9876543210"), "******3210");
        assert_eq!(mask_phone("12"), "12");
    }

    #[test]
    fn note_text_and_colour() {
        assert_eq!(FormNote::default(), FormNote::Empty);
        assert_eq!(FormNote::Empty.style(), "");
        assert_eq!(FormNote::Invalid.style(), "color: #f87171");
        assert_eq!(FormNote::Accepted.style(), "color: #86efac");
        assert!(FormNote::Invalid.text().contains("10-digit"));
        assert!(FormNote::Accepted.text().starts_with("✅"));
    }
}
