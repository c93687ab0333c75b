//! Input checks run before any request is built.

use crate::error::FormError;
use crate::types::{ContactSubmission, FormInput};

pub const MIN_PHONE_DIGITS: usize = 7;
pub const MAX_PHONE_DIGITS: usize = 15;

/// Trim the fields, check presence and digit count, and prepend the
/// country code to the whitespace-free phone number.
pub fn validate(input: &FormInput) -> Result<ContactSubmission, FormError> {
    let name = input.name.trim();
    let phone = input.phone.trim();
    if name.is_empty() || phone.is_empty() {
        return Err(FormError::MissingFields);
    }

    let digits = strip_whitespace(phone);
    if !is_valid_phone(&digits) {
        return Err(FormError::InvalidPhone);
    }

    Ok(ContactSubmission {
        name: name.to_string(),
        phone: format!("{}{digits}", input.country_code),
    })
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn is_valid_phone(digits: &str) -> bool {
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, phone: &str, country_code: &str) -> FormInput {
        FormInput {
            name: name.to_string(),
            phone: phone.to_string(),
            country_code: country_code.to_string(),
        }
    }

    #[test]
    fn trims_name_and_prepends_country_code() {
        let sub = validate(&input("  Ana  ", " 555 123 4567 ", "1")).unwrap();
        assert_eq!(sub.name, "Ana");
        assert_eq!(sub.phone, "15551234567");
    }

    #[test]
    fn empty_country_code_sends_bare_digits() {
        let sub = validate(&input("Ana", "5551234567", "")).unwrap();
        assert_eq!(sub.phone, "5551234567");
    }

    #[test]
    fn blank_fields_are_missing() {
        assert_eq!(validate(&input("   ", "5551234567", "1")), Err(FormError::MissingFields));
        assert_eq!(validate(&input("Ana", "  ", "1")), Err(FormError::MissingFields));
    }

    #[test]
    fn three_digits_is_too_short() {
        assert_eq!(validate(&input("Ana", "123", "1")), Err(FormError::InvalidPhone));
    }

    #[test]
    fn digit_count_bounds_are_inclusive() {
        assert!(validate(&input("Ana", "1234567", "")).is_ok());
        assert!(validate(&input("Ana", "123456789012345", "")).is_ok());
        assert_eq!(
            validate(&input("Ana", "123456", "")),
            Err(FormError::InvalidPhone)
        );
        assert_eq!(
            validate(&input("Ana", "1234567890123456", "")),
            Err(FormError::InvalidPhone)
        );
    }

    #[test]
    fn punctuation_is_rejected() {
        assert_eq!(
            validate(&input("Ana", "+1-555-123-4567", "")),
            Err(FormError::InvalidPhone)
        );
        assert_eq!(
            validate(&input("Ana", "555１２３4567", "")),
            Err(FormError::InvalidPhone)
        );
    }
}
