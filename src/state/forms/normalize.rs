//! Keystroke normalization for form fields

use super::field::Field;

/// Maximum number of digits kept in a card number
pub const CARD_NUMBER_MAX_DIGITS: usize = 16;

/// Digits per display group
const CARD_GROUP_SIZE: usize = 4;

const CARD_GROUP_SEPARATOR: char = ' ';

/// Normalize a raw input value for storage.
///
/// Card numbers keep at most 16 ASCII digits, grouped in fours. Every other
/// field is stored untouched.
pub fn normalize(field: Field, raw: &str) -> String {
    match field {
        Field::CardNumber => group_card_number(raw),
        _ => raw.to_string(),
    }
}

/// Strip everything that isn't an ASCII digit
pub fn card_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn group_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(CARD_NUMBER_MAX_DIGITS)
        .collect();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / CARD_GROUP_SIZE);
    for (i, chunk) in digits.chunks(CARD_GROUP_SIZE).enumerate() {
        if i > 0 {
            grouped.push(CARD_GROUP_SEPARATOR);
        }
        grouped.extend(chunk);
    }
    grouped
}
