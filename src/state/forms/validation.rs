//! Client-side form validation

use super::field::Field;
use super::form_state::{ErrorState, FormState};

pub const REQUIRED: &str = "Required";
pub const CARD_NUMBER_TOO_SHORT: &str = "Card number too short";

/// Minimum number of digits accepted in a card number
pub const CARD_NUMBER_MIN_DIGITS: usize = 7;

/// Result of validating a form snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub errors: ErrorState,
    pub is_valid: bool,
}

/// Validate every field independently; no field short-circuits another.
pub fn validate(form: &FormState) -> Validation {
    let mut errors = ErrorState::new();

    for field in Field::ALL {
        if let Some(message) = check_field(field, form.get(field)) {
            errors.set(field, message);
        }
    }

    let is_valid = !errors.has_errors();
    Validation { errors, is_valid }
}

fn check_field(field: Field, value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some(REQUIRED);
    }
    match field {
        // Length is measured on the digits alone, never on the grouping
        Field::CardNumber => {
            let digits = value.chars().filter(|c| !c.is_whitespace()).count();
            (digits < CARD_NUMBER_MIN_DIGITS).then_some(CARD_NUMBER_TOO_SHORT)
        }
        _ => None,
    }
}
