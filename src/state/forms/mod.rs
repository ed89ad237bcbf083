//! Form domain layer
//!
//! Field identifiers, stored values, keystroke normalization and
//! client-side validation for the payment form.

mod field;
mod form_state;
mod normalize;
mod validation;

pub use field::Field;
pub use form_state::{ErrorState, FormState};
pub use normalize::card_digits;
pub use validation::{validate, Validation};

#[cfg(test)]
pub use validation::{CARD_NUMBER_TOO_SHORT, REQUIRED};
