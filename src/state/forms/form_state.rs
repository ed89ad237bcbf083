//! Form values and per-field error messages

use super::field::Field;
use super::normalize::normalize;
use std::collections::BTreeMap;

/// Current value of every form field.
///
/// The card number is always held in its grouped display form; use
/// [`super::normalize::card_digits`] to derive the wire value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<Field, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            values: Field::ALL.into_iter().map(|f| (f, String::new())).collect(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Store a raw value for a field after normalizing it
    pub fn set(&mut self, field: Field, raw: &str) {
        self.values.insert(field, normalize(field, raw));
    }

    /// Raw value produced by typing `c` at the end of the field
    pub fn with_char(&self, field: Field, c: char) -> String {
        let mut raw = self.get(field).to_string();
        raw.push(c);
        raw
    }

    /// Raw value produced by deleting the last character of the field
    pub fn without_last_char(&self, field: Field) -> String {
        let mut raw = self.get(field).to_string();
        raw.pop();
        raw
    }

    pub fn clear(&mut self) {
        self.values.values_mut().for_each(String::clear);
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-field error message; an empty string means no error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    messages: BTreeMap<Field, String>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self {
            messages: Field::ALL.into_iter().map(|f| (f, String::new())).collect(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        self.messages.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: Field) {
        self.messages.insert(field, String::new());
    }

    pub fn has_errors(&self) -> bool {
        self.messages.values().any(|m| !m.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Build an error map from (field, message) pairs, leaving others empty
    #[cfg(test)]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (Field, &'a str)>) -> Self {
        let mut errors = Self::new();
        for (field, message) in pairs {
            errors.set(field, message);
        }
        errors
    }
}

impl Default for ErrorState {
    fn default() -> Self {
        Self::new()
    }
}
