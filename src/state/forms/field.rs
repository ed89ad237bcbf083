//! Form field identifiers and editable field values

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named input slot of the payment form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    ZipCode,
    CardNumber,
}

impl Field {
    /// All fields in display (and tab) order
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::ZipCode,
        Field::CardNumber,
    ];

    /// Wire/field name as used in payloads and error maps
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::ZipCode => "zipCode",
            Self::CardNumber => "cardNumber",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::ZipCode => "ZIP Code",
            Self::CardNumber => "Card Number",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FirstName => "put your firstName here",
            Self::LastName => "put your lastName here",
            Self::ZipCode => "put your zipCode here",
            Self::CardNumber => "put your card number here",
        }
    }

    /// Look up a field by its wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn next(&self) -> Self {
        match self {
            Self::FirstName => Self::LastName,
            Self::LastName => Self::ZipCode,
            Self::ZipCode => Self::CardNumber,
            Self::CardNumber => Self::FirstName,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::FirstName => Self::CardNumber,
            Self::LastName => Self::FirstName,
            Self::ZipCode => Self::LastName,
            Self::CardNumber => Self::ZipCode,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
