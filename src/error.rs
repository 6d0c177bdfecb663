//! Error types for the AAS data model.

use thiserror::Error;

/// Errors reported by enumeration codecs and reference constructors.
///
/// The model never validates record contents; these are the only places
/// where a value can be rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A name that is not one of the enumeration's declared variants.
    #[error("Unknown {enumeration} variant: {name:?}")]
    UnknownName {
        enumeration: &'static str,
        name: String,
    },

    /// An ordinal outside `0..len`.
    #[error("{enumeration} ordinal {ordinal} out of range (expected < {len})")]
    OrdinalOutOfRange {
        enumeration: &'static str,
        ordinal: u32,
        len: usize,
    },

    /// A `DataTypeDef` that does not belong to the requested datatype family.
    #[error("{name} is not a member of {family}")]
    NotInFamily { family: &'static str, name: &'static str },

    /// A model reference without any key.
    #[error("Model reference must contain at least one key")]
    EmptyKeys,
}

impl ModelError {
    /// Create an unknown-name error.
    pub fn unknown_name(enumeration: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownName {
            enumeration,
            name: name.into(),
        }
    }

    /// Create an ordinal-out-of-range error.
    pub fn ordinal_out_of_range(enumeration: &'static str, ordinal: u32, len: usize) -> Self {
        Self::OrdinalOutOfRange {
            enumeration,
            ordinal,
            len,
        }
    }

    /// Create a not-in-family error.
    pub fn not_in_family(family: &'static str, name: &'static str) -> Self {
        Self::NotInFamily { family, name }
    }
}

/// Result alias used throughout the crate.
pub type ModelResult<T> = Result<T, ModelError>;
