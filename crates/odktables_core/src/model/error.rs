//! Conversion error shared by strict enum parsing and entity converters.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Error raised when a persisted value cannot be mapped to a domain value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A stored string does not name any variant of the expected enum.
    UnknownEnum {
        /// Enum being parsed, e.g. `TableType`.
        kind: &'static str,
        value: String,
    },
}

impl ConvertError {
    pub(crate) fn unknown_enum(kind: &'static str, value: &str) -> Self {
        Self::UnknownEnum {
            kind,
            value: value.to_string(),
        }
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEnum { kind, value } => {
                write!(f, "no {kind} constant named `{value}`")
            }
        }
    }
}

impl Error for ConvertError {}
