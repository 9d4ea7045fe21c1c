//! SQLite connection bootstrap and storage error type.
//!
//! # Responsibility
//! - Open and configure SQLite connections that entity records are read from.
//! - Define the error surfaced when a stored value cannot be looked up.
//!
//! # Invariants
//! - This crate reads entities; it never creates or migrates the schema.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// A stored value exists but does not have the shape its field requires.
    InvalidData {
        field: String,
        message: String,
    },
}

impl DbError {
    pub(crate) fn invalid_data(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidData {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::InvalidData { field, message } => {
                write!(f, "invalid stored value in `{field}`: {message}")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::InvalidData { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
