//! Access-control domain values: scopes, roles and table ACL entries.

use super::error::{ConvertError, ConvertResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Who a scope applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScopeType {
    /// Everyone. A default scope never carries a value.
    Default,
    User,
    Group,
}

impl ScopeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::User => "USER",
            Self::Group => "GROUP",
        }
    }
}

impl FromStr for ScopeType {
    type Err = ConvertError;

    fn from_str(value: &str) -> ConvertResult<Self> {
        match value {
            "DEFAULT" => Ok(Self::Default),
            "USER" => Ok(Self::User),
            "GROUP" => Ok(Self::Group),
            other => Err(ConvertError::unknown_enum("ScopeType", other)),
        }
    }
}

impl Display for ScopeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access-restriction descriptor: a scope type plus an optional value
/// (user or group name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    #[serde(rename = "type")]
    pub scope_type: Option<ScopeType>,
    pub value: Option<String>,
}

impl Scope {
    /// Scope with neither type nor value.
    pub const EMPTY: Scope = Scope {
        scope_type: None,
        value: None,
    };

    pub fn new(scope_type: ScopeType, value: Option<String>) -> Self {
        Self {
            scope_type: Some(scope_type),
            value,
        }
    }

    /// The default scope; carries no value.
    pub fn default_scope() -> Self {
        Self::new(ScopeType::Default, None)
    }

    pub fn is_empty(&self) -> bool {
        self.scope_type.is_none() && self.value.is_none()
    }
}

/// Permission level granted by an ACL entry, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableRole {
    None,
    FilteredReader,
    Reader,
    FilteredWriter,
    Writer,
    Owner,
}

impl TableRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::FilteredReader => "FILTERED_READER",
            Self::Reader => "READER",
            Self::FilteredWriter => "FILTERED_WRITER",
            Self::Writer => "WRITER",
            Self::Owner => "OWNER",
        }
    }
}

impl FromStr for TableRole {
    type Err = ConvertError;

    fn from_str(value: &str) -> ConvertResult<Self> {
        match value {
            "NONE" => Ok(Self::None),
            "FILTERED_READER" => Ok(Self::FilteredReader),
            "READER" => Ok(Self::Reader),
            "FILTERED_WRITER" => Ok(Self::FilteredWriter),
            "WRITER" => Ok(Self::Writer),
            "OWNER" => Ok(Self::Owner),
            other => Err(ConvertError::unknown_enum("TableRole", other)),
        }
    }
}

impl Display for TableRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One access-control entry of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAcl {
    pub scope: Scope,
    pub role: TableRole,
}

impl TableAcl {
    pub fn new(scope: Scope, role: TableRole) -> Self {
        Self { scope, role }
    }
}

#[cfg(test)]
mod tests {
    use super::{Scope, ScopeType, TableRole};
    use crate::model::error::ConvertError;

    #[test]
    fn scope_type_parse_is_case_sensitive() {
        assert_eq!("USER".parse::<ScopeType>().unwrap(), ScopeType::User);
        let err = "user".parse::<ScopeType>().unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnknownEnum {
                kind: "ScopeType",
                value: "user".to_string(),
            }
        );
    }

    #[test]
    fn table_role_roundtrips_through_as_str() {
        for role in [
            TableRole::None,
            TableRole::FilteredReader,
            TableRole::Reader,
            TableRole::FilteredWriter,
            TableRole::Writer,
            TableRole::Owner,
        ] {
            assert_eq!(role.as_str().parse::<TableRole>().unwrap(), role);
        }
    }

    #[test]
    fn empty_scope_has_no_type_or_value() {
        assert!(Scope::EMPTY.is_empty());
        assert!(!Scope::default_scope().is_empty());
        assert_eq!(Scope::default(), Scope::EMPTY);
    }
}
