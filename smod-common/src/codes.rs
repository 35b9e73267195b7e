//! Numeric code tables of the serialized module format
//! 
//! These values are written into module files and must never be
//! renumbered or reordered without bumping the format's major version.
//! Decoders pass raw codes through untouched, so a code outside a table
//! (a newer or older writer) is a legal value. Use `from_raw` to look a
//! code up and fall back gracefully when it is missing.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A raw code that has no entry in the named table
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown {table} code {code}")]
pub struct UnknownCode {
    pub table: &'static str,
    pub code: u8,
}

/// Kind of operator declaration referenced by an operator cross-reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum OperatorKind {
    Infix = 0,
    Prefix = 1,
    Postfix = 2,
    /// Not a fixity; shares the table with the three fixities
    PrecedenceGroup = 3,
}

impl OperatorKind {
    pub fn from_raw(code: u8) -> Option<Self> {
        Self::try_from(code).ok()
    }

    pub fn raw(self) -> u8 {
        self as u8
    }

    /// Check if this kind names an operator fixity
    pub fn is_fixity(self) -> bool {
        !matches!(self, OperatorKind::PrecedenceGroup)
    }
}

impl TryFrom<u8> for OperatorKind {
    type Error = UnknownCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(OperatorKind::Infix),
            1 => Ok(OperatorKind::Prefix),
            2 => Ok(OperatorKind::Postfix),
            3 => Ok(OperatorKind::PrecedenceGroup),
            _ => Err(UnknownCode {
                table: "operator kind",
                code,
            }),
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorKind::Infix => write!(f, "infix"),
            OperatorKind::Prefix => write!(f, "prefix"),
            OperatorKind::Postfix => write!(f, "postfix"),
            OperatorKind::PrecedenceGroup => write!(f, "precedencegroup"),
        }
    }
}

/// Kind of accessor referenced by an accessor cross-reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AccessorKind {
    Getter = 0,
    Setter = 1,
    WillSet = 2,
    DidSet = 3,
    MaterializeForSet = 4,
    Addressor = 5,
    MutableAddressor = 6,
}

impl AccessorKind {
    pub const ALL: [AccessorKind; 7] = [
        AccessorKind::Getter,
        AccessorKind::Setter,
        AccessorKind::WillSet,
        AccessorKind::DidSet,
        AccessorKind::MaterializeForSet,
        AccessorKind::Addressor,
        AccessorKind::MutableAddressor,
    ];

    pub fn from_raw(code: u8) -> Option<Self> {
        Self::try_from(code).ok()
    }

    pub fn raw(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AccessorKind {
    type Error = UnknownCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(UnknownCode {
                table: "accessor kind",
                code,
            })
    }
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessorKind::Getter => write!(f, "getter"),
            AccessorKind::Setter => write!(f, "setter"),
            AccessorKind::WillSet => write!(f, "willSet"),
            AccessorKind::DidSet => write!(f, "didSet"),
            AccessorKind::MaterializeForSet => write!(f, "materializeForSet"),
            AccessorKind::Addressor => write!(f, "addressor"),
            AccessorKind::MutableAddressor => write!(f, "mutableAddressor"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_kind_codes_are_stable() {
        assert_eq!(OperatorKind::Infix.raw(), 0);
        assert_eq!(OperatorKind::Prefix.raw(), 1);
        assert_eq!(OperatorKind::Postfix.raw(), 2);
        assert_eq!(OperatorKind::PrecedenceGroup.raw(), 3);
        assert!(!OperatorKind::PrecedenceGroup.is_fixity());
    }

    #[test]
    fn test_accessor_table_matches_discriminants() {
        for (index, kind) in AccessorKind::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.raw()), index);
            assert_eq!(AccessorKind::from_raw(kind.raw()), Some(*kind));
        }
    }

    #[test]
    fn test_unknown_codes_are_reported_not_fatal() {
        assert_eq!(OperatorKind::from_raw(9), None);
        assert_eq!(AccessorKind::from_raw(7), None);

        let err = AccessorKind::try_from(200).unwrap_err();
        assert_eq!(err.to_string(), "unknown accessor kind code 200");
    }
}
