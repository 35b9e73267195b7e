//! One step of a cross-reference walk

use smod_common::{AccessorKind, Identifier, ModuleHandle, OperatorKind, TypeDescriptor};
use std::fmt;

/// A single navigation step recorded while resolving a cross-reference.
///
/// Fixity and accessor codes are kept raw, exactly as decoded. A code the
/// format tables do not know is still a valid piece; it prints as an
/// "unknown" fragment instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPiece {
    Value(Identifier),
    Type(TypeDescriptor),
    Operator(Identifier),
    OperatorFilter(u8),
    Accessor(u8),
    /// `None` means an extension in any module
    Extension(Option<ModuleHandle>),
    GenericParam(usize),
    Unknown(u64),
}

/// Tag of a [`PathPiece`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathPieceKind {
    Value,
    Type,
    Operator,
    OperatorFilter,
    Accessor,
    Extension,
    GenericParam,
    Unknown,
}

impl PathPiece {
    pub fn kind(&self) -> PathPieceKind {
        match self {
            PathPiece::Value(_) => PathPieceKind::Value,
            PathPiece::Type(_) => PathPieceKind::Type,
            PathPiece::Operator(_) => PathPieceKind::Operator,
            PathPiece::OperatorFilter(_) => PathPieceKind::OperatorFilter,
            PathPiece::Accessor(_) => PathPieceKind::Accessor,
            PathPiece::Extension(_) => PathPieceKind::Extension,
            PathPiece::GenericParam(_) => PathPieceKind::GenericParam,
            PathPiece::Unknown(_) => PathPieceKind::Unknown,
        }
    }
}

fn operator_filter_text(code: u8) -> &'static str {
    match OperatorKind::from_raw(code) {
        Some(OperatorKind::Infix) => "(infix)",
        Some(OperatorKind::Prefix) => "(prefix)",
        Some(OperatorKind::Postfix) => "(postfix)",
        Some(OperatorKind::PrecedenceGroup) | None => "(unknown operator filter)",
    }
}

fn accessor_text(code: u8) -> &'static str {
    match AccessorKind::from_raw(code) {
        Some(AccessorKind::Getter) => "(getter)",
        Some(AccessorKind::Setter) => "(setter)",
        Some(AccessorKind::MaterializeForSet) => "(materializeForSet)",
        Some(AccessorKind::Addressor) => "(addressor)",
        Some(AccessorKind::MutableAddressor) => "(mutableAddressor)",
        Some(AccessorKind::WillSet) => "(willSet)",
        Some(AccessorKind::DidSet) => "(didSet)",
        None => "(unknown accessor kind)",
    }
}

impl fmt::Display for PathPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPiece::Value(name) => write!(f, "{}", name),
            PathPiece::Type(ty) => write!(f, "with type {}", ty),
            PathPiece::Operator(name) => write!(f, "operator {}", name),
            PathPiece::OperatorFilter(code) => f.write_str(operator_filter_text(*code)),
            PathPiece::Accessor(code) => f.write_str(accessor_text(*code)),
            PathPiece::Extension(Some(module)) => {
                write!(f, "in an extension in module '{}'", module.name())
            }
            PathPiece::Extension(None) => write!(f, "in an extension in any module"),
            PathPiece::GenericParam(index) => write!(f, "generic param #{}", index),
            PathPiece::Unknown(code) => write!(f, "unknown xref kind {}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(piece: PathPiece) -> String {
        piece.to_string()
    }

    #[test]
    fn test_named_pieces() {
        assert_eq!(render(PathPiece::Value(Identifier::new("foo"))), "foo");
        assert_eq!(
            render(PathPiece::Type(TypeDescriptor::new("(Int) -> String"))),
            "with type (Int) -> String"
        );
        assert_eq!(
            render(PathPiece::Operator(Identifier::new("+++"))),
            "operator +++"
        );
    }

    #[test]
    fn test_operator_filter() {
        assert_eq!(render(PathPiece::OperatorFilter(OperatorKind::Infix.raw())), "(infix)");
        assert_eq!(render(PathPiece::OperatorFilter(OperatorKind::Prefix.raw())), "(prefix)");
        assert_eq!(render(PathPiece::OperatorFilter(OperatorKind::Postfix.raw())), "(postfix)");
        assert_eq!(
            render(PathPiece::OperatorFilter(OperatorKind::PrecedenceGroup.raw())),
            "(unknown operator filter)"
        );
        assert_eq!(render(PathPiece::OperatorFilter(255)), "(unknown operator filter)");
    }

    #[test]
    fn test_accessor() {
        let expected = [
            (AccessorKind::Getter, "(getter)"),
            (AccessorKind::Setter, "(setter)"),
            (AccessorKind::MaterializeForSet, "(materializeForSet)"),
            (AccessorKind::Addressor, "(addressor)"),
            (AccessorKind::MutableAddressor, "(mutableAddressor)"),
            (AccessorKind::WillSet, "(willSet)"),
            (AccessorKind::DidSet, "(didSet)"),
        ];
        for (kind, text) in expected {
            assert_eq!(render(PathPiece::Accessor(kind.raw())), text);
        }
        assert_eq!(render(PathPiece::Accessor(7)), "(unknown accessor kind)");
        assert_eq!(render(PathPiece::Accessor(u8::MAX)), "(unknown accessor kind)");
    }

    #[test]
    fn test_extension() {
        assert_eq!(
            render(PathPiece::Extension(None)),
            "in an extension in any module"
        );
        assert_eq!(
            render(PathPiece::Extension(Some(ModuleHandle::new("Foo")))),
            "in an extension in module 'Foo'"
        );
    }

    #[test]
    fn test_generic_param_and_unknown() {
        assert_eq!(render(PathPiece::GenericParam(2)), "generic param #2");
        assert_eq!(render(PathPiece::Unknown(42)), "unknown xref kind 42");
    }

    #[test]
    fn test_kind_tag() {
        assert_eq!(PathPiece::Accessor(99).kind(), PathPieceKind::Accessor);
        assert_eq!(PathPiece::Extension(None).kind(), PathPieceKind::Extension);
    }
}
