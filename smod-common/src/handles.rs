//! Opaque handles supplied by the module loader and binary decoder
//! 
//! The deserialization diagnostics only ever record these values and print
//! their textual form. Nothing here interprets the underlying module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Interned symbol name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier(Arc<str>);

impl Identifier {
    pub fn new(text: &str) -> Self {
        Self(Arc::from(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The empty identifier, used for unlabeled arguments
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Identifier {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A loaded module, known to diagnostics only by its name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleHandle {
    name: Identifier,
}

impl ModuleHandle {
    pub fn new(name: impl Into<Identifier>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }
}

impl fmt::Display for ModuleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A decoded type, kept as its printed form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor(Arc<str>);

impl TypeDescriptor {
    pub fn new(text: &str) -> Self {
        Self(Arc::from(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeDescriptor {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a declaration: a base name, plus argument labels for
/// functions and initializers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeclName {
    pub base: Identifier,
    pub arguments: Option<Vec<Identifier>>,
}

impl DeclName {
    /// A simple name such as a variable or type
    pub fn simple(base: impl Into<Identifier>) -> Self {
        Self {
            base: base.into(),
            arguments: None,
        }
    }

    /// A compound name such as `init(frame:)`
    pub fn compound(base: impl Into<Identifier>, arguments: Vec<Identifier>) -> Self {
        Self {
            base: base.into(),
            arguments: Some(arguments),
        }
    }

    pub fn is_simple(&self) -> bool {
        self.arguments.is_none()
    }
}

impl From<&str> for DeclName {
    fn from(base: &str) -> Self {
        Self::simple(base)
    }
}

impl fmt::Display for DeclName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;

        if let Some(arguments) = &self.arguments {
            write!(f, "(")?;
            for label in arguments {
                if label.is_empty() {
                    write!(f, "_:")?;
                } else {
                    write!(f, "{}:", label)?;
                }
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_display_is_name() {
        let module = ModuleHandle::new("Foundation");
        assert_eq!(module.to_string(), "Foundation");
        assert_eq!(module.name().as_str(), "Foundation");
    }

    #[test]
    fn test_simple_decl_name() {
        let name = DeclName::simple("count");
        assert!(name.is_simple());
        assert_eq!(name.to_string(), "count");
    }

    #[test]
    fn test_compound_decl_name() {
        let name = DeclName::compound(
            "init",
            vec![Identifier::new("frame"), Identifier::new("")],
        );
        assert_eq!(name.to_string(), "init(frame:_:)");

        let nullary = DeclName::compound("reset", vec![]);
        assert_eq!(nullary.to_string(), "reset()");
    }

    #[test]
    fn test_handles_round_trip_through_json() {
        let name = DeclName::compound("insert", vec![Identifier::new("at")]);
        let json = serde_json::to_string(&name).unwrap();
        let back: DeclName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }
}
