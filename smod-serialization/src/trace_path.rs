//! Trace of the navigation steps taken while resolving a cross-reference
//!
//! The resolver pushes a piece for every step it attempts and pops it again
//! when it backtracks. If resolution fails, the trace is moved into an
//! [`XRefError`](crate::XRefError) and printed as part of the diagnostic.

use crate::path_piece::PathPiece;
use log::trace;
use smallvec::SmallVec;
use smod_common::{Identifier, ModuleHandle, TypeDescriptor};
use std::fmt;

/// Symbolic path walked from a base module towards a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XRefTracePath {
    base_module: ModuleHandle,
    path: SmallVec<[PathPiece; 8]>,
}

impl XRefTracePath {
    pub fn new(base_module: ModuleHandle) -> Self {
        Self {
            base_module,
            path: SmallVec::new(),
        }
    }

    /// The module the cross-reference is resolved against
    pub fn base_module(&self) -> &ModuleHandle {
        &self.base_module
    }

    fn push(&mut self, piece: PathPiece) {
        trace!("xref into '{}': push {:?}", self.base_module, piece);
        self.path.push(piece);
    }

    pub fn add_value(&mut self, name: Identifier) {
        self.push(PathPiece::Value(name));
    }

    pub fn add_type(&mut self, ty: TypeDescriptor) {
        self.push(PathPiece::Type(ty));
    }

    pub fn add_operator(&mut self, name: Identifier) {
        self.push(PathPiece::Operator(name));
    }

    pub fn add_operator_filter(&mut self, fixity: u8) {
        self.push(PathPiece::OperatorFilter(fixity));
    }

    pub fn add_accessor(&mut self, kind: u8) {
        self.push(PathPiece::Accessor(kind));
    }

    /// `None` records an extension in any module
    pub fn add_extension(&mut self, module: Option<ModuleHandle>) {
        self.push(PathPiece::Extension(module));
    }

    pub fn add_generic_param(&mut self, index: usize) {
        self.push(PathPiece::GenericParam(index));
    }

    pub fn add_unknown(&mut self, kind: u64) {
        self.push(PathPiece::Unknown(kind));
    }

    /// Drop the most recently added piece when the resolver backtracks.
    ///
    /// Every call must be paired with an earlier `add_*`.
    pub fn remove_last(&mut self) {
        let removed = self.path.pop();
        debug_assert!(removed.is_some(), "remove_last on an empty xref trace");
        trace!("xref into '{}': pop {:?}", self.base_module, removed);
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn last(&self) -> Option<&PathPiece> {
        self.path.last()
    }

    /// Pieces in the order they were added
    pub fn pieces(&self) -> impl Iterator<Item = &PathPiece> {
        self.path.iter()
    }

    /// Write the trace as a header line followed by one line per piece,
    /// each prefixed with `leading`.
    pub fn print(&self, out: &mut dyn fmt::Write, leading: &str) -> fmt::Result {
        writeln!(out, "Cross-reference to module '{}'", self.base_module.name())?;
        for piece in &self.path {
            writeln!(out, "{}... {}", leading, piece)?;
        }
        Ok(())
    }

    /// Display adapter that prints the trace with an indent on each piece
    pub fn display_indented<'a>(&'a self, leading: &'a str) -> Indented<'a> {
        Indented {
            path: self,
            leading,
        }
    }
}

impl fmt::Display for XRefTracePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f, "")
    }
}

/// See [`XRefTracePath::display_indented`]
pub struct Indented<'a> {
    path: &'a XRefTracePath,
    leading: &'a str,
}

impl fmt::Display for Indented<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.path.print(f, self.leading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use smod_common::{AccessorKind, OperatorKind};

    fn trace_into(module: &str) -> XRefTracePath {
        XRefTracePath::new(ModuleHandle::new(module))
    }

    #[test]
    fn test_empty_trace_prints_header_only() {
        let path = trace_into("Swift");
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "Cross-reference to module 'Swift'\n");
    }

    #[test]
    fn test_pieces_print_in_append_order() {
        let mut path = trace_into("UIKit");
        path.add_value(Identifier::new("UIView"));
        path.add_extension(Some(ModuleHandle::new("MyApp")));
        path.add_value(Identifier::new("frame"));
        path.add_accessor(AccessorKind::Getter.raw());

        assert_eq!(
            path.to_string(),
            "Cross-reference to module 'UIKit'\n\
             ... UIView\n\
             ... in an extension in module 'MyApp'\n\
             ... frame\n\
             ... (getter)\n"
        );
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_every_add_appends_one_piece() {
        let mut path = trace_into("Base");
        path.add_value(Identifier::new("a"));
        path.add_type(TypeDescriptor::new("Int"));
        path.add_operator(Identifier::new("<>"));
        path.add_operator_filter(OperatorKind::Infix.raw());
        path.add_accessor(AccessorKind::DidSet.raw());
        path.add_extension(None);
        path.add_generic_param(0);
        path.add_unknown(77);

        let rendered = path.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Cross-reference to module 'Base'",
                "... a",
                "... with type Int",
                "... operator <>",
                "... (infix)",
                "... (didSet)",
                "... in an extension in any module",
                "... generic param #0",
                "... unknown xref kind 77",
            ]
        );
    }

    #[test]
    fn test_remove_last_backtracks() {
        let fresh = trace_into("Foo");

        let mut path = trace_into("Foo");
        path.add_value(Identifier::new("foo"));
        path.remove_last();

        assert_eq!(path.to_string(), fresh.to_string());
        assert_eq!(path, fresh);
    }

    #[test]
    fn test_remove_last_only_drops_the_tail() {
        let mut path = trace_into("Foo");
        path.add_value(Identifier::new("Outer"));
        path.add_value(Identifier::new("inner"));
        path.remove_last();

        assert_eq!(path.last(), Some(&PathPiece::Value(Identifier::new("Outer"))));
    }

    #[test]
    #[should_panic(expected = "remove_last on an empty xref trace")]
    #[cfg(debug_assertions)]
    fn test_remove_last_on_empty_trace_asserts() {
        trace_into("Foo").remove_last();
    }

    #[test]
    fn test_leading_indent() {
        let mut path = trace_into("Foo");
        path.add_value(Identifier::new("bar"));
        path.add_generic_param(1);

        let mut out = String::new();
        path.print(&mut out, "\t").unwrap();
        assert_eq!(
            out,
            "Cross-reference to module 'Foo'\n\t... bar\n\t... generic param #1\n"
        );
        assert_eq!(path.display_indented("\t").to_string(), out);
    }
}
