//! Serialized module support - Common Handles, Format Codes and Diagnostics
//! 
//! This crate contains the handle types supplied by the module loader and
//! binary decoder, the stable numeric code tables of the module format,
//! and the generic diagnostic model shared by the deserialization crates.

pub mod error;
pub mod handles;
pub mod codes;

pub use error::{Diagnostic, DiagnosticReporter, ErrorCode, Severity};
pub use handles::{DeclName, Identifier, ModuleHandle, TypeDescriptor};
pub use codes::{AccessorKind, OperatorKind, UnknownCode};
