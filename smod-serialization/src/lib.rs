//! Serialized module support - Cross-Reference Traces and Deserialization Errors
//! 
//! While a module is deserialized, cross-references to declarations in
//! other modules are resolved by walking a symbolic path. This crate records
//! that walk as an [`XRefTracePath`] and defines the errors returned when a
//! declaration, an override, or a type cannot be recovered, together with
//! the reporter that decides which of them surface as diagnostics.

pub mod path_piece;
pub mod trace_path;
pub mod error;
pub mod report;

pub use path_piece::{PathPiece, PathPieceKind};
pub use trace_path::XRefTracePath;
pub use error::{
    as_failure, find_failure, is_deserialization_error, DeserializationError,
    DeserializationFailure, ErrorClass, ErrorKind, OverrideError, TypeError, XRefError,
};
pub use report::{classify_override_failure, DeserializationReporter, Outcome, ReportConfig};
