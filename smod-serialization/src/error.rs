//! Errors produced while deserializing declarations
//!
//! Three failures can end a deserialization attempt: a cross-reference that
//! does not resolve ([`XRefError`]), an overridden member missing from the
//! superclass ([`OverrideError`]), and a declaration whose type cannot be
//! rebuilt ([`TypeError`]). A `TypeError` may own the failure that caused
//! it, so errors form a finite chain that reads outermost first:
//!
//! ```text
//! could not deserialize type for 'x': could not find 'y' in parent class
//! ```
//!
//! None of these errors carry a code a caller could branch on. Callers that
//! need to tell failures apart look at [`ErrorKind`] or walk the chain.

use crate::trace_path::XRefTracePath;
use serde::{Deserialize, Serialize};
use smod_common::{DeclName, ErrorCode};
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Classification attached to every deserialization error
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    #[default]
    Normal,
    /// The missing declaration is a designated initializer that the
    /// current configuration does not provide. Override resolution treats
    /// this as expected.
    DesignatedInitializer,
}

/// Which of the three failures an error is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    CrossReference,
    Override,
    Type,
}

/// Behaviour shared by every member of the deserialization error family
pub trait DeserializationFailure: Error {
    fn class(&self) -> ErrorClass;

    fn kind(&self) -> ErrorKind;

    /// Write the full message, including any nested causes
    fn log(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    fn error_code(&self) -> ErrorCode {
        ErrorCode::Inconvertible
    }
}

/// A serialized cross-reference could not be resolved to a declaration
#[derive(Error, Debug, Clone)]
#[error("{message}\n{path}")]
pub struct XRefError {
    message: &'static str,
    path: XRefTracePath,
}

impl XRefError {
    pub fn new(message: &'static str, path: XRefTracePath) -> Self {
        Self { message, path }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// The trace as it stood when resolution gave up
    pub fn path(&self) -> &XRefTracePath {
        &self.path
    }
}

impl DeserializationFailure for XRefError {
    fn class(&self) -> ErrorClass {
        ErrorClass::CrossReference
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Normal
    }

    fn log(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "{}", self.message)?;
        self.path.print(out, "")
    }
}

/// No member matching an overridden declaration exists in the superclass
#[derive(Error, Debug, Clone)]
#[error("could not find '{name}' in parent class")]
pub struct OverrideError {
    name: DeclName,
    kind: ErrorKind,
}

impl OverrideError {
    pub fn new(name: DeclName) -> Self {
        Self::with_kind(name, ErrorKind::Normal)
    }

    pub fn with_kind(name: DeclName, kind: ErrorKind) -> Self {
        Self { name, kind }
    }

    pub fn name(&self) -> &DeclName {
        &self.name
    }
}

impl DeserializationFailure for OverrideError {
    fn class(&self) -> ErrorClass {
        ErrorClass::Override
    }

    fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn log(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}", self)
    }
}

/// The type of a declaration could not be deserialized
#[derive(Debug, Clone)]
pub struct TypeError {
    name: DeclName,
    kind: ErrorKind,
    underlying: Option<Box<DeserializationError>>,
}

impl TypeError {
    pub fn new(name: DeclName, underlying: Option<DeserializationError>) -> Self {
        Self::with_kind(name, underlying, ErrorKind::Normal)
    }

    pub fn with_kind(
        name: DeclName,
        underlying: Option<DeserializationError>,
        kind: ErrorKind,
    ) -> Self {
        Self {
            name,
            kind,
            underlying: underlying.map(Box::new),
        }
    }

    pub fn name(&self) -> &DeclName {
        &self.name
    }

    /// The failure this one wraps, if any
    pub fn cause(&self) -> Option<&DeserializationError> {
        self.underlying.as_deref()
    }
}

// Display only shows this layer; the cause is reachable through `source`.
impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not deserialize type for '{}'", self.name)
    }
}

impl Error for TypeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.underlying
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

impl DeserializationFailure for TypeError {
    fn class(&self) -> ErrorClass {
        ErrorClass::Type
    }

    fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn log(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}", self)?;
        if let Some(cause) = &self.underlying {
            write!(out, ": ")?;
            cause.log(out)?;
        }
        Ok(())
    }
}

/// Any failure of the deserialization error family
#[derive(Error, Debug, Clone)]
pub enum DeserializationError {
    #[error(transparent)]
    XRef(#[from] XRefError),

    #[error(transparent)]
    Override(#[from] OverrideError),

    #[error(transparent)]
    Type(#[from] TypeError),
}

impl DeserializationError {
    fn failure(&self) -> &dyn DeserializationFailure {
        match self {
            DeserializationError::XRef(err) => err,
            DeserializationError::Override(err) => err,
            DeserializationError::Type(err) => err,
        }
    }

    /// The error wrapped by this one, if any
    pub fn cause(&self) -> Option<&DeserializationError> {
        match self {
            DeserializationError::Type(err) => err.cause(),
            DeserializationError::XRef(_) | DeserializationError::Override(_) => None,
        }
    }

    /// This error followed by each error it transitively wraps
    pub fn chain(&self) -> impl Iterator<Item = &DeserializationError> {
        std::iter::successors(Some(self), |err| DeserializationError::cause(err))
    }

    /// The innermost error of the chain
    pub fn root_cause(&self) -> &DeserializationError {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }

    /// Check if this error, or any error it wraps, is of the given class
    pub fn contains(&self, class: ErrorClass) -> bool {
        self.chain().any(|err| err.class() == class)
    }

    /// Log the full chain into a string
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String never fails.
        let _ = self.log(&mut out);
        out
    }
}

impl DeserializationFailure for DeserializationError {
    fn class(&self) -> ErrorClass {
        self.failure().class()
    }

    fn kind(&self) -> ErrorKind {
        self.failure().kind()
    }

    fn log(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.failure().log(out)
    }
}

/// View a single error as a member of the family, without looking at
/// its causes.
pub fn as_failure<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a dyn DeserializationFailure> {
    if let Some(err) = err.downcast_ref::<DeserializationError>() {
        Some(err)
    } else if let Some(err) = err.downcast_ref::<XRefError>() {
        Some(err)
    } else if let Some(err) = err.downcast_ref::<OverrideError>() {
        Some(err)
    } else if let Some(err) = err.downcast_ref::<TypeError>() {
        Some(err)
    } else {
        None
    }
}

/// Find the first member of the family in an error's `source` chain,
/// starting with the error itself.
pub fn find_failure<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a dyn DeserializationFailure> {
    let mut current = Some(err);
    while let Some(link) = current {
        if let Some(failure) = as_failure(link) {
            return Some(failure);
        }
        current = link.source();
    }
    None
}

/// Check if an error, or anything it wraps, is a deserialization error
pub fn is_deserialization_error(err: &(dyn Error + 'static)) -> bool {
    find_failure(err).is_some()
}
