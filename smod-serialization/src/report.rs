//! Turning deserialization errors into diagnostics
//!
//! Override resolution expects some failures: a subclass may override a
//! designated initializer that the superclass, as configured, does not
//! have. Those errors are classified `DesignatedInitializer` and are
//! tolerated here. Every other failure surfaces as an error diagnostic.

use crate::error::{
    DeserializationError, DeserializationFailure, ErrorKind, OverrideError, TypeError, XRefError,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use smod_common::{Diagnostic, DiagnosticReporter};
use std::error::Error;

/// Reporter configuration, embeddable in a host's JSON configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Indent written before each step of a cross-reference trace
    pub trace_indent: String,
    /// Keep tolerated failures as notes instead of dropping them
    pub record_tolerated: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            trace_indent: "\t".to_string(),
            record_tolerated: false,
        }
    }
}

impl ReportConfig {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// What the reporter did with an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Tolerated,
    Surfaced,
}

/// Decide whether a failure seen during override resolution is expected
pub fn classify_override_failure(err: &dyn DeserializationFailure) -> Outcome {
    match err.kind() {
        ErrorKind::DesignatedInitializer => Outcome::Tolerated,
        ErrorKind::Normal => Outcome::Surfaced,
    }
}

fn owned_family_error(err: &(dyn Error + 'static)) -> Option<DeserializationError> {
    if let Some(err) = err.downcast_ref::<DeserializationError>() {
        Some(err.clone())
    } else if let Some(err) = err.downcast_ref::<XRefError>() {
        Some(err.clone().into())
    } else if let Some(err) = err.downcast_ref::<OverrideError>() {
        Some(err.clone().into())
    } else {
        err.downcast_ref::<TypeError>().map(|err| err.clone().into())
    }
}

/// Collects the diagnostics for failed deserialization attempts
#[derive(Debug, Default)]
pub struct DeserializationReporter {
    config: ReportConfig,
    diagnostics: DiagnosticReporter,
    tolerated_count: usize,
}

impl DeserializationReporter {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            diagnostics: DiagnosticReporter::new(),
            tolerated_count: 0,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Consume the error of one failed attempt
    pub fn report(&mut self, err: DeserializationError) -> Outcome {
        let (message, notes) = self.describe(&err);
        self.record(classify_override_failure(&err), message, notes)
    }

    /// Report an error that may or may not belong to the deserialization
    /// family. The first family member in its `source` chain is reported;
    /// foreign errors always surface.
    pub fn report_error(&mut self, err: &(dyn Error + 'static)) -> Outcome {
        let mut link = Some(err);
        while let Some(current) = link {
            if let Some(family) = owned_family_error(current) {
                return self.report(family);
            }
            link = current.source();
        }

        let mut notes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            notes.push(format!("caused by: {}", cause));
            source = cause.source();
        }
        self.record(Outcome::Surfaced, err.to_string(), notes)
    }

    /// Headline of the whole chain, plus the trace of a failed
    /// cross-reference as notes.
    fn describe(&self, err: &DeserializationError) -> (String, Vec<String>) {
        let mut message = String::new();
        let mut notes = Vec::new();

        for (depth, layer) in err.chain().enumerate() {
            if depth > 0 {
                message.push_str(": ");
            }
            match layer {
                DeserializationError::XRef(xref) => {
                    message.push_str(xref.message());
                    let trace = xref
                        .path()
                        .display_indented(&self.config.trace_indent)
                        .to_string();
                    notes.extend(trace.lines().map(str::to_string));
                }
                DeserializationError::Override(err) => message.push_str(&err.to_string()),
                DeserializationError::Type(err) => message.push_str(&err.to_string()),
            }
        }

        (message, notes)
    }

    fn record(&mut self, outcome: Outcome, message: String, notes: Vec<String>) -> Outcome {
        match outcome {
            Outcome::Tolerated => {
                debug!("tolerating deserialization failure: {}", message);
                self.tolerated_count += 1;
                if self.config.record_tolerated {
                    self.diagnostics.note(message).notes.extend(notes);
                }
            }
            Outcome::Surfaced => {
                warn!("deserialization failed: {}", message);
                self.diagnostics.error(message).notes.extend(notes);
            }
        }
        outcome
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    pub fn tolerated_count(&self) -> usize {
        self.tolerated_count
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.diagnostics()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_diagnostics()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        self.diagnostics.to_json()
    }

    pub fn summary(&self) -> String {
        match self.tolerated_count {
            0 => self.diagnostics.summary(),
            n => format!("{} ({} tolerated)", self.diagnostics.summary(), n),
        }
    }
}
