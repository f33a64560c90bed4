//! Port for recording terminal task outcomes.
//!
//! Defines the [`OutcomeLogger`] trait the pipeline uses to leave one
//! human-readable entry per terminal outcome (plus start/finish markers).
//!
//! This is separate from the `tracing` diagnostics emitted throughout the
//! code: those are developer-facing and filtered by verbosity, while this
//! port produces the operational record of what happened to each request.

use serde::{Deserialize, Serialize};

/// Severity of a recorded event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for recording outcome events.
///
/// The `record` method is intentionally synchronous and non-fallible: it must
/// never block the pipeline for long or abort it. Implementations swallow
/// their own write failures.
pub trait OutcomeLogger: Send + Sync {
    fn record(&self, severity: Severity, message: &str);
}

/// No-op implementation for tests and when outcome logging is disabled.
pub struct NoOutcomeLogger;

impl OutcomeLogger for NoOutcomeLogger {
    fn record(&self, _severity: Severity, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Info.to_string(), "INFO");
        assert_eq!(Severity::Warning.as_str(), "WARNING");
        assert_eq!(Severity::Error.as_str(), "ERROR");
    }
}
