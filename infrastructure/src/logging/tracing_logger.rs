//! `tracing`-backed outcome logger.
//!
//! Each recorded outcome becomes one `tracing` event under the
//! [`OUTCOME_TARGET`] target. Where it ends up (rotating file, stderr) is
//! decided by the subscriber the binary installs, and writes through
//! `tracing-appender`'s non-blocking writer never stall the pipeline.

use tracing::{error, info, warn};
use trivia_application::{OutcomeLogger, Severity};

/// Target attached to every outcome event
pub const OUTCOME_TARGET: &str = "trivia::outcome";

/// Forwards outcome records to the global `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingOutcomeLogger;

impl OutcomeLogger for TracingOutcomeLogger {
    fn record(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => info!(target: OUTCOME_TARGET, "{}", message),
            Severity::Warning => warn!(target: OUTCOME_TARGET, "{}", message),
            Severity::Error => error!(target: OUTCOME_TARGET, "{}", message),
        }
    }
}
