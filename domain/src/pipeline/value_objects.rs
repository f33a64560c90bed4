//! Pipeline value objects - immutable outcome types for a generation run.
//!
//! - [`GenerationOutcome`] - Terminal result of one generation request
//! - [`DeliveryOutcome`] - Terminal result of one delivery request
//! - [`DeliveryRecord`] - A delivery outcome tied to its request index
//! - [`PipelineReport`] - Everything that happened during one run

use crate::core::category::Category;
use crate::core::question::Question;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Terminal result of fetching one question from the generation service
///
/// Every generation request ends in exactly one of these. Clients never
/// return errors; transport and protocol failures are folded into the
/// variants below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// HTTP 200 with a body that parsed into a [`Question`]
    Success(Question),
    /// Any status other than 200
    BadStatus(u16),
    /// The per-request timeout elapsed
    Timeout,
    /// Connection refused, DNS failure, reset, ...
    NetworkError(String),
    /// HTTP 200 with a body that is not a question
    MalformedResponse(String),
    /// The task running the request panicked or was torn down
    Aborted(String),
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success(_))
    }

    pub fn question(&self) -> Option<&Question> {
        match self {
            GenerationOutcome::Success(q) => Some(q),
            _ => None,
        }
    }

    /// Short machine-friendly label for logs and summaries
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationOutcome::Success(_) => "success",
            GenerationOutcome::BadStatus(_) => "bad_status",
            GenerationOutcome::Timeout => "timeout",
            GenerationOutcome::NetworkError(_) => "network_error",
            GenerationOutcome::MalformedResponse(_) => "malformed_response",
            GenerationOutcome::Aborted(_) => "aborted",
        }
    }
}

impl std::fmt::Display for GenerationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationOutcome::Success(q) => write!(f, "generated: {}", q),
            GenerationOutcome::BadStatus(code) => write!(f, "bad status code {}", code),
            GenerationOutcome::Timeout => write!(f, "timed out"),
            GenerationOutcome::NetworkError(detail) => write!(f, "network error: {}", detail),
            GenerationOutcome::MalformedResponse(detail) => {
                write!(f, "malformed response: {}", detail)
            }
            GenerationOutcome::Aborted(detail) => write!(f, "task aborted: {}", detail),
        }
    }
}

/// Terminal result of sending one question to the storage service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// HTTP 202
    Accepted,
    /// Any status other than 202
    Rejected(u16),
    /// The per-request timeout elapsed
    Timeout,
    NetworkError(String),
    Aborted(String),
}

impl DeliveryOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, DeliveryOutcome::Accepted)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DeliveryOutcome::Accepted => "accepted",
            DeliveryOutcome::Rejected(_) => "rejected",
            DeliveryOutcome::Timeout => "timeout",
            DeliveryOutcome::NetworkError(_) => "network_error",
            DeliveryOutcome::Aborted(_) => "aborted",
        }
    }
}

impl std::fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryOutcome::Accepted => write!(f, "accepted"),
            DeliveryOutcome::Rejected(code) => write!(f, "rejected with status code {}", code),
            DeliveryOutcome::Timeout => write!(f, "timed out"),
            DeliveryOutcome::NetworkError(detail) => write!(f, "network error: {}", detail),
            DeliveryOutcome::Aborted(detail) => write!(f, "task aborted: {}", detail),
        }
    }
}

/// Delivery outcome for the question generated by request `sequence_index`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub sequence_index: usize,
    pub outcome: DeliveryOutcome,
}

impl DeliveryRecord {
    pub fn new(sequence_index: usize, outcome: DeliveryOutcome) -> Self {
        Self {
            sequence_index,
            outcome,
        }
    }
}

/// Complete record of one run (Value Object)
///
/// `generation[i]` is the outcome of the request with `sequence_index == i`.
/// `deliveries` holds one record per successful generation, in ascending
/// `sequence_index` order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub category: Category,
    pub generation: Vec<GenerationOutcome>,
    pub deliveries: Vec<DeliveryRecord>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl PipelineReport {
    pub fn requested(&self) -> usize {
        self.generation.len()
    }

    pub fn generated(&self) -> usize {
        self.generation.iter().filter(|o| o.is_success()).count()
    }

    pub fn generation_failures(&self) -> usize {
        self.requested() - self.generated()
    }

    pub fn delivered(&self) -> usize {
        self.deliveries
            .iter()
            .filter(|d| d.outcome.is_accepted())
            .count()
    }

    pub fn delivery_failures(&self) -> usize {
        self.deliveries.len() - self.delivered()
    }

    /// Wall-clock duration of the run
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
