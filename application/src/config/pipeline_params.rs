//! Pipeline parameters - fan-out control.
//!
//! [`PipelineParams`] groups the static parameters that control how
//! [`GenerateQuestionsUseCase`](crate::use_cases::generate_questions::GenerateQuestionsUseCase)
//! schedules its tasks. Request timeouts are a transport concern and live
//! with the HTTP adapters instead.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Fan-out control parameters.
///
/// `max_concurrency == None` launches every task of a phase at once. That
/// matches the observed behavior of the generator but puts no ceiling on
/// open connections for large batches; set a limit for production use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Maximum number of in-flight requests per phase.
    pub max_concurrency: Option<NonZeroUsize>,
}

impl PipelineParams {
    pub fn with_max_concurrency(mut self, max: Option<NonZeroUsize>) -> Self {
        self.max_concurrency = max;
        self
    }

    pub fn is_bounded(&self) -> bool {
        self.max_concurrency.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let params = PipelineParams::default();
        assert!(params.max_concurrency.is_none());
        assert!(!params.is_bounded());
    }

    #[test]
    fn test_with_max_concurrency() {
        let params = PipelineParams::default().with_max_concurrency(NonZeroUsize::new(4));
        assert_eq!(params.max_concurrency.map(|n| n.get()), Some(4));
        assert!(params.is_bounded());
    }
}
