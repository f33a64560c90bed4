//! Pipeline domain entities

use crate::core::category::Category;
use serde::{Deserialize, Serialize};

/// Phase of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Fan-out of generation requests
    Generation,
    /// Fan-out of delivery requests for successfully generated questions
    Delivery,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Generation => "generation",
            Phase::Delivery => "delivery",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::Generation => "Generation",
            Phase::Delivery => "Delivery",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One generation attempt within a run (Entity)
///
/// `sequence_index` identifies the request for the whole run: outcomes,
/// deliveries and log entries all refer back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub category: Category,
    pub sequence_index: usize,
}

impl GenerationRequest {
    pub fn new(category: Category, sequence_index: usize) -> Self {
        Self {
            category,
            sequence_index,
        }
    }

    /// Build `count` requests indexed `0..count`
    pub fn batch(category: &Category, count: usize) -> Vec<Self> {
        (0..count)
            .map(|index| Self::new(category.clone(), index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_indices_are_sequential() {
        let category = Category::try_new("history").unwrap();
        let batch = GenerationRequest::batch(&category, 4);
        let indices: Vec<_> = batch.iter().map(|r| r.sequence_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(batch.iter().all(|r| r.category == category));
    }

    #[test]
    fn test_batch_empty() {
        let category = Category::try_new("history").unwrap();
        assert!(GenerationRequest::batch(&category, 0).is_empty());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Generation.to_string(), "Generation");
        assert_eq!(Phase::Delivery.as_str(), "delivery");
    }
}
