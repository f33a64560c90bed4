//! Category value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Trivia category requested from the generation service (Value Object)
///
/// Always non-blank. The CLI builds one with [`Category::try_new`] before the
/// pipeline starts, so the use case never sees an empty category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn try_new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidCategory(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_valid() {
        let c = Category::try_new("history").unwrap();
        assert_eq!(c.as_str(), "history");
        assert_eq!(c.to_string(), "history");
    }

    #[test]
    fn test_try_new_blank() {
        assert!(Category::try_new("").is_err());
        assert!(Category::try_new("   ").is_err());
    }

    #[test]
    fn test_parse() {
        let c: Category = "geography".parse().unwrap();
        assert_eq!(c.as_str(), "geography");
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<Category>("\"\"").is_err());
        let c: Category = serde_json::from_str("\"science\"").unwrap();
        assert_eq!(c.as_str(), "science");
    }
}
