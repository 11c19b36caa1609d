//! Product category tags.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product category such as `"Grocery"` or `"Electronics"`.
///
/// Categories form an open set: any non-empty tag is accepted. Comparison is
/// exact, so `"grocery"` and `"Grocery"` are different categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category from a tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_comparison() {
        assert_eq!(Category::from("Grocery"), Category::new("Grocery"));
        assert_ne!(Category::from("grocery"), Category::new("Grocery"));
    }

    #[test]
    fn test_transparent_serde() {
        let json = serde_json::to_string(&Category::from("Electronics")).unwrap();
        assert_eq!(json, "\"Electronics\"");
    }
}
