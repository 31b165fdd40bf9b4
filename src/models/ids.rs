//! Strongly-typed ID wrappers
//!
//! Category ids are small integers handed out by the owning plan's counter,
//! so they stay readable on the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a category, unique within one semester plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u32);

impl CategoryId {
    /// Wrap a raw id value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw id value
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// The id that follows this one, or `None` once the id space is used up
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for CategoryId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for CategoryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both "3" and the display form "#3"
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(CategoryId::new(3).to_string(), "#3");
    }

    #[test]
    fn test_id_parse() {
        assert_eq!("4".parse::<CategoryId>().unwrap(), CategoryId::new(4));
        assert_eq!("#4".parse::<CategoryId>().unwrap(), CategoryId::new(4));
        assert!("food".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_next() {
        assert_eq!(CategoryId::new(5).next(), Some(CategoryId::new(6)));
        assert_eq!(CategoryId::new(u32::MAX).next(), None);
    }

    #[test]
    fn test_id_serialization() {
        let id = CategoryId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let deserialized: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
