//! Category model
//!
//! A category is one budget line of a semester plan. Inactive categories are
//! left out of allocation totals but keep their amount so they can be
//! switched back on.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// A named bucket of intended spending
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier within the plan
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Display token (usually an emoji), never interpreted here
    #[serde(default)]
    pub icon: String,

    /// Amount set aside for this category
    pub allocated: Money,

    /// Whether this category counts toward allocation totals
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Category {
    /// Create a new, active category
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        icon: impl Into<String>,
        allocated: Money,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            allocated,
            is_active: true,
        }
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if self.allocated.is_negative() {
            return Err(CategoryValidationError::NegativeAllocation);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.icon.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.icon, self.name)
        }
    }
}

/// The category set every new plan starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Accommodation,
    Food,
    Transport,
    BooksAndStationery,
    AirtimeAndInternet,
}

impl DefaultCategory {
    /// Get all default categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Accommodation,
            Self::Food,
            Self::Transport,
            Self::BooksAndStationery,
            Self::AirtimeAndInternet,
        ]
    }

    /// Get the name for this default category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Accommodation => "Accommodation",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::BooksAndStationery => "Books & Stationery",
            Self::AirtimeAndInternet => "Airtime & Internet",
        }
    }

    /// Get the icon token for this default category
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Accommodation => "🏠",
            Self::Food => "🍽️",
            Self::Transport => "🚌",
            Self::BooksAndStationery => "📚",
            Self::AirtimeAndInternet => "📱",
        }
    }

    /// Suggested starting allocation
    pub fn suggested_amount(&self) -> Money {
        match self {
            Self::Accommodation => Money::from_units(8_000),
            Self::Food => Money::zero(),
            Self::Transport => Money::from_units(6_000),
            Self::BooksAndStationery => Money::from_units(4_000),
            Self::AirtimeAndInternet => Money::from_units(2_000),
        }
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeAllocation,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::NegativeAllocation => write!(f, "Allocated amount cannot be negative"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new(CategoryId::new(1), "Food", "🍽️", Money::zero());

        assert_eq!(category.name, "Food");
        assert!(category.is_active);
        assert_eq!(category.to_string(), "🍽️ Food");
    }

    #[test]
    fn test_has_name_ignores_case_and_padding() {
        let category = Category::new(CategoryId::new(1), "Transport", "", Money::zero());
        assert!(category.has_name("  transport "));
        assert!(category.has_name("TRANSPORT"));
        assert!(!category.has_name("Transit"));
    }

    #[test]
    fn test_category_validation() {
        let mut category = Category::new(CategoryId::new(1), "Valid", "", Money::zero());
        assert!(category.validate().is_ok());

        category.name = "   ".into();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(51);
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NameTooLong(51))
        ));

        category.name = "Valid".into();
        category.allocated = Money::from_units(-1);
        assert_eq!(
            category.validate(),
            Err(CategoryValidationError::NegativeAllocation)
        );
    }

    #[test]
    fn test_default_categories() {
        let defaults = DefaultCategory::all();
        assert_eq!(defaults.len(), 5);
        assert_eq!(defaults[0].name(), "Accommodation");
        assert_eq!(defaults[3].name(), "Books & Stationery");

        let total: Money = defaults.iter().map(|d| d.suggested_amount()).sum();
        assert_eq!(total, Money::from_units(20_000));
    }

    #[test]
    fn test_inactive_flag_defaults_on_deserialize() {
        let json = r#"{"id":2,"name":"Food","allocated":0}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert!(category.is_active);
        assert!(category.icon.is_empty());
    }
}
