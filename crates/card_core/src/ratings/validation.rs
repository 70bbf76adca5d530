//! Range checks for upstream attribute records
//!
//! The calculator accepts any `u8` and never calls this module. Callers that
//! want out-of-range records rejected (values above 99 would otherwise be
//! clamped down once a bonus applies) run the validator first.

use super::weights::MAX_RATING;
use crate::models::{Attribute, Category, PlayerAttributes};
use std::fmt;

/// Attribute validation failures
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Sub-attribute above the card ceiling
    InvalidAttribute { attribute: String, value: u8 },

    /// Published composite above the card ceiling
    InvalidComposite { category: String, value: u8 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidAttribute { attribute, value } => {
                write!(f, "Invalid attribute {}: {}. Must be between 0 and {}", attribute, value, MAX_RATING)
            }
            ValidationError::InvalidComposite { category, value } => {
                write!(f, "Invalid composite {}: {}. Must be between 0 and {}", category, value, MAX_RATING)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Attribute record validation utility
pub struct AttributeValidator;

impl AttributeValidator {
    /// Validate a single sub-attribute value (0-99)
    pub fn validate_attribute(attr: Attribute, value: u8) -> Result<(), ValidationError> {
        if value > MAX_RATING {
            return Err(ValidationError::InvalidAttribute {
                attribute: attr.as_str().to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Validate a published composite value (0-99)
    pub fn validate_composite(category: Category, value: u8) -> Result<(), ValidationError> {
        if value > MAX_RATING {
            return Err(ValidationError::InvalidComposite {
                category: category.as_str().to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Validate a whole record, stopping at the first failure
    pub fn validate(attrs: &PlayerAttributes) -> Result<(), ValidationError> {
        match Self::collect_issues(attrs).into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }

    /// Every range violation in a record, sub-attributes first
    pub fn collect_issues(attrs: &PlayerAttributes) -> Vec<ValidationError> {
        let sub_attributes = Attribute::all()
            .iter()
            .filter_map(|attr| attrs.get(*attr).map(|value| (*attr, value)))
            .filter_map(|(attr, value)| Self::validate_attribute(attr, value).err());

        let composites = Category::ALL
            .iter()
            .filter_map(|cat| Self::validate_composite(*cat, attrs.composite(*cat)).err());

        sub_attributes.chain(composites).collect()
    }
}
