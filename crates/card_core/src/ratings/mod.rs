//! Composite rating system
//!
//! - Weight tables per category
//! - OverallCalculator (effective values, composite ratings, diffs)
//! - Range validation for upstream records

pub mod calculator;
pub mod validation;
pub mod weights;

pub use calculator::{compute, CompositeRatings, OverallCalculator, RatingsDiff};
pub use validation::{AttributeValidator, ValidationError};
pub use weights::{contributors, weights, MAX_RATING};
