//! Composite rating weight tables
//!
//! Weights are integer percentages; every category sums to 100.

use crate::models::Attribute::{self, *};
use crate::models::Category;

/// Ceiling for effective sub-attributes
pub const MAX_RATING: u8 = 99;

/// Sum of the weights of one category
pub const WEIGHT_SCALE: u32 = 100;

pub const PAC_WEIGHTS: &[(Attribute, u8)] = &[(SprintSpeed, 55), (Acceleration, 45)];

pub const SHO_WEIGHTS: &[(Attribute, u8)] = &[
    (Finishing, 45),
    (LongShots, 20),
    (ShotPower, 20),
    (Volleys, 5),
    (Positioning, 5),
    (Penalties, 5),
];

pub const PAS_WEIGHTS: &[(Attribute, u8)] = &[
    (ShortPassing, 35),
    (Crossing, 20),
    (Vision, 20),
    (LongPassing, 15),
    (Curve, 5),
    (FkAccuracy, 5),
];

pub const DRI_WEIGHTS: &[(Attribute, u8)] =
    &[(Dribbling, 50), (BallControl, 35), (Agility, 10), (Balance, 5)];

pub const DEF_WEIGHTS: &[(Attribute, u8)] = &[
    (StandingTackle, 30),
    (DefensiveAwareness, 30),
    (Interceptions, 20),
    (HeadingAccuracy, 10),
    (SlidingTackle, 10),
];

pub const PHY_WEIGHTS: &[(Attribute, u8)] =
    &[(Strength, 50), (Stamina, 25), (Aggression, 20), (Jumping, 5)];

/// Weight table for a category, heaviest contributor first
pub fn weights(category: Category) -> &'static [(Attribute, u8)] {
    match category {
        Category::Pac => PAC_WEIGHTS,
        Category::Sho => SHO_WEIGHTS,
        Category::Pas => PAS_WEIGHTS,
        Category::Dri => DRI_WEIGHTS,
        Category::Def => DEF_WEIGHTS,
        Category::Phy => PHY_WEIGHTS,
    }
}

/// Attribute names feeding a category (for UI tooltips)
pub fn contributors(category: Category) -> Vec<&'static str> {
    weights(category).iter().map(|(attr, _)| attr.as_str()).collect()
}

/// Category a weighted attribute feeds, if any
pub fn feeds(attr: Attribute) -> Option<Category> {
    Category::ALL.into_iter().find(|cat| weights(*cat).iter().any(|(a, _)| *a == attr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_scale() {
        for cat in Category::ALL {
            let total: u32 = weights(cat).iter().map(|(_, w)| *w as u32).sum();
            assert_eq!(total, WEIGHT_SCALE, "{cat} weights");
        }
    }

    #[test]
    fn test_each_attribute_feeds_at_most_one_category() {
        for attr in Attribute::all() {
            let count = Category::ALL
                .iter()
                .filter(|cat| weights(**cat).iter().any(|(a, _)| a == attr))
                .count();
            assert!(count <= 1, "{attr} feeds {count} categories");
        }
    }

    #[test]
    fn test_unweighted_attributes() {
        assert_eq!(feeds(Reactions), None);
        assert_eq!(feeds(Composure), None);
        assert_eq!(feeds(Marking), None);
        assert_eq!(feeds(Agility), Some(Category::Dri));
    }

    #[test]
    fn test_contributors() {
        assert_eq!(contributors(Category::Pac), vec!["sprintSpeed", "acceleration"]);
        assert_eq!(contributors(Category::Phy)[0], "strength");
    }
}
