//! Overall attribute calculator
//!
//! Turns base attributes + a modifier set + a chemistry level into the six
//! composite ratings shown on the card face.

use super::weights::{weights, MAX_RATING, WEIGHT_SCALE};
use crate::chemistry::{ChemistryLevel, ModifierSet};
use crate::models::{Attribute, Category, PlayerAttributes};
use serde::{Deserialize, Serialize};

/// The six composite ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CompositeRatings {
    pub pac: u8,
    pub sho: u8,
    pub pas: u8,
    pub dri: u8,
    pub def: u8,
    pub phy: u8,
}

impl CompositeRatings {
    /// Composites as published by the API (no recomputation)
    pub fn from_attributes(attrs: &PlayerAttributes) -> Self {
        Self {
            pac: attrs.pac,
            sho: attrs.sho,
            pas: attrs.pas,
            dri: attrs.dri,
            def: attrs.def,
            phy: attrs.phy,
        }
    }

    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Pac => self.pac,
            Category::Sho => self.sho,
            Category::Pas => self.pas,
            Category::Dri => self.dri,
            Category::Def => self.def,
            Category::Phy => self.phy,
        }
    }

    fn set(&mut self, category: Category, value: u8) {
        match category {
            Category::Pac => self.pac = value,
            Category::Sho => self.sho = value,
            Category::Pas => self.pas = value,
            Category::Dri => self.dri = value,
            Category::Def => self.def = value,
            Category::Phy => self.phy = value,
        }
    }

    /// (category, value) pairs in card order
    pub fn iter(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        Category::ALL.into_iter().map(move |cat| (cat, self.get(cat)))
    }

    /// Write these ratings over the composite fields of a record
    pub fn apply_to(&self, attrs: &mut PlayerAttributes) {
        for (cat, value) in self.iter() {
            attrs.set_composite(cat, value);
        }
    }
}

/// Calculator for composite ratings
pub struct OverallCalculator;

impl OverallCalculator {
    /// Effective value of one sub-attribute.
    ///
    /// No bonus entry (or level None) → base, untouched. Otherwise the
    /// level-scaled bonus is added and the result capped at 99.
    pub fn effective_value(base: u8, bonus: Option<u8>, level: ChemistryLevel) -> u8 {
        match bonus {
            Some(bonus) if level != ChemistryLevel::None => {
                let boosted = base as u16 + level.scale(bonus) as u16;
                boosted.min(MAX_RATING as u16) as u8
            }
            _ => base,
        }
    }

    /// Effective value of a named sub-attribute. `None` for keys with no card field.
    pub fn effective(
        base: &PlayerAttributes,
        attr: Attribute,
        modifiers: &ModifierSet,
        level: ChemistryLevel,
    ) -> Option<u8> {
        base.get(attr)
            .map(|value| Self::effective_value(value, modifiers.attribute_bonus(attr), level))
    }

    /// Copy of `base` with every sub-attribute replaced by its effective
    /// value. Composite fields are left as published.
    pub fn effective_attributes(
        base: &PlayerAttributes,
        modifiers: &ModifierSet,
        level: ChemistryLevel,
    ) -> PlayerAttributes {
        let mut effective = *base;
        for (attr, _) in modifiers.attribute_entries() {
            if let Some(value) = Self::effective(base, attr, modifiers, level) {
                effective.set(attr, value);
            }
        }
        effective
    }

    /// One composite rating: weighted sum of effective values, rounded half up
    pub fn compute_category(
        base: &PlayerAttributes,
        modifiers: &ModifierSet,
        level: ChemistryLevel,
        category: Category,
    ) -> u8 {
        let weighted: u32 = weights(category)
            .iter()
            .map(|(attr, weight)| {
                // Weight tables only name attributes that have a card field
                let value = Self::effective(base, *attr, modifiers, level).unwrap_or(0);
                value as u32 * *weight as u32
            })
            .sum();

        ((weighted + WEIGHT_SCALE / 2) / WEIGHT_SCALE) as u8
    }

    /// All six composite ratings
    pub fn compute(
        base: &PlayerAttributes,
        modifiers: &ModifierSet,
        level: ChemistryLevel,
    ) -> CompositeRatings {
        let mut ratings = CompositeRatings::default();
        for cat in Category::ALL {
            ratings.set(cat, Self::compute_category(base, modifiers, level, cat));
        }
        ratings
    }

    /// Add category-code bonuses (goalkeeper styles) directly to composites.
    ///
    /// Same rule as a sub-attribute: a category without an entry is left
    /// untouched, otherwise the level-scaled bonus is added and capped at 99.
    pub fn apply_category_bonuses(
        ratings: &CompositeRatings,
        modifiers: &ModifierSet,
        level: ChemistryLevel,
    ) -> CompositeRatings {
        let mut boosted = *ratings;
        for (cat, bonus) in modifiers.category_entries() {
            boosted.set(cat, Self::effective_value(ratings.get(cat), Some(bonus), level));
        }
        boosted
    }
}

/// Compute composite ratings (see `OverallCalculator::compute`)
pub fn compute(
    base: &PlayerAttributes,
    modifiers: &ModifierSet,
    level: ChemistryLevel,
) -> CompositeRatings {
    OverallCalculator::compute(base, modifiers, level)
}

/// Difference between two sets of ratings (for the "+N" badges)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RatingsDiff {
    pub pac_diff: i16,
    pub sho_diff: i16,
    pub pas_diff: i16,
    pub dri_diff: i16,
    pub def_diff: i16,
    pub phy_diff: i16,
}

impl RatingsDiff {
    /// `after - before`, per category
    pub fn between(before: &CompositeRatings, after: &CompositeRatings) -> Self {
        Self {
            pac_diff: after.pac as i16 - before.pac as i16,
            sho_diff: after.sho as i16 - before.sho as i16,
            pas_diff: after.pas as i16 - before.pas as i16,
            dri_diff: after.dri as i16 - before.dri as i16,
            def_diff: after.def as i16 - before.def as i16,
            phy_diff: after.phy as i16 - before.phy as i16,
        }
    }

    pub fn get(&self, category: Category) -> i16 {
        match category {
            Category::Pac => self.pac_diff,
            Category::Sho => self.sho_diff,
            Category::Pas => self.pas_diff,
            Category::Dri => self.dri_diff,
            Category::Def => self.def_diff,
            Category::Phy => self.phy_diff,
        }
    }

    /// Get the total absolute difference
    pub fn total_diff(&self) -> u16 {
        Category::ALL.iter().map(|cat| self.get(*cat).unsigned_abs()).sum()
    }

    /// Category with the largest gain, if any category went up
    pub fn biggest_gain(&self) -> Option<(Category, i16)> {
        Category::ALL
            .iter()
            .map(|cat| (*cat, self.get(*cat)))
            .filter(|(_, diff)| *diff > 0)
            .max_by_key(|(_, diff)| *diff)
    }
}
