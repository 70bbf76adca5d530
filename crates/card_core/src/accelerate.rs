//! Accelerate type classification
//!
//! Ordered first-match decision list over height, strength, agility and
//! acceleration. Rules overlap, so order matters: the earliest matching rule
//! wins and anything unmatched is `Controlled`.

use crate::chemistry::{ChemistryLevel, ModifierSet};
use crate::error::CardError;
use crate::models::{Attribute, PlayerAttributes};
use crate::ratings::OverallCalculator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Acceleration archetype shown on the profile page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum AccelerateType {
    #[serde(rename = "Lengthy")]
    Lengthy,
    #[serde(rename = "Mostly Lengthy")]
    MostlyLengthy,
    #[serde(rename = "Controlled Lengthy")]
    ControlledLengthy,
    #[serde(rename = "Explosive")]
    Explosive,
    #[serde(rename = "Mostly Explosive")]
    MostlyExplosive,
    #[serde(rename = "Controlled Explosive")]
    ControlledExplosive,
    #[serde(rename = "Controlled")]
    Controlled,
}

impl AccelerateType {
    pub const ALL: [AccelerateType; 7] = [
        AccelerateType::Lengthy,
        AccelerateType::MostlyLengthy,
        AccelerateType::ControlledLengthy,
        AccelerateType::Explosive,
        AccelerateType::MostlyExplosive,
        AccelerateType::ControlledExplosive,
        AccelerateType::Controlled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccelerateType::Lengthy => "Lengthy",
            AccelerateType::MostlyLengthy => "Mostly Lengthy",
            AccelerateType::ControlledLengthy => "Controlled Lengthy",
            AccelerateType::Explosive => "Explosive",
            AccelerateType::MostlyExplosive => "Mostly Explosive",
            AccelerateType::ControlledExplosive => "Controlled Explosive",
            AccelerateType::Controlled => "Controlled",
        }
    }

    pub fn is_lengthy(&self) -> bool {
        matches!(
            self,
            AccelerateType::Lengthy | AccelerateType::MostlyLengthy | AccelerateType::ControlledLengthy
        )
    }

    pub fn is_explosive(&self) -> bool {
        matches!(
            self,
            AccelerateType::Explosive
                | AccelerateType::MostlyExplosive
                | AccelerateType::ControlledExplosive
        )
    }
}

impl fmt::Display for AccelerateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AccelerateType {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccelerateType::ALL
            .iter()
            .copied()
            .find(|kind| kind.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CardError::UnknownAccelerateType(s.to_string()))
    }
}

/// Classifier input (post-modification values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelerateInput {
    /// cm
    pub height: u16,
    pub agility: u8,
    pub acceleration: u8,
    pub strength: u8,
}

impl AccelerateInput {
    pub fn new(height: u16, agility: u8, acceleration: u8, strength: u8) -> Self {
        Self { height, agility, acceleration, strength }
    }

    /// |strength - agility|
    pub fn strength_agility_gap(&self) -> u8 {
        self.strength.abs_diff(self.agility)
    }
}

/// Body-type half of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Build {
    /// height >= min_height and strength >= min_strength
    Tall { min_height: u16, min_strength: u8 },
    /// height <= max_height and agility >= min_agility
    Short { max_height: u16, min_agility: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AccelerateRule {
    kind: AccelerateType,
    build: Build,
    min_acceleration: u8,
    min_gap: u8,
}

impl AccelerateRule {
    fn matches(&self, input: &AccelerateInput) -> bool {
        let build_ok = match self.build {
            Build::Tall { min_height, min_strength } => {
                input.height >= min_height && input.strength >= min_strength
            }
            Build::Short { max_height, min_agility } => {
                input.height <= max_height && input.agility >= min_agility
            }
        };

        build_ok
            && input.acceleration >= self.min_acceleration
            && input.strength_agility_gap() >= self.min_gap
    }
}

const RULES: [AccelerateRule; 6] = [
    AccelerateRule {
        kind: AccelerateType::Lengthy,
        build: Build::Tall { min_height: 188, min_strength: 80 },
        min_acceleration: 55,
        min_gap: 20,
    },
    AccelerateRule {
        kind: AccelerateType::MostlyLengthy,
        build: Build::Tall { min_height: 183, min_strength: 75 },
        min_acceleration: 55,
        min_gap: 12,
    },
    AccelerateRule {
        kind: AccelerateType::ControlledLengthy,
        build: Build::Tall { min_height: 181, min_strength: 65 },
        min_acceleration: 40,
        min_gap: 4,
    },
    AccelerateRule {
        kind: AccelerateType::Explosive,
        build: Build::Short { max_height: 175, min_agility: 80 },
        min_acceleration: 80,
        min_gap: 20,
    },
    AccelerateRule {
        kind: AccelerateType::MostlyExplosive,
        build: Build::Short { max_height: 182, min_agility: 70 },
        min_acceleration: 80,
        min_gap: 12,
    },
    AccelerateRule {
        kind: AccelerateType::ControlledExplosive,
        build: Build::Short { max_height: 182, min_agility: 65 },
        min_acceleration: 70,
        min_gap: 4,
    },
];

/// Stateless accelerate type classifier
pub struct AccelerateClassifier;

impl AccelerateClassifier {
    /// First matching rule, `Controlled` when none match
    pub fn classify(input: &AccelerateInput) -> AccelerateType {
        RULES
            .iter()
            .find(|rule| rule.matches(input))
            .map(|rule| rule.kind)
            .unwrap_or(AccelerateType::Controlled)
    }

    /// Classify from base attributes after applying chemistry bonuses
    pub fn classify_effective(
        height: u16,
        base: &PlayerAttributes,
        modifiers: &ModifierSet,
        level: ChemistryLevel,
    ) -> AccelerateType {
        let effective = |attr: Attribute| {
            OverallCalculator::effective(base, attr, modifiers, level).unwrap_or_default()
        };
        let input = AccelerateInput::new(
            height,
            effective(Attribute::Agility),
            effective(Attribute::Acceleration),
            effective(Attribute::Strength),
        );
        Self::classify(&input)
    }
}

/// Classify raw values (see `AccelerateClassifier::classify`)
pub fn classify(height: u16, agility: u8, acceleration: u8, strength: u8) -> AccelerateType {
    AccelerateClassifier::classify(&AccelerateInput::new(height, agility, acceleration, strength))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::lookup;
    use crate::models::player::fixtures::winger_attributes;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_lengthy_example() {
        // |85 - 50| = 35
        assert_eq!(classify(190, 50, 60, 85), AccelerateType::Lengthy);
    }

    #[test]
    fn test_each_rule() {
        assert_eq!(classify(185, 62, 60, 78), AccelerateType::MostlyLengthy);
        assert_eq!(classify(182, 64, 45, 70), AccelerateType::ControlledLengthy);
        assert_eq!(classify(170, 90, 90, 60), AccelerateType::Explosive);
        assert_eq!(classify(180, 75, 85, 60), AccelerateType::MostlyExplosive);
        assert_eq!(classify(178, 68, 72, 62), AccelerateType::ControlledExplosive);
        assert_eq!(classify(178, 60, 60, 60), AccelerateType::Controlled);
    }

    #[test]
    fn test_first_match_wins() {
        // Meets Lengthy and Controlled Lengthy
        let input = AccelerateInput::new(190, 50, 60, 85);
        assert!(RULES[2].matches(&input));
        assert_eq!(AccelerateClassifier::classify(&input), AccelerateType::Lengthy);

        // 181-182 cm overlaps both families; lengthy rules come first
        let overlap = AccelerateInput::new(182, 80, 85, 66);
        assert!(RULES[4].matches(&overlap));
        assert_eq!(AccelerateClassifier::classify(&overlap), AccelerateType::ControlledLengthy);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(classify(188, 60, 55, 80), AccelerateType::Lengthy);
        assert_eq!(classify(175, 80, 80, 60), AccelerateType::Explosive);
        // Gap one short of 20 drops to the next rule
        assert_eq!(classify(175, 80, 80, 61), AccelerateType::MostlyExplosive);
    }

    #[test]
    fn test_gap_is_absolute() {
        // strength far above agility vs agility far above strength
        assert_eq!(AccelerateInput::new(180, 50, 70, 90).strength_agility_gap(), 40);
        assert_eq!(AccelerateInput::new(180, 90, 70, 50).strength_agility_gap(), 40);
    }

    #[test]
    fn test_classify_effective_uses_bonuses() {
        let mut attrs = winger_attributes();
        attrs.agility = 66;
        attrs.acceleration = 66;
        attrs.strength = 60;
        let none = ModifierSet::new();
        let hunter = lookup("Hunter").unwrap();

        assert_eq!(
            AccelerateClassifier::classify_effective(180, &attrs, &none, ChemistryLevel::High),
            AccelerateType::Controlled
        );
        // acceleration 66 + 8 = 74
        assert_eq!(
            AccelerateClassifier::classify_effective(180, &attrs, &hunter, ChemistryLevel::High),
            AccelerateType::ControlledExplosive
        );
        // acceleration 66 + 2 = 68
        assert_eq!(
            AccelerateClassifier::classify_effective(180, &attrs, &hunter, ChemistryLevel::Low),
            AccelerateType::Controlled
        );
    }

    #[test]
    fn test_labels_round_trip() {
        for kind in AccelerateType::iter() {
            assert_eq!(kind.label().parse::<AccelerateType>().unwrap(), kind);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.label()));
        }
        assert!("Rapid".parse::<AccelerateType>().is_err());
    }

    proptest! {
        /// Property: lengthy labels need height >= 181, explosive labels need height <= 182
        #[test]
        fn prop_family_respects_height(
            height in 150u16..210,
            agility in 0u8..=99,
            acceleration in 0u8..=99,
            strength in 0u8..=99
        ) {
            let kind = classify(height, agility, acceleration, strength);
            if kind.is_lengthy() {
                prop_assert!(height >= 181);
            }
            if kind.is_explosive() {
                prop_assert!(height <= 182);
            }
        }

        /// Property: a zero gap always classifies as Controlled
        #[test]
        fn prop_balanced_body_is_controlled(height in 150u16..210, value in 0u8..=99, acceleration in 0u8..=99) {
            prop_assert_eq!(classify(height, value, acceleration, value), AccelerateType::Controlled);
        }
    }
}
