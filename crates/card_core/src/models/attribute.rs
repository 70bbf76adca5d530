//! Attribute and category identifiers
//!
//! Wire names follow the card database API (camelCase sub-attributes,
//! lowercase three-letter category codes).

use crate::error::CardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Sub-attributes
// ============================================================================

/// Named sub-attribute of a player card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    // === Pace ===
    Acceleration,
    SprintSpeed,

    // === Shooting ===
    Positioning,
    Finishing,
    ShotPower,
    LongShots,
    Volleys,
    Penalties,

    // === Passing ===
    Vision,
    Crossing,
    FkAccuracy,
    ShortPassing,
    LongPassing,
    Curve,

    // === Dribbling ===
    Agility,
    Balance,
    Reactions,
    BallControl,
    Dribbling,
    Composure,

    // === Defending ===
    Interceptions,
    HeadingAccuracy,
    DefensiveAwareness,
    StandingTackle,
    SlidingTackle,

    // === Physical ===
    Jumping,
    Stamina,
    Strength,
    Aggression,

    /// Legacy key still present in the "Basic" style table. No card field.
    Marking,
}

impl Attribute {
    /// Every attribute, in card order
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Acceleration,
            Attribute::SprintSpeed,
            Attribute::Positioning,
            Attribute::Finishing,
            Attribute::ShotPower,
            Attribute::LongShots,
            Attribute::Volleys,
            Attribute::Penalties,
            Attribute::Vision,
            Attribute::Crossing,
            Attribute::FkAccuracy,
            Attribute::ShortPassing,
            Attribute::LongPassing,
            Attribute::Curve,
            Attribute::Agility,
            Attribute::Balance,
            Attribute::Reactions,
            Attribute::BallControl,
            Attribute::Dribbling,
            Attribute::Composure,
            Attribute::Interceptions,
            Attribute::HeadingAccuracy,
            Attribute::DefensiveAwareness,
            Attribute::StandingTackle,
            Attribute::SlidingTackle,
            Attribute::Jumping,
            Attribute::Stamina,
            Attribute::Strength,
            Attribute::Aggression,
            Attribute::Marking,
        ]
    }

    /// API field name
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Acceleration => "acceleration",
            Attribute::SprintSpeed => "sprintSpeed",
            Attribute::Positioning => "positioning",
            Attribute::Finishing => "finishing",
            Attribute::ShotPower => "shotPower",
            Attribute::LongShots => "longShots",
            Attribute::Volleys => "volleys",
            Attribute::Penalties => "penalties",
            Attribute::Vision => "vision",
            Attribute::Crossing => "crossing",
            Attribute::FkAccuracy => "fkAccuracy",
            Attribute::ShortPassing => "shortPassing",
            Attribute::LongPassing => "longPassing",
            Attribute::Curve => "curve",
            Attribute::Agility => "agility",
            Attribute::Balance => "balance",
            Attribute::Reactions => "reactions",
            Attribute::BallControl => "ballControl",
            Attribute::Dribbling => "dribbling",
            Attribute::Composure => "composure",
            Attribute::Interceptions => "interceptions",
            Attribute::HeadingAccuracy => "headingAccuracy",
            Attribute::DefensiveAwareness => "defensiveAwareness",
            Attribute::StandingTackle => "standingTackle",
            Attribute::SlidingTackle => "slidingTackle",
            Attribute::Jumping => "jumping",
            Attribute::Stamina => "stamina",
            Attribute::Strength => "strength",
            Attribute::Aggression => "aggression",
            Attribute::Marking => "marking",
        }
    }

    /// Human-readable label for the profile page
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Acceleration => "Acceleration",
            Attribute::SprintSpeed => "Sprint Speed",
            Attribute::Positioning => "Positioning",
            Attribute::Finishing => "Finishing",
            Attribute::ShotPower => "Shot Power",
            Attribute::LongShots => "Long Shots",
            Attribute::Volleys => "Volleys",
            Attribute::Penalties => "Penalties",
            Attribute::Vision => "Vision",
            Attribute::Crossing => "Crossing",
            Attribute::FkAccuracy => "FK Accuracy",
            Attribute::ShortPassing => "Short Passing",
            Attribute::LongPassing => "Long Passing",
            Attribute::Curve => "Curve",
            Attribute::Agility => "Agility",
            Attribute::Balance => "Balance",
            Attribute::Reactions => "Reactions",
            Attribute::BallControl => "Ball Control",
            Attribute::Dribbling => "Dribbling",
            Attribute::Composure => "Composure",
            Attribute::Interceptions => "Interceptions",
            Attribute::HeadingAccuracy => "Heading Accuracy",
            Attribute::DefensiveAwareness => "Def. Awareness",
            Attribute::StandingTackle => "Standing Tackle",
            Attribute::SlidingTackle => "Sliding Tackle",
            Attribute::Jumping => "Jumping",
            Attribute::Stamina => "Stamina",
            Attribute::Strength => "Strength",
            Attribute::Aggression => "Aggression",
            Attribute::Marking => "Marking",
        }
    }

    /// Category the attribute is listed under on the card
    pub fn category(&self) -> Category {
        match self {
            Attribute::Acceleration | Attribute::SprintSpeed => Category::Pac,
            Attribute::Positioning
            | Attribute::Finishing
            | Attribute::ShotPower
            | Attribute::LongShots
            | Attribute::Volleys
            | Attribute::Penalties => Category::Sho,
            Attribute::Vision
            | Attribute::Crossing
            | Attribute::FkAccuracy
            | Attribute::ShortPassing
            | Attribute::LongPassing
            | Attribute::Curve => Category::Pas,
            Attribute::Agility
            | Attribute::Balance
            | Attribute::Reactions
            | Attribute::BallControl
            | Attribute::Dribbling
            | Attribute::Composure => Category::Dri,
            Attribute::Interceptions
            | Attribute::HeadingAccuracy
            | Attribute::DefensiveAwareness
            | Attribute::StandingTackle
            | Attribute::SlidingTackle
            | Attribute::Marking => Category::Def,
            Attribute::Jumping | Attribute::Stamina | Attribute::Strength | Attribute::Aggression => {
                Category::Phy
            }
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::all()
            .iter()
            .copied()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| CardError::UnknownModifierKey(s.to_string()))
    }
}

// ============================================================================
// Composite categories
// ============================================================================

/// One of the six composite ratings shown on the card face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pac,
    Sho,
    Pas,
    Dri,
    Def,
    Phy,
}

impl Category {
    pub const ALL: [Category; 6] =
        [Category::Pac, Category::Sho, Category::Pas, Category::Dri, Category::Def, Category::Phy];

    /// API code ("pac", "sho", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pac => "pac",
            Category::Sho => "sho",
            Category::Pas => "pas",
            Category::Dri => "dri",
            Category::Def => "def",
            Category::Phy => "phy",
        }
    }

    /// Card face label ("PAC", "SHO", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pac => "PAC",
            Category::Sho => "SHO",
            Category::Pas => "PAS",
            Category::Dri => "DRI",
            Category::Def => "DEF",
            Category::Phy => "PHY",
        }
    }

    /// Long name for section headers
    pub fn name(&self) -> &'static str {
        match self {
            Category::Pac => "Pace",
            Category::Sho => "Shooting",
            Category::Pas => "Passing",
            Category::Dri => "Dribbling",
            Category::Def => "Defending",
            Category::Phy => "Physical",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|cat| cat.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CardError::UnknownModifierKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_lists_every_attribute() {
        let iterated: Vec<Attribute> = Attribute::iter().collect();
        assert_eq!(iterated.len(), Attribute::all().len());
        for attr in Attribute::iter() {
            assert!(Attribute::all().contains(&attr), "{attr} missing from all()");
        }
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for attr in Attribute::iter() {
            let json = serde_json::to_string(&attr).unwrap();
            assert_eq!(json, format!("\"{}\"", attr.as_str()));
            assert_eq!(attr.as_str().parse::<Attribute>().unwrap(), attr);
        }
        for cat in Category::iter() {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.as_str()));
        }
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert!("sprint_speed".parse::<Attribute>().is_err());
        assert!("speed".parse::<Category>().is_err());
        assert_eq!("PAC".parse::<Category>().unwrap(), Category::Pac);
    }

    #[test]
    fn test_category_grouping() {
        assert_eq!(Attribute::SprintSpeed.category(), Category::Pac);
        assert_eq!(Attribute::FkAccuracy.category(), Category::Pas);
        assert_eq!(Attribute::Composure.category(), Category::Dri);
        assert_eq!(Attribute::Aggression.category(), Category::Phy);
    }
}
