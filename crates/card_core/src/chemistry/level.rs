use crate::error::CardError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chemistry level of the card (0-3 chemistry points)
///
/// Each level scales every modifier bonus before it is added to a base
/// attribute:
/// - None: bonus ignored
/// - Low: `floor(bonus / 4)`
/// - Mid: `floor(bonus / 2)`
/// - High: full bonus
///
/// Low is computed directly from the full bonus. `floor(floor(b / 2) / 2)`
/// gives the same value for every non-negative integer, so chaining through
/// Mid is never needed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default, JsonSchema,
)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "lowercase")]
pub enum ChemistryLevel {
    #[serde(alias = "chemistry0")]
    None,
    #[serde(alias = "chemistry1")]
    Low,
    #[serde(alias = "chemistry2")]
    Mid,
    // Profile page opens at full chemistry
    #[default]
    #[serde(alias = "chemistry3")]
    High,
}

impl ChemistryLevel {
    pub const ALL: [ChemistryLevel; 4] =
        [ChemistryLevel::None, ChemistryLevel::Low, ChemistryLevel::Mid, ChemistryLevel::High];

    /// Scale a full bonus to this level
    pub fn scale(&self, bonus: u8) -> u8 {
        match self {
            ChemistryLevel::None => 0,
            ChemistryLevel::Low => bonus / 4,
            ChemistryLevel::Mid => bonus / 2,
            ChemistryLevel::High => bonus,
        }
    }

    /// Chemistry points (0-3)
    pub fn points(&self) -> u8 {
        match self {
            ChemistryLevel::None => 0,
            ChemistryLevel::Low => 1,
            ChemistryLevel::Mid => 2,
            ChemistryLevel::High => 3,
        }
    }

    pub fn from_points(points: u8) -> Option<Self> {
        match points {
            0 => Some(ChemistryLevel::None),
            1 => Some(ChemistryLevel::Low),
            2 => Some(ChemistryLevel::Mid),
            3 => Some(ChemistryLevel::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChemistryLevel::None => "none",
            ChemistryLevel::Low => "low",
            ChemistryLevel::Mid => "mid",
            ChemistryLevel::High => "high",
        }
    }
}

impl fmt::Display for ChemistryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChemistryLevel {
    type Err = CardError;

    /// Accepts `none|low|mid|high`, `chemistry0..chemistry3` and `0..3`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let digits = normalized.strip_prefix("chemistry").unwrap_or(&normalized);

        if let Ok(points) = digits.parse::<u8>() {
            return ChemistryLevel::from_points(points)
                .ok_or_else(|| CardError::InvalidChemistryLevel(s.to_string()));
        }

        match normalized.as_str() {
            "none" => Ok(ChemistryLevel::None),
            "low" => Ok(ChemistryLevel::Low),
            "mid" => Ok(ChemistryLevel::Mid),
            "high" => Ok(ChemistryLevel::High),
            _ => Err(CardError::InvalidChemistryLevel(s.to_string())),
        }
    }
}
