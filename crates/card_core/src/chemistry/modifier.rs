//! Sparse bonus sets applied on top of base attributes

use super::level::ChemistryLevel;
use crate::error::CardError;
use crate::models::{Attribute, Category};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Key of a modifier entry.
///
/// Outfield styles target sub-attributes; goalkeeper styles also target
/// whole categories (`pac`, `sho`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ModifierKey {
    Attribute(Attribute),
    Category(Category),
}

impl ModifierKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModifierKey::Attribute(attr) => attr.as_str(),
            ModifierKey::Category(cat) => cat.as_str(),
        }
    }

    pub fn attribute(&self) -> Option<Attribute> {
        match self {
            ModifierKey::Attribute(attr) => Some(*attr),
            ModifierKey::Category(_) => None,
        }
    }
}

impl From<Attribute> for ModifierKey {
    fn from(attr: Attribute) -> Self {
        ModifierKey::Attribute(attr)
    }
}

impl From<Category> for ModifierKey {
    fn from(cat: Category) -> Self {
        ModifierKey::Category(cat)
    }
}

impl From<ModifierKey> for String {
    fn from(key: ModifierKey) -> Self {
        key.as_str().to_string()
    }
}

impl TryFrom<String> for ModifierKey {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for ModifierKey {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Category codes are exact lowercase on the wire; "pac" is never an attribute
        if let Some(cat) = Category::ALL.iter().find(|cat| cat.as_str() == s) {
            return Ok(ModifierKey::Category(*cat));
        }
        s.parse::<Attribute>().map(ModifierKey::Attribute)
    }
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sparse mapping from modifier key to bonus points.
///
/// Catalog entries hold full bonuses (4, 8 or 12). Scaling to a chemistry
/// level happens when the set is applied, or explicitly via `scaled`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierSet {
    entries: BTreeMap<ModifierKey, u8>,
}

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<ModifierKey>,
        I: IntoIterator<Item = (K, u8)>,
    {
        Self { entries: pairs.into_iter().map(|(key, bonus)| (key.into(), bonus)).collect() }
    }

    /// Build from a loosely typed name → bonus map (e.g. partial overrides
    /// coming from a UI). Unknown names are skipped.
    pub fn from_names(map: &HashMap<String, u8>) -> Self {
        let mut set = ModifierSet::new();
        for (name, bonus) in map {
            match name.parse::<ModifierKey>() {
                Ok(key) => {
                    set.insert(key, *bonus);
                }
                Err(_) => warn!("Skipping unknown modifier key: {}", name),
            }
        }
        set
    }

    /// Insert or replace an entry, returning the previous bonus
    pub fn insert(&mut self, key: impl Into<ModifierKey>, bonus: u8) -> Option<u8> {
        self.entries.insert(key.into(), bonus)
    }

    pub fn get(&self, key: impl Into<ModifierKey>) -> Option<u8> {
        self.entries.get(&key.into()).copied()
    }

    /// Bonus for a sub-attribute, if the set has one
    pub fn attribute_bonus(&self, attr: Attribute) -> Option<u8> {
        self.get(attr)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModifierKey, u8)> + '_ {
        self.entries.iter().map(|(key, bonus)| (*key, *bonus))
    }

    /// Sub-attribute entries only
    pub fn attribute_entries(&self) -> impl Iterator<Item = (Attribute, u8)> + '_ {
        self.iter().filter_map(|(key, bonus)| key.attribute().map(|attr| (attr, bonus)))
    }

    /// Category-code entries only (goalkeeper styles)
    pub fn category_entries(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        self.iter().filter_map(|(key, bonus)| match key {
            ModifierKey::Category(cat) => Some((cat, bonus)),
            ModifierKey::Attribute(_) => None,
        })
    }

    /// Level-appropriate partial: every entry scaled to `level`.
    ///
    /// Entries that scale to zero are dropped, so `scaled(None)` is empty.
    pub fn scaled(&self, level: ChemistryLevel) -> ModifierSet {
        Self {
            entries: self
                .entries
                .iter()
                .filter_map(|(key, bonus)| {
                    let scaled = level.scale(*bonus);
                    (scaled > 0).then_some((*key, scaled))
                })
                .collect(),
        }
    }

    /// Overlay `other` on top of `self`; keys present in both take `other`'s bonus
    pub fn merged(&self, other: &ModifierSet) -> ModifierSet {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.iter().map(|(key, bonus)| (*key, *bonus)));
        Self { entries }
    }
}

impl<K: Into<ModifierKey>> FromIterator<(K, u8)> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = (K, u8)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parsing() {
        assert_eq!("pac".parse::<ModifierKey>().unwrap(), ModifierKey::Category(Category::Pac));
        assert_eq!(
            "sprintSpeed".parse::<ModifierKey>().unwrap(),
            ModifierKey::Attribute(Attribute::SprintSpeed)
        );
        assert_eq!(
            "marking".parse::<ModifierKey>().unwrap(),
            ModifierKey::Attribute(Attribute::Marking)
        );
        assert!("diving".parse::<ModifierKey>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let set = ModifierSet::from_pairs([
            (ModifierKey::from(Attribute::ShotPower), 8),
            (ModifierKey::from(Category::Pac), 4),
        ]);
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!({ "shotPower": 8, "pac": 4 }));

        let back: ModifierSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_unknown_key_rejected_by_serde_but_skipped_by_from_names() {
        let strict: Result<ModifierSet, _> =
            serde_json::from_value(serde_json::json!({ "diving": 4 }));
        assert!(strict.is_err());

        let mut loose = HashMap::new();
        loose.insert("diving".to_string(), 4);
        loose.insert("finishing".to_string(), 12);
        let set = ModifierSet::from_names(&loose);
        assert_eq!(set.len(), 1);
        assert_eq!(set.attribute_bonus(Attribute::Finishing), Some(12));
    }

    #[test]
    fn test_scaled_partial() {
        let set = ModifierSet::from_pairs([
            (Attribute::Finishing, 12),
            (Attribute::Positioning, 4),
            (Attribute::Agility, 8),
        ]);

        let mid = set.scaled(ChemistryLevel::Mid);
        assert_eq!(mid.get(Attribute::Finishing), Some(6));
        assert_eq!(mid.get(Attribute::Positioning), Some(2));

        let low = set.scaled(ChemistryLevel::Low);
        assert_eq!(low.get(Attribute::Finishing), Some(3));
        assert_eq!(low.get(Attribute::Positioning), Some(1));
        assert_eq!(low.get(Attribute::Agility), Some(2));

        assert!(set.scaled(ChemistryLevel::None).is_empty());
        assert_eq!(set.scaled(ChemistryLevel::High), set);
    }

    #[test]
    fn test_merged_prefers_right_side() {
        let base = ModifierSet::from_pairs([(Attribute::Vision, 8), (Attribute::Curve, 4)]);
        let overlay = ModifierSet::from_pairs([(Attribute::Vision, 2), (Attribute::Jumping, 12)]);
        let merged = base.merged(&overlay);
        assert_eq!(merged.get(Attribute::Vision), Some(2));
        assert_eq!(merged.get(Attribute::Curve), Some(4));
        assert_eq!(merged.get(Attribute::Jumping), Some(12));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_entry_filters() {
        let set: ModifierSet = [
            (ModifierKey::from(Category::Dri), 8),
            (ModifierKey::from(Attribute::Acceleration), 4),
            (ModifierKey::from(Category::Phy), 12),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.attribute_entries().collect::<Vec<_>>(), vec![(Attribute::Acceleration, 4)]);
        assert_eq!(
            set.category_entries().collect::<Vec<_>>(),
            vec![(Category::Dri, 8), (Category::Phy, 12)]
        );
    }
}
