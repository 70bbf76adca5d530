//! Chemistry Style Catalog
//!
//! Fixed table of the 24 chemistry styles (19 outfield, 5 goalkeeper) and
//! their full-chemistry bonus points. Read-only, process-wide.

use super::modifier::ModifierKey::{Attribute as A, Category as C};
use super::modifier::{ModifierKey, ModifierSet};
use crate::models::Attribute::*;
use crate::models::Category::{Dri, Pac, Pas, Phy, Sho};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// A named chemistry style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChemistryStyle {
    pub name: &'static str,
    /// Full-chemistry bonus points
    pub bonuses: &'static [(ModifierKey, u8)],
    /// Only offered to goalkeepers
    pub goalkeeper: bool,
}

impl ChemistryStyle {
    const fn outfield(name: &'static str, bonuses: &'static [(ModifierKey, u8)]) -> Self {
        Self { name, bonuses, goalkeeper: false }
    }

    const fn keeper(name: &'static str, bonuses: &'static [(ModifierKey, u8)]) -> Self {
        Self { name, bonuses, goalkeeper: true }
    }

    pub fn modifiers(&self) -> ModifierSet {
        self.bonuses.iter().copied().collect()
    }

    pub fn icon_key(&self) -> String {
        icon_key(self.name)
    }
}

static STYLES: [ChemistryStyle; 24] = [
    ChemistryStyle::outfield(
        "Basic",
        &[
            (A(SprintSpeed), 4),
            (A(Positioning), 4),
            (A(ShotPower), 4),
            (A(Volleys), 4),
            (A(Penalties), 4),
            (A(Vision), 4),
            (A(ShortPassing), 4),
            (A(LongPassing), 4),
            (A(Curve), 4),
            (A(Agility), 4),
            (A(BallControl), 4),
            (A(Dribbling), 4),
            (A(Marking), 4),
            (A(StandingTackle), 4),
            (A(SlidingTackle), 4),
            (A(Jumping), 4),
            (A(Strength), 4),
        ],
    ),
    ChemistryStyle::outfield(
        "Sniper",
        &[
            (A(Positioning), 4),
            (A(ShotPower), 8),
            (A(LongShots), 12),
            (A(Volleys), 8),
            (A(Penalties), 4),
            (A(Jumping), 4),
            (A(Strength), 12),
            (A(Aggression), 8),
        ],
    ),
    ChemistryStyle::outfield(
        "Finisher",
        &[
            (A(Positioning), 4),
            (A(Finishing), 12),
            (A(ShotPower), 8),
            (A(Volleys), 8),
            (A(Penalties), 4),
            (A(Agility), 8),
            (A(Balance), 4),
            (A(Dribbling), 12),
        ],
    ),
    ChemistryStyle::outfield(
        "Deadeye",
        &[
            (A(Positioning), 8),
            (A(Finishing), 8),
            (A(ShotPower), 12),
            (A(LongShots), 4),
            (A(Penalties), 4),
            (A(Vision), 8),
            (A(ShortPassing), 12),
            (A(Curve), 4),
        ],
    ),
    ChemistryStyle::outfield(
        "Marksman",
        &[
            (A(Finishing), 8),
            (A(ShotPower), 4),
            (A(LongShots), 8),
            (A(Penalties), 4),
            (A(Reactions), 4),
            (A(BallControl), 8),
            (A(Dribbling), 8),
            (A(Jumping), 8),
            (A(Strength), 8),
        ],
    ),
    ChemistryStyle::outfield(
        "Hawk",
        &[
            (A(Acceleration), 4),
            (A(SprintSpeed), 4),
            (A(Positioning), 4),
            (A(Finishing), 4),
            (A(ShotPower), 8),
            (A(LongShots), 8),
            (A(Penalties), 4),
            (A(Jumping), 8),
            (A(Strength), 4),
            (A(Aggression), 8),
        ],
    ),
    ChemistryStyle::outfield(
        "Hunter",
        &[
            (A(Acceleration), 8),
            (A(SprintSpeed), 8),
            (A(Positioning), 4),
            (A(Finishing), 8),
            (A(ShotPower), 4),
            (A(Volleys), 12),
            (A(Penalties), 8),
        ],
    ),
    ChemistryStyle::outfield(
        "Artist",
        &[
            (A(Vision), 8),
            (A(Crossing), 8),
            (A(FkAccuracy), 4),
            (A(LongPassing), 12),
            (A(Curve), 4),
            (A(Agility), 12),
            (A(Reactions), 4),
            (A(Dribbling), 8),
        ],
    ),
    ChemistryStyle::outfield(
        "Architect",
        &[
            (A(Vision), 8),
            (A(FkAccuracy), 4),
            (A(ShortPassing), 12),
            (A(LongPassing), 4),
            (A(Curve), 8),
            (A(Jumping), 8),
            (A(Strength), 12),
            (A(Aggression), 4),
        ],
    ),
    ChemistryStyle::outfield(
        "Powerhouse",
        &[
            (A(Vision), 12),
            (A(Crossing), 4),
            (A(ShortPassing), 8),
            (A(LongPassing), 8),
            (A(Curve), 4),
            (A(Interceptions), 8),
            (A(DefensiveAwareness), 4),
            (A(StandingTackle), 12),
        ],
    ),
    ChemistryStyle::outfield(
        "Maestro",
        &[
            (A(ShotPower), 8),
            (A(LongShots), 8),
            (A(Volleys), 4),
            (A(Vision), 4),
            (A(FkAccuracy), 8),
            (A(ShortPassing), 4),
            (A(LongPassing), 8),
        ],
    ),
    ChemistryStyle::outfield(
        "Engine",
        &[
            (A(Acceleration), 4),
            (A(SprintSpeed), 4),
            (A(Vision), 4),
            (A(Crossing), 8),
            (A(ShortPassing), 4),
            (A(LongPassing), 4),
            (A(Curve), 8),
            (A(Agility), 4),
            (A(Balance), 8),
            (A(Dribbling), 8),
        ],
    ),
    ChemistryStyle::outfield(
        "Catalyst",
        &[
            (A(Acceleration), 8),
            (A(SprintSpeed), 8),
            (A(Crossing), 12),
            (A(FkAccuracy), 8),
            (A(ShortPassing), 4),
            (A(LongPassing), 8),
            (A(Curve), 4),
        ],
    ),
    ChemistryStyle::outfield(
        "Sentinel",
        &[
            (A(Interceptions), 8),
            (A(HeadingAccuracy), 12),
            (A(DefensiveAwareness), 8),
            (A(StandingTackle), 4),
            (A(SlidingTackle), 4),
            (A(Jumping), 12),
            (A(Strength), 12),
            (A(Aggression), 8),
        ],
    ),
    ChemistryStyle::outfield(
        "Guardian",
        &[
            (A(Balance), 8),
            (A(BallControl), 4),
            (A(Dribbling), 12),
            (A(Interceptions), 8),
            (A(HeadingAccuracy), 4),
            (A(DefensiveAwareness), 8),
            (A(StandingTackle), 12),
            (A(SlidingTackle), 8),
        ],
    ),
    ChemistryStyle::outfield(
        "Gladiator",
        &[
            (A(Finishing), 12),
            (A(ShotPower), 8),
            (A(Volleys), 4),
            (A(Interceptions), 8),
            (A(HeadingAccuracy), 4),
            (A(DefensiveAwareness), 4),
            (A(StandingTackle), 8),
            (A(SlidingTackle), 12),
        ],
    ),
    ChemistryStyle::outfield(
        "Backbone",
        &[
            (A(Vision), 8),
            (A(LongPassing), 8),
            (A(Interceptions), 8),
            (A(DefensiveAwareness), 4),
            (A(StandingTackle), 8),
            (A(SlidingTackle), 4),
            (A(Jumping), 8),
            (A(Strength), 4),
            (A(Aggression), 8),
        ],
    ),
    ChemistryStyle::outfield(
        "Anchor",
        &[
            (A(Acceleration), 4),
            (A(SprintSpeed), 4),
            (A(Interceptions), 4),
            (A(HeadingAccuracy), 4),
            (A(DefensiveAwareness), 4),
            (A(StandingTackle), 8),
            (A(SlidingTackle), 8),
            (A(Jumping), 8),
            (A(Strength), 8),
            (A(Aggression), 4),
        ],
    ),
    ChemistryStyle::outfield(
        "Shadow",
        &[
            (A(Acceleration), 8),
            (A(SprintSpeed), 8),
            (A(Interceptions), 8),
            (A(HeadingAccuracy), 4),
            (A(DefensiveAwareness), 4),
            (A(StandingTackle), 8),
            (A(SlidingTackle), 12),
        ],
    ),
    // === Goalkeeper styles ===
    ChemistryStyle::keeper(
        "GK Basic",
        &[(C(Pac), 4), (C(Sho), 4), (C(Pas), 4), (C(Dri), 4), (A(Acceleration), 4), (C(Phy), 4)],
    ),
    ChemistryStyle::keeper("Wall", &[(C(Pac), 12), (C(Sho), 4), (C(Pas), 8)]),
    ChemistryStyle::keeper("Shield", &[(C(Pas), 8), (C(Dri), 12), (A(SprintSpeed), 4)]),
    ChemistryStyle::keeper("Cat", &[(C(Dri), 8), (A(Acceleration), 4), (C(Phy), 12)]),
    ChemistryStyle::keeper("Glove", &[(C(Pac), 8), (C(Sho), 12), (C(Phy), 4)]),
];

static STYLE_INDEX: Lazy<HashMap<&'static str, &'static ChemistryStyle>> =
    Lazy::new(|| STYLES.iter().map(|style| (style.name, style)).collect());

/// Every style, in catalog order
pub fn all_styles() -> &'static [ChemistryStyle] {
    &STYLES
}

/// Exact-name style lookup
pub fn find(style_name: &str) -> Option<&'static ChemistryStyle> {
    STYLE_INDEX.get(style_name).copied()
}

/// Full-chemistry bonuses of a style. Unknown names yield `None`, which
/// callers treat as "no modification".
pub fn lookup(style_name: &str) -> Option<ModifierSet> {
    find(style_name).map(ChemistryStyle::modifiers)
}

pub fn is_goalkeeper_style(style_name: &str) -> bool {
    find(style_name).is_some_and(|style| style.goalkeeper)
}

/// Styles offered for a main position: goalkeepers get the GK styles only,
/// everyone else gets the outfield ones.
pub fn styles_for_position(main_pos: &str) -> Vec<&'static ChemistryStyle> {
    let goalkeeper = main_pos.eq_ignore_ascii_case("GK");
    STYLES.iter().filter(|style| style.goalkeeper == goalkeeper).collect()
}

/// Category prefixes stripped from a style name before deriving its icon,
/// tested in order.
const ICON_PREFIXES: [&str; 24] = [
    "GK",
    "Cat",
    "Shield",
    "Wall",
    "Glove",
    "Shadow",
    "Anchor",
    "Sentinel",
    "Guardian",
    "Gladiator",
    "Backbone",
    "Powerhouse",
    "Maestro",
    "Engine",
    "Artist",
    "Architect",
    "Hunter",
    "Hawk",
    "Marksman",
    "Finisher",
    "Sniper",
    "Deadeye",
    "Chemistry",
    "Basic",
];

/// Icon file for a style name, e.g. `"GK Basic"` → `chemstyle_basic.svg`.
///
/// The first known prefix (case-insensitive) that is followed by whitespace
/// is removed together with that whitespace. The remainder is lowercased and
/// each whitespace run becomes `_`. Names with no matching prefix are only
/// normalized.
pub fn icon_key(style_name: &str) -> String {
    let cleaned = strip_category_prefix(style_name);

    let mut key = String::with_capacity(cleaned.len());
    let mut in_whitespace = false;
    for ch in cleaned.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                key.push('_');
            }
            in_whitespace = true;
        } else {
            key.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }

    format!("chemstyle_{key}.svg")
}

fn strip_category_prefix(name: &str) -> &str {
    for prefix in ICON_PREFIXES {
        let Some(head) = name.get(..prefix.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(prefix) {
            continue;
        }
        let rest = &name[prefix.len()..];
        let trimmed = rest.trim_start();
        if trimmed.len() < rest.len() {
            return trimmed;
        }
    }
    name
}
