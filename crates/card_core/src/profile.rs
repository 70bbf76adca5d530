//! Player profile evaluation
//!
//! The profile page's interactive state (chosen style, chosen chemistry
//! level) is an explicit `ProfileSelection` value owned by the caller. Every
//! interaction produces a new selection, and `PlayerProfile::evaluate` turns
//! (record, selection) into everything the page renders.

use crate::accelerate::{AccelerateClassifier, AccelerateType};
use crate::chemistry::{self, ChemistryLevel, ModifierSet};
use crate::models::{PlayerAttributes, PlayerPage, PlayerVersion};
use crate::ratings::{CompositeRatings, OverallCalculator, RatingsDiff};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// User choices on the profile page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ProfileSelection {
    /// Active chemistry style name, if any
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub level: ChemistryLevel,
}

impl ProfileSelection {
    pub fn new(style: Option<String>, level: ChemistryLevel) -> Self {
        Self { style, level }
    }

    /// Clicking a style selects it; clicking the active style clears it
    pub fn toggle_style(&self, style_name: &str) -> Self {
        let style = match self.style.as_deref() {
            Some(active) if active == style_name => None,
            _ => Some(style_name.to_string()),
        };
        Self { style, level: self.level }
    }

    pub fn with_level(&self, level: ChemistryLevel) -> Self {
        Self { style: self.style.clone(), level }
    }

    pub fn clear_style(&self) -> Self {
        Self { style: None, level: self.level }
    }

    /// Modifiers for the active style. Unknown names mean no modification.
    pub fn modifiers(&self) -> ModifierSet {
        self.style.as_deref().and_then(chemistry::lookup).unwrap_or_default()
    }
}

/// Images and colors for the card face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    pub text_color: String,
    pub background: String,
    pub image: String,
    pub nation_image: String,
    pub league_image: String,
    /// None for ICON / HERO cards
    pub club_image: Option<String>,
}

impl CardFace {
    fn from_player(player: &PlayerVersion) -> Self {
        Self {
            text_color: player.text_color(),
            background: player.player_rarity.rarity_card_images.big.clone(),
            image: player.card_image().to_string(),
            nation_image: player.player_nation.nation_image.clone(),
            league_image: player.league_image().to_string(),
            club_image: player.club_image().map(str::to_string),
        }
    }
}

/// Everything the profile page renders for one selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub player_id: u64,
    pub name: String,
    pub main_pos: String,
    pub rating: u8,
    /// Active style after catalog resolution (unknown names are dropped)
    pub style: Option<String>,
    pub style_icon: Option<String>,
    pub level: ChemistryLevel,
    /// Composites as published by the API
    pub published: CompositeRatings,
    /// Composites shown on the card
    pub ratings: CompositeRatings,
    pub diff: RatingsDiff,
    /// Effective sub-attributes, composites set to `ratings`
    pub attributes: PlayerAttributes,
    /// Level-scaled bonus per modified key
    pub bonuses: ModifierSet,
    pub accelerate_type: AccelerateType,
    pub available_styles: Vec<String>,
    pub card: CardFace,
}

/// Profile evaluator
pub struct PlayerProfile;

impl PlayerProfile {
    /// Evaluate one player for a selection.
    ///
    /// With a known style active the composites are recomputed; otherwise
    /// the page shows the API's published composites unchanged.
    pub fn evaluate(player: &PlayerVersion, selection: &ProfileSelection) -> ProfileView {
        let base = &player.player_attributes;
        let level = selection.level;

        let style = selection.style.as_deref().and_then(chemistry::find);
        if let (Some(requested), None) = (selection.style.as_deref(), style) {
            warn!("Unknown chemistry style '{}', showing base attributes", requested);
        }

        let modifiers = style.map(|s| s.modifiers()).unwrap_or_default();
        let published = CompositeRatings::from_attributes(base);
        // Category-code bonuses (goalkeeper styles) land on the shown composite
        let ratings = if style.is_some() {
            let computed = OverallCalculator::compute(base, &modifiers, level);
            OverallCalculator::apply_category_bonuses(&computed, &modifiers, level)
        } else {
            published
        };

        let mut attributes = OverallCalculator::effective_attributes(base, &modifiers, level);
        ratings.apply_to(&mut attributes);

        let accelerate_type =
            AccelerateClassifier::classify_effective(player.player_height, base, &modifiers, level);

        debug!(
            "Evaluated player {} (style={:?}, level={}): {:?}, {}",
            player.player_id,
            style.map(|s| s.name),
            level,
            ratings,
            accelerate_type
        );

        ProfileView {
            player_id: player.player_id,
            name: player.display_name().to_string(),
            main_pos: player.player_main_pos.clone(),
            rating: player.player_rating,
            style: style.map(|s| s.name.to_string()),
            style_icon: style.map(|s| s.icon_key()),
            level,
            published,
            ratings,
            diff: RatingsDiff::between(&published, &ratings),
            attributes,
            bonuses: modifiers.scaled(level),
            accelerate_type,
            available_styles: chemistry::styles_for_position(&player.player_main_pos)
                .into_iter()
                .map(|s| s.name.to_string())
                .collect(),
            card: CardFace::from_player(player),
        }
    }

    /// Evaluate every player of a list page with the same selection
    pub fn evaluate_page(page: &PlayerPage, selection: &ProfileSelection) -> Vec<ProfileView> {
        page.players.iter().map(|player| Self::evaluate(player, selection)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::fixtures::{player_json, winger, winger_attributes};
    use crate::models::{Attribute, Category};

    #[test]
    fn test_toggle_style() {
        let start = ProfileSelection::default();
        assert_eq!(start.level, ChemistryLevel::High);

        let hunter = start.toggle_style("Hunter");
        assert_eq!(hunter.style.as_deref(), Some("Hunter"));

        let artist = hunter.toggle_style("Artist");
        assert_eq!(artist.style.as_deref(), Some("Artist"));

        let cleared = artist.toggle_style("Artist");
        assert_eq!(cleared.style, None);
        assert_eq!(cleared.level, ChemistryLevel::High);

        let low = artist.with_level(ChemistryLevel::Low);
        assert_eq!(low.style.as_deref(), Some("Artist"));
        assert_eq!(low.level, ChemistryLevel::Low);
        assert_eq!(low.clear_style().style, None);
    }

    #[test]
    fn test_no_style_shows_published_ratings() {
        let player = winger();
        let view = PlayerProfile::evaluate(&player, &ProfileSelection::default());

        assert_eq!(view.ratings, CompositeRatings::from_attributes(&winger_attributes()));
        assert_eq!(view.diff.total_diff(), 0);
        assert!(view.bonuses.is_empty());
        assert_eq!(view.style, None);
        assert_eq!(view.style_icon, None);
        assert_eq!(view.attributes, winger_attributes());
        assert_eq!(view.accelerate_type, AccelerateType::Explosive);
    }

    #[test]
    fn test_unknown_style_behaves_like_no_style() {
        let player = winger();
        let unknown = ProfileSelection::new(Some("Chemistry3".to_string()), ChemistryLevel::High);
        let view = PlayerProfile::evaluate(&player, &unknown);
        let plain = PlayerProfile::evaluate(&player, &ProfileSelection::default());

        assert_eq!(view, plain);
        assert!(unknown.modifiers().is_empty());
    }

    #[test]
    fn test_style_recomputes_ratings() {
        let player = winger();
        let selection = ProfileSelection::new(Some("Hunter".to_string()), ChemistryLevel::Mid);
        let view = PlayerProfile::evaluate(&player, &selection);

        assert_eq!(view.style.as_deref(), Some("Hunter"));
        assert_eq!(view.style_icon.as_deref(), Some("chemstyle_hunter.svg"));
        // sprintSpeed 89 + 4, acceleration 94 + 4: 55*93 + 45*98 = 9525 -> 95
        assert_eq!(view.ratings.pac, 95);
        assert_eq!(view.attributes.pac, 95);
        assert_eq!(view.attributes.sprint_speed, 93);
        assert_eq!(view.diff.get(Category::Pac), 4);
        assert_eq!(view.bonuses.get(Attribute::Volleys), Some(6));
        assert_eq!(view.bonuses.get(Attribute::Positioning), Some(2));
    }

    #[test]
    fn test_goalkeeper_style_boosts_shown_composites() {
        let keeper: PlayerVersion =
            serde_json::from_value(player_json("GK", 192, &winger_attributes())).unwrap();
        let plain = OverallCalculator::compute(
            &winger_attributes(),
            &ModifierSet::new(),
            ChemistryLevel::High,
        );
        assert_eq!(plain.pac, 91);

        let wall = ProfileSelection::new(Some("Wall".to_string()), ChemistryLevel::High);
        let view = PlayerProfile::evaluate(&keeper, &wall);

        // pac 91 + 12 capped at 99, sho + 4, pas + 8
        assert_eq!(view.ratings.pac, 99);
        assert_eq!(view.ratings.sho, (plain.sho + 4).min(99));
        assert_eq!(view.ratings.pas, (plain.pas + 8).min(99));
        assert_eq!(view.ratings.dri, plain.dri);
        assert_eq!(view.attributes.pac, 99);
        assert_eq!(view.diff.get(Category::Pac), 99 - view.published.pac as i16);
        assert_eq!(view.bonuses.get(Category::Pac), Some(12));

        // Mid halves the category bonus
        let mid = PlayerProfile::evaluate(&keeper, &wall.with_level(ChemistryLevel::Mid));
        assert_eq!(mid.ratings.pac, 97);

        // None leaves every composite as computed
        let none = PlayerProfile::evaluate(&keeper, &wall.with_level(ChemistryLevel::None));
        assert_eq!(none.ratings, plain);
    }

    #[test]
    fn test_available_styles_follow_position() {
        let winger_view = PlayerProfile::evaluate(&winger(), &ProfileSelection::default());
        assert_eq!(winger_view.available_styles.len(), 19);
        assert!(!winger_view.available_styles.contains(&"Wall".to_string()));

        let keeper: PlayerVersion =
            serde_json::from_value(player_json("GK", 192, &winger_attributes())).unwrap();
        let keeper_view = PlayerProfile::evaluate(&keeper, &ProfileSelection::default());
        assert_eq!(keeper_view.available_styles, vec!["GK Basic", "Wall", "Shield", "Cat", "Glove"]);
    }

    #[test]
    fn test_card_face() {
        let view = PlayerProfile::evaluate(&winger(), &ProfileSelection::default());
        assert_eq!(view.name, "Winger");
        assert_eq!(view.card.text_color, "rgb(38, 33, 21)");
        assert_eq!(view.card.background, "big.png");
        assert_eq!(view.card.club_image.as_deref(), Some("club_dark.png"));
    }

    #[test]
    fn test_evaluate_page() {
        let version = player_json("ST", 185, &winger_attributes());
        let page: PlayerPage = serde_json::from_value(serde_json::json!({
            "totalPages": 1,
            "playersPerPage": 3,
            "totalPlayers": 3,
            "players": [version.clone(), version.clone(), version]
        }))
        .unwrap();

        let selection = ProfileSelection::new(Some("Finisher".to_string()), ChemistryLevel::High);
        let views = PlayerProfile::evaluate_page(&page, &selection);
        assert_eq!(views.len(), 3);
        assert!(views.iter().all(|v| v.ratings == views[0].ratings));
        assert!(views[0].ratings.sho > views[0].published.sho);
    }
}
