use super::attribute::{Attribute, Category};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Card attributes as published by the card database API.
///
/// # Boundary Contract
/// - Field names are the API's camelCase names
/// - Every field is required; a record missing one fails to deserialize,
///   which is the only shape validation performed on upstream data
/// - The six composite fields (`pac` .. `phy`) are the API's own values;
///   recomputed values come from `OverallCalculator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAttributes {
    pub pac: u8,
    pub acceleration: u8,
    pub sprint_speed: u8,

    pub sho: u8,
    pub positioning: u8,
    pub finishing: u8,
    pub shot_power: u8,
    pub long_shots: u8,
    pub volleys: u8,
    pub penalties: u8,

    pub pas: u8,
    pub vision: u8,
    pub crossing: u8,
    pub fk_accuracy: u8,
    pub short_passing: u8,
    pub long_passing: u8,
    pub curve: u8,

    pub dri: u8,
    pub agility: u8,
    pub balance: u8,
    pub reactions: u8,
    pub ball_control: u8,
    pub dribbling: u8,
    pub composure: u8,

    pub def: u8,
    pub interceptions: u8,
    pub heading_accuracy: u8,
    pub defensive_awareness: u8,
    pub standing_tackle: u8,
    pub sliding_tackle: u8,

    pub phy: u8,
    pub jumping: u8,
    pub stamina: u8,
    pub strength: u8,
    pub aggression: u8,
}

impl PlayerAttributes {
    /// Sub-attribute value. `None` only for keys with no card field (`marking`).
    pub fn get(&self, attr: Attribute) -> Option<u8> {
        let value = match attr {
            Attribute::Acceleration => self.acceleration,
            Attribute::SprintSpeed => self.sprint_speed,
            Attribute::Positioning => self.positioning,
            Attribute::Finishing => self.finishing,
            Attribute::ShotPower => self.shot_power,
            Attribute::LongShots => self.long_shots,
            Attribute::Volleys => self.volleys,
            Attribute::Penalties => self.penalties,
            Attribute::Vision => self.vision,
            Attribute::Crossing => self.crossing,
            Attribute::FkAccuracy => self.fk_accuracy,
            Attribute::ShortPassing => self.short_passing,
            Attribute::LongPassing => self.long_passing,
            Attribute::Curve => self.curve,
            Attribute::Agility => self.agility,
            Attribute::Balance => self.balance,
            Attribute::Reactions => self.reactions,
            Attribute::BallControl => self.ball_control,
            Attribute::Dribbling => self.dribbling,
            Attribute::Composure => self.composure,
            Attribute::Interceptions => self.interceptions,
            Attribute::HeadingAccuracy => self.heading_accuracy,
            Attribute::DefensiveAwareness => self.defensive_awareness,
            Attribute::StandingTackle => self.standing_tackle,
            Attribute::SlidingTackle => self.sliding_tackle,
            Attribute::Jumping => self.jumping,
            Attribute::Stamina => self.stamina,
            Attribute::Strength => self.strength,
            Attribute::Aggression => self.aggression,
            Attribute::Marking => return None,
        };
        Some(value)
    }

    /// Overwrite a sub-attribute. Returns `false` when the key has no card field.
    pub fn set(&mut self, attr: Attribute, value: u8) -> bool {
        let slot = match attr {
            Attribute::Acceleration => &mut self.acceleration,
            Attribute::SprintSpeed => &mut self.sprint_speed,
            Attribute::Positioning => &mut self.positioning,
            Attribute::Finishing => &mut self.finishing,
            Attribute::ShotPower => &mut self.shot_power,
            Attribute::LongShots => &mut self.long_shots,
            Attribute::Volleys => &mut self.volleys,
            Attribute::Penalties => &mut self.penalties,
            Attribute::Vision => &mut self.vision,
            Attribute::Crossing => &mut self.crossing,
            Attribute::FkAccuracy => &mut self.fk_accuracy,
            Attribute::ShortPassing => &mut self.short_passing,
            Attribute::LongPassing => &mut self.long_passing,
            Attribute::Curve => &mut self.curve,
            Attribute::Agility => &mut self.agility,
            Attribute::Balance => &mut self.balance,
            Attribute::Reactions => &mut self.reactions,
            Attribute::BallControl => &mut self.ball_control,
            Attribute::Dribbling => &mut self.dribbling,
            Attribute::Composure => &mut self.composure,
            Attribute::Interceptions => &mut self.interceptions,
            Attribute::HeadingAccuracy => &mut self.heading_accuracy,
            Attribute::DefensiveAwareness => &mut self.defensive_awareness,
            Attribute::StandingTackle => &mut self.standing_tackle,
            Attribute::SlidingTackle => &mut self.sliding_tackle,
            Attribute::Jumping => &mut self.jumping,
            Attribute::Stamina => &mut self.stamina,
            Attribute::Strength => &mut self.strength,
            Attribute::Aggression => &mut self.aggression,
            Attribute::Marking => return false,
        };
        *slot = value;
        true
    }

    /// Composite value published by the API
    pub fn composite(&self, category: Category) -> u8 {
        match category {
            Category::Pac => self.pac,
            Category::Sho => self.sho,
            Category::Pas => self.pas,
            Category::Dri => self.dri,
            Category::Def => self.def,
            Category::Phy => self.phy,
        }
    }

    pub fn set_composite(&mut self, category: Category, value: u8) {
        match category {
            Category::Pac => self.pac = value,
            Category::Sho => self.sho = value,
            Category::Pas => self.pas = value,
            Category::Dri => self.dri = value,
            Category::Def => self.def = value,
            Category::Phy => self.phy = value,
        }
    }
}

// ============================================================================
// Upstream record (single player endpoint + list endpoint)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RarityCardImages {
    pub big: String,
    pub small: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRarity {
    pub rarity_id: u32,
    pub rarity_name_es: String,
    pub rarity_name_en: String,
    pub has_levels: bool,
    /// RGB triplets; the first one is the card's text color
    pub rarity_colors: Vec<Vec<u8>>,
    pub colors_per_level: u32,
    pub is_logos_dark: bool,
    pub added_on: i64,
    pub rarity_card_images: RarityCardImages,
}

/// Light/dark logo variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ThemedImages {
    pub light: String,
    pub dark: String,
}

impl ThemedImages {
    pub fn pick(&self, logos_dark: bool) -> &str {
        if logos_dark {
            &self.dark
        } else {
            &self.light
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerClub {
    pub club_id: u32,
    pub league_id: u32,
    pub club_name_es: String,
    pub club_name_en: String,
    pub league_name_es: String,
    pub league_name_en: String,
    pub club_images: ThemedImages,
}

impl PlayerClub {
    /// ICON and HERO cards carry a placeholder club with no logo
    pub fn has_logo(&self) -> bool {
        self.club_name_en != "ICON" && self.club_name_en != "HERO"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLeague {
    pub league_id: u32,
    pub nation_id: u32,
    pub league_name_es: String,
    pub league_name_en: String,
    pub nation_name_es: String,
    pub nation_name_en: String,
    pub league_images: ThemedImages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerNation {
    pub nation_id: u32,
    pub nation_name_es: String,
    pub nation_name_en: String,
    pub nation_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayStyleImages {
    pub normal: String,
    pub plus: String,
    pub no_bg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPlayStyle {
    pub play_style_id: u32,
    pub play_style_name_es: String,
    pub play_style_name_en: String,
    pub play_style_desc_base_es: String,
    pub play_style_desc_base_en: String,
    pub play_style_desc_plus_es: String,
    pub play_style_desc_plus_en: String,
    pub play_style_images: PlayStyleImages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCardImages {
    pub es_no_laurel_big: String,
    pub es_laurel_big: String,
    pub en_no_laurel_big: String,
    pub en_laurel_big: String,
}

/// One card version of a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerVersion {
    pub player_first_name: String,
    pub player_last_name: String,
    pub player_common_name: Option<String>,
    pub player_resource_id: u64,
    pub player_id: u64,
    pub player_portrait_image: String,
    pub player_rarity: PlayerRarity,
    pub player_rating: u8,
    pub player_main_pos: String,
    #[serde(default)]
    pub player_extra_pos: Vec<String>,
    pub player_attributes: PlayerAttributes,
    pub player_club: PlayerClub,
    pub player_league: PlayerLeague,
    pub player_nation: PlayerNation,
    pub player_preferred_foot: u8,
    pub player_skill_moves: u8,
    pub player_weak_foot: u8,
    #[serde(default)]
    pub player_roles_plus: Vec<u32>,
    #[serde(default)]
    pub player_roles_plus_plus: Vec<u32>,
    pub player_gender: u8,
    /// kg
    pub player_weight: u16,
    /// cm
    pub player_height: u16,
    pub player_birth_date: i64,
    pub player_body_type_code: u32,
    #[serde(default)]
    pub player_play_styles: Vec<PlayerPlayStyle>,
    #[serde(default)]
    pub player_play_styles_plus: Vec<PlayerPlayStyle>,
    pub has_dynamic: bool,
    pub player_dynamic_image: Option<String>,
    pub player_origin: u32,
    pub added_on: i64,
    pub player_card_images: PlayerCardImages,
}

impl PlayerVersion {
    /// Name printed on the card: common name when set, else last name
    pub fn display_name(&self) -> &str {
        match self.player_common_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.player_last_name,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.player_main_pos == "GK"
    }

    /// Card text color from the first rarity color, `white` when absent
    pub fn text_color(&self) -> String {
        match self.player_rarity.rarity_colors.first() {
            Some(rgb) if rgb.len() >= 3 => format!("rgb({}, {}, {})", rgb[0], rgb[1], rgb[2]),
            _ => "white".to_string(),
        }
    }

    /// Dynamic image when the card has one, portrait otherwise
    pub fn card_image(&self) -> &str {
        if self.has_dynamic {
            if let Some(image) = self.player_dynamic_image.as_deref() {
                return image;
            }
        }
        &self.player_portrait_image
    }

    pub fn league_image(&self) -> &str {
        self.player_league.league_images.pick(self.player_rarity.is_logos_dark)
    }

    pub fn club_image(&self) -> Option<&str> {
        self.player_club
            .has_logo()
            .then(|| self.player_club.club_images.pick(self.player_rarity.is_logos_dark))
    }
}

/// Response of the single player endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub main_version: PlayerVersion,
    #[serde(default)]
    pub other_versions: Vec<PlayerVersion>,
}

/// Response of the paged list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPage {
    pub total_pages: u32,
    pub players_per_page: u32,
    pub total_players: u32,
    pub players: Vec<PlayerVersion>,
}
