//! JSON API for card operations
//!
//! Each endpoint takes a request JSON string and returns an
//! `ApiResponse<T>` JSON string. Failures are reported through the envelope
//! with a stable error code, never by panicking.

use crate::accelerate::{AccelerateClassifier, AccelerateInput, AccelerateType};
use crate::chemistry::{self, ChemistryLevel, ModifierSet};
use crate::error::{CardError, Result};
use crate::models::{PlayerAttributes, PlayerVersion};
use crate::profile::{PlayerProfile, ProfileSelection, ProfileView};
use crate::ratings::{AttributeValidator, CompositeRatings, OverallCalculator, RatingsDiff};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with a stable code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string() }
    }

    pub fn from_card_error(error: &CardError) -> Self {
        Self::new(error.code(), &error.to_string())
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

// ============================================================================
// Requests / responses
// ============================================================================

/// Composite ratings request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ComputeRatingsRequest {
    pub schema_version: Option<String>,
    pub attributes: PlayerAttributes,
    /// Catalog style name
    #[serde(default)]
    pub style: Option<String>,
    /// Full-chemistry bonuses keyed by attribute name or category code,
    /// laid over the style's own bonuses
    #[serde(default)]
    pub modifiers: HashMap<String, u8>,
    /// `none|low|mid|high`, `chemistry0..3` or `0..3` (default high)
    #[serde(default)]
    pub level: Option<String>,
    /// Reject records with values above 99
    #[serde(default)]
    pub validate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRatingsResponse {
    /// Resolved style, `None` when absent or unknown
    pub style: Option<String>,
    pub level: ChemistryLevel,
    pub published: CompositeRatings,
    pub ratings: CompositeRatings,
    pub diff: RatingsDiff,
    /// Effective sub-attributes with the recomputed composites
    pub effective: PlayerAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub accelerate_type: AccelerateType,
    pub strength_agility_gap: u8,
}

/// Profile evaluation request
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProfileRequest {
    pub schema_version: Option<String>,
    pub player: PlayerVersion,
    #[serde(default)]
    pub selection: ProfileSelection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct StylesRequest {
    /// Main position; `GK` lists the goalkeeper styles. All styles when absent.
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSummary {
    pub name: String,
    pub icon: String,
    pub goalkeeper: bool,
    pub bonuses: ModifierSet,
}

// ============================================================================
// Endpoints
// ============================================================================

/// Compute composite ratings from JSON request string
///
/// # Arguments
/// * `request_json` - JSON string containing ComputeRatingsRequest
///
/// # Returns
/// JSON string containing ApiResponse<ComputeRatingsResponse>
pub fn compute_ratings_json(request_json: &str) -> String {
    info!("Processing compute ratings request");
    respond("compute_ratings", parse_request(request_json).and_then(|req| compute_ratings(&req)))
}

/// Classify accelerate type from JSON request string
///
/// # Arguments
/// * `request_json` - JSON string with `height`, `agility`, `acceleration`, `strength`
///
/// # Returns
/// JSON string containing ApiResponse<ClassifyResponse>
pub fn classify_json(request_json: &str) -> String {
    info!("Processing accelerate classification request");
    let result = parse_request::<AccelerateInput>(request_json).map(|input| ClassifyResponse {
        accelerate_type: AccelerateClassifier::classify(&input),
        strength_agility_gap: input.strength_agility_gap(),
    });
    respond("classify", result)
}

/// Evaluate a profile page from JSON request string
///
/// # Returns
/// JSON string containing ApiResponse<ProfileView>
pub fn evaluate_profile_json(request_json: &str) -> String {
    info!("Processing profile evaluation request");
    let result = parse_request::<ProfileRequest>(request_json).map(|req| {
        check_schema_version(req.schema_version.as_deref());
        PlayerProfile::evaluate(&req.player, &req.selection)
    });
    respond::<ProfileView>("evaluate_profile", result)
}

/// List catalog styles, optionally filtered by position
///
/// # Returns
/// JSON string containing ApiResponse<Vec<StyleSummary>>
pub fn list_styles_json(request_json: &str) -> String {
    debug!("Processing list styles request");
    let result = parse_request::<StylesRequest>(request_json).map(|req| {
        let styles = match req.position.as_deref() {
            Some(position) => chemistry::styles_for_position(position),
            None => chemistry::all_styles().iter().collect(),
        };
        styles
            .into_iter()
            .map(|style| StyleSummary {
                name: style.name.to_string(),
                icon: style.icon_key(),
                goalkeeper: style.goalkeeper,
                bonuses: style.modifiers(),
            })
            .collect::<Vec<_>>()
    });
    respond("list_styles", result)
}

/// JSON Schema of `ProfileRequest`
///
/// # Returns
/// JSON string containing ApiResponse<serde_json::Value>
pub fn profile_request_schema_json() -> String {
    let schema = schemars::schema_for!(ProfileRequest);
    let result = serde_json::to_value(&schema)
        .map_err(|e| CardError::Serialization(e.to_string()));
    respond("profile_request_schema", result)
}

// ============================================================================
// Helpers
// ============================================================================

fn compute_ratings(request: &ComputeRatingsRequest) -> Result<ComputeRatingsResponse> {
    check_schema_version(request.schema_version.as_deref());

    if request.validate {
        AttributeValidator::validate(&request.attributes)?;
    }

    let level = parse_level(request.level.as_deref())?;

    let style = request.style.as_deref().and_then(chemistry::find);
    if let (Some(requested), None) = (request.style.as_deref(), style) {
        warn!("Unknown chemistry style '{}', no style bonuses applied", requested);
    }

    let modifiers = style
        .map(|s| s.modifiers())
        .unwrap_or_default()
        .merged(&ModifierSet::from_names(&request.modifiers));

    let base = &request.attributes;
    let published = CompositeRatings::from_attributes(base);
    let ratings = OverallCalculator::compute(base, &modifiers, level);
    let mut effective = OverallCalculator::effective_attributes(base, &modifiers, level);
    ratings.apply_to(&mut effective);

    Ok(ComputeRatingsResponse {
        style: style.map(|s| s.name.to_string()),
        level,
        published,
        ratings,
        diff: RatingsDiff::between(&published, &ratings),
        effective,
    })
}

fn parse_level(level: Option<&str>) -> Result<ChemistryLevel> {
    match level {
        Some(level) => level.parse(),
        None => Ok(ChemistryLevel::default()),
    }
}

fn parse_request<T: DeserializeOwned>(request_json: &str) -> Result<T> {
    Ok(serde_json::from_str(request_json)?)
}

fn check_schema_version(version: Option<&str>) {
    if let Some(version) = version {
        if version != API_VERSION {
            warn!("Request schema version {} differs from {}", version, API_VERSION);
        }
    }
}

fn respond<T: Serialize>(operation: &str, result: Result<T>) -> String {
    let response = match result {
        Ok(data) => ApiResponse::success(data),
        Err(err) => {
            error!("{} failed: {}", operation, err);
            ApiResponse::error(ApiError::from_card_error(&err))
        }
    };
    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::fixtures::{player_json, winger_attributes};
    use crate::models::Category;

    fn compute_request(style: Option<&str>, level: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "schema_version": "v1",
            "attributes": winger_attributes(),
            "style": style,
            "level": level
        })
    }

    fn parse<T: DeserializeOwned>(response: &str) -> ApiResponse<T> {
        serde_json::from_str(response).expect("Should parse response envelope")
    }

    #[test]
    fn test_compute_ratings_with_style() {
        let request = compute_request(Some("Hunter"), Some("chemistry2"));
        let result: ApiResponse<ComputeRatingsResponse> =
            parse(&compute_ratings_json(&request.to_string()));

        assert!(result.success);
        assert_eq!(result.schema_version, "v1");
        let data = result.data.unwrap();
        assert_eq!(data.style.as_deref(), Some("Hunter"));
        assert_eq!(data.level, ChemistryLevel::Mid);
        assert_eq!(data.published.pac, 91);
        assert_eq!(data.ratings.pac, 95);
        assert_eq!(data.diff.get(Category::Pac), 4);
        assert_eq!(data.effective.pac, 95);
    }

    #[test]
    fn test_compute_ratings_defaults_to_high() {
        let request = compute_request(Some("Hunter"), None);
        let result: ApiResponse<ComputeRatingsResponse> =
            parse(&compute_ratings_json(&request.to_string()));
        let data = result.data.unwrap();
        assert_eq!(data.level, ChemistryLevel::High);
        assert_eq!(data.effective.sprint_speed, 97);
    }

    #[test]
    fn test_unknown_style_applies_nothing() {
        let request = compute_request(Some("Chemistry3"), Some("high"));
        let result: ApiResponse<ComputeRatingsResponse> =
            parse(&compute_ratings_json(&request.to_string()));
        let data = result.data.unwrap();
        assert_eq!(data.style, None);
        assert_eq!(
            data.ratings,
            OverallCalculator::compute(&winger_attributes(), &ModifierSet::new(), ChemistryLevel::High)
        );
    }

    #[test]
    fn test_modifier_overrides_merge_over_style() {
        let request = serde_json::json!({
            "attributes": winger_attributes(),
            "style": "Hunter",
            "modifiers": { "sprintSpeed": 12, "finishing": 12, "notAField": 4 }
        });
        let result: ApiResponse<ComputeRatingsResponse> =
            parse(&compute_ratings_json(&request.to_string()));
        let data = result.data.unwrap();
        // 89 + 12 capped at 99, 82 + 12
        assert_eq!(data.effective.sprint_speed, 99);
        assert_eq!(data.effective.finishing, 94);
        // Hunter's acceleration bonus survives the merge
        assert_eq!(data.effective.acceleration, 99);
    }

    #[test]
    fn test_invalid_level_error() {
        let request = compute_request(Some("Hunter"), Some("chemistry7"));
        let result: ApiResponse<ComputeRatingsResponse> =
            parse(&compute_ratings_json(&request.to_string()));
        assert!(!result.success);
        assert!(result.data.is_none());
        assert_eq!(result.error.unwrap().code, "E_INVALID_LEVEL");
    }

    #[test]
    fn test_validation_error() {
        let mut attrs = winger_attributes();
        attrs.agility = 120;
        let request = serde_json::json!({ "attributes": attrs, "validate": true });
        let result: ApiResponse<ComputeRatingsResponse> =
            parse(&compute_ratings_json(&request.to_string()));
        let error = result.error.unwrap();
        assert_eq!(error.code, "E_VALIDATION");
        assert!(error.message.contains("agility"));

        // Same record is accepted when validation is not requested
        let request = serde_json::json!({ "attributes": attrs });
        let result: ApiResponse<ComputeRatingsResponse> =
            parse(&compute_ratings_json(&request.to_string()));
        assert!(result.success);
    }

    #[test]
    fn test_malformed_json_error() {
        let result: ApiResponse<ComputeRatingsResponse> = parse(&compute_ratings_json("{not json"));
        assert_eq!(result.error.unwrap().code, "E_PARSE");

        let result: ApiResponse<ClassifyResponse> = parse(&classify_json(r#"{"height": 180}"#));
        assert_eq!(result.error.unwrap().code, "E_PARSE");
    }

    #[test]
    fn test_classify_json() {
        let request = r#"{"height": 190, "agility": 50, "acceleration": 60, "strength": 85}"#;
        let result: ApiResponse<ClassifyResponse> = parse(&classify_json(request));
        let data = result.data.unwrap();
        assert_eq!(data.accelerate_type, AccelerateType::Lengthy);
        assert_eq!(data.strength_agility_gap, 35);

        let raw: serde_json::Value = serde_json::from_str(&classify_json(request)).unwrap();
        assert_eq!(raw["data"]["accelerate_type"], "Lengthy");
    }

    #[test]
    fn test_evaluate_profile_json() {
        let request = serde_json::json!({
            "player": player_json("RW", 172, &winger_attributes()),
            "selection": { "style": "Hunter", "level": "mid" }
        });
        let result: ApiResponse<ProfileView> = parse(&evaluate_profile_json(&request.to_string()));
        let view = result.data.unwrap();
        assert_eq!(view.style.as_deref(), Some("Hunter"));
        assert_eq!(view.ratings.pac, 95);
        assert_eq!(view.available_styles.len(), 19);
    }

    #[test]
    fn test_evaluate_profile_default_selection() {
        let request = serde_json::json!({ "player": player_json("GK", 190, &winger_attributes()) });
        let result: ApiResponse<ProfileView> = parse(&evaluate_profile_json(&request.to_string()));
        let view = result.data.unwrap();
        assert_eq!(view.level, ChemistryLevel::High);
        assert_eq!(view.style, None);
        assert_eq!(view.available_styles.len(), 5);
    }

    #[test]
    fn test_list_styles_json() {
        let all: ApiResponse<Vec<StyleSummary>> = parse(&list_styles_json("{}"));
        assert_eq!(all.data.unwrap().len(), 24);

        let keepers: ApiResponse<Vec<StyleSummary>> =
            parse(&list_styles_json(r#"{"position": "GK"}"#));
        let keepers = keepers.data.unwrap();
        assert_eq!(keepers.len(), 5);
        assert!(keepers.iter().all(|s| s.goalkeeper));
        assert_eq!(keepers[1].icon, "chemstyle_wall.svg");
        assert_eq!(keepers[1].bonuses.get(Category::Pac), Some(12));
    }

    #[test]
    fn test_profile_request_schema_json() {
        let result: ApiResponse<serde_json::Value> = parse(&profile_request_schema_json());
        let schema = result.data.unwrap();
        assert_eq!(schema["title"], "ProfileRequest");
        assert!(schema["properties"]["player"].is_object());
        assert!(schema["properties"]["selection"].is_object());
    }
}
