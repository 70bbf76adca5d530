//! # card_core - Player Card Rating Engine
//!
//! Recomputes the numbers shown on a player profile card from the base
//! attributes published by the card database API.
//!
//! ## Features
//! - Chemistry style catalog (24 styles) with icon key derivation
//! - Composite ratings (PAC/SHO/PAS/DRI/DEF/PHY) with per-level bonus scaling
//! - Accelerate type classification (first-match decision list)
//! - Profile evaluation from an explicit, immutable selection
//! - JSON API for easy integration with a host UI
//!
//! Everything here is pure and synchronous: no I/O, no shared mutable state.

// Doc formatting lints - purely cosmetic, fix incrementally
#![allow(clippy::doc_lazy_continuation)]
// Method naming conventions - would require API changes
#![allow(clippy::should_implement_trait)]

pub mod accelerate;
pub mod api;
pub mod chemistry;
pub mod error;
pub mod models;
pub mod profile;
pub mod ratings;

// Re-export main API functions
pub use api::{
    classify_json, compute_ratings_json, evaluate_profile_json, list_styles_json,
    profile_request_schema_json, ApiError, ApiResponse,
};
pub use error::{CardError, Result};

// Re-export engine types
pub use accelerate::{classify, AccelerateClassifier, AccelerateType};
pub use chemistry::{icon_key, lookup, ChemistryLevel, ChemistryStyle, ModifierKey, ModifierSet};
pub use models::{Attribute, Category, PlayerAttributes, PlayerPage, PlayerResponse, PlayerVersion};
pub use profile::{PlayerProfile, ProfileSelection, ProfileView};
pub use ratings::{compute, AttributeValidator, CompositeRatings, OverallCalculator, RatingsDiff};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
