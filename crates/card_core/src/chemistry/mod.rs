//! Chemistry system
//!
//! - Style catalog (fixed bonus tables + icon keys)
//! - Chemistry levels and their bonus scaling
//! - Sparse modifier sets

pub mod catalog;
pub mod level;
pub mod modifier;

pub use catalog::{
    all_styles, find, icon_key, is_goalkeeper_style, lookup, styles_for_position, ChemistryStyle,
};
pub use level::ChemistryLevel;
pub use modifier::{ModifierKey, ModifierSet};
