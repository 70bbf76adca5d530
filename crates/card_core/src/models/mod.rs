pub mod attribute;
pub mod player;

pub use attribute::{Attribute, Category};
pub use player::{
    PlayStyleImages, PlayerAttributes, PlayerCardImages, PlayerClub, PlayerLeague, PlayerNation,
    PlayerPage, PlayerPlayStyle, PlayerRarity, PlayerResponse, PlayerVersion, RarityCardImages,
    ThemedImages,
};
