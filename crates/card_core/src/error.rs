use thiserror::Error;

use crate::ratings::validation::ValidationError;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Invalid chemistry level: {0}")]
    InvalidChemistryLevel(String),

    #[error("Unknown accelerate type: {0}")]
    UnknownAccelerateType(String),

    #[error("Unknown modifier key: {0}")]
    UnknownModifierKey(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CardError {
    /// Stable code used in `ApiError.code`.
    pub fn code(&self) -> &'static str {
        match self {
            CardError::InvalidChemistryLevel(_) => "E_INVALID_LEVEL",
            CardError::UnknownAccelerateType(_) => "E_INVALID_LABEL",
            CardError::UnknownModifierKey(_) => "E_INVALID_KEY",
            CardError::Validation(_) => "E_VALIDATION",
            CardError::Serialization(_) => "E_SERIALIZE",
            CardError::Deserialization(_) => "E_PARSE",
        }
    }
}

impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            CardError::Deserialization(err.to_string())
        } else {
            CardError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CardError>;
