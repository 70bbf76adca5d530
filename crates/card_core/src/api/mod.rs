//! JSON API
//!
//! String-in / string-out entry points for a host UI. Every function returns
//! a serialized `ApiResponse<T>` and never panics on bad input.

pub mod json_api;

pub use json_api::{
    classify_json, compute_ratings_json, evaluate_profile_json, list_styles_json,
    profile_request_schema_json, ApiError, ApiResponse, ClassifyResponse, ComputeRatingsRequest,
    ComputeRatingsResponse, ProfileRequest, StyleSummary, StylesRequest, API_VERSION,
};
