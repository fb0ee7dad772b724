pub mod grid;
pub mod patterns;
pub mod render;

pub use grid::{handle_grid, GridResponse, __path_handle_grid};
pub use patterns::{handle_patterns, PatternInfo, __path_handle_patterns};
pub use render::{handle_render, __path_handle_render, X_FRAME_COUNT, X_GRID};

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query,
    },
    http::StatusCode,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::RenderParams;

/// Error body returned by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Error message
    pub error: String,
}

/// Unwrap query parameters, reporting malformed values as JSON errors.
pub(crate) fn read_params(
    query: Result<Query<RenderParams>, QueryRejection>,
) -> Result<RenderParams, ApiError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// Unwrap the uploaded image bytes.
pub(crate) fn read_upload(
    body: Result<Bytes, BytesRejection>,
    max_upload_bytes: usize,
) -> Result<Vec<u8>, ApiError> {
    let bytes = body.map_err(|rejection| match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge {
            max: max_upload_bytes,
        },
        _ => ApiError::BadRequest(rejection.body_text()),
    })?;

    if bytes.is_empty() {
        return Err(ApiError::BadRequest(
            "request body must contain an image".to_string(),
        ));
    }
    if bytes.len() > max_upload_bytes {
        return Err(ApiError::PayloadTooLarge {
            max: max_upload_bytes,
        });
    }
    Ok(bytes.to_vec())
}
