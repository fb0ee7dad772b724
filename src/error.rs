use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::ParamError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid parameter: {0}")]
    Param(#[from] ParamError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upload too large (max {max} bytes)")]
    PayloadTooLarge { max: usize },

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}

/// Failures of a render job run by the service.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Tiles(#[from] check_tiles::RenderError),

    #[error("Grid too tall: {rows} rows (max {max})")]
    TooManyRows { rows: u32, max: u32 },

    #[error("Render too large: {pixels} pixels over all frames (max {max})")]
    TooManyPixels { pixels: u64, max: u64 },

    #[error("Render timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Render task failed: {0}")]
    Task(String),
}

impl From<check_tiles::InputError> for RenderError {
    fn from(e: check_tiles::InputError) -> Self {
        RenderError::Tiles(e.into())
    }
}

impl RenderError {
    fn status(&self) -> StatusCode {
        use check_tiles::RenderError as Tiles;

        match self {
            RenderError::Tiles(Tiles::Format(_) | Tiles::Pattern(_) | Tiles::Config(_)) => {
                StatusCode::BAD_REQUEST
            }
            RenderError::Tiles(Tiles::Input(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            RenderError::TooManyRows { .. } | RenderError::TooManyPixels { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            RenderError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            RenderError::Tiles(_) | RenderError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Param(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::PayloadTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            ApiError::Render(e) => (e.status(), e.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %message, "Request rejected");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use check_tiles::{ConfigError, InputError, ParseColorError};

    #[test]
    fn test_api_error_payload_too_large() {
        let error = ApiError::PayloadTooLarge { max: 1024 };
        assert_eq!(error.to_string(), "Upload too large (max 1024 bytes)");
    }

    #[test]
    fn test_render_error_too_many_rows() {
        let error = RenderError::TooManyRows { rows: 300, max: 256 };
        assert_eq!(error.to_string(), "Grid too tall: 300 rows (max 256)");
    }

    #[test]
    fn test_render_error_too_many_pixels() {
        let error = RenderError::TooManyPixels {
            pixels: 614_400_000,
            max: 400_000_000,
        };
        assert_eq!(
            error.to_string(),
            "Render too large: 614400000 pixels over all frames (max 400000000)"
        );
        let response = ApiError::Render(error).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_render_error_timeout() {
        let error = RenderError::Timeout { secs: 120 };
        assert_eq!(error.to_string(), "Render timed out after 120s");
    }

    #[test]
    fn test_render_error_from_input_error() {
        let error: RenderError = InputError::NoColumns.into();
        assert!(matches!(
            error,
            RenderError::Tiles(check_tiles::RenderError::Input(_))
        ));
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        let response = ApiError::BadRequest("bad query".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let param = ParamError::Color {
            field: "background",
            source: ParseColorError::InvalidLength { len: 3 },
        };
        let response = ApiError::Param(param).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::PayloadTooLarge { max: 1 }.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let tiles = check_tiles::RenderError::Config(ConfigError::Fps {
            value: 1,
            min: 5,
            max: 30,
        });
        let response = ApiError::Render(tiles.into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let input: RenderError = InputError::Decode("not an image".to_string()).into();
        let response = ApiError::Render(input).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response =
            ApiError::Render(RenderError::TooManyRows { rows: 2, max: 1 }).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = ApiError::Render(RenderError::Timeout { secs: 1 }).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);

        let response =
            ApiError::Render(check_tiles::RenderError::Cancelled.into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::Render(RenderError::Task("panicked".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
