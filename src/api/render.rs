use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::{header, HeaderMap, HeaderName, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{read_params, read_upload, ErrorResponse};
use crate::error::ApiError;
use crate::models::{AppConfig, RenderParams};
use crate::services::RenderService;

/// Grid size of the render as `COLUMNSxROWS`
pub const X_GRID: HeaderName = HeaderName::from_static("x-grid");
/// Number of frames in the returned image
pub const X_FRAME_COUNT: HeaderName = HeaderName::from_static("x-frame-count");

/// Render an image as checkmark tiles
///
/// Send the source image as the raw request body. Static renders come back
/// as PNG, animated ones as a looping GIF. Identical requests produce
/// identical bytes, so the ETag can be used for conditional requests.
#[utoipa::path(
    post,
    path = "/api/render",
    request_body(
        content = String,
        content_type = "application/octet-stream",
        description = "Source image (PNG, JPEG or GIF)"
    ),
    params(RenderParams),
    responses(
        (status = 200, description = "Rendered image (image/png or image/gif)"),
        (status = 304, description = "Unchanged since the ETag in If-None-Match"),
        (status = 400, description = "Invalid parameter or color", body = ErrorResponse),
        (status = 413, description = "Upload too large", body = ErrorResponse),
        (status = 422, description = "Source image unusable", body = ErrorResponse),
        (status = 504, description = "Render timed out", body = ErrorResponse),
    ),
    tag = "Render"
)]
pub async fn handle_render(
    State(config): State<Arc<AppConfig>>,
    State(renderer): State<Arc<RenderService>>,
    headers: HeaderMap,
    query: Result<Query<RenderParams>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let params = read_params(query)?;
    let render_config = params.resolve(&config.defaults)?;
    let upload = read_upload(body, config.limits.max_upload_bytes)?;

    tracing::info!(
        upload_bytes = upload.len(),
        columns = render_config.columns,
        pattern = %render_config.pattern,
        "Render requested"
    );

    let rendered = renderer.render(upload, render_config).await?;

    let grid = format!("{}x{}", rendered.grid.columns, rendered.grid.rows);
    tracing::info!(
        grid = %grid,
        frames = rendered.frames,
        size_bytes = rendered.bytes.len(),
        "Image rendered successfully"
    );

    let unchanged = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|tag| tag == rendered.etag);
    if unchanged {
        return Ok((StatusCode::NOT_MODIFIED, [(header::ETAG, rendered.etag)]).into_response());
    }

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, rendered.mime.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", rendered.filename),
            ),
            (header::ETAG, rendered.etag),
            (X_GRID, grid),
            (X_FRAME_COUNT, rendered.frames.to_string()),
        ],
        Bytes::from(rendered.bytes),
    )
        .into_response())
}
