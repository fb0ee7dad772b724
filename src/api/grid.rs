use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    response::Json,
};
use check_tiles::SampledGrid;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::{read_params, read_upload, ErrorResponse};
use crate::error::ApiError;
use crate::models::{AppConfig, RenderParams};
use crate::services::RenderService;

/// The sampled grid of a source image
#[derive(Debug, Serialize, ToSchema)]
pub struct GridResponse {
    pub columns: u32,
    pub rows: u32,
    /// Tile colors as `#rrggbb`, one array per row
    pub cells: Vec<Vec<String>>,
}

impl From<&SampledGrid> for GridResponse {
    fn from(grid: &SampledGrid) -> Self {
        let cells = grid
            .cells()
            .chunks(grid.columns() as usize)
            .map(|row| row.iter().map(|c| c.to_hex()).collect())
            .collect();
        Self {
            columns: grid.columns(),
            rows: grid.rows(),
            cells,
        }
    }
}

/// Sample the tile grid of an image
///
/// Runs only the sampling step: useful to preview the grid size and tile
/// colors before rendering. Only the `columns` parameter affects the
/// result; the others are still validated.
#[utoipa::path(
    post,
    path = "/api/grid",
    request_body(
        content = String,
        content_type = "application/octet-stream",
        description = "Source image (PNG, JPEG or GIF)"
    ),
    params(RenderParams),
    responses(
        (status = 200, description = "Sampled grid", body = GridResponse),
        (status = 400, description = "Invalid parameter", body = ErrorResponse),
        (status = 413, description = "Upload too large", body = ErrorResponse),
        (status = 422, description = "Source image unusable", body = ErrorResponse),
    ),
    tag = "Render"
)]
pub async fn handle_grid(
    State(config): State<Arc<AppConfig>>,
    State(renderer): State<Arc<RenderService>>,
    query: Result<Query<RenderParams>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GridResponse>, ApiError> {
    let params = read_params(query)?;
    let render_config = params.resolve(&config.defaults)?;
    let upload = read_upload(body, config.limits.max_upload_bytes)?;

    let grid = renderer.sample(upload, render_config.columns).await?;
    tracing::info!(
        columns = grid.columns(),
        rows = grid.rows(),
        "Grid sampled"
    );

    Ok(Json(GridResponse::from(&grid)))
}
