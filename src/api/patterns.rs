use axum::response::Json;
use check_tiles::WavePattern;
use serde::Serialize;
use utoipa::ToSchema;

/// One selectable animation pattern
#[derive(Debug, Serialize, ToSchema)]
pub struct PatternInfo {
    /// Value for the `pattern` parameter
    pub name: &'static str,
    /// Human readable name
    pub label: &'static str,
    /// Whether renders with this pattern are animated GIFs
    pub animated: bool,
}

/// List the animation patterns
#[utoipa::path(
    get,
    path = "/api/patterns",
    responses(
        (status = 200, description = "Available patterns", body = [PatternInfo]),
    ),
    tag = "Render"
)]
pub async fn handle_patterns() -> Json<Vec<PatternInfo>> {
    Json(
        WavePattern::ALL
            .into_iter()
            .map(|p| PatternInfo {
                name: p.name(),
                label: p.label(),
                animated: p.is_animated(),
            })
            .collect(),
    )
}
