use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    SharedStore,
    dto::ranking::RankingSnapshot,
    models::{Division, RankingEntry},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/rankings",
    responses(
        (status = 200, description = "Ranking table, one row per rank position", body = Vec<RankingSnapshot>),
        (status = 500, description = "Database failure")
    ),
    tag = "rankings"
)]
pub async fn get_ranking_table(State(store): State<SharedStore>) -> Result<Response, WebError> {
    let table = services::get_ranking_table(store.as_ref()).await?;

    Ok(Json(table).into_response())
}

#[utoipa::path(
    get,
    path = "/api/rankings/{division}",
    params(
        ("division" = String, Path, description = "Division slug, e.g. middleweight")
    ),
    responses(
        (status = 200, description = "Ranked fighters of the division", body = Vec<RankingEntry>),
        (status = 400, description = "Unknown division"),
        (status = 500, description = "Database failure")
    ),
    tag = "rankings"
)]
pub async fn get_division_ranking(
    State(store): State<SharedStore>,
    Path(division): Path<String>,
) -> Result<Response, WebError> {
    let division: Division = division.parse()?;

    let entries = services::get_division_ranking(store.as_ref(), division).await?;

    Ok(Json(entries).into_response())
}
