use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use storage::{SharedStore, dto::fight::FightQuery, models::Fight};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/fights",
    params(FightQuery),
    responses(
        (status = 200, description = "Fights matching every given field", body = Vec<Fight>),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Database failure")
    ),
    tag = "fights"
)]
pub async fn list_fights(
    State(store): State<SharedStore>,
    filter: Result<Query<FightQuery>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(filter) = filter.map_err(|e| WebError::BadRequest(e.body_text()))?;
    filter.validate()?;

    let fights = services::list_fights(store.as_ref(), &filter).await?;

    Ok(Json(fights).into_response())
}
