use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};
use storage::{
    SharedStore,
    dto::fighter::{FighterName, WeightClassPath},
    models::Fighter,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/select_fighters/{weight_class}",
    params(WeightClassPath),
    responses(
        (status = 200, description = "Names of the fighters in the weight class", body = Vec<FighterName>),
        (status = 400, description = "Invalid weight class"),
        (status = 500, description = "Database failure")
    ),
    tag = "fighters"
)]
pub async fn select_fighters(
    State(store): State<SharedStore>,
    path: Result<Path<WeightClassPath>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(path) = path.map_err(|e| WebError::BadRequest(e.body_text()))?;
    path.validate()?;

    let fighters = services::select_fighters(store.as_ref(), &path.weight_class).await?;

    Ok(Json(fighters).into_response())
}

#[utoipa::path(
    get,
    path = "/api/fighters/{weight_class}",
    params(WeightClassPath),
    responses(
        (status = 200, description = "Fighters in the weight class with their statistics", body = Vec<Fighter>),
        (status = 400, description = "Invalid weight class"),
        (status = 500, description = "Database failure")
    ),
    tag = "fighters"
)]
pub async fn list_fighters(
    State(store): State<SharedStore>,
    path: Result<Path<WeightClassPath>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(path) = path.map_err(|e| WebError::BadRequest(e.body_text()))?;
    path.validate()?;

    let fighters = services::list_fighters(store.as_ref(), &path.weight_class).await?;

    Ok(Json(fighters).into_response())
}
