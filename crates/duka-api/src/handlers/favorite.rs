//! Favorite handlers, all scoped to the authenticated customer.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use duka_core::error::AppError;
use duka_entity::favorite::{Favorite, FavoriteDetail};

use crate::dto::request::FavoriteRequest;
use crate::dto::response::ApiResponse;
use crate::extractors::AuthCustomer;
use crate::state::AppState;

/// GET /api/favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    auth: AuthCustomer,
) -> Result<Json<ApiResponse<Vec<FavoriteDetail>>>, AppError> {
    let favorites = state
        .favorite_repo
        .find_details_by_customer(auth.subject)
        .await?;
    if favorites.is_empty() {
        return Err(AppError::not_found("no favorites found"));
    }
    Ok(Json(ApiResponse::ok(favorites)))
}

/// GET /api/favorites/{id}
pub async fn get_favorite(
    State(state): State<AppState>,
    auth: AuthCustomer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FavoriteDetail>>, AppError> {
    let favorite = state
        .favorite_repo
        .find_detail(id, auth.subject)
        .await?
        .ok_or_else(|| AppError::not_found(format!("no favorite with id of {id} was found")))?;
    Ok(Json(ApiResponse::ok(favorite)))
}

/// POST /api/favorites
pub async fn create_favorite(
    State(state): State<AppState>,
    auth: AuthCustomer,
    Json(req): Json<FavoriteRequest>,
) -> Result<Json<ApiResponse<Favorite>>, AppError> {
    if state
        .favorite_repo
        .exists(auth.subject, req.product_id)
        .await?
    {
        return Err(AppError::conflict("product is already in favorites"));
    }

    let favorite = state
        .favorite_repo
        .create(auth.subject, req.product_id)
        .await?;
    Ok(Json(ApiResponse::ok(favorite)))
}

/// PUT /api/favorites/{id}
pub async fn update_favorite(
    State(state): State<AppState>,
    auth: AuthCustomer,
    Path(id): Path<Uuid>,
    Json(req): Json<FavoriteRequest>,
) -> Result<Json<ApiResponse<Favorite>>, AppError> {
    let favorite = state
        .favorite_repo
        .update(id, auth.subject, req.product_id)
        .await?
        .ok_or_else(|| AppError::not_found("favorite not found"))?;
    Ok(Json(ApiResponse::ok(favorite)))
}

/// DELETE /api/favorites/{id}
pub async fn delete_favorite(
    State(state): State<AppState>,
    auth: AuthCustomer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Favorite>>, AppError> {
    let favorite = state
        .favorite_repo
        .delete(id, auth.subject)
        .await?
        .ok_or_else(|| AppError::not_found("favorite not found"))?;
    Ok(Json(ApiResponse::ok(favorite)))
}
