//! Product CRUD handlers. Reads are public; writes require authentication.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use duka_core::error::AppError;
use duka_entity::product::{Product, ProductData};

use crate::dto::request::ProductRequest;
use crate::dto::response::ApiResponse;
use crate::extractors::AuthCustomer;
use crate::state::AppState;

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Product>>>, AppError> {
    let products = state.product_repo.find_all().await?;
    if products.is_empty() {
        return Err(AppError::not_found("no products found"));
    }
    Ok(Json(ApiResponse::ok(products)))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let product = state
        .product_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("no product with id of {id} was found")))?;
    Ok(Json(ApiResponse::ok(product)))
}

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    _auth: AuthCustomer,
    Json(req): Json<ProductRequest>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    if state
        .product_repo
        .find_by_name(&req.product_name)
        .await?
        .is_some()
    {
        return Err(AppError::conflict(format!(
            "{} is already in store",
            req.product_name
        )));
    }

    let product = state.product_repo.create(&product_data(req)).await?;
    Ok(Json(ApiResponse::ok(product)))
}

/// PUT /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    _auth: AuthCustomer,
    Path(id): Path<Uuid>,
    Json(req): Json<ProductRequest>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let product = state
        .product_repo
        .update(id, &product_data(req))
        .await?
        .ok_or_else(|| AppError::not_found(format!("no product with id of {id} was found")))?;
    Ok(Json(ApiResponse::ok(product)))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    _auth: AuthCustomer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Product>>, AppError> {
    let product = state
        .product_repo
        .delete(id)
        .await?
        .ok_or_else(|| AppError::not_found("product not found"))?;
    Ok(Json(ApiResponse::ok(product)))
}

fn product_data(req: ProductRequest) -> ProductData {
    ProductData {
        product_name: req.product_name,
        price: req.price,
        price_type: req.price_type,
        category: req.category,
        stock: req.stock,
        image: req.image,
    }
}
