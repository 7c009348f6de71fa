//! Order handlers, all scoped to the authenticated customer.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use duka_core::error::AppError;
use duka_entity::order::{Order, OrderLine};

use crate::dto::request::CreateOrderRequest;
use crate::dto::response::ApiResponse;
use crate::extractors::AuthCustomer;
use crate::state::AppState;

/// GET /api/orders
pub async fn list_orders(
    State(state): State<AppState>,
    auth: AuthCustomer,
) -> Result<Json<ApiResponse<Vec<OrderLine>>>, AppError> {
    let lines = state
        .order_repo
        .find_lines_by_customer(auth.subject)
        .await?;
    if lines.is_empty() {
        return Err(AppError::not_found("no orders found"));
    }
    Ok(Json(ApiResponse::ok(lines)))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    auth: AuthCustomer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<OrderLine>>>, AppError> {
    let lines = state
        .order_repo
        .find_lines_for_order(id, auth.subject)
        .await?;
    if lines.is_empty() {
        return Err(AppError::not_found(format!(
            "no order with id of {id} was found"
        )));
    }
    Ok(Json(ApiResponse::ok(lines)))
}

/// POST /api/orders
///
/// The order must reference a recorded payment; the checkout request id is
/// the link back to the payment provider's callback.
pub async fn create_order(
    State(state): State<AppState>,
    auth: AuthCustomer,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let payment = state
        .payment_repo
        .find_by_checkout_request_id(&req.checkout_request_id)
        .await?
        .ok_or_else(|| AppError::validation("invalid checkout request id"))?;

    let order = state
        .order_repo
        .create(payment.id, auth.subject, req.amount, req.shipping)
        .await?;

    for item in &req.cart {
        state
            .order_repo
            .add_item(order.id, item.product_id, item.quantity)
            .await?;
    }

    Ok(Json(ApiResponse::ok(order)))
}

/// DELETE /api/orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    auth: AuthCustomer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    let order = state
        .order_repo
        .delete(id, auth.subject)
        .await?
        .ok_or_else(|| AppError::not_found("order not found"))?;
    Ok(Json(ApiResponse::ok(order)))
}
