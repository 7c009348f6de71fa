//! Address and default-address handlers, scoped to the authenticated customer.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use duka_core::error::AppError;
use duka_entity::address::{Address, AddressData, DefaultAddress, DefaultAddressDetail};

use crate::dto::request::{AddressRequest, DefaultAddressRequest};
use crate::dto::response::ApiResponse;
use crate::extractors::AuthCustomer;
use crate::state::AppState;

/// GET /api/addresses
pub async fn list_addresses(
    State(state): State<AppState>,
    auth: AuthCustomer,
) -> Result<Json<ApiResponse<Vec<Address>>>, AppError> {
    let addresses = state.address_repo.find_by_customer(auth.subject).await?;
    if addresses.is_empty() {
        return Err(AppError::not_found("no addresses found"));
    }
    Ok(Json(ApiResponse::ok(addresses)))
}

/// GET /api/addresses/{id}
pub async fn get_address(
    State(state): State<AppState>,
    auth: AuthCustomer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Address>>, AppError> {
    let address = state
        .address_repo
        .find_by_id(id, auth.subject)
        .await?
        .ok_or_else(|| AppError::not_found(format!("no address with id of {id} was found")))?;
    Ok(Json(ApiResponse::ok(address)))
}

/// POST /api/addresses
///
/// The customer's first address automatically becomes their default.
pub async fn create_address(
    State(state): State<AppState>,
    auth: AuthCustomer,
    Json(req): Json<AddressRequest>,
) -> Result<Json<ApiResponse<Address>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    if state
        .address_repo
        .duplicate_exists(&req.delivery_address, &req.mobile_phone_number)
        .await?
    {
        return Err(AppError::conflict(
            "an identical address is already in store",
        ));
    }

    let address = state
        .address_repo
        .create(auth.subject, &address_data(req))
        .await?;

    if !state.address_repo.has_default(auth.subject).await? {
        state
            .address_repo
            .set_default(auth.subject, address.id)
            .await?;
    }

    Ok(Json(ApiResponse::ok(address)))
}

/// PUT /api/addresses/{id}
pub async fn update_address(
    State(state): State<AppState>,
    auth: AuthCustomer,
    Path(id): Path<Uuid>,
    Json(req): Json<AddressRequest>,
) -> Result<Json<ApiResponse<Address>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let address = state
        .address_repo
        .update(id, auth.subject, &address_data(req))
        .await?
        .ok_or_else(|| AppError::not_found("address not found"))?;
    Ok(Json(ApiResponse::ok(address)))
}

/// DELETE /api/addresses/{id}
pub async fn delete_address(
    State(state): State<AppState>,
    auth: AuthCustomer,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Address>>, AppError> {
    let address = state
        .address_repo
        .delete(id, auth.subject)
        .await?
        .ok_or_else(|| AppError::not_found("address not found"))?;
    Ok(Json(ApiResponse::ok(address)))
}

// ── Default address ────────────────────────────────────────

/// GET /api/addresses/default
pub async fn get_default_address(
    State(state): State<AppState>,
    auth: AuthCustomer,
) -> Result<Json<ApiResponse<DefaultAddressDetail>>, AppError> {
    let detail = state
        .address_repo
        .find_default_detail(auth.subject)
        .await?
        .ok_or_else(|| AppError::not_found("default address not found"))?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// POST /api/addresses/default
pub async fn set_default_address(
    State(state): State<AppState>,
    auth: AuthCustomer,
    Json(req): Json<DefaultAddressRequest>,
) -> Result<Json<ApiResponse<DefaultAddress>>, AppError> {
    // The address must exist and belong to the caller.
    state
        .address_repo
        .find_by_id(req.address_id, auth.subject)
        .await?
        .ok_or_else(|| AppError::not_found("address not found"))?;

    if state
        .address_repo
        .default_is_set_to(auth.subject, req.address_id)
        .await?
    {
        return Err(AppError::conflict(format!(
            "address {} is already set to default",
            req.address_id
        )));
    }

    let marker = state
        .address_repo
        .set_default(auth.subject, req.address_id)
        .await?;
    Ok(Json(ApiResponse::ok(marker)))
}

/// PUT /api/addresses/default
pub async fn update_default_address(
    State(state): State<AppState>,
    auth: AuthCustomer,
    Json(req): Json<DefaultAddressRequest>,
) -> Result<Json<ApiResponse<DefaultAddress>>, AppError> {
    state
        .address_repo
        .find_by_id(req.address_id, auth.subject)
        .await?
        .ok_or_else(|| AppError::not_found("address not found"))?;

    let marker = state
        .address_repo
        .update_default(auth.subject, req.address_id)
        .await?
        .ok_or_else(|| AppError::not_found("default address not found"))?;
    Ok(Json(ApiResponse::ok(marker)))
}

/// DELETE /api/addresses/default
pub async fn delete_default_address(
    State(state): State<AppState>,
    auth: AuthCustomer,
) -> Result<Json<ApiResponse<DefaultAddress>>, AppError> {
    let marker = state
        .address_repo
        .delete_default(auth.subject)
        .await?
        .ok_or_else(|| AppError::not_found("default address not found"))?;
    Ok(Json(ApiResponse::ok(marker)))
}

fn address_data(req: AddressRequest) -> AddressData {
    AddressData {
        first_name: req.first_name,
        last_name: req.last_name,
        mobile_phone_number: req.mobile_phone_number,
        alternate_phone_number: req.alternate_phone_number,
        delivery_address: req.delivery_address,
        county: req.county,
        town: req.town,
    }
}
