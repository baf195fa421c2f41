//! Handlers for product CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::product::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::domain::entities::ProductPatch;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new product.
///
/// # Endpoint
///
/// `POST /products`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Widget",
///   "description": "A widget",
///   "price": 19.99,
///   "stock_quantity": 50
/// }
/// ```
///
/// All fields are required. The id is generated server-side and returned in
/// the response.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails (empty name or description,
/// non-positive price, negative stock).
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    payload.validate()?;

    let product = state.product_service.create_product(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Retrieves a product by id.
///
/// # Endpoint
///
/// `GET /products/{id}`
///
/// # Cache
///
/// Served from the cache when a valid entry exists; otherwise the store is
/// queried and the cache populated for subsequent reads. Cache availability
/// never affects the response, only its latency.
///
/// # Errors
///
/// Returns 404 Not Found if no product exists for the id.
pub async fn get_product_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state
        .product_service
        .get_product(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))?;

    Ok(Json(product.into()))
}

/// Partially updates a product.
///
/// # Endpoint
///
/// `PUT /products/{id}`
///
/// # Request Body
///
/// All fields are optional. Only provided fields are changed; an explicit
/// zero (`"stock_quantity": 0`) is applied, an absent key is not.
///
/// ```json
/// {
///   "price": 25.00
/// }
/// ```
///
/// # Cache
///
/// The cache entry for this product is invalidated after the store write so
/// the next read returns the updated values.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or no fields are provided.
/// Returns 404 Not Found if the product doesn't exist.
pub async fn update_product_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    payload.validate()?;

    let patch: ProductPatch = payload.into();
    if patch.is_empty() {
        return Err(AppError::bad_request(
            "At least one field must be provided",
            json!({}),
        ));
    }

    let product = state
        .product_service
        .update_product(&id, patch)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))?;

    Ok(Json(product.into()))
}

/// Deletes a product.
///
/// # Endpoint
///
/// `DELETE /products/{id}`
///
/// # Cache
///
/// The cache entry for this product is invalidated after the row is removed,
/// so a subsequent read reports not-found instead of serving a stale copy.
///
/// # Errors
///
/// Returns 404 Not Found if the product doesn't exist.
pub async fn delete_product_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.product_service.delete_product(&id).await?;

    if !deleted {
        return Err(AppError::not_found("Product not found", json!({ "id": id })));
    }

    Ok(StatusCode::NO_CONTENT)
}
