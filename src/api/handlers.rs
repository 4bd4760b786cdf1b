//! Product and statistics endpoints under `/api`.

use super::{
    AppState,
    error::{ApiError, ApiResult},
};
use crate::{
    core::{
        product::{self, CreateProductRequest, UpdateProductRequest},
        stats::{self, InventoryStats},
    },
    entities::ProductModel,
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::Serialize;

/// Response to a successful create
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// Id assigned by the database
    pub id: i32,
    /// Confirmation text
    pub message: &'static str,
}

/// Response to a successful update or delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Confirmation text
    pub message: &'static str,
}

fn product_id(path: Result<Path<i32>, PathRejection>) -> ApiResult<i32> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::BadRequest("Invalid product id".to_string()))
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// `GET /api/products`
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<ProductModel>>> {
    Ok(Json(product::list_products(&state.db).await?))
}

/// `GET /api/products/:id`
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<ProductModel>> {
    let id = product_id(path)?;
    product::get_product_by_id(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `POST /api/products`
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> ApiResult<Json<CreatedResponse>> {
    let new_product = json_body(payload)?.validate()?;
    let created = product::create_product(&state.db, new_product).await?;
    Ok(Json(CreatedResponse {
        id: created.id,
        message: "Product created successfully",
    }))
}

/// `PUT /api/products/:id`
pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = product_id(path)?;
    let changes = json_body(payload)?;
    product::update_product(&state.db, id, changes).await?;
    Ok(Json(MessageResponse {
        message: "Product updated successfully",
    }))
}

/// `DELETE /api/products/:id`
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = product_id(path)?;
    product::delete_product(&state.db, id).await?;
    Ok(Json(MessageResponse {
        message: "Product deleted successfully",
    }))
}

/// `GET /api/stats`
pub async fn inventory_stats(State(state): State<AppState>) -> ApiResult<Json<InventoryStats>> {
    Ok(Json(stats::inventory_stats(&state.db).await?))
}

/// Answers API routes that exist but were called with an unsupported method.
pub async fn api_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
