use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::application::engine::StorefrontEngine;
use crate::domain::catalog::ItemId;

use super::dto::{AddToCartRequest, CheckoutRequest};
use super::errors;

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn list_products(Extension(engine): Extension<Arc<StorefrontEngine>>) -> Response {
    Json(engine.list_products()).into_response()
}

pub async fn get_product(
    Extension(engine): Extension<Arc<StorefrontEngine>>,
    Path(id): Path<ItemId>,
) -> Response {
    match engine.find_product(id) {
        Ok(item) => Json(item).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

pub async fn get_cart(Extension(engine): Extension<Arc<StorefrontEngine>>) -> Response {
    match engine.cart().await {
        Ok(view) => Json(view).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

pub async fn add_to_cart(
    Extension(engine): Extension<Arc<StorefrontEngine>>,
    body: Result<Json<AddToCartRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_request",
                rejection.body_text(),
            );
        }
    };

    // Unknown products are reported ahead of a bad quantity.
    if let Err(e) = engine.find_product(body.product_id) {
        return errors::error_to_response(e);
    }
    let quantity = match body.quantity() {
        Ok(quantity) => quantity,
        Err(e) => return errors::error_to_response(e),
    };

    match engine.add_to_cart(body.product_id, quantity).await {
        Ok(lines) => Json(lines).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

pub async fn remove_from_cart(
    Extension(engine): Extension<Arc<StorefrontEngine>>,
    Path(id): Path<ItemId>,
) -> Response {
    match engine.remove_from_cart(id).await {
        Ok(lines) => Json(lines).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}

pub async fn checkout(
    Extension(engine): Extension<Arc<StorefrontEngine>>,
    body: Option<Json<CheckoutRequest>>,
) -> Response {
    if let Some(Json(CheckoutRequest {
        cart_items: Some(items),
    })) = &body
    {
        debug!(client_cart = %items, "ignoring client-supplied cart on checkout");
    }

    match engine.checkout().await {
        Ok(receipt) => Json(receipt).into_response(),
        Err(e) => errors::error_to_response(e),
    }
}
