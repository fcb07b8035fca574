use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::debug;

use super::domain::Address;
use super::service::AddressValidationService;

pub const ADDRESS_VALIDATION_PATH: &str = "/data/address-validation";

/// Router exposing the address validation endpoint.
pub fn address_validation_router(service: Arc<AddressValidationService>) -> Router {
    Router::new()
        .route(ADDRESS_VALIDATION_PATH, post(validate_handler))
        .with_state(service)
}

/// Respond with the verdict as body: 200 when valid, 400 otherwise.
///
/// A JSON `null` body is an absent address.
pub(crate) async fn validate_handler(
    State(service): State<Arc<AddressValidationService>>,
    Json(address): Json<Option<Address>>,
) -> Response {
    let result = service.validate(address.as_ref());
    debug!(valid = result.is_valid(), invalid_field = ?result.invalid_field(), "address validated");

    let status = if result.is_valid() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(result)).into_response()
}
