//! HTTP handlers and the shared mapping from service errors to responses.

use actix_web::HttpResponse;

use crate::dto::products::ErrorResponse;
use crate::services::ServiceError;

pub mod products;

/// Label used for every rejected request parameter set.
pub const INVALID_PARAMS_ERROR: &str = "Invalid query parameters";

/// Builds the JSON error response for a failed service call.
///
/// `internal_label` names the operation that failed and is only used for
/// internal errors.
pub fn service_error_response(internal_label: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(message) | ServiceError::TypeConstraint(message) => {
            log::warn!("Rejected request: {message}");
            HttpResponse::BadRequest().json(ErrorResponse::new(INVALID_PARAMS_ERROR, message))
        }
        ServiceError::Internal(message) => {
            log::error!("{internal_label}: {message}");
            HttpResponse::InternalServerError().json(ErrorResponse::new(internal_label, message))
        }
    }
}
