//! API error types with HTTP response mapping.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;

/// Message returned for every internal failure; details only go to the log.
pub const INTERNAL_ERROR_MESSAGE: &str = "A problem happened while handling your request";

/// Top-level message of a validation failure body.
pub const VALIDATION_ERROR_MESSAGE: &str = "One or more validation errors occurred.";

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Domain logic error.
    Domain(DomainError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({ "error": msg })),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            ApiError::Domain(err) => domain_error_to_response(err),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn domain_error_to_response(err: DomainError) -> (StatusCode, serde_json::Value) {
    match err {
        DomainError::CityNotFound(_) | DomainError::PointOfInterestNotFound { .. } => (
            StatusCode::NOT_FOUND,
            serde_json::json!({ "error": err.to_string() }),
        ),
        DomainError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({
                "error": VALIDATION_ERROR_MESSAGE,
                "errors": errors,
            }),
        ),
        DomainError::Internal(msg) => {
            tracing::error!(error = %msg, "internal server error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE }),
            )
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use common::{CityId, PointOfInterestId};
    use domain::ValidationErrors;
    use domain::validation::{DESCRIPTION_FIELD, DESCRIPTION_SAME_AS_NAME};

    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn not_found_domain_errors_map_to_404() {
        let response = ApiError::from(DomainError::PointOfInterestNotFound {
            city_id: CityId::new(1),
            point_of_interest_id: PointOfInterestId::new(9),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn validation_errors_carry_fields() {
        let errors = ValidationErrors::single(DESCRIPTION_FIELD, DESCRIPTION_SAME_AS_NAME);
        let response = ApiError::from(DomainError::Validation(errors)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["errors"]["Description"][0], DESCRIPTION_SAME_AS_NAME);
    }

    #[tokio::test]
    async fn internal_errors_are_opaque() {
        let response =
            ApiError::from(DomainError::Internal("connection pool exhausted".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
    }
}
