use crate::validation::unlock::UnlockError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Failures raised by a [`StatusStore`](crate::store::StatusStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("status check {id} has an out-of-range timestamp ({millis} ms)")]
    InvalidTimestamp { id: String, millis: i64 },
}

/// Error body shared by every non-2xx response.
///
/// ```json
/// { "detail": "Unauthorized" }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// # HTTP-facing error
///
/// Maps each failure class onto a status code:
/// - **401**: unlock input rejected
/// - **422**: request body or query string has the wrong shape
/// - **500**: the document store failed mid-request
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Unlock(#[from] UnlockError),

    #[error("{0}")]
    Unprocessable(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unlock(_) => StatusCode::UNAUTHORIZED,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            ApiError::Store(e) => {
                tracing::error!(error = %e, "status store request failed");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse { detail })
    }
}
