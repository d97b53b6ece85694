use crate::error::{ApiError, ErrorResponse};
use crate::models::status::{STATUS_LIST_LIMIT, StatusCheck, StatusCheckCreate};
use crate::store::StatusStore;
use actix_web::{HttpResponse, get, post, web};
use tracing::debug;

/// # Record Status Check
///
/// Stores a new status check for `client_name` with a generated id and the
/// current UTC time, then returns the stored record. Repeated calls with the
/// same name always create distinct records.
///
/// ## Responses
/// - **200 OK**: the created record
/// - **422 Unprocessable Entity**: body missing, malformed, or `client_name` not a string
/// - **500 Internal Server Error**: the store rejected the insert
///
/// ## Example Request
/// ```json
/// { "client_name": "calculator" }
/// ```
#[utoipa::path(
    post,
    path = "/api/status",
    request_body = StatusCheckCreate,
    responses(
        (status = 200, description = "Status check recorded", body = StatusCheck),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Status"
)]
#[post("/status")]
pub async fn create_status_check(
    input: web::Json<StatusCheckCreate>,
    store: web::Data<dyn StatusStore>,
) -> Result<HttpResponse, ApiError> {
    let check = StatusCheck::from(input.into_inner());
    store.insert(&check).await?;

    debug!(id = %check.id, client_name = %check.client_name, "status check recorded");
    Ok(HttpResponse::Ok().json(check))
}

/// # List Status Checks
///
/// Returns up to 1000 stored status checks in the store's natural order.
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Stored status checks", body = [StatusCheck]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Status"
)]
#[get("/status")]
pub async fn get_status_checks(
    store: web::Data<dyn StatusStore>,
) -> Result<HttpResponse, ApiError> {
    let checks = store.list(STATUS_LIST_LIMIT).await?;
    Ok(HttpResponse::Ok().json(checks))
}

/// Registers the status endpoints.
///
/// - `POST /status`: record a status check
/// - `GET /status`: list status checks
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_status_check).service(get_status_checks);
}
