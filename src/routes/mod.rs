use crate::error::ApiError;
use actix_cors::Cors;
use actix_web::web;

/// # API Root
///
/// Liveness check returning `{"message": "Hello World"}`.
pub mod root;

/// # Status Check Endpoints
///
/// Records and lists heartbeat records in the document store.
///
/// ## Endpoints
/// - `POST /status`: body `{"client_name": string}`, returns the stored record
/// - `GET /status`: returns up to 1000 stored records
///
/// ## Responses
/// - **200 OK**: record or array of records
/// - **422 Unprocessable Entity**: malformed body
/// - **500 Internal Server Error**: document store failure
pub mod status;


/// # Unlock Endpoint
///
/// Fixed-code gate answering `{"URL": ...}` or 401.
pub mod unlock;

/// Path prefix shared by every endpoint.
pub const API_PREFIX: &str = "/api";

/// # API Route Configuration
///
/// Mounts every endpoint under [`API_PREFIX`] and turns JSON body and query
/// string extraction failures into 422 responses. A bare `GET /api` is
/// redirected to `/api/`.
///
/// ## Example Endpoints
///
/// ```text
/// GET  /api/                       - Greeting / liveness
/// POST /api/status                 - Record a status check
/// GET  /api/status                 - List status checks
/// GET  /api/unlock?unlock=A%2BB    - Unlock gate
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Must precede the scope, which would otherwise claim `/api` and 404 it
    cfg.service(web::resource(API_PREFIX).route(web::get().to(root::redirect_to_root)));
    cfg.service(
        web::scope(API_PREFIX)
            .app_data(json_config())
            .app_data(query_config())
            .configure(root::configure_routes)
            .configure(status::configure_routes)
            .configure(unlock::configure_routes),
    );
}

/// Bodies without a `Content-Type` header are still parsed as JSON.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| ApiError::Unprocessable(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::Unprocessable(err.to_string()).into())
}

/// Allows every origin, method and header, with credentials. The request's
/// `Origin` is echoed back rather than `*`, since browsers refuse a wildcard on
/// credentialed requests.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
