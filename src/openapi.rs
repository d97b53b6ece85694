use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on each
/// handler and served at `/api-docs/openapi.json`, with Swagger UI at
/// `/swagger-ui/`.
///
/// # Endpoints
/// - Root: `GET /api/`
/// - Status: `POST /api/status`, `GET /api/status`
/// - Unlock: `GET /api/unlock`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::root,
        crate::routes::status::create_status_check,
        crate::routes::status::get_status_checks,
        crate::routes::unlock::unlock,
    ),
    components(
        schemas(
            crate::models::root::MessageResponse,
            crate::models::status::StatusCheck,
            crate::models::status::StatusCheckCreate,
            crate::models::unlock::UnlockResponse,
            crate::error::ErrorResponse
        )
    ),
    tags(
        (name = "Root", description = "Greeting and liveness"),
        (name = "Status", description = "Status check recording and listing"),
        (name = "Unlock", description = "Fixed-code unlock gate")
    ),
    info(
        description = "Status check recording and unlock gate API",
        title = "Status & Unlock API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
