use crate::error::{ApiError, ErrorResponse};
use crate::models::unlock::{UnlockQuery, UnlockResponse};
use crate::validation::unlock::check_unlock;
use actix_web::{HttpResponse, get, web};
use tracing::info;

/// # Unlock Gate
///
/// Validates a two-part code of the form `CODE+SECONDARY` and hands back the
/// URL to open when it matches the accepted pair.
///
/// The query value is URL-decoded first, so clients must send the separator
/// as `%2B`; a bare `+` decodes to a space and is rejected.
///
/// ## Responses
/// - **200 OK**: `{"URL": "https://www.google.com"}`
/// - **401 Unauthorized**: wrong part count (`"Invalid format"`) or wrong codes
///   (`"Unauthorized"`)
/// - **422 Unprocessable Entity**: `unlock` parameter missing
///
/// ## Example Request
/// ```text
/// GET /api/unlock?unlock=742767%2B1234
/// ```
#[utoipa::path(
    get,
    path = "/api/unlock",
    params(UnlockQuery),
    responses(
        (status = 200, description = "Code accepted", body = UnlockResponse),
        (status = 401, description = "Code rejected", body = ErrorResponse),
        (status = 422, description = "Missing unlock parameter", body = ErrorResponse)
    ),
    tag = "Unlock"
)]
#[get("/unlock")]
pub async fn unlock(query: web::Query<UnlockQuery>) -> Result<HttpResponse, ApiError> {
    match check_unlock(&query.unlock) {
        Ok(url) => Ok(HttpResponse::Ok().json(UnlockResponse {
            url: url.to_string(),
        })),
        Err(e) => {
            info!(reason = %e, "unlock rejected");
            Err(e.into())
        }
    }
}

/// - `GET /unlock`: unlock gate
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(unlock);
}

#[cfg(test)]
mod tests {
    use crate::routes::tests::create_test_app;
    use crate::store::memory::MemoryStatusStore;
    use actix_web::test;
    use serde_json::Value;
    use std::sync::Arc;

    async fn get_unlock(uri: &str) -> (u16, Value) {
        // Set up test app
        let app = create_test_app(Arc::new(MemoryStatusStore::default())).await;

        // Execute request
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        // Every outcome carries a JSON body
        let status = resp.status().as_u16();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_web::test]
    async fn test_accepted_code() {
        let (status, body) = get_unlock("/api/unlock?unlock=742767%2B1234").await;
        assert_eq!(status, 200);
        assert_eq!(body, serde_json::json!({ "URL": "https://www.google.com" }));
    }

    #[actix_web::test]
    async fn test_wrong_secondary_code() {
        let (status, body) = get_unlock("/api/unlock?unlock=742767%2B9999").await;
        assert_eq!(status, 401);
        assert_eq!(body["detail"], "Unauthorized");
    }

    #[actix_web::test]
    async fn test_no_separator() {
        let (status, body) = get_unlock("/api/unlock?unlock=abc").await;
        assert_eq!(status, 401);
        assert_eq!(body["detail"], "Invalid format");
    }

    #[actix_web::test]
    async fn test_too_many_parts() {
        let (status, body) = get_unlock("/api/unlock?unlock=1%2B2%2B3").await;
        assert_eq!(status, 401);
        assert_eq!(body["detail"], "Invalid format");
    }

    #[actix_web::test]
    async fn test_bare_plus_decodes_to_space() {
        // Query decoding turns `+` into a space, leaving a single part
        let (status, body) = get_unlock("/api/unlock?unlock=742767+1234").await;
        assert_eq!(status, 401);
        assert_eq!(body["detail"], "Invalid format");
    }

    #[actix_web::test]
    async fn test_missing_parameter() {
        let (status, body) = get_unlock("/api/unlock").await;
        assert_eq!(status, 422);
        assert!(body["detail"].as_str().unwrap().contains("unlock"));
    }
}
