use crate::models::root::MessageResponse;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, get};

/// # API Root
///
/// Liveness check returning a fixed greeting.
///
/// ## Response
///
/// - **200 OK**: `{"message": "Hello World"}`
#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "Service is reachable", body = MessageResponse)
    ),
    tag = "Root"
)]
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::hello())
}

/// Answers a slash-less root path with a 307 to the same path plus `/`,
/// keeping the query string.
pub async fn redirect_to_root(req: HttpRequest) -> HttpResponse {
    let location = match req.query_string() {
        "" => format!("{}/", req.path()),
        query => format!("{}/?{}", req.path(), query),
    };

    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// - `GET /`: greeting
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(root);
}
