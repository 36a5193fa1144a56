use actix_web::HttpResponse;

/// Fallback for every method/path combination with no matching route,
/// including non-GET requests to `/` and `/secret`.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain")
        .body("Not found")
}
