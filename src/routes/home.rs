use actix_web::HttpResponse;

/// `GET /`
///
/// The public endpoint; no authentication, fixed greeting.
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body("Hello, world!")
}
