use actix_web::web;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use secrecy::ExposeSecret;

use crate::authentication::basic_authentication;
use crate::authentication::validate_credentials;
use crate::authentication::BasicAuthError;
use crate::configuration::Settings;

/// `GET /secret`
///
/// The gated endpoint. Extraction failures bubble up as 401 (with a
/// `WWW-Authenticate` challenge), a credential mismatch as 403; both via
/// `BasicAuthError`'s `ResponseError` impl. On success the configured secret
/// message is returned verbatim.
#[tracing::instrument(
    name = "Serving secret",
    skip(request, cfg),
    // recorded once the header has been parsed
    fields(username = tracing::field::Empty)
)]
pub async fn secret(
    request: HttpRequest,
    cfg: web::Data<Settings>,
) -> Result<HttpResponse, BasicAuthError> {
    let creds = basic_authentication(request.headers())?;

    tracing::Span::current().record("username", tracing::field::display(&creds.username));

    validate_credentials(&creds, &cfg)?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain")
        .body(cfg.secret_message.expose_secret().clone()))
}
