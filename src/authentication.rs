// HTTP Basic Authentication (RFCs 2617, 7617): credentials travel as
// `Authorization: Basic base64(username:password)`. This module owns both
// halves of the decision path:
//
// 1. extraction -- parse the raw header into a `Credentials` pair
// 2. validation -- compare the pair against the configured credentials
//
// Every failure mode is request-local and maps to a terminal HTTP status;
// nothing here can abort the process.

use actix_web::http::header;
use actix_web::http::header::HeaderMap;
use actix_web::http::header::HeaderValue;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use base64::engine::general_purpose;
use base64::Engine;
use secrecy::ExposeSecret;
use secrecy::Secret;

use crate::configuration::Settings;

/// A username/password pair extracted from an `Authorization` header. The
/// password is wrapped in `Secret` so it cannot leak through `Debug` or log
/// output.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: Secret<String>,
}

/// Everything that can go wrong on the gated path. The first four variants
/// mean "no usable credentials were supplied" and answer 401 with a
/// `WWW-Authenticate` challenge; `InvalidCredentials` means "credentials were
/// supplied but wrong" and answers 403 without a challenge, so a client can
/// tell the two apart.
#[derive(thiserror::Error, Debug)]
pub enum BasicAuthError {
    #[error("No Authorization header")]
    MissingHeader,
    #[error("Authorization scheme was not 'Basic'")]
    InvalidScheme,
    #[error("Credentials were not base64-encoded UTF-8")]
    InvalidEncoding,
    #[error("No colon separator in decoded credentials")]
    MissingSeparator,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl ResponseError for BasicAuthError {
    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        match self {
            Self::InvalidCredentials => HttpResponse::build(StatusCode::FORBIDDEN)
                .content_type("text/plain")
                .body("Forbidden: invalid credentials"),
            _ => HttpResponse::build(StatusCode::UNAUTHORIZED)
                .insert_header((
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static(r#"Basic realm="Restricted Area""#),
                ))
                .content_type("text/plain")
                .body("Unauthorized"),
        }
    }
}

/// Parse the headers of a HTTP request into `Credentials`. This does not
/// actually validate anything against configuration; for that, see
/// `validate_credentials`.
///
/// The scheme token is matched case-sensitively (`"Basic "`, trailing space
/// included), the payload is decoded with the standard padded base64
/// alphabet, and the decoded text is split at the -first- colon, so the
/// password may itself contain colons. Decode failures are rejected here
/// rather than passed through as garbage bytes.
pub fn basic_authentication(headers: &HeaderMap) -> Result<Credentials, BasicAuthError> {
    let encoded = headers
        .get(header::AUTHORIZATION)
        .ok_or(BasicAuthError::MissingHeader)?
        .to_str()
        .map_err(|_| BasicAuthError::InvalidEncoding)?
        .strip_prefix("Basic ")
        .ok_or(BasicAuthError::InvalidScheme)?;

    let decoded = general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| BasicAuthError::InvalidEncoding)?;
    let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::InvalidEncoding)?;

    // `"user:"` and `":pass"` both parse (with one empty field) and are left
    // to fail at validation; only a complete absence of `:` is malformed
    let (username, password) = decoded
        .split_once(':')
        .ok_or(BasicAuthError::MissingSeparator)?;

    Ok(Credentials {
        username: username.to_string(),
        password: Secret::new(password.to_string()),
    })
}

/// Compare supplied credentials against the configured pair, byte for byte.
///
/// Plain equality is deliberate: there is exactly one static credential pair,
/// so there is no username enumeration surface. Constant-time comparison
/// would be the hardened variant.
#[tracing::instrument(name = "Validating credentials", skip(creds, cfg))]
pub fn validate_credentials(
    creds: &Credentials,
    cfg: &Settings,
) -> Result<(), BasicAuthError> {
    let username_ok = creds.username == cfg.username;
    let password_ok = creds.password.expose_secret() == cfg.password.expose_secret();
    match username_ok && password_ok {
        true => Ok(()),
        false => Err(BasicAuthError::InvalidCredentials),
    }
}
