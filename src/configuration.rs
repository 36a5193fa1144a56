use config::Config;
use config::ConfigError;
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

/// Global configuration, read once from the environment at startup and never
/// mutated afterwards. Handlers receive it behind `web::Data` (an `Arc`), so
/// concurrent requests share one read-only copy. See `get_configuration`.
#[derive(Deserialize, Clone)]
pub struct Settings {
    /// Bind address; 127.0.0.1 on a dev machine, 0.0.0.0 in a container
    pub host: String,

    /// Listen port. 0 asks the OS for a free port (used by tests).
    // env vars are -always- strings; `serde-aux` parses them into numbers
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,

    /// Username half of the single credential pair guarding `/secret`
    pub username: String,

    /// Password half; compared byte-for-byte, case-sensitive
    pub password: Secret<String>,

    /// Payload returned by `/secret` on successful authentication
    pub secret_message: Secret<String>,
}

/// Load `Settings` from the environment: `HOST`, `PORT`, `USERNAME`,
/// `PASSWORD`, `SECRET_MESSAGE`. Every field has a default, so an empty
/// environment yields a working (if insecure) configuration.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .set_default("host", "127.0.0.1")?
        .set_default("port", 3000)?
        .set_default("username", "admin")?
        .set_default("password", "supersecret")?
        .set_default("secret_message", "shh")?
        // `Environment::default` lowercases keys, so `PORT=8080` lands on
        // `Settings.port`; unknown vars are ignored by serde
        .add_source(config::Environment::default())
        .build()?;

    settings.try_deserialize::<Settings>()
}
