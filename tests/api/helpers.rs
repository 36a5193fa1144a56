use base64::engine::general_purpose;
use base64::Engine;
use once_cell::sync::Lazy;
use secrecy::Secret;
use secret_gate::configuration::Settings;
use secret_gate::startup::Application;
use secret_gate::telemetry::get_subscriber;
use secret_gate::telemetry::init_subscriber;

/// Init the tracing subscriber once for the whole suite. To opt in to verbose
/// logging, use the env var `TEST_LOG`:
///
/// ```sh
///      TEST_LOG=true cargo test [test_name] | bunyan
/// ```
static TRACING: Lazy<()> = Lazy::new(|| {
    match std::env::var("TEST_LOG") {
        Ok(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::stdout);
            init_subscriber(subscriber);
        }
        Err(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::sink);
            init_subscriber(subscriber);
        }
    };
});

pub struct TestApp {
    pub addr: String,
    client: reqwest::Client,
}

impl TestApp {
    /// `GET {path}`, no `Authorization` header
    pub async fn get(
        &self,
        path: &str,
    ) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.addr, path))
            .send()
            .await
            .expect("execute request")
    }

    /// `GET /secret` with a raw `Authorization` header value, so malformed
    /// schemes and broken base64 can be exercised verbatim
    pub async fn get_secret_with(
        &self,
        authorization: &str,
    ) -> reqwest::Response {
        self.client
            .get(format!("{}/secret", self.addr))
            .header("Authorization", authorization)
            .send()
            .await
            .expect("execute request")
    }
}

/// Encode a well-formed `Basic` header value for the given pair
pub fn basic_header(
    username: &str,
    password: &str,
) -> String {
    format!(
        "Basic {}",
        general_purpose::STANDARD.encode(format!("{username}:{password}"))
    )
}

/// Spawn an `Application` on a random port with fixed test credentials
/// (admin/supersecret, secret message "shh"). `Settings` are constructed
/// explicitly rather than via `get_configuration`, so tests never depend on
/// the ambient environment.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let cfg = Settings {
        host: "127.0.0.1".to_string(),
        // port 0: the server is spawned on a random available port, which
        // must then be made known to the client
        port: 0,
        username: "admin".to_string(),
        password: Secret::new("supersecret".to_string()),
        secret_message: Secret::new("shh".to_string()),
    };

    let app = Application::build(cfg).await.unwrap();
    let addr = format!("http://localhost:{}", app.get_port());

    tokio::spawn(app.run_until_stopped());

    TestApp {
        addr,
        client: reqwest::Client::new(),
    }
}
