use secret_gate::configuration::get_configuration;
use secret_gate::startup::Application;
use secret_gate::telemetry::get_subscriber;
use secret_gate::telemetry::init_subscriber;

/// Initialise telemetry, load config, and run the server until stopped.
#[tokio::main] // requires tokio features: macros, rt-multi-thread
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("secret-gate", "info", std::io::stdout);
    init_subscriber(subscriber);

    let cfg = get_configuration()?;
    let app = Application::build(cfg).await?;

    tracing::info!("listening on http://localhost:{}", app.get_port());

    app.run_until_stopped().await?;

    Ok(())
}
