use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web;
use actix_web::App;
use actix_web::HttpServer;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::routes::home;
use crate::routes::not_found;
use crate::routes::secret;

/// Wrapper for actix's `Server` with access to the bound port (needed when
/// binding port 0). Not to be confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    /// Bind a listener per `Settings` and build the `Server` around it.
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.host, cfg.port);
        let listener = TcpListener::bind(addr)?;

        // with port 0, the OS assigns a free port; keep the real one
        let port = listener.local_addr()?.port();

        let server = run(listener, cfg)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call
    /// (or passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// Declare all endpoints. The server is not responsible for binding to an
/// address, it only listens to an already bound one.
///
/// Dispatch is first match wins: `GET /` (public), `GET /secret` (gated),
/// then the 404 fallback. The fallback is registered as `default_service`, so
/// a non-GET request to a known path falls through to 404 rather than 405,
/// and every request resolves to exactly one terminal response.
pub fn run(
    listener: TcpListener,
    cfg: Settings,
) -> Result<Server, anyhow::Error> {
    // `Data` is externally an `Arc`; each worker's copy of the `App` shares
    // the same read-only `Settings`, so no locking is needed anywhere
    let cfg = web::Data::new(cfg);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default()) // wrap the whole app in tracing middleware
            .route("/", web::get().to(home))
            .route("/secret", web::get().to(secret))
            .default_service(web::to(not_found))
            .app_data(cfg.clone())
    })
    .listen(listener)?
    .run();

    Ok(server) // sync return -- caller uses foo()?.await
}
