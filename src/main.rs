use hyper::server::conn::http1;
use hyper::Request;
use hyper_util::rt::TokioIo;
use hyper_util::service::TowerToHyperService;
use std::convert::Infallible;
use std::str::FromStr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

mod config;
mod gateway;
mod handlers;
mod sample;
mod types;

use handlers::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // pick up AWS keys and the region from a .env file in the working directory
    dotenvy::dotenv().ok();
    init_tracing();

    let config = config::Config::from_env();

    info!(
        "Listening on http://{}\n- analyze endpoint: http://{}/contracts/analyze\n",
        config.listener, config.listener
    );

    // bind to a TCP port and start a loop to continuously accept incoming connections
    let listener = TcpListener::bind(config.listener).await?;

    let state = Arc::new(AppState {
        config,
        handler: Arc::new(sample::SampleAnalyzer),
    });

    // all origins, methods and headers - this gateway is for local trusted use only
    let cors = CorsLayer::very_permissive();

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);

        let state = Arc::clone(&state);
        let cors = cors.clone();

        // Spawn a tokio task to serve multiple connections concurrently
        tokio::task::spawn(async move {
            let service = ServiceBuilder::new().layer(cors).service(tower::service_fn(
                move |req: Request<hyper::body::Incoming>| {
                    let state = Arc::clone(&state);
                    async move { Ok::<_, Infallible>(handlers::route(req, state).await) }
                },
            ));

            if let Err(err) = http1::Builder::new()
                .serve_connection(io, TowerToHyperService::new(service))
                .await
            {
                debug!("TCP error: {:?}", err);
                info!("Client disconnected\n");
            }
        });
    }
}

/// Initializes the tracing from RUST_LOG env var if present or sets minimal logging:
/// - INFO for the gateway
/// - ERROR for everything else
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(
                    Directive::from_str("lambda_gateway_emulator=info")
                        .expect("Invalid logging filter. It's a bug."),
                )
                .from_env_lossy(),
        )
        .with_ansi(true)
        .with_target(false)
        .compact()
        .init();
}
