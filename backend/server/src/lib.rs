//! Weapon kit voting site.
//!
//! Every main/sub/special combination is a kit. Visitors browse the kits, vote for their
//! favourites (10 votes a day, tracked client-side) and watch the ranking.
//!
//!
//!
//! # Routes
//!
//! - `GET /` listing with type/sub/special filters, vote sorting and 100-kit pages
//! - `GET /ranking` ranking shell, rows are pulled from `/api/ranking_data` 100 at a time
//! - `GET /about`
//! - `GET /api/ranking_data?offset=N` JSON ranking rows starting at rank `N + 1`
//! - `POST /vote` JSON `{"weapon_id": N}`, needs the page's CSRF token in `X-CSRFToken`
//! - `GET /static/*` images, scripts, css from `STATIC_DIR`
//!
//!
//!
//! # Preventing Vote Spam
//!
//! - The daily limit lives in the visitor's browser, so it only stops honest clients
//! - Server side, votes are capped per IP per minute (default 30)
//! - Behind a proxy the IP comes from the first `X-Forwarded-For` hop
//! - CSRF tokens stop other sites from submitting votes with a visitor's browser
//! - The token is checked before the rate limit, forged requests never use up an IP's quota
//!
//!
//!
//! # Notes
//!
//! ## Redis vs Memory
//! The memory store is enough for a single instance that can lose votes on restart. Anything
//! longer lived should set `VOTE_STORE=redis` so counts survive deploys and every replica
//! sees the same numbers. Rate limits stay per-instance either way.
//!
//! ## CSRF Secret
//! Tokens are signed with `CSRF_SECRET` and nothing is stored. Replicas sharing the secret
//! accept each other's tokens. Without it every start picks a random secret, so pages rendered
//! before a restart can no longer vote.
//!
//! ## Ranking Cost
//! Ranking and sorted listings snapshot every counter and sort in-process. With ~17k kits
//! that is cheap compared to the network round trip.
//!
//!
//!
//! # Setup
//!
//! Run locally with the memory store.
//! ```sh
//! RUST_LOG=info cargo run
//! ```
//!
//! Run against Redis.
//! ```sh
//! VOTE_STORE=redis REDIS_URL=redis://127.0.0.1:6379 cargo run
//! ```
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
use std::{future::Future, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderName, Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::ctrl_c;
#[cfg(unix)]
use signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod csrf;
pub mod database;
pub mod error;
pub mod limiter;
pub mod listing;
pub mod pages;
pub mod ranking;
pub mod routes;
pub mod state;
pub mod utils;

use config::Config;
use routes::{about_handler, index_handler, ranking_data_handler, ranking_handler, vote_handler};
use state::State;

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("x-csrftoken")])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(index_handler))
        .route("/about", get(about_handler))
        .route("/ranking", get(ranking_handler))
        .route("/api/ranking_data", get(ranking_data_handler))
        .route("/vote", post(vote_handler))
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .layer(cors)
        .with_state(state)
}

/// Serves the site on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: Arc<State>, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(state);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
}

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = State::new(config).await?;

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    serve(listener, state, shutdown_signal()).await?;

    info!("Server shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
