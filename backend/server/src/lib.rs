//! # Contacts
//!
//! Server-rendered contact manager: a searchable sidebar of contacts plus a detail pane with
//! create, edit, favorite and delete.
//!
//!
//!
//! # Request Flow
//!
//! - `GET` routes run loaders, then render the whole page (sidebar + detail pane)
//! - `POST` routes run exactly one action and answer `303 See Other`
//! - The redirect is an ordinary `GET`, so every loader runs again after every write and the
//!   sidebar can never show stale contacts
//! - A missing contact is a normal outcome: 404 with the not-found message rendered in the
//!   detail pane, the sidebar intact
//! - A handler running without a route parameter it requires is a routing defect, answered with 500
//!
//!
//!
//! # Routes
//!
//! | Path | Method | Effect |
//! |---|---|---|
//! | `/` | GET | list + search, query param `q` |
//! | `/` | POST | create an empty contact, redirect to its edit view |
//! | `/contacts/{id}` | GET | detail view |
//! | `/contacts/{id}` | POST | set `favorite`, redirect to the detail view |
//! | `/contacts/{id}/edit` | GET | edit form, pre-filled |
//! | `/contacts/{id}/edit` | POST | partial field update, redirect to the detail view |
//! | `/contacts/{id}/destroy` | POST | delete, redirect to `/` |
//! | `/_data/root` | GET | root loader as JSON |
//! | `/_data/contacts/{id}` | GET | detail loader as JSON |
//!
//! The `/_data` routes serve the navigator, which renders on its own and only needs loader output.
//!
//!
//!
//! # Configuration
//!
//! - `RUST_PORT`: listen port, default `3000`
//! - `CONTACTS_SEED`: start with the bundled contacts, default `true`
//! - `RUST_LOG`: tracing filter, e.g. `RUST_LOG=server=debug,tower_http=debug`
//!
//!
//!
//! # Setup
//!
//! Run the server.
//! ```sh
//! RUST_LOG=info cargo run -p contacts
//! ```
//!
//! Type a search against it, one keystroke at a time.
//! ```sh
//! cargo run -p tester -- search shel
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use roster::payloads::ROOT_DATA_PATH;
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod actions;
pub mod config;
pub mod error;
pub mod loaders;
pub mod routes;
pub mod state;
pub mod utils;
pub mod views;

use routes::{
    contact_data_handler, contact_handler, create_handler, destroy_handler, edit_handler,
    favorite_handler, root_data_handler, root_handler, update_handler,
};
use state::AppState;

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::load().await?;

    info!("Starting server...");
    let app = build_router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(root_handler).post(create_handler))
        .route("/contacts/{id}", get(contact_handler).post(favorite_handler))
        .route("/contacts/{id}/edit", get(edit_handler).post(update_handler))
        .route("/contacts/{id}/destroy", post(destroy_handler))
        .route(ROOT_DATA_PATH, get(root_data_handler))
        .route("/_data/contacts/{id}", get(contact_data_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
