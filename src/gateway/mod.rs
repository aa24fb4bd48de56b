pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::Request,
    http::StatusCode,
    middleware::{Next, from_fn},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use futures::FutureExt;
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;
use types::ErrorResponse;
use types::response::SERVER_ERROR;

/// Axum middleware turning a panicking handler into the generic 500 body.
pub async fn catch_panic_middleware(request: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            tracing::error!("Server error: {}", panic_message(panic.as_ref()));
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(SERVER_ERROR)),
            )
                .into_response()
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}

/// Build the complete router
pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/services", get(handlers::list_services))
        .route("/bookings", post(handlers::create_booking));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api/v1", api_routes)
        .fallback(handlers::not_found)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(from_fn(catch_panic_middleware))
}

/// Start HTTP Gateway server, returns after Ctrl-C
pub async fn run_server(addr: &str) -> anyhow::Result<()> {
    let app = build_router(Arc::new(AppState::new()));

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
