use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::backend::{Backend, HttpBackend};
use crate::config::Config;
use crate::ui::app::Route;
use crate::ui::render;

pub(crate) struct ServerState<B> {
    pub(crate) backend: B,
    pub(crate) config: Config,
}

pub(crate) async fn as_server(config: Config) -> Result<()> {
    let backend = HttpBackend::new(&config.backend_url, config.request_timeout())?;
    let listen = config.listen.clone();
    let state = Arc::new(ServerState { backend, config });

    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .with_context(|| format!("Failed to bind {listen}"))?;
    tracing::info!(%listen, backend = %state.config.backend_url, "finn-dash listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;
    Ok(())
}

pub(crate) fn router<B: Backend + 'static>(state: Arc<ServerState<B>>) -> Router {
    Router::new()
        .route("/", get(home::<B>))
        .route("/account/upload/:id", post(upload::<B>))
        .fallback(page::<B>)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// The landing page is the accounts index.
async fn home<B: Backend>(State(state): State<Arc<ServerState<B>>>) -> Response {
    respond(&state, Route::parse("/accounts", None)).await
}

async fn page<B: Backend>(
    State(state): State<Arc<ServerState<B>>>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    respond(&state, Route::parse(uri.path(), uri.query())).await
}

/// Statement uploads are handled by the backend; 307 keeps the method and the multipart body.
async fn upload<B: Backend>(
    State(state): State<Arc<ServerState<B>>>,
    Path(id): Path<String>,
) -> Redirect {
    let target = format!(
        "{}/account/upload/{}",
        state.config.backend_url.trim_end_matches('/'),
        urlencoding::encode(&id)
    );
    tracing::info!(%id, %target, "forwarding statement upload");
    Redirect::temporary(&target)
}

async fn respond<B: Backend>(state: &ServerState<B>, route: Route) -> Response {
    let stylesheet = state.config.stylesheet.as_deref();
    match super::render_page(&state.backend, route, stylesheet).await {
        Ok(html) => Html(html.into_string()).into_response(),
        Err(not_found) => {
            tracing::warn!(kind = %not_found.kind, "{not_found}");
            let html = render::not_found_document(Some(&not_found.kind), stylesheet);
            (StatusCode::NOT_FOUND, Html(html.into_string())).into_response()
        }
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod server_tests;
