use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::{delete, get, post},
    Json, Router,
};
use llm::OpenAiChatClient;
use shared::{
    domain::SessionId,
    error::{ApiError, ErrorCode},
    protocol::{SessionCreated, SubmitMessageRequest, SubmitMessageResponse, TranscriptResponse},
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod api;
mod app_state;
mod config;
mod render;

use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings();
    let api_key = settings.api_key()?;
    let model = OpenAiChatClient::with_base_url(
        api_key,
        &settings.openai_model,
        &settings.openai_base_url,
    )?;
    info!(
        model = model.model(),
        endpoint = %model.endpoint(),
        "language model configured"
    );

    let idle_ttl = settings.session_idle_ttl();
    let state = Arc::new(AppState::new(Arc::new(model), idle_ttl));
    spawn_session_sweeper(state.clone(), idle_ttl);
    let app = build_router(state, settings.max_body_bytes);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/sessions", post(http_create_session))
        .route("/sessions/:session_id", delete(http_end_session))
        .route(
            "/sessions/:session_id/messages",
            get(http_transcript).post(http_submit_message),
        )
        .route("/sessions/:session_id/thread", get(http_thread))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

/// Periodically drops idle sessions so abandoned tabs do not accumulate.
fn spawn_session_sweeper(state: Arc<AppState>, idle_ttl: Duration) {
    let period = (idle_ttl / 2).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            api::sweep_expired_sessions(&state).await;
        }
    });
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index() -> Html<&'static str> {
    Html(render::PAGE)
}

async fn http_create_session(State(state): State<Arc<AppState>>) -> Json<SessionCreated> {
    Json(api::create_session(&state).await)
}

async fn http_submit_message(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    body: Result<Json<SubmitMessageRequest>, JsonRejection>,
) -> Result<Json<SubmitMessageResponse>, (StatusCode, Json<ApiError>)> {
    let Json(req) = body.map_err(|rejection| reject(body_error(rejection)))?;
    api::submit_message(&state, SessionId(session_id), &req.content)
        .await
        .map(Json)
        .map_err(reject)
}

async fn http_transcript(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TranscriptResponse>, (StatusCode, Json<ApiError>)> {
    api::transcript(&state, SessionId(session_id))
        .await
        .map(Json)
        .map_err(reject)
}

async fn http_thread(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, (StatusCode, Json<ApiError>)> {
    let html = api::thread_html(&state, SessionId(session_id))
        .await
        .map_err(reject)?;
    Ok(([(header::CACHE_CONTROL, "no-store")], Html(html)))
}

async fn http_end_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, Json<ApiError>)> {
    api::end_session(&state, SessionId(session_id))
        .await
        .map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}

fn body_error(rejection: JsonRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::new(ErrorCode::PayloadTooLarge, "message body is too large")
    } else {
        ApiError::new(ErrorCode::Validation, rejection.body_text())
    }
}

fn reject(err: ApiError) -> (StatusCode, Json<ApiError>) {
    let status = match err.code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
    };
    (status, Json(err))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
