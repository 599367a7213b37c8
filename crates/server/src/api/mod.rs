use std::sync::Arc;

use assistant::Session;
use shared::{
    domain::SessionId,
    error::{ApiError, ErrorCode},
    protocol::{SessionCreated, SubmitMessageResponse, TranscriptResponse},
};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::info;

use crate::{app_state::AppState, render::render_thread};

pub async fn create_session(state: &AppState) -> SessionCreated {
    sweep_expired_sessions(state).await;
    let session = Session::new();
    let session_id = session.id();
    state
        .sessions
        .write()
        .await
        .insert(session_id, Arc::new(Mutex::new(session)));
    info!(%session_id, "session started");
    SessionCreated { session_id }
}

pub async fn submit_message(
    state: &AppState,
    session_id: SessionId,
    content: &str,
) -> Result<SubmitMessageResponse, ApiError> {
    if content.is_empty() {
        return Err(ApiError::new(
            ErrorCode::Validation,
            "message content cannot be empty",
        ));
    }
    let mut session = live_session(state, session_id).await?;
    let turn = state.assistant.respond(&mut session, content).await;
    Ok(SubmitMessageResponse {
        source: turn.source,
        reply: turn.reply,
        transcript_len: session.transcript().len(),
    })
}

pub async fn transcript(
    state: &AppState,
    session_id: SessionId,
) -> Result<TranscriptResponse, ApiError> {
    let session = live_session(state, session_id).await?;
    Ok(TranscriptResponse {
        session_id,
        messages: session.transcript().messages().to_vec(),
    })
}

pub async fn thread_html(state: &AppState, session_id: SessionId) -> Result<String, ApiError> {
    let session = live_session(state, session_id).await?;
    Ok(render_thread(session.transcript()))
}

pub async fn end_session(state: &AppState, session_id: SessionId) -> Result<(), ApiError> {
    let removed = state.sessions.write().await.remove(&session_id);
    if removed.is_none() {
        return Err(session_not_found());
    }
    info!(%session_id, "session ended");
    Ok(())
}

/// Drops every session idle for longer than the configured TTL. Sessions
/// whose lock is held are mid-turn and therefore kept.
pub async fn sweep_expired_sessions(state: &AppState) -> usize {
    let mut sessions = state.sessions.write().await;
    let before = sessions.len();
    sessions.retain(|_, session| match session.try_lock() {
        Ok(session) => !session.is_expired(state.idle_ttl),
        Err(_) => true,
    });
    let removed = before - sessions.len();
    if removed > 0 {
        info!(removed, remaining = sessions.len(), "expired sessions dropped");
    }
    removed
}

/// Locks a session that exists and has not expired, and marks it active.
/// An expired session is removed and reported as not found.
async fn live_session(
    state: &AppState,
    session_id: SessionId,
) -> Result<OwnedMutexGuard<Session>, ApiError> {
    let handle = state
        .sessions
        .read()
        .await
        .get(&session_id)
        .cloned()
        .ok_or_else(session_not_found)?;
    let mut session = handle.lock_owned().await;
    if session.is_expired(state.idle_ttl) {
        drop(session);
        state.sessions.write().await.remove(&session_id);
        info!(%session_id, "session expired");
        return Err(session_not_found());
    }
    session.touch();
    Ok(session)
}

fn session_not_found() -> ApiError {
    ApiError::new(ErrorCode::NotFound, "session not found")
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
