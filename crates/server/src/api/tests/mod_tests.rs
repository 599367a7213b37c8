use super::*;
use assistant::{FALLBACK_REPLY, GREETING_REPLY, REFUSAL_REPLY};
use std::time::Duration;
use async_trait::async_trait;
use llm::{CompletionRequest, LanguageModel, LlmError};
use shared::domain::{ReplySource, Role};

struct EchoModel {
    fail: bool,
}

#[async_trait]
impl LanguageModel for EchoModel {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        if self.fail {
            return Err(LlmError::Status {
                status: 503,
                body: "overloaded".into(),
            });
        }
        Ok(format!("advice for: {}", request.user))
    }
}

fn setup(fail: bool) -> AppState {
    AppState::new(Arc::new(EchoModel { fail }), Duration::from_secs(3600))
}

fn setup_with_ttl(idle_ttl: Duration) -> AppState {
    AppState::new(Arc::new(EchoModel { fail: false }), idle_ttl)
}

#[tokio::test]
async fn submit_to_unknown_session_is_not_found() {
    let state = setup(false);
    let err = submit_message(&state, SessionId::new(), "hi")
        .await
        .expect_err("should fail");
    assert!(matches!(err.code, ErrorCode::NotFound));
}

#[tokio::test]
async fn blank_content_is_rejected_before_touching_the_transcript() {
    let state = setup(false);
    let created = create_session(&state).await;

    let err = submit_message(&state, created.session_id, "")
        .await
        .expect_err("should fail");
    assert!(matches!(err.code, ErrorCode::Validation));

    let listed = transcript(&state, created.session_id)
        .await
        .expect("transcript");
    assert!(listed.messages.is_empty());
}

#[tokio::test]
async fn turns_accumulate_in_order() {
    let state = setup(false);
    let created = create_session(&state).await;

    let greeting = submit_message(&state, created.session_id, "hi")
        .await
        .expect("greeting");
    assert_eq!(greeting.source, ReplySource::Greeting);
    assert_eq!(greeting.reply.content, GREETING_REPLY);
    assert_eq!(greeting.transcript_len, 2);

    let answer = submit_message(&state, created.session_id, "resume tips")
        .await
        .expect("answer");
    assert_eq!(answer.source, ReplySource::Model);
    assert_eq!(answer.reply.content, "advice for: resume tips");
    assert_eq!(answer.transcript_len, 4);

    let listed = transcript(&state, created.session_id)
        .await
        .expect("transcript");
    let contents: Vec<(Role, &str)> = listed
        .messages
        .iter()
        .map(|m| (m.role, m.content.as_str()))
        .collect();
    assert_eq!(
        contents,
        vec![
            (Role::User, "hi"),
            (Role::Assistant, GREETING_REPLY),
            (Role::User, "resume tips"),
            (Role::Assistant, "advice for: resume tips"),
        ]
    );
}

#[tokio::test]
async fn model_failure_is_reported_as_fallback_reply() {
    let state = setup(true);
    let created = create_session(&state).await;

    let response = submit_message(&state, created.session_id, "interview prep")
        .await
        .expect("fallback is not an api error");
    assert_eq!(response.source, ReplySource::Fallback);
    assert_eq!(response.reply.content, FALLBACK_REPLY);
    assert_eq!(response.transcript_len, 2);
}

#[tokio::test]
async fn ended_session_is_gone() {
    let state = setup(false);
    let created = create_session(&state).await;
    submit_message(&state, created.session_id, "hi")
        .await
        .expect("greeting");

    end_session(&state, created.session_id).await.expect("end");

    let err = transcript(&state, created.session_id)
        .await
        .expect_err("should fail");
    assert!(matches!(err.code, ErrorCode::NotFound));
    let err = end_session(&state, created.session_id)
        .await
        .expect_err("second end should fail");
    assert!(matches!(err.code, ErrorCode::NotFound));
}

#[tokio::test]
async fn rendering_the_thread_twice_leaves_the_transcript_untouched() {
    let state = setup(false);
    let created = create_session(&state).await;
    submit_message(&state, created.session_id, "hi")
        .await
        .expect("greeting");

    let before = transcript(&state, created.session_id)
        .await
        .expect("transcript")
        .messages;
    let first = thread_html(&state, created.session_id).await.expect("html");
    let second = thread_html(&state, created.session_id).await.expect("html");
    let after = transcript(&state, created.session_id)
        .await
        .expect("transcript")
        .messages;

    assert_eq!(first, second);
    assert_eq!(before, after);
}

#[tokio::test]
async fn whitespace_only_content_gets_the_refusal() {
    let state = setup(false);
    let created = create_session(&state).await;

    let response = submit_message(&state, created.session_id, "   ")
        .await
        .expect("whitespace is a real submission");
    assert_eq!(response.source, ReplySource::Refusal);
    assert_eq!(response.reply.content, REFUSAL_REPLY);
    assert_eq!(response.transcript_len, 2);
}

#[tokio::test]
async fn expired_session_is_not_found_and_removed() {
    let state = setup_with_ttl(Duration::ZERO);
    let created = create_session(&state).await;

    let err = submit_message(&state, created.session_id, "hi")
        .await
        .expect_err("should fail");
    assert!(matches!(err.code, ErrorCode::NotFound));
    let err = transcript(&state, created.session_id)
        .await
        .expect_err("should fail");
    assert!(matches!(err.code, ErrorCode::NotFound));
    assert!(state.sessions.read().await.is_empty());
}

#[tokio::test]
async fn idle_sessions_are_swept_when_new_ones_start() {
    let state = setup_with_ttl(Duration::from_millis(50));
    for _ in 0..10 {
        create_session(&state).await;
    }
    assert_eq!(state.sessions.read().await.len(), 10);

    tokio::time::sleep(Duration::from_millis(80)).await;
    let fresh = create_session(&state).await;

    let sessions = state.sessions.read().await;
    assert_eq!(sessions.len(), 1);
    assert!(sessions.contains_key(&fresh.session_id));
}

#[tokio::test]
async fn active_session_survives_the_sweep() {
    let state = setup_with_ttl(Duration::from_millis(200));
    let kept = create_session(&state).await;
    let idle = create_session(&state).await;

    tokio::time::sleep(Duration::from_millis(120)).await;
    submit_message(&state, kept.session_id, "hi")
        .await
        .expect("greeting");
    tokio::time::sleep(Duration::from_millis(120)).await;

    let removed = sweep_expired_sessions(&state).await;
    assert_eq!(removed, 1);
    let sessions = state.sessions.read().await;
    assert!(sessions.contains_key(&kept.session_id));
    assert!(!sessions.contains_key(&idle.session_id));
}
