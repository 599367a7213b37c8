use super::*;
use assistant::{CareerAssistant, Session, GREETING_REPLY};
use async_trait::async_trait;
use llm::{CompletionRequest, LanguageModel, LlmError};

struct FixedModel(&'static str);

#[async_trait]
impl LanguageModel for FixedModel {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
        Ok(self.0.to_string())
    }
}

#[test]
fn empty_transcript_renders_nothing() {
    assert_eq!(render_thread(&Transcript::new()), "");
}

#[tokio::test]
async fn blocks_follow_transcript_order_and_role() {
    let assistant = CareerAssistant::new(FixedModel("Use the STAR method.\nKeep it short."));
    let mut session = Session::new();
    assistant.respond(&mut session, "hi").await;
    assistant
        .respond(&mut session, "How should I answer interview questions?")
        .await;

    let html = render_thread(session.transcript());

    let expected = format!(
        "<div class='user-msg'>hi</div>\
         <div class='bot-msg'>{GREETING_REPLY}</div>\
         <div class='user-msg'>How should I answer interview questions?</div>\
         <div class='bot-msg'>Use the STAR method.<br>Keep it short.</div>"
    );
    assert_eq!(html, expected);
}

#[tokio::test]
async fn user_markup_is_escaped() {
    let assistant = CareerAssistant::new(FixedModel("ok"));
    let mut session = Session::new();
    assistant
        .respond(&mut session, "<script>alert('job')</script>")
        .await;

    let html = render_thread(session.transcript());
    assert!(html.starts_with(
        "<div class='user-msg'>&lt;script&gt;alert(&#39;job&#39;)&lt;/script&gt;</div>"
    ));
    assert!(!html.contains("<script>"));
}

#[test]
fn page_carries_header_input_and_thinking_indicator() {
    assert!(PAGE.contains("<title>CareerAI 💼</title>"));
    assert!(PAGE.contains("Ask CareerAI about jobs, resumes, interviews…"));
    assert!(PAGE.contains("CareerAI is thinking..."));
    assert!(PAGE.contains("id=\"thread\""));
}
