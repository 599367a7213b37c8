use llm::{CompletionRequest, LanguageModel};
use shared::domain::{ChatMessage, ReplySource};
use tracing::{debug, info, warn};

use crate::{classifier::matched_term, session::Session};

pub const GREETINGS: &[&str] = &["hi", "hello", "hey", "hii", "heyy"];

pub const GREETING_REPLY: &str = "Hello! 👋 How can I help you with your career today?";

pub const REFUSAL_REPLY: &str = "I can help only with *career-related questions*, such as \
jobs, resumes, interviews, LinkedIn and professional growth. 😊";

pub const FALLBACK_REPLY: &str = "CareerAI is temporarily unavailable, please try again.";

pub const SYSTEM_INSTRUCTION: &str = "You are CareerAI, a helpful expert in resumes, \
interviews, job search and LinkedIn improvement. Only answer career-related questions.";

/// Reply strategy chosen for one user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Greeting,
    OutOfDomain,
    CareerQuery,
}

pub fn is_greeting(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    GREETINGS.contains(&normalized.as_str())
}

/// Greeting check first, then the topic gate.
pub fn route(input: &str) -> Route {
    if is_greeting(input) {
        Route::Greeting
    } else if matched_term(input).is_none() {
        Route::OutOfDomain
    } else {
        Route::CareerQuery
    }
}

#[derive(Debug, Clone)]
pub struct Turn {
    pub route: Route,
    pub source: ReplySource,
    pub reply: ChatMessage,
}

pub struct CareerAssistant<M> {
    model: M,
}

impl<M: LanguageModel> CareerAssistant<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Runs one user message through the assistant. The user message is
    /// recorded before any reply is produced, and exactly one assistant
    /// message follows it, including when the model call fails.
    pub async fn respond(&self, session: &mut Session, input: &str) -> Turn {
        session.touch();
        session.transcript_mut().push(ChatMessage::user(input));

        let route = route(input);
        let (source, text) = self.reply_for(route, input).await;
        let reply = ChatMessage::assistant(text);
        session.transcript_mut().push(reply.clone());
        session.touch();

        info!(
            session_id = %session.id(),
            ?route,
            ?source,
            transcript_len = session.transcript().len(),
            "turn completed"
        );
        Turn {
            route,
            source,
            reply,
        }
    }

    async fn reply_for(&self, route: Route, input: &str) -> (ReplySource, String) {
        match route {
            Route::Greeting => (ReplySource::Greeting, GREETING_REPLY.to_string()),
            Route::OutOfDomain => (ReplySource::Refusal, REFUSAL_REPLY.to_string()),
            Route::CareerQuery => {
                debug!(term = ?matched_term(input), "delegating career query");
                let request = CompletionRequest {
                    system: SYSTEM_INSTRUCTION.to_string(),
                    user: input.to_string(),
                };
                match self.model.complete(&request).await {
                    Ok(text) => (ReplySource::Model, text),
                    Err(error) => {
                        warn!(%error, "language model call failed; using fallback reply");
                        (ReplySource::Fallback, FALLBACK_REPLY.to_string())
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
