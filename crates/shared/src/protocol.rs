use serde::{Deserialize, Serialize};

use crate::domain::{ChatMessage, ReplySource, SessionId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreated {
    pub session_id: SessionId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitMessageRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitMessageResponse {
    pub source: ReplySource,
    pub reply: ChatMessage,
    pub transcript_len: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub session_id: SessionId,
    pub messages: Vec<ChatMessage>,
}
