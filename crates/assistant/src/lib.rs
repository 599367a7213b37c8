//! Career-topic gate and per-session conversation control.

pub mod classifier;
pub mod controller;
pub mod session;
pub mod vocabulary;

pub use classifier::{is_career_related, matched_term};
pub use controller::{
    is_greeting, route, CareerAssistant, Route, Turn, FALLBACK_REPLY, GREETINGS, GREETING_REPLY,
    REFUSAL_REPLY, SYSTEM_INSTRUCTION,
};
pub use session::{Session, Transcript};
