use std::{collections::HashMap, sync::Arc, time::Duration};

use assistant::{CareerAssistant, Session};
use llm::LanguageModel;
use shared::domain::SessionId;
use tokio::sync::{Mutex, RwLock};

pub(crate) type SharedModel = Arc<dyn LanguageModel>;

/// Process-wide server state. Each session sits behind its own mutex so a
/// turn runs to completion before the next submission to that session is
/// processed, while other sessions are unaffected.
pub(crate) struct AppState {
    pub(crate) assistant: CareerAssistant<SharedModel>,
    pub(crate) sessions: RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>,
    pub(crate) idle_ttl: Duration,
}

impl AppState {
    pub(crate) fn new(model: SharedModel, idle_ttl: Duration) -> Self {
        Self {
            assistant: CareerAssistant::new(model),
            sessions: RwLock::new(HashMap::new()),
            idle_ttl,
        }
    }
}
