use std::{collections::HashMap, fs, path::Path, time::Duration};

use anyhow::bail;
use llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const CONFIG_FILE: &str = "careerai.toml";
pub const SECRETS_FILE: &str = "secrets.toml";

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_bind: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub max_body_bytes: usize,
    pub session_idle_ttl_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8501".into(),
            openai_api_key: None,
            openai_model: DEFAULT_MODEL.into(),
            openai_base_url: DEFAULT_BASE_URL.into(),
            max_body_bytes: 16 * 1024,
            session_idle_ttl_secs: 30 * 60,
        }
    }
}

impl Settings {
    pub fn session_idle_ttl(&self) -> Duration {
        Duration::from_secs(self.session_idle_ttl_secs)
    }

    /// The model credential. Startup cannot continue without it.
    pub fn api_key(&self) -> anyhow::Result<&str> {
        match self.openai_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => bail!(
                "OPENAI_API_KEY is not configured; set it in {SECRETS_FILE} or the environment"
            ),
        }
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(CONFIG_FILE), Path::new(SECRETS_FILE), |key| {
        std::env::var(key).ok()
    })
}

/// Layers defaults, the config file, the secret store and then the
/// environment; later layers win. Unreadable or malformed files are skipped.
pub fn load_settings_from(
    config_path: &Path,
    secrets_path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(file_cfg) = read_flat_table(config_path) {
        if let Some(v) = file_cfg.get("bind_addr") {
            settings.server_bind = v.clone();
        }
        if let Some(v) = file_cfg.get("openai_model") {
            settings.openai_model = v.clone();
        }
        if let Some(v) = file_cfg.get("openai_base_url") {
            settings.openai_base_url = v.clone();
        }
        if let Some(v) = file_cfg.get("max_body_bytes") {
            if let Ok(parsed) = v.parse::<usize>() {
                settings.max_body_bytes = parsed;
            }
        }
        if let Some(v) = file_cfg.get("session_idle_ttl_secs") {
            if let Ok(parsed) = v.parse::<u64>() {
                settings.session_idle_ttl_secs = parsed;
            }
        }
    }

    if let Some(secrets) = read_flat_table(secrets_path) {
        if let Some(v) = secrets.get("OPENAI_API_KEY") {
            settings.openai_api_key = Some(v.clone());
        }
    }

    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("OPENAI_API_KEY") {
        settings.openai_api_key = Some(v);
    }
    if let Some(v) = env("APP__OPENAI_API_KEY") {
        settings.openai_api_key = Some(v);
    }

    if let Some(v) = env("OPENAI_MODEL") {
        settings.openai_model = v;
    }
    if let Some(v) = env("OPENAI_BASE_URL") {
        settings.openai_base_url = v;
    }

    if let Some(v) = env("APP__MAX_BODY_BYTES") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.max_body_bytes = parsed;
        }
    }
    if let Some(v) = env("APP__SESSION_IDLE_TTL_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.session_idle_ttl_secs = parsed;
        }
    }

    settings
}

fn read_flat_table(path: &Path) -> Option<HashMap<String, String>> {
    let raw = fs::read_to_string(path).ok()?;
    let table = toml::from_str::<HashMap<String, toml::Value>>(&raw).ok()?;
    Some(
        table
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    toml::Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect(),
    )
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
