use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::archetype::SelectionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorePolicy {
    Clamp,
    Reject,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        ScorePolicy::Clamp
    }
}

impl ScorePolicy {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "clamp" => Some(ScorePolicy::Clamp),
            "reject" => Some(ScorePolicy::Reject),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoresConfig {
    pub policy: ScorePolicy,
}

impl Default for ScoresConfig {
    fn default() -> Self {
        Self {
            policy: ScorePolicy::Clamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    pub target_count: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self { target_count: 8 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
    pub max_retries: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1".to_string(),
            timeout_ms: 5000,
            max_retries: 1,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub selection: SelectionConfig,
    pub scores: ScoresConfig,
    pub suggestions: SuggestionsConfig,
    pub provider: ProviderConfig,
}

impl EngineConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                EngineConfig::default()
            }
        } else {
            EngineConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(policy) = env::var("SCORE_POLICY") {
            if let Some(value) = ScorePolicy::from_str(&policy) {
                self.scores.policy = value;
            }
        }
        if let Ok(target) = env::var("SUGGEST_TARGET") {
            if let Ok(value) = target.parse::<usize>() {
                self.suggestions.target_count = value;
            }
        }
        if let Ok(endpoint) = env::var("SUGGEST_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                self.provider.endpoint = endpoint;
            }
        }
        if let Ok(timeout) = env::var("SUGGEST_TIMEOUT_MS") {
            if let Ok(value) = timeout.parse::<u64>() {
                self.provider.timeout_ms = value;
            }
        }
        if let Ok(retries) = env::var("SUGGEST_MAX_RETRIES") {
            if let Ok(value) = retries.parse::<usize>() {
                self.provider.max_retries = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("ARCHETYPE_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/engine.toml")))
}
