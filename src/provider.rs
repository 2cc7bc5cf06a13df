use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use skive_archetype::config::ProviderConfig;
use skive_archetype::suggest::{extract_items, RoleContext, SuggestionKind};

#[derive(Clone)]
pub struct SuggestionClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
    max_retries: usize,
}

impl SuggestionClient {
    pub fn from_env(config: &ProviderConfig, model_override: Option<String>) -> Option<Self> {
        let api_key = env::var("SUGGEST_API_KEY").ok()?;
        let api_base = env::var("SUGGEST_API_BASE").unwrap_or_else(|_| config.endpoint.clone());
        let model = model_override
            .or_else(|| env::var("SUGGEST_MODEL").ok())
            .unwrap_or_else(|| "gpt-4o-mini".to_string());
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .ok()?;
        Some(Self {
            client,
            api_key,
            api_base,
            model,
            max_retries: config.max_retries,
        })
    }

    // One bounded retry, then the caller falls back to the deterministic
    // list. Unparseable content is zero candidates, not an error.
    pub async fn fetch_candidates(
        &self,
        kind: SuggestionKind,
        context: &RoleContext,
    ) -> Result<Vec<String>, String> {
        let mut last_error = String::new();
        for attempt in 0..=self.max_retries {
            match self.request_once(kind, context).await {
                Ok(items) => return Ok(items),
                Err(err) => {
                    tracing::warn!(attempt, error = %err, "suggestion provider call failed");
                    last_error = err;
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(300)).await;
                    }
                }
            }
        }
        Err(last_error)
    }

    async fn request_once(
        &self,
        kind: SuggestionKind,
        context: &RoleContext,
    ) -> Result<Vec<String>, String> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        let request = ChatRequest {
            model: self.model.clone(),
            temperature: 0.2,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt(kind, context),
                },
            ],
        };

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|err| format!("provider request failed: {}", err))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| String::new());
            let detail = error_body.trim();
            if detail.is_empty() {
                return Err(format!("provider error: {}", status));
            }
            return Err(format!("provider error: {} {}", status, detail));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|err| format!("provider response parse failed: {}", err))?;

        let content = body
            .choices
            .first()
            .ok_or_else(|| "provider response missing choices".to_string())?
            .message
            .content
            .trim()
            .to_string();

        Ok(extract_items(&content))
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    content: String,
}

fn system_prompt() -> String {
    let prompt = r#"You are a strict JSON-only generator of workplace suggestions.
Return a single JSON object of the form {"items": ["..."]}.
Rules:
- Output JSON only, no markdown or commentary.
- Each item must be specific and measurable (a number, %, SLA, or timeframe).
"#;
    prompt.to_string()
}

fn user_prompt(kind: SuggestionKind, context: &RoleContext) -> String {
    let instruction = match kind {
        SuggestionKind::DayToDay => {
            "Generate 8 day-to-day tasks for the role below, each with a concrete target."
        }
        SuggestionKind::Kras => {
            "Generate 8 SMART KRAs for the role below. Each KRA must include a measurable target and timeframe."
        }
    };
    format!(
        "{}\nProfession: {}\nDepartment: {}\nRole: {}",
        instruction, context.profession, context.department, context.role
    )
}
