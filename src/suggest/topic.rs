use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleContext {
    pub profession: String,
    pub department: String,
    pub role: String,
}

impl RoleContext {
    pub fn new(
        profession: impl Into<String>,
        department: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            profession: profession.into(),
            department: department.into(),
            role: role.into(),
        }
    }

    pub fn tokens(&self) -> Vec<String> {
        topical_tokens(&[&self.profession, &self.department, &self.role])
    }
}

// Token stems on the left; extra substrings that count as on-topic on the
// right. Stems match as substrings, so "claim" covers "claims".
const DOMAIN_SYNONYMS: &[(&str, &[&str])] = &[
    ("claim", &["adjudicat", "settlement", "reserving"]),
    ("underwrit", &["premium", "broker", "risk appetite"]),
    ("actuar", &["pricing", "loss ratio"]),
    ("sales", &["pipeline", "conversion", "win-rate"]),
    ("fraud", &["investigation", "anomaly"]),
    ("compliance", &["regulatory", "audit"]),
];

const STOP_WORDS: &[&str] = &["and", "or", "the", "of", "for", "in"];

pub fn topical_tokens(parts: &[&str]) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();

    for part in parts {
        let lower = part.trim().to_lowercase();
        if lower.is_empty() {
            continue;
        }
        push_token(&mut tokens, lower.clone());
        for word in lower.split_whitespace() {
            if word.len() >= 3 && !STOP_WORDS.contains(&word) {
                push_token(&mut tokens, word.to_string());
            }
        }
    }

    for (stem, synonyms) in DOMAIN_SYNONYMS {
        if tokens.iter().any(|token| token.contains(stem)) {
            // The stem itself becomes matchable, so "claims" context also
            // covers the singular "claim".
            push_token(&mut tokens, stem.to_string());
            for synonym in *synonyms {
                push_token(&mut tokens, synonym.to_string());
            }
        }
    }

    tokens
}

fn push_token(tokens: &mut Vec<String>, token: String) {
    if !tokens.contains(&token) {
        tokens.push(token);
    }
}
