use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Ai,
    Default,
}

impl Provenance {
    pub fn label(self) -> &'static str {
        match self {
            Provenance::Ai => "ai",
            Provenance::Default => "default",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResult {
    pub items: Vec<String>,
    pub source: Provenance,
}

const MEASURABILITY_KEYWORDS: &[&str] = &[
    "within", "per ", "sla", "tat", "quarter", "count", "monthly", "weekly", "daily",
];

const COMPARISON_MARKERS: &[char] = &['%', '<', '>', '≤', '≥'];

pub fn is_specific(text: &str) -> bool {
    if text.chars().any(|ch| ch.is_ascii_digit()) {
        return true;
    }
    if text.chars().any(|ch| COMPARISON_MARKERS.contains(&ch)) {
        return true;
    }
    let lower = text.to_lowercase();
    MEASURABILITY_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

pub fn is_on_topic(text: &str, tokens: &[String]) -> bool {
    let lower = text.to_lowercase();
    tokens.iter().any(|token| lower.contains(token.as_str()))
}

pub fn clean_candidate(raw: &str) -> String {
    let mut text = raw.trim();

    // Bullet and numbering prefixes from line-split provider output.
    text = text.trim_start_matches(&['-', '*', '•'][..]).trim_start();
    if let Some(stripped) = strip_number_prefix(text) {
        text = stripped;
    }

    let text = text.trim_matches(&['"', '\'', '“', '”'][..]);
    text.trim().to_string()
}

fn strip_number_prefix(text: &str) -> Option<&str> {
    let digits = text.chars().take_while(|ch| ch.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = &text[digits..];
    let rest = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')'))?;
    Some(rest.trim_start())
}

// Filters candidates down to on-topic, measurable items, then pads from the
// fallback list. Never fabricates content: the output is always a subset of
// candidates plus a prefix of the fallback list.
pub fn sanitize_suggestions(
    candidates: &[String],
    tokens: &[String],
    target: usize,
    fallback: &[String],
) -> Result<SuggestionResult, String> {
    if target == 0 {
        return Err("suggestion target count must be positive".to_string());
    }

    let mut items: Vec<String> = Vec::new();
    for raw in candidates {
        let cleaned = clean_candidate(raw);
        if cleaned.is_empty() {
            continue;
        }
        if !is_on_topic(&cleaned, tokens) || !is_specific(&cleaned) {
            continue;
        }
        if !items.contains(&cleaned) {
            items.push(cleaned);
        }
    }
    let survivors = items.len();

    if items.len() < target {
        for entry in fallback {
            if items.len() >= target {
                break;
            }
            if !items.contains(entry) {
                items.push(entry.clone());
            }
        }
    }
    items.truncate(target);

    let source = if survivors > 0 {
        Provenance::Ai
    } else {
        Provenance::Default
    };
    Ok(SuggestionResult { items, source })
}
