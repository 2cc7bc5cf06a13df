use serde_json::{Map, Value};

use crate::config::ScorePolicy;
use crate::{Rating, SkiveCategory};

const MIN_SCORE: f64 = 1.0;
const MAX_SCORE: f64 = 10.0;

// Leaves inside a nested ratings document. Anything that does not match one
// of these shapes is skipped, never a hard failure.
enum Leaf<'a> {
    Numeric(f64),
    Wrapped {
        score: f64,
        description: Option<&'a str>,
    },
    Nested(&'a Map<String, Value>),
    Skip,
}

fn classify_leaf(value: &Value) -> Leaf<'_> {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(score) => Leaf::Numeric(score),
            None => Leaf::Skip,
        },
        Value::Object(map) => {
            let probed = map.get("value").or_else(|| map.get("score"));
            if let Some(score) = probed.and_then(Value::as_f64) {
                return Leaf::Wrapped {
                    score,
                    description: map.get("description").and_then(Value::as_str),
                };
            }
            Leaf::Nested(map)
        }
        _ => Leaf::Skip,
    }
}

pub fn ratings_from_value(doc: &Value, policy: ScorePolicy) -> Vec<Rating> {
    let Some(map) = doc.as_object() else {
        return Vec::new();
    };
    let nested = map
        .iter()
        .any(|(key, value)| SkiveCategory::from_str(key).is_some() && value.is_object());
    if nested {
        ratings_from_nested(doc, policy)
    } else {
        ratings_from_wide(doc, policy)
    }
}

pub fn ratings_from_nested(doc: &Value, policy: ScorePolicy) -> Vec<Rating> {
    let mut ratings = Vec::new();
    let Some(map) = doc.as_object() else {
        return ratings;
    };

    for (key, value) in map {
        let Some(category) = SkiveCategory::from_str(key) else {
            tracing::debug!(key = key.as_str(), "skipping unknown rating category");
            continue;
        };
        let Some(subs) = value.as_object() else {
            continue;
        };
        for (subcategory, leaf) in subs {
            match classify_leaf(leaf) {
                Leaf::Numeric(score) => {
                    push_rating(&mut ratings, category, subcategory, score, None, policy);
                }
                Leaf::Wrapped { score, description } => {
                    push_rating(&mut ratings, category, subcategory, score, description, policy);
                }
                Leaf::Nested(inner) => {
                    // One level of recursion: subgroup maps like
                    // skills.cognitive.analytical.
                    for (inner_key, inner_value) in inner {
                        match classify_leaf(inner_value) {
                            Leaf::Numeric(score) => {
                                push_rating(&mut ratings, category, inner_key, score, None, policy);
                            }
                            Leaf::Wrapped { score, description } => {
                                push_rating(
                                    &mut ratings,
                                    category,
                                    inner_key,
                                    score,
                                    description,
                                    policy,
                                );
                            }
                            _ => {}
                        }
                    }
                }
                Leaf::Skip => {}
            }
        }
    }

    ratings
}

pub fn ratings_from_wide(doc: &Value, policy: ScorePolicy) -> Vec<Rating> {
    let mut ratings = Vec::new();
    let Some(map) = doc.as_object() else {
        return ratings;
    };

    for (key, value) in map {
        let Some(score) = value.as_f64() else {
            continue;
        };
        let mut parts = key.splitn(2, '_');
        let Some(category) = parts.next().and_then(SkiveCategory::from_str) else {
            continue;
        };
        let Some(rest) = parts.next().filter(|rest| !rest.is_empty()) else {
            continue;
        };
        let subcategory = humanize_key(rest);
        push_rating(&mut ratings, category, &subcategory, score, None, policy);
    }

    ratings
}

fn push_rating(
    ratings: &mut Vec<Rating>,
    category: SkiveCategory,
    subcategory: &str,
    score: f64,
    description: Option<&str>,
    policy: ScorePolicy,
) {
    if score.is_nan() {
        return;
    }
    let score = match policy {
        ScorePolicy::Clamp => score.max(MIN_SCORE).min(MAX_SCORE),
        ScorePolicy::Reject => {
            if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                tracing::debug!(
                    category = category.label(),
                    subcategory,
                    score,
                    "rejecting out-of-range score"
                );
                return;
            }
            score
        }
    };
    ratings.push(Rating {
        category,
        subcategory: subcategory.to_string(),
        score,
        description: description.map(|text| text.to_string()),
    });
}

// "dataAnalysis" / "stakeholder_management" -> "Data Analysis" /
// "Stakeholder Management".
pub fn humanize_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(current.clone());
                current.clear();
            }
        } else if ch.is_uppercase() && !current.is_empty() {
            words.push(current.clone());
            current.clear();
            current.push(ch);
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| title_case(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
