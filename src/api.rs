use serde::{Deserialize, Serialize};
use serde_json::Value;

use skive_archetype::suggest::{RoleContext, SuggestionKind};
use skive_archetype::{ArchetypeResult, SkiveCategory};

#[derive(Debug, Deserialize)]
pub struct ApiArchetypeRequest {
    pub ratings: Value,
    pub category: Option<String>,
}

impl ApiArchetypeRequest {
    pub fn scope(&self) -> Result<Option<SkiveCategory>, String> {
        match self.category.as_deref() {
            Some(value) => SkiveCategory::from_str(value)
                .map(Some)
                .ok_or_else(|| format!("invalid SKIVE category: {}", value)),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryArchetype {
    pub category: String,
    pub average: f64,
    pub archetype: ArchetypeResult,
}

#[derive(Debug, Serialize)]
pub struct ApiArchetypeResponse {
    pub rating_count: usize,
    pub categories: Vec<CategoryArchetype>,
    pub consolidated: ArchetypeResult,
}

#[derive(Debug, Deserialize)]
pub struct ApiSuggestionRequest {
    pub kind: Option<String>,
    pub profession: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    pub use_ai: Option<bool>,
    pub target: Option<usize>,
    pub request_id: Option<String>,
}

impl ApiSuggestionRequest {
    pub fn kind(&self) -> Result<SuggestionKind, String> {
        match self.kind.as_deref() {
            Some(value) => SuggestionKind::from_str(value)
                .ok_or_else(|| format!("invalid suggestion kind: {}", value)),
            None => Ok(SuggestionKind::DayToDay),
        }
    }

    pub fn context(&self) -> RoleContext {
        RoleContext::new(
            self.profession.clone().unwrap_or_default(),
            self.department.clone().unwrap_or_default(),
            self.role.clone().unwrap_or_default(),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ApiSuggestionResponse {
    pub request_id: String,
    pub items: Vec<String>,
    pub source: String,
    pub warnings: Vec<String>,
}
