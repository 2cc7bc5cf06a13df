pub mod archetype;
pub mod config;
pub mod normalize;
pub mod suggest;

use serde::{Deserialize, Serialize};

use crate::archetype::{ArchetypeScope, CompetencySelector, NarrativeComposer, PhraseCatalog, SelectionConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkiveCategory {
    Skills,
    Knowledge,
    Identity,
    Values,
    Ethics,
}

impl SkiveCategory {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "skills" | "skill" => Some(SkiveCategory::Skills),
            "knowledge" => Some(SkiveCategory::Knowledge),
            "identity" => Some(SkiveCategory::Identity),
            "values" => Some(SkiveCategory::Values),
            "ethics" => Some(SkiveCategory::Ethics),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkiveCategory::Skills => "skills",
            SkiveCategory::Knowledge => "knowledge",
            SkiveCategory::Identity => "identity",
            SkiveCategory::Values => "values",
            SkiveCategory::Ethics => "ethics",
        }
    }

    pub fn all() -> [SkiveCategory; 5] {
        [
            SkiveCategory::Skills,
            SkiveCategory::Knowledge,
            SkiveCategory::Identity,
            SkiveCategory::Values,
            SkiveCategory::Ethics,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Tier::High
        } else if score >= 4.0 {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Low => "Low",
            Tier::Medium => "Medium",
            Tier::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeRole {
    Signature,
    Supporting,
    Foundational,
}

impl NarrativeRole {
    pub fn label(self) -> &'static str {
        match self {
            NarrativeRole::Signature => "signature",
            NarrativeRole::Supporting => "supporting",
            NarrativeRole::Foundational => "foundational",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub category: SkiveCategory,
    pub subcategory: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Rating {
    pub fn new(category: SkiveCategory, subcategory: impl Into<String>, score: f64) -> Self {
        Self {
            category,
            subcategory: subcategory.into(),
            score,
            description: None,
        }
    }

    pub fn tier(&self) -> Tier {
        Tier::from_score(self.score)
    }

    pub fn identity(&self) -> (SkiveCategory, &str) {
        (self.category, self.subcategory.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeResult {
    pub title: String,
    pub narrative: String,
    pub signature: Vec<String>,
    pub supporting: Vec<String>,
    pub foundational: Vec<String>,
}

pub fn generate_archetype(
    ratings: &[Rating],
    scope: Option<SkiveCategory>,
    catalog: &dyn PhraseCatalog,
    config: &SelectionConfig,
) -> ArchetypeResult {
    let archetype_scope = match scope {
        Some(category) => ArchetypeScope::Category(category),
        None => ArchetypeScope::Consolidated,
    };

    let scoped: Vec<Rating> = match scope {
        Some(category) => ratings
            .iter()
            .filter(|rating| rating.category == category)
            .cloned()
            .collect(),
        None => ratings.to_vec(),
    };

    if scoped.is_empty() {
        return NarrativeComposer::no_data(archetype_scope);
    }

    let selector = CompetencySelector::new(config.clone());
    let selection = selector.select(&scoped, config.signature_top_n);
    NarrativeComposer::new(catalog).compose(&selection, archetype_scope)
}

pub fn generate_consolidated_archetype(
    ratings: &[Rating],
    catalog: &dyn PhraseCatalog,
    config: &SelectionConfig,
) -> ArchetypeResult {
    if ratings.is_empty() {
        return NarrativeComposer::no_data(ArchetypeScope::Consolidated);
    }

    let selector = CompetencySelector::new(config.clone());
    let selection = selector.select(ratings, config.consolidated_signature_top_n);
    NarrativeComposer::new(catalog).compose(&selection, ArchetypeScope::Consolidated)
}
