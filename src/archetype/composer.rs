use crate::archetype::catalog::{resolve_phrase, PhraseCatalog};
use crate::archetype::selection::Selection;
use crate::normalize::humanize_key;
use crate::{ArchetypeResult, NarrativeRole, Rating, SkiveCategory, Tier};

#[derive(Debug, Clone, Copy)]
pub enum ArchetypeScope {
    Category(SkiveCategory),
    Consolidated,
}

impl ArchetypeScope {
    fn no_data_narrative(self) -> String {
        match self {
            ArchetypeScope::Category(category) => {
                format!("No {} data available", category.label())
            }
            ArchetypeScope::Consolidated => "No profile data available".to_string(),
        }
    }

    fn balanced_narrative(self) -> String {
        match self {
            ArchetypeScope::Category(category) => format!(
                "Professional competence in {} with balanced skill distribution.",
                category.label()
            ),
            ArchetypeScope::Consolidated => {
                "Balanced professional competence across all SKIVE dimensions.".to_string()
            }
        }
    }
}

pub struct NarrativeComposer<'a> {
    catalog: &'a dyn PhraseCatalog,
}

impl<'a> NarrativeComposer<'a> {
    pub fn new(catalog: &'a dyn PhraseCatalog) -> Self {
        Self { catalog }
    }

    pub fn no_data(scope: ArchetypeScope) -> ArchetypeResult {
        ArchetypeResult {
            title: String::new(),
            narrative: scope.no_data_narrative(),
            signature: Vec::new(),
            supporting: Vec::new(),
            foundational: Vec::new(),
        }
    }

    pub fn compose(&self, selection: &Selection, scope: ArchetypeScope) -> ArchetypeResult {
        let mut parts: Vec<String> = Vec::new();

        // Signature phrases resolve against each rating's own category and
        // tier; supporting is always looked up at high, foundational at medium.
        let signature_phrases: Vec<String> = selection
            .signature
            .iter()
            .map(|rating| {
                resolve_phrase(
                    self.catalog,
                    rating.category,
                    &rating.subcategory,
                    rating.tier(),
                    NarrativeRole::Signature,
                )
            })
            .collect();
        if !signature_phrases.is_empty() {
            parts.push(format!(
                "This role is defined by mastery of {}.",
                signature_phrases.join(", ")
            ));
        }

        let supporting_phrases: Vec<String> = selection
            .supporting
            .iter()
            .map(|rating| {
                resolve_phrase(
                    self.catalog,
                    rating.category,
                    &rating.subcategory,
                    Tier::High,
                    NarrativeRole::Supporting,
                )
            })
            .collect();
        if !supporting_phrases.is_empty() {
            parts.push(format!("Supported by {}.", supporting_phrases.join(", ")));
        }

        let foundational_phrases: Vec<String> = selection
            .foundational
            .iter()
            .map(|rating| {
                resolve_phrase(
                    self.catalog,
                    rating.category,
                    &rating.subcategory,
                    Tier::Medium,
                    NarrativeRole::Foundational,
                )
            })
            .collect();
        if !foundational_phrases.is_empty() {
            parts.push(format!(
                "Built upon a foundation of {}.",
                foundational_phrases.join(", ")
            ));
        }

        let narrative = if parts.is_empty() {
            scope.balanced_narrative()
        } else {
            parts.join(" ")
        };

        ArchetypeResult {
            title: derive_title(&selection.signature),
            narrative,
            signature: subcategories(&selection.signature),
            supporting: subcategories(&selection.supporting),
            foundational: subcategories(&selection.foundational),
        }
    }
}

fn derive_title(signature: &[Rating]) -> String {
    signature
        .iter()
        .map(|rating| humanize_key(&rating.subcategory))
        .collect::<Vec<_>>()
        .join(" ")
}

fn subcategories(ratings: &[Rating]) -> Vec<String> {
    ratings.iter().map(|rating| rating.subcategory.clone()).collect()
}
