use serde_json::json;

use skive_archetype::archetype::{
    resolve_phrase, CompetencySelector, PhraseCatalog, SelectionConfig, StaticPhraseCatalog,
};
use skive_archetype::config::ScorePolicy;
use skive_archetype::normalize::{humanize_key, ratings_from_value};
use skive_archetype::{
    generate_archetype, generate_consolidated_archetype, NarrativeRole, Rating, SkiveCategory, Tier,
};

fn rating(category: SkiveCategory, subcategory: &str, score: f64) -> Rating {
    Rating::new(category, subcategory, score)
}

#[test]
fn tier_boundaries_are_exact() {
    assert_eq!(Tier::from_score(1.0), Tier::Low);
    assert_eq!(Tier::from_score(3.0), Tier::Low);
    assert_eq!(Tier::from_score(4.0), Tier::Medium);
    assert_eq!(Tier::from_score(7.0), Tier::Medium);
    assert_eq!(Tier::from_score(8.0), Tier::High);
    assert_eq!(Tier::from_score(10.0), Tier::High);
}

#[test]
fn tier_classification_is_idempotent() {
    for score in [1.0, 3.0, 3.5, 4.0, 7.0, 7.9, 8.0, 10.0] {
        assert_eq!(Tier::from_score(score), Tier::from_score(score));
    }
}

#[test]
fn signature_selection_keeps_input_order_on_ties() {
    let ratings = vec![
        rating(SkiveCategory::Skills, "first", 9.0),
        rating(SkiveCategory::Skills, "second", 9.0),
        rating(SkiveCategory::Skills, "third", 9.0),
    ];

    let selector = CompetencySelector::new(SelectionConfig::default());
    let signature = selector.signature(&ratings, 2);

    assert_eq!(signature.len(), 2);
    assert_eq!(signature[0].subcategory, "first");
    assert_eq!(signature[1].subcategory, "second");

    let again = selector.signature(&ratings, 2);
    assert_eq!(again[0].subcategory, "first");
    assert_eq!(again[1].subcategory, "second");
}

#[test]
fn supporting_and_foundational_never_intersect_signature() {
    let ratings = vec![
        rating(SkiveCategory::Skills, "alpha", 9.0),
        rating(SkiveCategory::Skills, "beta", 8.0),
        rating(SkiveCategory::Skills, "gamma", 8.0),
        rating(SkiveCategory::Skills, "delta", 6.0),
        rating(SkiveCategory::Skills, "epsilon", 5.0),
    ];

    let selector = CompetencySelector::new(SelectionConfig::default());
    let selection = selector.select(&ratings, 2);

    assert_eq!(selection.signature.len(), 2);
    for member in &selection.supporting {
        assert!(!selection
            .signature
            .iter()
            .any(|s| s.identity() == member.identity()));
    }
    for member in &selection.foundational {
        assert!(!selection
            .signature
            .iter()
            .any(|s| s.identity() == member.identity()));
        assert!(!selection
            .supporting
            .iter()
            .any(|s| s.identity() == member.identity()));
    }
    assert_eq!(selection.supporting.len(), 1);
    assert_eq!(selection.supporting[0].subcategory, "gamma");
}

#[test]
fn medium_signature_competency_is_excluded_from_foundational() {
    let ratings = vec![
        rating(SkiveCategory::Skills, "decisionMaking", 9.0),
        rating(SkiveCategory::Skills, "communication", 6.0),
        rating(SkiveCategory::Knowledge, "industry", 4.0),
    ];

    let selector = CompetencySelector::new(SelectionConfig::default());
    let selection = selector.select(&ratings, 2);

    assert_eq!(selection.signature[1].subcategory, "communication");
    assert_eq!(selection.foundational.len(), 1);
    assert_eq!(selection.foundational[0].subcategory, "industry");
}

#[test]
fn foundational_is_capped_in_input_order() {
    let ratings = vec![
        rating(SkiveCategory::Skills, "top", 9.0),
        rating(SkiveCategory::Skills, "m1", 4.0),
        rating(SkiveCategory::Skills, "m2", 7.0),
        rating(SkiveCategory::Skills, "m3", 5.0),
        rating(SkiveCategory::Skills, "m4", 6.0),
    ];

    let selector = CompetencySelector::new(SelectionConfig::default());
    let foundational = selector.foundational(&ratings, &[]);

    // First three medium-tier entries as seen, not the strongest three.
    assert_eq!(foundational.len(), 3);
    assert_eq!(foundational[0].subcategory, "m1");
    assert_eq!(foundational[1].subcategory, "m2");
    assert_eq!(foundational[2].subcategory, "m3");
}

#[test]
fn empty_input_yields_no_data_sentinel() {
    let catalog = StaticPhraseCatalog::new();
    let config = SelectionConfig::default();

    let scoped = generate_archetype(&[], Some(SkiveCategory::Skills), &catalog, &config);
    assert_eq!(scoped.narrative, "No skills data available");
    assert!(scoped.title.is_empty());
    assert!(scoped.signature.is_empty());
    assert!(scoped.supporting.is_empty());
    assert!(scoped.foundational.is_empty());

    let consolidated = generate_consolidated_archetype(&[], &catalog, &config);
    assert_eq!(consolidated.narrative, "No profile data available");
    assert!(consolidated.signature.is_empty());
}

#[test]
fn scoped_archetype_ignores_other_categories() {
    let ratings = vec![
        rating(SkiveCategory::Skills, "negotiation", 9.0),
        rating(SkiveCategory::Ethics, "integrity", 9.0),
    ];
    let catalog = StaticPhraseCatalog::new();
    let config = SelectionConfig::default();

    let result = generate_archetype(&ratings, Some(SkiveCategory::Ethics), &catalog, &config);
    assert_eq!(result.signature, vec!["integrity".to_string()]);
    assert!(!result.narrative.contains("negotiation"));

    let missing = generate_archetype(&ratings, Some(SkiveCategory::Values), &catalog, &config);
    assert_eq!(missing.narrative, "No values data available");
}

#[test]
fn unseeded_phrase_falls_back_to_subcategory_and_tier() {
    let catalog = StaticPhraseCatalog::new();
    let phrase = resolve_phrase(
        &catalog,
        SkiveCategory::Knowledge,
        "fusionReactorUpkeep",
        Tier::Medium,
        NarrativeRole::Foundational,
    );
    assert_eq!(phrase, "fusionReactorUpkeep (Medium)");
}

#[test]
fn mixed_tier_ratings_produce_expected_sets_title_and_narrative() {
    let document = json!({
        "skills": { "decisionMaking": 9, "communication": 6 },
        "knowledge": { "industry": 4 }
    });
    let ratings = ratings_from_value(&document, ScorePolicy::Clamp);
    assert_eq!(ratings.len(), 3);

    let catalog = StaticPhraseCatalog::new();
    let config = SelectionConfig::default();
    let result = generate_archetype(&ratings, None, &catalog, &config);

    assert_eq!(
        result.signature,
        vec!["decisionMaking".to_string(), "communication".to_string()]
    );
    assert_eq!(result.foundational, vec!["industry".to_string()]);
    assert!(result.supporting.is_empty());
    assert_eq!(result.title, "Decision Making Communication");
    assert!(result.narrative.contains("decisionMaking"));
    assert!(result.narrative.contains("communication"));
    assert!(result.narrative.contains("industry"));
    assert!(result.narrative.contains("Built upon a foundation of"));
    assert!(!result.narrative.contains("Supported by"));
}

#[test]
fn consolidated_signature_resolves_against_originating_category() {
    let mut catalog = StaticPhraseCatalog::new();
    catalog.insert(
        SkiveCategory::Ethics,
        "Integrity",
        Tier::High,
        NarrativeRole::Signature,
        "requiring unwavering integrity",
    );
    catalog.insert(
        SkiveCategory::Skills,
        "Integrity",
        Tier::High,
        NarrativeRole::Signature,
        "requiring flawless execution",
    );

    let ratings = vec![rating(SkiveCategory::Ethics, "integrity", 9.0)];
    let result =
        generate_consolidated_archetype(&ratings, &catalog, &SelectionConfig::default());
    assert!(result.narrative.contains("requiring unwavering integrity"));
    assert!(!result.narrative.contains("flawless execution"));
}

#[test]
fn seeded_catalog_provides_signature_and_foundational_phrases() {
    let catalog = StaticPhraseCatalog::seeded();
    assert!(!catalog.is_empty());

    // Raw JSON keys and display labels address the same row.
    assert!(catalog
        .lookup(
            SkiveCategory::Skills,
            "decisionMaking",
            Tier::High,
            NarrativeRole::Signature
        )
        .is_some());
    assert_eq!(
        catalog.lookup(
            SkiveCategory::Skills,
            "Decision Making",
            Tier::High,
            NarrativeRole::Signature
        ),
        catalog.lookup(
            SkiveCategory::Skills,
            "decisionMaking",
            Tier::High,
            NarrativeRole::Signature
        )
    );
    assert!(catalog
        .lookup(
            SkiveCategory::Knowledge,
            "Industry Knowledge",
            Tier::Medium,
            NarrativeRole::Foundational
        )
        .is_some());

    let ratings = vec![
        rating(SkiveCategory::Skills, "decisionMaking", 9.0),
        rating(SkiveCategory::Skills, "communication", 8.0),
        rating(SkiveCategory::Skills, "collaboration", 8.0),
        rating(SkiveCategory::Skills, "prioritization", 6.0),
    ];
    let result = generate_archetype(
        &ratings,
        Some(SkiveCategory::Skills),
        &catalog,
        &SelectionConfig::default(),
    );
    assert!(result.narrative.contains("masterful decision-making"));
    assert!(result.narrative.contains("Supported by"));
    assert!(result.narrative.contains("Built upon a foundation of"));
}

#[test]
fn catalog_keeps_one_phrase_per_key() {
    let mut catalog = StaticPhraseCatalog::new();
    catalog.insert(
        SkiveCategory::Skills,
        "Negotiation",
        Tier::High,
        NarrativeRole::Signature,
        "first phrase",
    );
    catalog.insert(
        SkiveCategory::Skills,
        "Negotiation",
        Tier::High,
        NarrativeRole::Signature,
        "second phrase",
    );

    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.lookup(
            SkiveCategory::Skills,
            "Negotiation",
            Tier::High,
            NarrativeRole::Signature
        ),
        Some("second phrase".to_string())
    );
}

#[test]
fn balanced_narrative_stands_in_when_all_sets_are_empty() {
    let ratings = vec![
        rating(SkiveCategory::Skills, "filing", 2.0),
        rating(SkiveCategory::Skills, "typing", 1.0),
    ];
    let config = SelectionConfig {
        signature_top_n: 0,
        consolidated_signature_top_n: 0,
        foundational_cap: 3,
    };
    let catalog = StaticPhraseCatalog::new();

    let result = generate_archetype(&ratings, Some(SkiveCategory::Skills), &catalog, &config);
    assert_eq!(
        result.narrative,
        "Professional competence in skills with balanced skill distribution."
    );
    assert!(result.title.is_empty());
}

#[test]
fn nested_normalization_handles_wrapped_and_grouped_leaves() {
    let document = json!({
        "skills": {
            "cognitive": { "analytical": 7, "synthesis": { "value": 6 } },
            "communication": { "value": 6, "description": "clear writer" },
            "broken": "not a number",
            "alsoBroken": { "value": "nine" }
        },
        "hobbies": { "chess": 9 }
    });

    let ratings = ratings_from_value(&document, ScorePolicy::Clamp);
    let subcategories: Vec<&str> = ratings
        .iter()
        .map(|rating| rating.subcategory.as_str())
        .collect();

    assert_eq!(subcategories, vec!["analytical", "synthesis", "communication"]);
    assert_eq!(ratings[2].description.as_deref(), Some("clear writer"));
    assert!(ratings.iter().all(|rating| rating.category == SkiveCategory::Skills));
}

#[test]
fn wide_normalization_humanizes_keys_and_skips_unknown_prefixes() {
    let document = json!({
        "skills_dataAnalysis": 8.0,
        "knowledge_industryKnowledge": 5,
        "identity_roleClarity": 3,
        "budget_total": 12000,
        "skills_note": "n/a"
    });

    let ratings = ratings_from_value(&document, ScorePolicy::Clamp);
    assert_eq!(ratings.len(), 3);
    assert_eq!(ratings[0].category, SkiveCategory::Skills);
    assert_eq!(ratings[0].subcategory, "Data Analysis");
    assert_eq!(ratings[1].subcategory, "Industry Knowledge");
    assert_eq!(ratings[2].subcategory, "Role Clarity");
    assert_eq!(ratings[2].tier(), Tier::Low);
}

#[test]
fn clamp_policy_bounds_scores_and_reject_policy_drops_them() {
    let document = json!({
        "skills": { "overachiever": 12, "underachiever": 0.5, "normal": 5 }
    });

    let clamped = ratings_from_value(&document, ScorePolicy::Clamp);
    assert_eq!(clamped.len(), 3);
    assert_eq!(clamped[0].score, 10.0);
    assert_eq!(clamped[1].score, 1.0);

    let rejected = ratings_from_value(&document, ScorePolicy::Reject);
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].subcategory, "normal");
}

#[test]
fn humanize_key_splits_camel_case_and_underscores() {
    assert_eq!(humanize_key("dataAnalysis"), "Data Analysis");
    assert_eq!(humanize_key("stakeholder_management"), "Stakeholder Management");
    assert_eq!(humanize_key("Decision Making"), "Decision Making");
    assert_eq!(humanize_key("industry"), "Industry");
}

#[test]
fn archetype_generation_is_deterministic() {
    let ratings = vec![
        rating(SkiveCategory::Skills, "a", 9.0),
        rating(SkiveCategory::Skills, "b", 9.0),
        rating(SkiveCategory::Knowledge, "c", 5.0),
    ];
    let catalog = StaticPhraseCatalog::seeded();
    let config = SelectionConfig::default();

    let first = generate_consolidated_archetype(&ratings, &catalog, &config);
    let second = generate_consolidated_archetype(&ratings, &catalog, &config);

    assert_eq!(first.title, second.title);
    assert_eq!(first.narrative, second.narrative);
    assert_eq!(first.signature, second.signature);
    assert_eq!(first.supporting, second.supporting);
    assert_eq!(first.foundational, second.foundational);
}
