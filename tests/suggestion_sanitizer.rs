use skive_archetype::suggest::{
    default_suggestions, extract_items, sanitize_suggestions, topical_tokens, Provenance,
    RoleContext, SuggestionKind,
};
use skive_archetype::suggest::sanitize::{clean_candidate, is_on_topic, is_specific};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn claims_kras_keep_only_measurable_on_topic_candidates() {
    let candidates = strings(&[
        "Improve stuff",
        "Reduce defect rate to < 2% for claims by Q4",
        "Talk to people",
    ]);
    let tokens = strings(&["claim", "claims"]);
    let fallback = strings(&[
        "Process ≥ 95% of claims within SLA",
        "Reduce claim reopens to < 1.5% by quarter end",
        "Publish monthly KPI review with 3 corrective actions",
    ]);

    let result = sanitize_suggestions(&candidates, &tokens, 3, &fallback).unwrap();

    assert_eq!(result.items.len(), 3);
    assert_eq!(result.items[0], "Reduce defect rate to < 2% for claims by Q4");
    assert_eq!(result.items[1], fallback[0]);
    assert_eq!(result.items[2], fallback[1]);
    assert_eq!(result.source, Provenance::Ai);
}

#[test]
fn fully_rejected_input_pads_to_target_with_default_provenance() {
    let candidates = strings(&["Do better", "Work harder", "Synergize"]);
    let tokens = strings(&["claims"]);
    let fallback = strings(&["f1 within SLA", "f2 per day", "f3 by Q2", "f4 at 99%", "f5 < 2%"]);

    let result = sanitize_suggestions(&candidates, &tokens, 5, &fallback).unwrap();

    assert_eq!(result.items.len(), 5);
    assert_eq!(result.items, fallback);
    assert_eq!(result.source, Provenance::Default);
}

#[test]
fn empty_candidates_still_return_exactly_target_items() {
    let tokens = strings(&["claims"]);
    let fallback = strings(&["a", "b", "c", "d"]);

    let result = sanitize_suggestions(&[], &tokens, 3, &fallback).unwrap();
    assert_eq!(result.items, strings(&["a", "b", "c"]));
    assert_eq!(result.source, Provenance::Default);
}

#[test]
fn zero_target_is_a_contract_error() {
    let result = sanitize_suggestions(&[], &[], 0, &[]);
    assert!(result.is_err());
}

#[test]
fn padding_skips_duplicates_already_present() {
    let candidates = strings(&["Process 10 claims per day"]);
    let tokens = strings(&["claim"]);
    let fallback = strings(&["Process 10 claims per day", "Close 5 files per week", "Audit 3 cases per month"]);

    let result = sanitize_suggestions(&candidates, &tokens, 3, &fallback).unwrap();

    assert_eq!(
        result.items,
        strings(&[
            "Process 10 claims per day",
            "Close 5 files per week",
            "Audit 3 cases per month",
        ])
    );
    assert_eq!(result.source, Provenance::Ai);
}

#[test]
fn surviving_candidates_are_truncated_to_target() {
    let candidates = strings(&[
        "Settle 5 claims per day",
        "Review 10 claims per week",
        "Escalate 2 claims per month",
    ]);
    let tokens = strings(&["claim"]);

    let result = sanitize_suggestions(&candidates, &tokens, 2, &[]).unwrap();
    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0], "Settle 5 claims per day");
    assert_eq!(result.source, Provenance::Ai);
}

#[test]
fn candidates_are_trimmed_and_unquoted_before_checks() {
    let candidates = strings(&["  \"Resolve 20 claims per week\"  ", "- 1. Audit 4 claim files daily"]);
    let tokens = strings(&["claim"]);

    let result = sanitize_suggestions(&candidates, &tokens, 2, &[]).unwrap();
    assert_eq!(result.items[0], "Resolve 20 claims per week");
    assert_eq!(result.items[1], "Audit 4 claim files daily");
}

#[test]
fn specificity_heuristics_cover_digits_markers_and_keywords() {
    assert!(is_specific("Reduce backlog by 15"));
    assert!(is_specific("Keep error rate < target"));
    assert!(is_specific("Maintain ≥ 99.5% accuracy"));
    assert!(is_specific("Respond to queries within SLA"));
    assert!(is_specific("Ship one improvement per quarter"));
    assert!(!is_specific("Talk to people"));
    assert!(!is_specific("Improve collaboration"));
}

#[test]
fn on_topic_match_is_case_insensitive_substring() {
    let tokens = strings(&["claims"]);
    assert!(is_on_topic("Expedite CLAIMS intake", &tokens));
    assert!(!is_on_topic("Expedite intake", &tokens));
}

#[test]
fn clean_candidate_strips_bullets_numbering_and_quotes() {
    assert_eq!(clean_candidate("- item one"), "item one");
    assert_eq!(clean_candidate("* item two"), "item two");
    assert_eq!(clean_candidate("3. item three"), "item three");
    assert_eq!(clean_candidate("2) item four"), "item four");
    assert_eq!(clean_candidate("\"quoted\""), "quoted");
    assert_eq!(clean_candidate("   "), "");
}

#[test]
fn topical_tokens_expand_domain_synonyms() {
    let tokens = topical_tokens(&["Insurance", "Claims Operations", "Senior Claims Adjuster"]);

    assert!(tokens.contains(&"insurance".to_string()));
    assert!(tokens.contains(&"claims".to_string()));
    assert!(tokens.contains(&"adjudicat".to_string()));
    assert!(tokens.contains(&"settlement".to_string()));
    // Whole phrases survive alongside their words.
    assert!(tokens.contains(&"claims operations".to_string()));
}

#[test]
fn role_context_tokens_skip_blank_parts() {
    let context = RoleContext::new("", "Claims", "");
    let tokens = context.tokens();
    assert_eq!(
        tokens,
        strings(&["claims", "claim", "adjudicat", "settlement", "reserving"])
    );
}

#[test]
fn extract_items_reads_object_array_and_fenced_payloads() {
    assert_eq!(
        extract_items(r#"{"items": ["a", "b"]}"#),
        strings(&["a", "b"])
    );
    assert_eq!(
        extract_items(r#"{"suggestions": ["x"]}"#),
        strings(&["x"])
    );
    assert_eq!(extract_items(r#"["one", "two"]"#), strings(&["one", "two"]));
    assert_eq!(
        extract_items("```json\n{\"items\": [\"fenced\"]}\n```"),
        strings(&["fenced"])
    );
}

#[test]
fn extract_items_finds_json_embedded_in_prose() {
    let text = r#"Sure! Here you go: {"items": ["alpha", "beta"]} hope that helps"#;
    assert_eq!(extract_items(text), strings(&["alpha", "beta"]));
}

#[test]
fn extract_items_line_splits_free_text() {
    let text = "- first thing\n- second thing\n\n3. third thing";
    assert_eq!(
        extract_items(text),
        strings(&["first thing", "second thing", "third thing"])
    );
}

#[test]
fn extract_items_returns_empty_for_blank_input() {
    assert!(extract_items("").is_empty());
    assert!(extract_items("   \n  ").is_empty());
}

#[test]
fn default_kras_switch_to_underwriting_playbook() {
    let context = RoleContext::new("Insurance", "Commercial Lines", "Senior Underwriter");
    let kras = default_suggestions(SuggestionKind::Kras, &context);

    assert_eq!(kras.len(), 8);
    assert_eq!(kras[0], "Maintain portfolio loss ratio ≤ 65% for the fiscal year");
    assert!(kras.iter().all(|item| is_specific(item)));
}

#[test]
fn default_day_to_day_adjusts_for_claims_department() {
    let context = RoleContext::new("Insurance", "Claims", "Claims Examiner");
    let items = default_suggestions(SuggestionKind::DayToDay, &context);

    assert_eq!(items.len(), 8);
    assert!(items
        .contains(&"Perform QA on 5 claim files; ensure documentation completeness".to_string()));
}

#[test]
fn provider_payload_flows_through_extraction_and_sanitation() {
    let payload = r#"```json
{"items": ["Adjudicate 12 claims per day", "Be nicer", "\"Keep claim TAT under 48 hours\""]}
```"#;
    let candidates = extract_items(payload);
    assert_eq!(candidates.len(), 3);

    let context = RoleContext::new("Insurance", "Claims", "Adjuster");
    let tokens = context.tokens();
    let fallback = default_suggestions(SuggestionKind::Kras, &context);

    let result = sanitize_suggestions(&candidates, &tokens, 8, &fallback).unwrap();
    assert_eq!(result.items.len(), 8);
    assert_eq!(result.source, Provenance::Ai);
    assert_eq!(result.items[0], "Adjudicate 12 claims per day");
    assert_eq!(result.items[1], "Keep claim TAT under 48 hours");
    assert!(!result.items.contains(&"Be nicer".to_string()));
}
