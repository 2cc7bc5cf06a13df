use serde::{Deserialize, Serialize};

use crate::suggest::topic::RoleContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    DayToDay,
    Kras,
}

impl SuggestionKind {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "day_to_day" | "day-to-day" | "tasks" => Some(SuggestionKind::DayToDay),
            "kras" | "kra" => Some(SuggestionKind::Kras),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SuggestionKind::DayToDay => "day_to_day",
            SuggestionKind::Kras => "kras",
        }
    }
}

pub fn default_suggestions(kind: SuggestionKind, context: &RoleContext) -> Vec<String> {
    match kind {
        SuggestionKind::DayToDay => default_day_to_day(context),
        SuggestionKind::Kras => default_kras(context),
    }
}

fn default_day_to_day(context: &RoleContext) -> Vec<String> {
    let role = label_or(&context.role, "work");
    let department = label_or(&context.department, "team");

    let mut base = vec![
        format!("Review {} queue and triage high-priority items by 10 AM", role),
        format!("Prepare and analyze {} metrics dashboard; share insights weekly", role),
        format!("Coordinate with {} stakeholders to clarify requirements and blockers", department),
        format!("Perform peer review/QA on 2 {} outputs daily", role),
        "Document process updates and SOP changes in the team wiki".to_string(),
        "Attend stand-up and provide status, risks, and next actions".to_string(),
        "Respond to customer/internal queries within SLA".to_string(),
        "Identify 1 improvement opportunity and log it to backlog".to_string(),
    ];

    if role.contains("underwrit") {
        base[0] = "Review new submissions and prioritize high-value risks before noon".to_string();
        base[2] = "Coordinate with brokers and actuarial on pricing/wordings".to_string();
    }
    if department.contains("claims") {
        base[3] = "Perform QA on 5 claim files; ensure documentation completeness".to_string();
    }

    base
}

fn default_kras(context: &RoleContext) -> Vec<String> {
    let role = label_or(&context.role, "core");
    let department = label_or(&context.department, "key");

    let mut base = vec![
        format!("Achieve ≥ 95% SLA adherence for key {} processes by Q4", role),
        format!("Reduce defect rate in {} outputs to < 2% by end of quarter", role),
        format!("Improve data accuracy for {} reports to ≥ 99.5% each month", role),
        "Deliver 2 process improvements per quarter, saving ≥ 5% effort".to_string(),
        format!("Maintain stakeholder NPS ≥ 8.5/10 across {} counterparts", department),
        "Identify and mitigate top 3 operational risks quarterly".to_string(),
        "Coach team: 1 enablement session/month; lift junior throughput by 10%".to_string(),
        "Publish monthly KPI review with 3 corrective actions and owners".to_string(),
    ];

    if department.contains("claims") || department.contains("adjudication") {
        base[0] = "Process ≥ 95% of claims within SLA; keep average TAT under 48 hours".to_string();
        base[1] = "Reduce claim reopens to < 1.5% by implementing QA feedback loops".to_string();
    }
    if role.contains("underwrit") {
        base = vec![
            "Maintain portfolio loss ratio ≤ 65% for the fiscal year".to_string(),
            "Grow bound premium by 15% YoY while adhering to risk appetite".to_string(),
            "Achieve ≥ 95% underwriting file completeness and audit readiness".to_string(),
            "Reduce referral turnaround time to < 24 hours for 90% of cases".to_string(),
            "Increase hit ratio to ≥ 25% while sustaining target pricing adequacy".to_string(),
            "Implement 2 guideline improvements/quarter based on loss analysis".to_string(),
            "Achieve ≥ 98% policy wording accuracy across bound policies".to_string(),
            "Lift broker satisfaction to ≥ 8.5/10 via quarterly feedback".to_string(),
        ];
    }
    if department.contains("sales") || department.contains("business development") {
        base[0] = "Increase qualified pipeline by 25% QoQ; maintain win-rate ≥ 20%".to_string();
        base[3] = "Launch 1 new outreach playbook/quarter; lift conversion by 10%".to_string();
    }
    if role.contains("fraud") {
        base[5] = "Reduce confirmed fraud loss by 30% YoY through targeted investigations".to_string();
    }

    base
}

fn label_or(value: &str, default: &str) -> String {
    let trimmed = value.trim().to_lowercase();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed
    }
}
