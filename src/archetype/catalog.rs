use std::collections::HashMap;

use crate::normalize::humanize_key;
use crate::{NarrativeRole, SkiveCategory, Tier};

pub trait PhraseCatalog {
    fn lookup(
        &self,
        category: SkiveCategory,
        subcategory: &str,
        tier: Tier,
        role: NarrativeRole,
    ) -> Option<String>;
}

pub fn resolve_phrase(
    catalog: &dyn PhraseCatalog,
    category: SkiveCategory,
    subcategory: &str,
    tier: Tier,
    role: NarrativeRole,
) -> String {
    match catalog.lookup(category, subcategory, tier, role) {
        Some(phrase) => phrase,
        None => {
            tracing::debug!(
                category = category.label(),
                subcategory,
                tier = tier.label(),
                role = role.label(),
                "descriptor phrase missing, using fallback"
            );
            format!("{} ({})", subcategory, tier.label())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticPhraseCatalog {
    entries: HashMap<(SkiveCategory, String, Tier, NarrativeRole), String>,
}

impl StaticPhraseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for &(category, subcategory, tier, phrase) in SEED_DESCRIPTORS {
            match tier {
                Tier::Low => {
                    catalog.insert(category, subcategory, tier, NarrativeRole::Foundational, phrase);
                }
                Tier::Medium => {
                    catalog.insert(category, subcategory, tier, NarrativeRole::Foundational, phrase);
                    catalog.insert(category, subcategory, tier, NarrativeRole::Supporting, phrase);
                }
                Tier::High => {
                    catalog.insert(category, subcategory, tier, NarrativeRole::Signature, phrase);
                    catalog.insert(category, subcategory, tier, NarrativeRole::Supporting, phrase);
                }
            }
        }
        catalog
    }

    // Last write wins: at most one phrase per 4-tuple key.
    pub fn insert(
        &mut self,
        category: SkiveCategory,
        subcategory: &str,
        tier: Tier,
        role: NarrativeRole,
        phrase: &str,
    ) {
        self.entries
            .insert((category, canonical_subcategory(subcategory), tier, role), phrase.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PhraseCatalog for StaticPhraseCatalog {
    fn lookup(
        &self,
        category: SkiveCategory,
        subcategory: &str,
        tier: Tier,
        role: NarrativeRole,
    ) -> Option<String> {
        self.entries
            .get(&(category, canonical_subcategory(subcategory), tier, role))
            .cloned()
    }
}

// Ratings arrive as raw JSON keys ("decisionMaking") or display labels
// ("Decision Making"); both must address the same catalog row.
fn canonical_subcategory(subcategory: &str) -> String {
    humanize_key(subcategory).to_lowercase()
}

const SEED_DESCRIPTORS: &[(SkiveCategory, &str, Tier, &str)] = &[
    (SkiveCategory::Skills, "Decision Making", Tier::Low, "requiring foundational decision-making based on clear guidelines"),
    (SkiveCategory::Skills, "Decision Making", Tier::Medium, "requiring independent decision-making with moderate complexity and stakeholder impact"),
    (SkiveCategory::Skills, "Decision Making", Tier::High, "requiring masterful decision-making under uncertainty with significant organizational impact"),
    (SkiveCategory::Skills, "Strategic Planning", Tier::Low, "requiring basic awareness of long-term goals to inform daily tasks"),
    (SkiveCategory::Skills, "Strategic Planning", Tier::Medium, "requiring active participation in strategic planning with departmental scope"),
    (SkiveCategory::Skills, "Strategic Planning", Tier::High, "requiring visionary strategic planning that shapes organizational direction"),
    (SkiveCategory::Skills, "Problem Solving", Tier::Low, "requiring ability to troubleshoot routine problems using established solutions"),
    (SkiveCategory::Skills, "Problem Solving", Tier::Medium, "requiring creative problem-solving for complex, multi-faceted challenges"),
    (SkiveCategory::Skills, "Problem Solving", Tier::High, "requiring innovative problem-solving that creates new frameworks and approaches"),
    (SkiveCategory::Skills, "Prioritization", Tier::Low, "requiring ability to follow a prioritized list of tasks effectively"),
    (SkiveCategory::Skills, "Prioritization", Tier::Medium, "requiring skillful prioritization across competing demands and limited resources"),
    (SkiveCategory::Skills, "Prioritization", Tier::High, "requiring ruthless prioritization that drives organizational focus and resource allocation"),
    (SkiveCategory::Skills, "Communication", Tier::Low, "requiring clear and concise communication on technical or operational matters"),
    (SkiveCategory::Skills, "Communication", Tier::Medium, "requiring persuasive communication across diverse audiences and contexts"),
    (SkiveCategory::Skills, "Communication", Tier::High, "requiring masterful storytelling and communication that inspires and drives change"),
    (SkiveCategory::Skills, "Collaboration", Tier::Low, "requiring ability to be a productive and reliable team member"),
    (SkiveCategory::Skills, "Collaboration", Tier::Medium, "requiring leadership in cross-functional collaboration and team dynamics"),
    (SkiveCategory::Skills, "Collaboration", Tier::High, "requiring orchestration of complex collaborative ecosystems across organizations"),
    (SkiveCategory::Skills, "Stakeholder Management", Tier::Low, "requiring ability to respond to stakeholder requests and manage expectations on defined tasks"),
    (SkiveCategory::Skills, "Stakeholder Management", Tier::Medium, "requiring proactive stakeholder relationship building and conflict resolution"),
    (SkiveCategory::Skills, "Stakeholder Management", Tier::High, "requiring diplomatic mastery in managing competing stakeholder interests and building consensus"),
    (SkiveCategory::Skills, "Negotiation", Tier::Low, "requiring basic negotiation skills for straightforward, well-defined issues"),
    (SkiveCategory::Skills, "Negotiation", Tier::Medium, "requiring strategic negotiation across complex, multi-party scenarios"),
    (SkiveCategory::Skills, "Negotiation", Tier::High, "requiring masterful negotiation that creates win-win outcomes in high-stakes situations"),
    (SkiveCategory::Skills, "Domain Tools", Tier::Low, "requiring foundational knowledge of core platforms and tools used in the role"),
    (SkiveCategory::Skills, "Domain Tools", Tier::Medium, "requiring advanced proficiency in domain-specific tools and platforms"),
    (SkiveCategory::Skills, "Domain Tools", Tier::High, "requiring expert-level mastery and innovation in domain tools and technology"),
    (SkiveCategory::Skills, "Data Analysis", Tier::Low, "requiring ability to read and understand pre-built reports and dashboards"),
    (SkiveCategory::Skills, "Data Analysis", Tier::Medium, "requiring independent data analysis and insight generation for decision support"),
    (SkiveCategory::Skills, "Data Analysis", Tier::High, "requiring advanced analytics leadership that drives data-driven organizational strategy"),
    (SkiveCategory::Skills, "Documentation", Tier::Low, "requiring ability to produce clear and understandable documentation for personal or team use"),
    (SkiveCategory::Skills, "Documentation", Tier::Medium, "requiring comprehensive documentation that enables knowledge transfer and process improvement"),
    (SkiveCategory::Skills, "Documentation", Tier::High, "requiring strategic documentation that creates organizational knowledge assets and standards"),
    (SkiveCategory::Knowledge, "Industry Knowledge", Tier::Low, "requiring basic understanding of industry trends and competitive landscape"),
    (SkiveCategory::Knowledge, "Industry Knowledge", Tier::Medium, "requiring deep industry expertise that informs strategic recommendations"),
    (SkiveCategory::Knowledge, "Industry Knowledge", Tier::High, "requiring thought leadership and industry expertise that shapes market direction"),
    (SkiveCategory::Knowledge, "Regulatory Compliance", Tier::Low, "requiring awareness of relevant regulations and compliance requirements"),
    (SkiveCategory::Knowledge, "Regulatory Compliance", Tier::Medium, "requiring active management of compliance processes and risk mitigation"),
    (SkiveCategory::Knowledge, "Regulatory Compliance", Tier::High, "requiring strategic compliance leadership that anticipates and shapes regulatory changes"),
    (SkiveCategory::Knowledge, "Market Dynamics", Tier::Low, "requiring basic understanding of market forces and customer needs"),
    (SkiveCategory::Knowledge, "Market Dynamics", Tier::Medium, "requiring sophisticated market analysis that drives product and strategy decisions"),
    (SkiveCategory::Knowledge, "Market Dynamics", Tier::High, "requiring visionary market insight that identifies and creates new opportunities"),
    (SkiveCategory::Identity, "Role Clarity", Tier::Low, "requiring clear understanding of role boundaries and responsibilities"),
    (SkiveCategory::Identity, "Role Clarity", Tier::Medium, "requiring confident role ownership with ability to expand scope appropriately"),
    (SkiveCategory::Identity, "Role Clarity", Tier::High, "requiring role definition and evolution that shapes organizational structure"),
    (SkiveCategory::Identity, "Professional Growth", Tier::Low, "requiring commitment to continuous learning and skill development"),
    (SkiveCategory::Identity, "Professional Growth", Tier::Medium, "requiring proactive career development and mentorship of others"),
    (SkiveCategory::Identity, "Professional Growth", Tier::High, "requiring thought leadership and industry influence that advances the profession"),
    (SkiveCategory::Values, "Integrity", Tier::Low, "requiring consistent ethical behavior and transparency in all interactions"),
    (SkiveCategory::Values, "Integrity", Tier::Medium, "requiring moral leadership that builds trust and sets ethical standards"),
    (SkiveCategory::Values, "Integrity", Tier::High, "requiring unwavering integrity that defines organizational culture and values"),
    (SkiveCategory::Values, "Customer Focus", Tier::Low, "requiring awareness of customer needs and impact of decisions on customer experience"),
    (SkiveCategory::Values, "Customer Focus", Tier::Medium, "requiring customer-centric decision making that drives satisfaction and loyalty"),
    (SkiveCategory::Values, "Customer Focus", Tier::High, "requiring visionary customer advocacy that transforms organizational culture"),
    (SkiveCategory::Ethics, "Ethical Decision Making", Tier::Low, "requiring recognition of ethical implications and consultation when needed"),
    (SkiveCategory::Ethics, "Ethical Decision Making", Tier::Medium, "requiring independent ethical reasoning in complex, ambiguous situations"),
    (SkiveCategory::Ethics, "Ethical Decision Making", Tier::High, "requiring ethical leadership that establishes moral frameworks for the organization"),
    (SkiveCategory::Ethics, "Social Responsibility", Tier::Low, "requiring awareness of social impact and commitment to responsible practices"),
    (SkiveCategory::Ethics, "Social Responsibility", Tier::Medium, "requiring active promotion of social responsibility and sustainable practices"),
    (SkiveCategory::Ethics, "Social Responsibility", Tier::High, "requiring visionary leadership in corporate social responsibility and societal impact"),
];
