use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{Rating, Tier};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub signature_top_n: usize,
    pub consolidated_signature_top_n: usize,
    pub foundational_cap: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            signature_top_n: 2,
            consolidated_signature_top_n: 3,
            foundational_cap: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Selection {
    pub signature: Vec<Rating>,
    pub supporting: Vec<Rating>,
    pub foundational: Vec<Rating>,
}

#[derive(Debug, Clone)]
pub struct CompetencySelector {
    config: SelectionConfig,
}

impl CompetencySelector {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    pub fn select(&self, ratings: &[Rating], signature_top_n: usize) -> Selection {
        let signature = self.signature(ratings, signature_top_n);
        let supporting = self.supporting(ratings, &signature);
        let foundational = self.foundational(ratings, &signature);
        Selection {
            signature,
            supporting,
            foundational,
        }
    }

    pub fn signature(&self, ratings: &[Rating], top_n: usize) -> Vec<Rating> {
        let mut sorted: Vec<Rating> = ratings.to_vec();
        // sort_by is stable: ties keep first-seen input order
        sorted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        sorted.truncate(top_n);
        sorted
    }

    pub fn supporting(&self, ratings: &[Rating], signature: &[Rating]) -> Vec<Rating> {
        ratings
            .iter()
            .filter(|rating| rating.tier() == Tier::High && !contains_identity(signature, rating))
            .cloned()
            .collect()
    }

    pub fn foundational(&self, ratings: &[Rating], signature: &[Rating]) -> Vec<Rating> {
        ratings
            .iter()
            .filter(|rating| rating.tier() == Tier::Medium && !contains_identity(signature, rating))
            .take(self.config.foundational_cap)
            .cloned()
            .collect()
    }
}

fn contains_identity(set: &[Rating], rating: &Rating) -> bool {
    set.iter().any(|member| member.identity() == rating.identity())
}
