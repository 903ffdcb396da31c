use super::outcome::Evaluation;
use super::similarity::partial_ratio;
use super::text::is_blank;
use crate::catalog::{JobCatalog, JobListing, ALL_LOCATIONS};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Listings must score strictly above this to survive the keyword filter.
pub const MATCH_THRESHOLD: f64 = 70.0;

/// Job seeker search form. Every field is optional and may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchQuery {
    #[serde(default)]
    pub keywords: Option<String>,
    /// Exact catalog location, or `"All"`.
    #[serde(default)]
    pub location: Option<String>,
    /// Substring searched for in the listing's skill tags.
    #[serde(default)]
    pub skills: Option<String>,
}

impl MatchQuery {
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = Some(skills.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub listing: JobListing,
    /// Title similarity, present only when keywords were given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Scores and filters catalog listings for a search query.
#[derive(Debug, Clone)]
pub struct JobMatcher {
    catalog: Arc<JobCatalog>,
}

impl JobMatcher {
    pub fn new(catalog: Arc<JobCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    /// Applies keywords, then location, then skills; each step only narrows.
    pub fn find(&self, query: &MatchQuery) -> Evaluation<Vec<MatchResult>> {
        let keywords = query
            .keywords
            .as_deref()
            .filter(|value| !is_blank(value))
            .map(str::to_lowercase);

        let mut candidates: Vec<MatchResult> = match &keywords {
            Some(needle) => self
                .catalog
                .listings()
                .iter()
                .filter_map(|listing| {
                    let score = partial_ratio(needle, &listing.title.to_lowercase());
                    (score > MATCH_THRESHOLD).then(|| MatchResult {
                        listing: listing.clone(),
                        score: Some(score),
                    })
                })
                .collect(),
            None => self
                .catalog
                .listings()
                .iter()
                .map(|listing| MatchResult {
                    listing: listing.clone(),
                    score: None,
                })
                .collect(),
        };

        if let Some(location) = query
            .location
            .as_deref()
            .filter(|value| !value.is_empty() && *value != ALL_LOCATIONS)
        {
            candidates.retain(|candidate| candidate.listing.location == location);
        }

        if let Some(skill) = query
            .skills
            .as_deref()
            .filter(|value| !is_blank(value))
            .map(str::to_lowercase)
        {
            candidates.retain(|candidate| candidate.listing.skill_text().contains(&skill));
        }

        if keywords.is_some() {
            candidates.sort_by(|left, right| {
                let left = left.score.unwrap_or_default();
                let right = right.score.unwrap_or_default();
                right.total_cmp(&left)
            });
        }

        let matches = candidates.len();
        let outcome = if candidates.is_empty() {
            Evaluation::NoMatch
        } else {
            Evaluation::ready(candidates)
        };

        debug!(
            keywords = keywords.as_deref().unwrap_or(""),
            matches,
            outcome = outcome.label(),
            "job search evaluated"
        );
        outcome
    }
}
