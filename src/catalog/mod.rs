//! Read-only reference data: job listings and training programs.
//!
//! A catalog is built once (from the sample data or a CSV export) and shared
//! immutably by every evaluator. Nothing in the crate mutates a catalog after
//! construction. Callers supplying their own listings are expected to pass
//! well-formed records; no field validation happens beyond CSV decoding.

mod loader;
mod sample;

pub use loader::CatalogError;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel offered by the location selector meaning "do not filter".
pub const ALL_LOCATIONS: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    /// Human-readable range such as "$70,000 - $85,000", never parsed.
    pub salary_range: String,
    pub skills: Vec<String>,
    pub posted_on: NaiveDate,
}

impl JobListing {
    /// Skill tags joined into the lower-cased text the skill filter searches.
    pub fn skill_text(&self) -> String {
        self.skills
            .iter()
            .map(|skill| skill.to_lowercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingProgram {
    pub name: String,
    pub provider: String,
    pub duration: String,
    pub cost: String,
}

/// Fixed, ordered snapshot of job listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobCatalog {
    listings: Vec<JobListing>,
}

impl JobCatalog {
    pub fn new(listings: Vec<JobListing>) -> Self {
        Self { listings }
    }

    /// The four listings the workforce center ships with.
    pub fn sample() -> Self {
        Self::new(sample::job_listings())
    }

    pub fn listings(&self) -> &[JobListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// `"All"` followed by each distinct location in catalog order.
    pub fn location_options(&self) -> Vec<String> {
        let mut options = vec![ALL_LOCATIONS.to_string()];
        for listing in &self.listings {
            if !options[1..].contains(&listing.location) {
                options.push(listing.location.clone());
            }
        }
        options
    }

    pub fn find_by_title(&self, title: &str) -> Option<&JobListing> {
        let wanted = title.trim();
        self.listings
            .iter()
            .find(|listing| listing.title.eq_ignore_ascii_case(wanted))
    }
}

/// Training programs listed verbatim to job seekers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingCatalog {
    programs: Vec<TrainingProgram>,
}

impl TrainingCatalog {
    pub fn new(programs: Vec<TrainingProgram>) -> Self {
        Self { programs }
    }

    pub fn sample() -> Self {
        Self::new(sample::training_programs())
    }

    pub fn programs(&self) -> &[TrainingProgram] {
        &self.programs
    }

    pub fn find(&self, name: &str) -> Option<&TrainingProgram> {
        let wanted = name.trim();
        self.programs
            .iter()
            .find(|program| program.name.eq_ignore_ascii_case(wanted))
    }
}
