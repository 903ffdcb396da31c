use std::sync::Arc;

use chrono::NaiveDate;

use crate::advisory::{CareerCenter, JobMatcher};
use crate::catalog::{JobCatalog, JobListing, TrainingCatalog};

pub(super) fn listing(title: &str, location: &str, skills: &[&str]) -> JobListing {
    JobListing {
        title: title.to_string(),
        company: "Acme".to_string(),
        location: location.to_string(),
        salary_range: "$40,000 - $50,000".to_string(),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        posted_on: NaiveDate::from_ymd_opt(2025, 6, 10).expect("valid date"),
    }
}

pub(super) fn sample_matcher() -> JobMatcher {
    JobMatcher::new(Arc::new(JobCatalog::sample()))
}

pub(super) fn matcher_for(listings: Vec<JobListing>) -> JobMatcher {
    JobMatcher::new(Arc::new(JobCatalog::new(listings)))
}

pub(super) fn center() -> CareerCenter {
    CareerCenter::new(JobCatalog::sample(), TrainingCatalog::sample())
}

/// `count` space-separated words cycling through `vocabulary`.
pub(super) fn words(count: usize, vocabulary: &[&str]) -> String {
    (0..count)
        .map(|index| vocabulary[index % vocabulary.len()])
        .collect::<Vec<_>>()
        .join(" ")
}
