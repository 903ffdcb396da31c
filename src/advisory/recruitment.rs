use super::outcome::Evaluation;
use super::text::is_blank;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const INCOMPLETE_POSTING: &str = "Please fill in all fields before posting the job.";

pub const RECRUITMENT_ADVICE: &str = "We can help you find qualified candidates. Our team \
screens resumes against your job requirements, invites you to upcoming hiring events and job \
fairs, and can walk you through incentives like the Work Opportunity Tax Credit.";

pub const ASSISTANCE_ACK: &str = "A recruitment specialist will contact you soon.";

const SERVICES: [&str; 3] = [
    "Screening: we review resumes to match your job requirements.",
    "Job Fairs: participate in our upcoming hiring events.",
    "Tax Credits: learn about incentives like the Work Opportunity Tax Credit.",
];

/// Employer's job posting form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub description: String,
}

impl JobPosting {
    fn is_complete(&self) -> bool {
        [
            &self.title,
            &self.company,
            &self.location,
            &self.salary,
            &self.description,
        ]
        .iter()
        .all(|field| !is_blank(field))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecruitmentAdvisor;

impl RecruitmentAdvisor {
    /// Confirms a complete posting. The catalog is never modified.
    pub fn post_job(&self, posting: &JobPosting) -> Evaluation<String> {
        if !posting.is_complete() {
            return Evaluation::needs_input(INCOMPLETE_POSTING);
        }

        info!(
            title = posting.title.trim(),
            company = posting.company.trim(),
            "job posting accepted without persistence"
        );
        Evaluation::ready(format!(
            "Job '{}' at {} posted successfully! We'll notify you when candidates apply.",
            posting.title.trim(),
            posting.company.trim()
        ))
    }

    pub fn advice(&self) -> String {
        RECRUITMENT_ADVICE.to_string()
    }

    pub fn services(&self) -> Vec<String> {
        SERVICES.iter().map(|service| service.to_string()).collect()
    }

    pub fn request_assistance(&self) -> String {
        ASSISTANCE_ACK.to_string()
    }
}
