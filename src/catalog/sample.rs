use super::{JobListing, TrainingProgram};
use chrono::NaiveDate;

fn listing(
    title: &str,
    company: &str,
    location: &str,
    salary_range: &str,
    skills: &[&str],
    posted_on: NaiveDate,
) -> JobListing {
    JobListing {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        salary_range: salary_range.to_string(),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        posted_on,
    }
}

fn program(name: &str, provider: &str, duration: &str, cost: &str) -> TrainingProgram {
    TrainingProgram {
        name: name.to_string(),
        provider: provider.to_string(),
        duration: duration.to_string(),
        cost: cost.to_string(),
    }
}

fn june_2025(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap_or_default()
}

pub(super) fn job_listings() -> Vec<JobListing> {
    vec![
        listing(
            "Software Engineer",
            "TechCorp",
            "Austin, TX",
            "$90,000 - $120,000",
            &["Python", "Java", "SQL", "Git"],
            june_2025(1),
        ),
        listing(
            "Registered Nurse",
            "HealthSys",
            "Houston, TX",
            "$70,000 - $85,000",
            &["Patient Care", "BLS Certification", "EMR"],
            june_2025(3),
        ),
        listing(
            "Warehouse Associate",
            "Logistics Inc.",
            "Dallas, TX",
            "$35,000 - $45,000",
            &["Forklift", "Inventory", "Shipping"],
            june_2025(5),
        ),
        listing(
            "Marketing Coordinator",
            "Creative Agency",
            "San Antonio, TX",
            "$50,000 - $65,000",
            &["Social Media", "SEO", "Content Writing"],
            june_2025(7),
        ),
    ]
}

pub(super) fn training_programs() -> Vec<TrainingProgram> {
    vec![
        program(
            "Web Development Bootcamp",
            "CodeAcademy",
            "12 weeks",
            "Free (funded)",
        ),
        program(
            "Nursing Assistant Certification",
            "HealthEd",
            "8 weeks",
            "$500",
        ),
        program("Forklift Operator Training", "SafetyFirst", "1 week", "$200"),
        program(
            "Digital Marketing Course",
            "MarketPro",
            "10 weeks",
            "Free (funded)",
        ),
    ]
}
