use super::{JobCatalog, JobListing, TrainingCatalog, TrainingProgram};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("listing '{title}' has posted date '{value}', expected YYYY-MM-DD")]
    InvalidPostedDate { title: String, value: String },
}

impl JobCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads listings with the columns `Job Title, Company, Location, Salary,
    /// Skills, Posted Date`. Skills are separated by `;`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut listings = Vec::new();

        for record in csv_reader.deserialize::<ListingRow>() {
            listings.push(record?.into_listing()?);
        }

        Ok(Self::new(listings))
    }
}

impl TrainingCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads programs with the columns `Program, Provider, Duration, Cost`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut programs = Vec::new();

        for record in csv_reader.deserialize::<ProgramRow>() {
            let row = record?;
            programs.push(TrainingProgram {
                name: row.name,
                provider: row.provider,
                duration: row.duration,
                cost: row.cost,
            });
        }

        Ok(Self::new(programs))
    }
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(rename = "Job Title")]
    title: String,
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Salary")]
    salary: String,
    #[serde(rename = "Skills", default, deserialize_with = "split_skills")]
    skills: Vec<String>,
    #[serde(rename = "Posted Date")]
    posted_date: String,
}

impl ListingRow {
    fn into_listing(self) -> Result<JobListing, CatalogError> {
        let posted_on = NaiveDate::parse_from_str(self.posted_date.trim(), "%Y-%m-%d")
            .map_err(|_| CatalogError::InvalidPostedDate {
                title: self.title.clone(),
                value: self.posted_date.clone(),
            })?;

        Ok(JobListing {
            title: self.title,
            company: self.company,
            location: self.location,
            salary_range: self.salary,
            skills: self.skills,
            posted_on,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ProgramRow {
    #[serde(rename = "Program")]
    name: String,
    #[serde(rename = "Provider")]
    provider: String,
    #[serde(rename = "Duration")]
    duration: String,
    #[serde(rename = "Cost")]
    cost: String,
}

fn split_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .split(';')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect())
}
