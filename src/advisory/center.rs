use std::sync::Arc;

use super::career::CareerAdvisor;
use super::interview::InterviewCoach;
use super::matcher::{JobMatcher, MatchQuery, MatchResult};
use super::outcome::Evaluation;
use super::recruitment::{JobPosting, RecruitmentAdvisor};
use super::resume::ResumeReviewer;
use super::text::is_blank;
use crate::catalog::{CatalogError, JobCatalog, TrainingCatalog, TrainingProgram};
use crate::config::CatalogConfig;

pub const JOB_TITLE_PROMPT: &str = "Please select a job to apply for.";
pub const PROGRAM_PROMPT: &str = "Please select a training program to learn more.";
pub const APPLICATION_ACK: &str = "Application submitted! Check your email for next steps.";

/// Facade composing every evaluator over one shared, read-only catalog.
///
/// Cloning is cheap and clones share the same catalog snapshot.
#[derive(Debug, Clone)]
pub struct CareerCenter {
    training: Arc<TrainingCatalog>,
    matcher: JobMatcher,
    career: CareerAdvisor,
    resume: ResumeReviewer,
    interview: InterviewCoach,
    recruitment: RecruitmentAdvisor,
}

impl CareerCenter {
    pub fn new(catalog: JobCatalog, training: TrainingCatalog) -> Self {
        Self {
            training: Arc::new(training),
            matcher: JobMatcher::new(Arc::new(catalog)),
            career: CareerAdvisor,
            resume: ResumeReviewer,
            interview: InterviewCoach,
            recruitment: RecruitmentAdvisor,
        }
    }

    pub fn sample() -> Self {
        Self::new(JobCatalog::sample(), TrainingCatalog::sample())
    }

    /// Loads CSV sources when configured, falling back to the sample data.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.listings_csv {
            Some(path) => JobCatalog::from_path(path)?,
            None => JobCatalog::sample(),
        };
        let training = match &config.programs_csv {
            Some(path) => TrainingCatalog::from_path(path)?,
            None => TrainingCatalog::sample(),
        };
        Ok(Self::new(catalog, training))
    }

    pub fn catalog(&self) -> &JobCatalog {
        self.matcher.catalog()
    }

    pub fn find_jobs(&self, query: &MatchQuery) -> Evaluation<Vec<MatchResult>> {
        self.matcher.find(query)
    }

    pub fn location_options(&self) -> Vec<String> {
        self.catalog().location_options()
    }

    /// Acknowledges an application to a listed job. Nothing is sent.
    pub fn apply(&self, job_title: &str) -> Evaluation<String> {
        if is_blank(job_title) {
            return Evaluation::needs_input(JOB_TITLE_PROMPT);
        }
        match self.catalog().find_by_title(job_title) {
            Some(_) => Evaluation::ready(APPLICATION_ACK.to_string()),
            None => Evaluation::NoMatch,
        }
    }

    pub fn advise(&self, goal: &str) -> Evaluation<String> {
        self.career.advise(goal)
    }

    pub fn request_counseling(&self, goal: &str) -> Evaluation<String> {
        self.career.request_counseling(goal)
    }

    pub fn review_resume(&self, resume: &str) -> Evaluation<Vec<String>> {
        self.resume.review(resume)
    }

    pub fn resume_tips(&self) -> Vec<String> {
        self.resume.general_tips()
    }

    pub fn interview_questions(&self) -> Vec<String> {
        self.interview.questions()
    }

    pub fn interview_tips(&self, job_type: &str) -> Evaluation<String> {
        self.interview.tips(job_type)
    }

    pub fn interview_general_tips(&self) -> Vec<String> {
        self.interview.general_tips()
    }

    pub fn mock_feedback(&self, answer: &str) -> Evaluation<Vec<String>> {
        self.interview.mock_feedback(answer)
    }

    pub fn training_programs(&self) -> &[TrainingProgram] {
        self.training.programs()
    }

    pub fn request_program_info(&self, program: &str) -> Evaluation<String> {
        if is_blank(program) {
            return Evaluation::needs_input(PROGRAM_PROMPT);
        }
        match self.training.find(program) {
            Some(found) => Evaluation::ready(format!(
                "Information about {} has been sent to your email.",
                found.name
            )),
            None => Evaluation::NoMatch,
        }
    }

    pub fn post_job(&self, posting: &JobPosting) -> Evaluation<String> {
        self.recruitment.post_job(posting)
    }

    pub fn recruitment_advice(&self) -> String {
        self.recruitment.advice()
    }

    pub fn recruitment_services(&self) -> Vec<String> {
        self.recruitment.services()
    }

    pub fn request_recruitment_assistance(&self) -> String {
        self.recruitment.request_assistance()
    }
}
