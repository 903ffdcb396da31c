//! Stateless job matching and rule-based advice.
//!
//! Every evaluator is a pure function of its input and the read-only catalog
//! it was built with: the same call always yields the same answer, and no
//! call mutates shared state. `CareerCenter` bundles them for callers that
//! want a single handle.

pub mod career;
pub mod center;
pub mod interview;
pub mod matcher;
mod outcome;
pub mod recruitment;
pub mod resume;
mod router;
pub mod similarity;
mod text;

#[cfg(test)]
mod tests;

pub use career::{CareerAdvisor, CareerTrack};
pub use center::CareerCenter;
pub use interview::{InterviewCoach, RoleFamily};
pub use matcher::{JobMatcher, MatchQuery, MatchResult, MATCH_THRESHOLD};
pub use outcome::Evaluation;
pub use recruitment::{JobPosting, RecruitmentAdvisor};
pub use resume::ResumeReviewer;
pub use router::advisory_router;
