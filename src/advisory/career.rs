use super::outcome::Evaluation;
use super::text::{contains_any, is_blank};
use tracing::debug;

pub const GOAL_PROMPT: &str = "Please share your career goals so we can offer advice.";

pub const CAREER_CHANGE_ADVICE: &str = "Considering a career change? Explore our training \
programs to build skills for in-demand roles, and meet with a career counselor to plan your \
transition.";

pub const PROMOTION_ADVICE: &str = "Aiming for a promotion? Look for leadership opportunities \
in your current role and request a resume review so your accomplishments stand out.";

pub const GENERAL_ADVICE: &str = "Start with a skills assessment to identify your strengths, \
then explore job listings and training programs that match your interests.";

/// Which canned answer a goal statement selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareerTrack {
    CareerChange,
    Promotion,
    General,
}

impl CareerTrack {
    /// "career change" is checked before "promotion"; a goal naming both is
    /// a career change.
    pub fn classify(goal: &str) -> Self {
        if contains_any(goal, &["career change"]) {
            Self::CareerChange
        } else if contains_any(goal, &["promotion"]) {
            Self::Promotion
        } else {
            Self::General
        }
    }

    pub const fn advice(self) -> &'static str {
        match self {
            Self::CareerChange => CAREER_CHANGE_ADVICE,
            Self::Promotion => PROMOTION_ADVICE,
            Self::General => GENERAL_ADVICE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CareerAdvisor;

impl CareerAdvisor {
    pub fn advise(&self, goal: &str) -> Evaluation<String> {
        if is_blank(goal) {
            return Evaluation::needs_input(GOAL_PROMPT);
        }

        let track = CareerTrack::classify(goal);
        debug!(?track, "career advice selected");
        Evaluation::ready(track.advice().to_string())
    }

    /// Acknowledges a counseling request. No counselor is actually notified.
    pub fn request_counseling(&self, goal: &str) -> Evaluation<String> {
        if is_blank(goal) {
            return Evaluation::needs_input(GOAL_PROMPT);
        }

        Evaluation::ready(format!(
            "Thank you! A career counselor will contact you to discuss: {}",
            goal.trim()
        ))
    }
}
