use super::outcome::Evaluation;
use super::text::{contains_any, is_blank, word_count};
use tracing::debug;

pub const JOB_TYPE_PROMPT: &str = "Please enter the type of job you are interviewing for.";
pub const ANSWER_PROMPT: &str = "Please enter your answer to receive feedback.";

pub const TOO_BRIEF: &str =
    "Your answer is too brief. Add specific examples to support your points.";
pub const ADD_OUTCOMES: &str =
    "Include the outcomes or results of your actions to show your impact.";
pub const STRONG_ANSWER: &str =
    "Great answer! You gave enough detail and highlighted concrete results.";

/// Answers under this many words get the brevity suggestion.
pub const MIN_ANSWER_WORDS: usize = 20;

/// Words signalling the answer describes an outcome.
pub const OUTCOME_KEYWORDS: [&str; 4] = ["result", "achieved", "succeeded", "improved"];

const QUESTION_BANK: [&str; 5] = [
    "Tell me about yourself.",
    "What are your greatest strengths and weaknesses?",
    "Why do you want to work for our company?",
    "Describe a challenging situation at work and how you handled it.",
    "Where do you see yourself in five years?",
];

const GENERAL_TIPS: [&str; 3] = [
    "Practice answering common questions out loud.",
    "Research the company before the interview.",
    "Dress professionally and arrive early.",
];

/// Role family a job-type string maps to, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleFamily {
    Technology,
    Healthcare,
    Warehouse,
    Marketing,
    General,
}

impl RoleFamily {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Technology,
            Self::Healthcare,
            Self::Warehouse,
            Self::Marketing,
        ]
    }

    const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Technology => &["software", "engineer"],
            Self::Healthcare => &["nurse", "health"],
            Self::Warehouse => &["warehouse"],
            Self::Marketing => &["marketing"],
            Self::General => &[],
        }
    }

    /// First family whose keywords occur in `job_type`, else `General`.
    pub fn classify(job_type: &str) -> Self {
        Self::ordered()
            .into_iter()
            .find(|family| contains_any(job_type, family.keywords()))
            .unwrap_or(Self::General)
    }

    pub const fn tip(self) -> &'static str {
        match self {
            Self::Technology => {
                "For technical roles, be ready to walk through how you solve problems, \
                 discuss past projects, and practice coding or system design questions."
            }
            Self::Healthcare => {
                "For healthcare roles, emphasize patient care experience, your \
                 certifications, and how you stay calm under pressure."
            }
            Self::Warehouse => {
                "For warehouse roles, highlight reliability, safety awareness, and any \
                 equipment experience such as operating a forklift."
            }
            Self::Marketing => {
                "For marketing roles, bring examples of campaigns you ran and the numbers \
                 they moved, and be ready to discuss current trends."
            }
            Self::General => {
                "Research the company, practice common questions out loud, and prepare a \
                 few questions of your own for the interviewer."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InterviewCoach;

impl InterviewCoach {
    /// The five practice questions, always in the same order.
    pub fn questions(&self) -> Vec<String> {
        QUESTION_BANK.iter().map(|question| question.to_string()).collect()
    }

    pub fn tips(&self, job_type: &str) -> Evaluation<String> {
        if is_blank(job_type) {
            return Evaluation::needs_input(JOB_TYPE_PROMPT);
        }

        let family = RoleFamily::classify(job_type);
        debug!(?family, "interview tip selected");
        Evaluation::ready(family.tip().to_string())
    }

    /// Checks brevity, then outcomes.
    pub fn mock_feedback(&self, answer: &str) -> Evaluation<Vec<String>> {
        if is_blank(answer) {
            return Evaluation::needs_input(ANSWER_PROMPT);
        }

        let mut feedback = Vec::new();
        if word_count(answer) < MIN_ANSWER_WORDS {
            feedback.push(TOO_BRIEF.to_string());
        }
        if !contains_any(answer, &OUTCOME_KEYWORDS) {
            feedback.push(ADD_OUTCOMES.to_string());
        }

        if feedback.is_empty() {
            feedback.push(STRONG_ANSWER.to_string());
        }
        Evaluation::ready(feedback)
    }

    pub fn general_tips(&self) -> Vec<String> {
        GENERAL_TIPS.iter().map(|tip| tip.to_string()).collect()
    }
}
