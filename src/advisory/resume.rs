use super::outcome::Evaluation;
use super::text::{contains_any, has_standalone_number, is_blank, word_count};
use tracing::debug;

pub const RESUME_PROMPT: &str = "Please paste your resume text to receive feedback.";

pub const TOO_SHORT: &str = "Your resume seems short. Add more detail about your experience, \
responsibilities, and accomplishments.";

pub const ADD_NUMBERS: &str = "Add quantifiable achievements, such as 'increased sales by 20%' \
or 'managed a team of 5'.";

pub const ADD_SKILLS: &str = "List relevant skills such as Python, Java, or SQL that match the \
roles you are targeting.";

pub const RESUME_LOOKS_GOOD: &str = "Your resume looks solid! Tailor it to each job \
description for the best results.";

/// Resumes under this many words get the length suggestion.
pub const MIN_RESUME_WORDS: usize = 50;

/// Skill tokens searched for case-insensitively anywhere in the resume.
pub const SKILL_TOKENS: [&str; 3] = ["python", "java", "sql"];

const GENERAL_TIPS: [&str; 3] = [
    "Use action verbs to describe what you did.",
    "Quantify achievements with numbers wherever you can.",
    "Tailor your resume to each job you apply for.",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeReviewer;

impl ResumeReviewer {
    /// Runs the length, numbers, and skills checks in that order.
    pub fn review(&self, resume: &str) -> Evaluation<Vec<String>> {
        if is_blank(resume) {
            return Evaluation::needs_input(RESUME_PROMPT);
        }

        let mut suggestions = Vec::new();
        if word_count(resume) < MIN_RESUME_WORDS {
            suggestions.push(TOO_SHORT.to_string());
        }
        if !has_standalone_number(resume) {
            suggestions.push(ADD_NUMBERS.to_string());
        }
        if !contains_any(resume, &SKILL_TOKENS) {
            suggestions.push(ADD_SKILLS.to_string());
        }

        debug!(suggestions = suggestions.len(), "resume reviewed");

        if suggestions.is_empty() {
            suggestions.push(RESUME_LOOKS_GOOD.to_string());
        }
        Evaluation::ready(suggestions)
    }

    pub fn general_tips(&self) -> Vec<String> {
        GENERAL_TIPS.iter().map(|tip| tip.to_string()).collect()
    }
}
