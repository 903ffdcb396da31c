use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::center::CareerCenter;
use super::matcher::{MatchQuery, MatchResult};
use super::outcome::Evaluation;
use super::recruitment::JobPosting;
use crate::catalog::TrainingProgram;

type Center = State<Arc<CareerCenter>>;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GoalRequest {
    #[serde(default)]
    pub(crate) goal: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResumeRequest {
    #[serde(default)]
    pub(crate) resume: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct JobTypeRequest {
    #[serde(default)]
    pub(crate) job_type: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnswerRequest {
    #[serde(default)]
    pub(crate) answer: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApplyRequest {
    #[serde(default)]
    pub(crate) job_title: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProgramRequest {
    #[serde(default)]
    pub(crate) program: String,
}

/// Router builder exposing every evaluator as a JSON endpoint.
pub fn advisory_router(center: Arc<CareerCenter>) -> Router {
    Router::new()
        .route("/api/v1/jobs/match", post(match_handler))
        .route("/api/v1/jobs/apply", post(apply_handler))
        .route("/api/v1/jobs/locations", get(locations_handler))
        .route("/api/v1/career/advice", post(advice_handler))
        .route("/api/v1/career/counseling", post(counseling_handler))
        .route("/api/v1/resume/review", post(review_handler))
        .route("/api/v1/resume/tips", get(resume_tips_handler))
        .route("/api/v1/interview/questions", get(questions_handler))
        .route("/api/v1/interview/tips", post(interview_tips_handler))
        .route("/api/v1/interview/feedback", post(mock_feedback_handler))
        .route("/api/v1/training/programs", get(programs_handler))
        .route("/api/v1/training/info", post(program_info_handler))
        .route("/api/v1/employer/postings", post(post_job_handler))
        .route("/api/v1/employer/advice", get(recruitment_advice_handler))
        .route("/api/v1/employer/assistance", post(assistance_handler))
        .with_state(center)
}

pub(crate) async fn match_handler(
    State(center): Center,
    Json(query): Json<MatchQuery>,
) -> Json<Evaluation<Vec<MatchResult>>> {
    Json(center.find_jobs(&query))
}

pub(crate) async fn apply_handler(
    State(center): Center,
    Json(request): Json<ApplyRequest>,
) -> Json<Evaluation<String>> {
    Json(center.apply(&request.job_title))
}

pub(crate) async fn locations_handler(State(center): Center) -> Json<Vec<String>> {
    Json(center.location_options())
}

pub(crate) async fn advice_handler(
    State(center): Center,
    Json(request): Json<GoalRequest>,
) -> Json<Evaluation<String>> {
    Json(center.advise(&request.goal))
}

pub(crate) async fn counseling_handler(
    State(center): Center,
    Json(request): Json<GoalRequest>,
) -> Json<Evaluation<String>> {
    Json(center.request_counseling(&request.goal))
}

pub(crate) async fn review_handler(
    State(center): Center,
    Json(request): Json<ResumeRequest>,
) -> Json<Evaluation<Vec<String>>> {
    Json(center.review_resume(&request.resume))
}

pub(crate) async fn resume_tips_handler(State(center): Center) -> Json<Vec<String>> {
    Json(center.resume_tips())
}

pub(crate) async fn questions_handler(State(center): Center) -> Json<Value> {
    Json(json!({
        "questions": center.interview_questions(),
        "tips": center.interview_general_tips(),
    }))
}

pub(crate) async fn interview_tips_handler(
    State(center): Center,
    Json(request): Json<JobTypeRequest>,
) -> Json<Evaluation<String>> {
    Json(center.interview_tips(&request.job_type))
}

pub(crate) async fn mock_feedback_handler(
    State(center): Center,
    Json(request): Json<AnswerRequest>,
) -> Json<Evaluation<Vec<String>>> {
    Json(center.mock_feedback(&request.answer))
}

pub(crate) async fn programs_handler(State(center): Center) -> Json<Vec<TrainingProgram>> {
    Json(center.training_programs().to_vec())
}

pub(crate) async fn program_info_handler(
    State(center): Center,
    Json(request): Json<ProgramRequest>,
) -> Json<Evaluation<String>> {
    Json(center.request_program_info(&request.program))
}

pub(crate) async fn post_job_handler(
    State(center): Center,
    Json(posting): Json<JobPosting>,
) -> Json<Evaluation<String>> {
    Json(center.post_job(&posting))
}

pub(crate) async fn recruitment_advice_handler(State(center): Center) -> Json<Value> {
    Json(json!({
        "advice": center.recruitment_advice(),
        "services": center.recruitment_services(),
    }))
}

pub(crate) async fn assistance_handler(State(center): Center) -> Json<Value> {
    Json(json!({ "message": center.request_recruitment_assistance() }))
}
