use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::advisory::career::PROMOTION_ADVICE;
use crate::advisory::router::{match_handler, review_handler, ResumeRequest};
use crate::advisory::{advisory_router, Evaluation, MatchQuery};

async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
    let router = advisory_router(Arc::new(center()));
    let response = router
        .oneshot(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).expect("json encodes")))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

async fn get_json(path: &str) -> Value {
    let router = advisory_router(Arc::new(center()));
    let response = router
        .oneshot(
            Request::get(path)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn match_handler_returns_tagged_results() {
    let Json(outcome) = match_handler(
        State(Arc::new(center())),
        Json(MatchQuery::default().keywords("zzqqxx")),
    )
    .await;

    assert_eq!(outcome, Evaluation::NoMatch);
}

#[tokio::test]
async fn review_handler_prompts_for_missing_resume() {
    let Json(outcome) =
        review_handler(State(Arc::new(center())), Json(ResumeRequest::default())).await;

    assert!(outcome.prompt().is_some());
}

#[tokio::test]
async fn match_route_serializes_scores() {
    let (status, body) = post_json(
        "/api/v1/jobs/match",
        json!({ "keywords": "nurse", "location": "Houston, TX" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["result"][0]["listing"]["title"], "Registered Nurse");
    assert_eq!(body["result"][0]["score"], 100.0);
}

#[tokio::test]
async fn match_route_omits_scores_without_keywords() {
    let (_, body) = post_json("/api/v1/jobs/match", json!({})).await;

    let results = body["result"].as_array().expect("result array");
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|result| result.get("score").is_none()));
}

#[tokio::test]
async fn advice_route_accepts_missing_fields() {
    let (status, body) = post_json("/api/v1/career/advice", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "needs_input");

    let (_, body) = post_json("/api/v1/career/advice", json!({ "goal": "a promotion" })).await;
    assert_eq!(body["result"], PROMOTION_ADVICE);
}

#[tokio::test]
async fn posting_route_reports_incomplete_forms() {
    let (_, body) = post_json(
        "/api/v1/employer/postings",
        json!({ "title": "Cook", "company": "Diner" }),
    )
    .await;

    assert_eq!(body["status"], "needs_input");
}

#[tokio::test]
async fn constant_routes_render() {
    let questions = get_json("/api/v1/interview/questions").await;
    assert_eq!(questions["questions"].as_array().map(Vec::len), Some(5));

    let locations = get_json("/api/v1/jobs/locations").await;
    assert_eq!(locations[0], "All");

    let programs = get_json("/api/v1/training/programs").await;
    assert_eq!(programs.as_array().map(Vec::len), Some(4));

    let advice = get_json("/api/v1/employer/advice").await;
    assert!(advice["advice"]
        .as_str()
        .is_some_and(|text| text.contains("Work Opportunity Tax Credit")));
}
