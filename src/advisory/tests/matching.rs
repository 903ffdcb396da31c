use super::common::*;
use crate::advisory::similarity::partial_ratio;
use crate::advisory::{Evaluation, MatchQuery, MATCH_THRESHOLD};
use crate::catalog::JobCatalog;

fn titles(outcome: &Evaluation<Vec<crate::advisory::MatchResult>>) -> Vec<String> {
    outcome
        .result()
        .map(|results| {
            results
                .iter()
                .map(|result| result.listing.title.clone())
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn empty_query_returns_whole_catalog_in_order_without_scores() {
    let matcher = sample_matcher();

    let outcome = matcher.find(&MatchQuery::default());

    let results = outcome.result().expect("catalog is not empty");
    let expected: Vec<_> = JobCatalog::sample().listings().to_vec();
    assert_eq!(results.len(), expected.len());
    for (result, listing) in results.iter().zip(expected.iter()) {
        assert_eq!(&result.listing, listing);
        assert!(result.score.is_none());
    }
}

#[test]
fn nurse_in_houston_finds_only_registered_nurse() {
    let matcher = sample_matcher();

    let outcome = matcher.find(&MatchQuery::default().keywords("nurse").location("Houston, TX"));

    assert_eq!(titles(&outcome), ["Registered Nurse"]);
    let score = outcome.result().expect("one match")[0]
        .score
        .expect("scored when keywords given");
    assert_eq!(score, 100.0);
}

#[test]
fn nonsense_keywords_find_nothing() {
    let matcher = sample_matcher();

    let outcome = matcher.find(&MatchQuery::default().keywords("zzqqxx"));

    assert_eq!(outcome, Evaluation::NoMatch);
    assert!(outcome.into_items().is_empty());
}

#[test]
fn every_scored_result_clears_threshold() {
    let matcher = sample_matcher();

    for keywords in ["engineer", "Nurse", "ware", "coordinator", "market", "sales"] {
        let outcome = matcher.find(&MatchQuery::default().keywords(keywords));
        for result in outcome.into_items() {
            let score = result.score.expect("keywords produce scores");
            assert!(score > MATCH_THRESHOLD, "{keywords}: {score}");
            assert!(score <= 100.0);
            let recomputed = partial_ratio(
                &keywords.to_lowercase(),
                &result.listing.title.to_lowercase(),
            );
            assert_eq!(score, recomputed);
        }
    }
}

#[test]
fn all_sentinel_disables_location_filter() {
    let matcher = sample_matcher();

    let outcome = matcher.find(&MatchQuery::default().location("All"));

    assert_eq!(outcome.into_items().len(), 4);
}

#[test]
fn location_filter_is_exact_and_case_sensitive() {
    let matcher = sample_matcher();

    assert_eq!(
        matcher.find(&MatchQuery::default().location("houston, tx")),
        Evaluation::NoMatch
    );
    assert_eq!(
        matcher.find(&MatchQuery::default().location("Houston")),
        Evaluation::NoMatch
    );
    assert_eq!(
        titles(&matcher.find(&MatchQuery::default().location("Dallas, TX"))),
        ["Warehouse Associate"]
    );
}

#[test]
fn skill_filter_matches_substrings_ignoring_case() {
    let matcher = sample_matcher();

    assert_eq!(
        titles(&matcher.find(&MatchQuery::default().skills("PYTHON"))),
        ["Software Engineer"]
    );
    assert_eq!(
        titles(&matcher.find(&MatchQuery::default().skills("care"))),
        ["Registered Nurse"]
    );
}

#[test]
fn filters_intersect_rather_than_union() {
    let matcher = sample_matcher();

    let outcome = matcher.find(
        &MatchQuery::default()
            .keywords("nurse")
            .skills("python"),
    );
    assert_eq!(outcome, Evaluation::NoMatch);

    let outcome = matcher.find(
        &MatchQuery::default()
            .keywords("engineer")
            .location("Houston, TX"),
    );
    assert_eq!(outcome, Evaluation::NoMatch);
}

#[test]
fn scored_results_sort_descending_with_stable_ties() {
    let matcher = matcher_for(vec![
        listing("Nursing Assistant", "Austin, TX", &["Patient Care"]),
        listing("Registered Nurse", "Austin, TX", &["Patient Care"]),
        listing("Chef", "Austin, TX", &["Cooking"]),
        listing("Traveling Nurse", "Austin, TX", &["Patient Care"]),
    ]);

    let outcome = matcher.find(&MatchQuery::default().keywords("nurse"));

    assert_eq!(
        titles(&outcome),
        ["Registered Nurse", "Traveling Nurse", "Nursing Assistant"]
    );
    let scores: Vec<f64> = outcome
        .into_items()
        .into_iter()
        .filter_map(|result| result.score)
        .collect();
    assert_eq!(scores[0], 100.0);
    assert_eq!(scores[1], 100.0);
    assert_eq!(scores[2], 80.0);
}

#[test]
fn blank_keywords_skip_scoring() {
    let matcher = sample_matcher();

    let outcome = matcher.find(&MatchQuery::default().keywords("   ").skills(""));

    let results = outcome.into_items();
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|result| result.score.is_none()));
}

#[test]
fn padded_keywords_are_scored_as_given() {
    let matcher = sample_matcher();
    let keywords = "   Nurse   ";

    let results = matcher
        .find(&MatchQuery::default().keywords(keywords))
        .into_items();

    assert!(results
        .iter()
        .all(|result| result.listing.title != "Registered Nurse"));
    for result in &results {
        assert_eq!(
            result.score,
            Some(partial_ratio(
                &keywords.to_lowercase(),
                &result.listing.title.to_lowercase()
            ))
        );
    }
    assert!(partial_ratio("   nurse   ", "registered nurse") < MATCH_THRESHOLD);
}

#[test]
fn padded_skill_is_matched_as_given() {
    let matcher = sample_matcher();

    assert_eq!(
        matcher.find(&MatchQuery::default().skills("EMR ")),
        Evaluation::NoMatch
    );
    let nursing = matcher
        .find(&MatchQuery::default().skills(" EMR"))
        .into_items();
    assert_eq!(nursing.len(), 1);
    assert_eq!(nursing[0].listing.title, "Registered Nurse");
}

#[test]
fn empty_catalog_yields_no_match() {
    let matcher = matcher_for(Vec::new());

    assert_eq!(matcher.find(&MatchQuery::default()), Evaluation::NoMatch);
}

#[test]
fn repeated_searches_are_identical() {
    let matcher = sample_matcher();
    let query = MatchQuery::default().keywords("engineer").location("All");

    assert_eq!(matcher.find(&query), matcher.find(&query));
}
