use super::common::response;
use crate::assessment::domain::{Dimension, DimensionScores, MaturityLevel};
use crate::assessment::scoring::{
    all_dimension_scores, assessment_results, compare_scores, dimension_score, gap_analysis,
    overall_score,
};

#[test]
fn unanswered_dimension_scores_zero() {
    assert_eq!(dimension_score(&[], Dimension::Policy), 0);

    // Responses in other dimensions do not leak in.
    let responses = vec![response("q2.1", Dimension::RiskManagement, 5)];
    assert_eq!(dimension_score(&responses, Dimension::Policy), 0);
}

#[test]
fn dimension_score_is_weighted_ratio_of_maximum() {
    let responses = vec![
        response("q1.1", Dimension::Policy, 3),
        response("q1.2", Dimension::Policy, 3),
        response("q1.3", Dimension::Policy, 3),
    ];
    assert_eq!(dimension_score(&responses, Dimension::Policy), 60);

    let responses = vec![response("q1.1", Dimension::Policy, 5)];
    assert_eq!(dimension_score(&responses, Dimension::Policy), 100);
}

#[test]
fn dimension_score_rounds_half_up() {
    // 10/15 of the maximum: 66.67 rounds to 67.
    let responses = vec![
        response("q1.1", Dimension::Policy, 3),
        response("q1.2", Dimension::Policy, 3),
        response("q1.3", Dimension::Policy, 4),
    ];
    assert_eq!(dimension_score(&responses, Dimension::Policy), 67);

    // 15/40 of the maximum is exactly 37.5 and rounds up to 38.
    let mut responses: Vec<_> = (0..8)
        .map(|index| response(&format!("synthetic-{index}"), Dimension::Policy, 1))
        .collect();
    responses[0].answer = 5;
    responses[1].answer = 2;
    responses[2].answer = 2;
    assert_eq!(dimension_score(&responses, Dimension::Policy), 38);
}

#[test]
fn unknown_question_ids_score_with_weight_one() {
    let responses = vec![response("no-such-question", Dimension::Vendor, 2)];
    assert_eq!(dimension_score(&responses, Dimension::Vendor), 40);
}

#[test]
fn all_dimension_scores_always_covers_all_seven() {
    let scores = all_dimension_scores(&[]);
    for (_, score) in scores.iter() {
        assert_eq!(*score, 0);
    }

    let responses = vec![response("q4.1", Dimension::Training, 4)];
    let scores = all_dimension_scores(&responses);
    assert_eq!(scores.training, 80);
    assert_eq!(scores.policy, 0);
}

#[test]
fn overall_score_is_unweighted_mean() {
    let mut scores = DimensionScores::default();
    scores.policy = 20;
    scores.risk_management = 40;
    scores.roles = 60;
    scores.training = 80;
    // 200 / 7 = 28.57 -> 29
    assert_eq!(overall_score(&scores), 29);

    assert_eq!(overall_score(&DimensionScores::default()), 0);
}

#[test]
fn maturity_banding_is_exact_at_boundaries() {
    assert_eq!(MaturityLevel::from_score(0), MaturityLevel::AdHoc);
    assert_eq!(MaturityLevel::from_score(20), MaturityLevel::AdHoc);
    assert_eq!(MaturityLevel::from_score(21), MaturityLevel::Developing);
    assert_eq!(MaturityLevel::from_score(40), MaturityLevel::Developing);
    assert_eq!(MaturityLevel::from_score(60), MaturityLevel::Defined);
    assert_eq!(MaturityLevel::from_score(80), MaturityLevel::Managed);
    assert_eq!(MaturityLevel::from_score(81), MaturityLevel::Optimised);
    assert_eq!(MaturityLevel::from_score(100), MaturityLevel::Optimised);
}

#[test]
fn gap_analysis_targets_the_next_band_threshold() {
    let gap = gap_analysis(0);
    assert_eq!(gap.current_level, MaturityLevel::AdHoc);
    assert_eq!(gap.next_level, Some(MaturityLevel::Developing));
    assert_eq!(gap.score_needed, 21);
    assert_eq!(gap.percentage_gap, 21);

    let gap = gap_analysis(60);
    assert_eq!(gap.current_level, MaturityLevel::Defined);
    assert_eq!(gap.next_level, Some(MaturityLevel::Managed));
    assert_eq!(gap.score_needed, 61);
    assert_eq!(gap.percentage_gap, 1);
}

#[test]
fn gap_analysis_is_closed_at_the_top_band() {
    let gap = gap_analysis(95);
    assert_eq!(gap.current_level, MaturityLevel::Optimised);
    assert_eq!(gap.next_level, None);
    assert_eq!(gap.score_needed, 0);
    assert_eq!(gap.percentage_gap, 0);
}

#[test]
fn comparison_deltas_negate_when_arguments_swap() {
    let mut current = DimensionScores::default();
    current.policy = 70;
    current.monitoring = 45;
    let mut previous = DimensionScores::default();
    previous.policy = 50;
    previous.monitoring = 60;

    let forward = compare_scores(&current, &previous);
    let backward = compare_scores(&previous, &current);

    assert_eq!(forward.dimension_deltas.policy, 20);
    assert_eq!(forward.dimension_deltas.monitoring, -15);
    for (dimension, delta) in forward.dimension_deltas.iter() {
        assert_eq!(*backward.dimension_deltas.get(dimension), -delta);
    }
    assert_eq!(forward.overall_delta, -backward.overall_delta);
}

#[test]
fn overall_delta_is_re_derived_from_both_sides() {
    // Uniform 45 vs uniform 60 moves the overall by exactly 15.
    let current = DimensionScores::from_fn(|_| 60);
    let previous = DimensionScores::from_fn(|_| 45);

    let comparison = compare_scores(&current, &previous);
    assert_eq!(comparison.overall_delta, 15);
    assert_eq!(compare_scores(&previous, &current).overall_delta, -15);
}

#[test]
fn assessment_results_compose_scores_level_and_overall() {
    // All 21 questions answered 3: every dimension 60, overall 60, and 60
    // bands down to Defined rather than up to Managed.
    let responses: Vec<_> = crate::catalog::questions()
        .iter()
        .map(|question| response(question.id, question.dimension, 3))
        .collect();

    let results = assessment_results(&responses);
    for (_, score) in results.dimension_scores.iter() {
        assert_eq!(*score, 60);
    }
    assert_eq!(results.overall_score, 60);
    assert_eq!(results.maturity_level, MaturityLevel::Defined);
}
