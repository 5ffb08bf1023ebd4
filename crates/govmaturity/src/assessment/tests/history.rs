use chrono::{Duration, Utc};

use super::common::{completed_assessment, store};
use crate::assessment::domain::{AssessmentId, MaturityLevel};
use crate::assessment::store::StoreError;
use uuid::Uuid;

#[test]
fn dashboard_summary_is_empty_before_any_submission() {
    let store = store();
    // Drafts never feed the dashboard.
    store
        .create_assessment("Sam Archer", "sam@example.org")
        .expect("created");

    let summary = store.dashboard_summary(Utc::now());
    assert!(summary.current_assessment.is_none());
    assert!(summary.previous_assessment.is_none());
    assert_eq!(summary.total_assessments, 0);
    assert_eq!(summary.days_since_last_assessment, None);
}

#[test]
fn dashboard_summary_tracks_the_two_most_recent_submissions() {
    let store = store();
    let oldest = completed_assessment(&store, 2);
    let middle = completed_assessment(&store, 3);
    let newest = completed_assessment(&store, 4);

    let summary = store.dashboard_summary(Utc::now());
    assert_eq!(
        summary.current_assessment.as_ref().map(|a| a.id),
        Some(newest.id)
    );
    assert_eq!(
        summary.previous_assessment.as_ref().map(|a| a.id),
        Some(middle.id)
    );
    assert_eq!(summary.total_assessments, 3);
    assert_ne!(
        summary.previous_assessment.as_ref().map(|a| a.id),
        Some(oldest.id)
    );
}

#[test]
fn days_since_last_assessment_is_floor_of_elapsed_days() {
    let store = store();
    let completed = completed_assessment(&store, 3);

    let not_quite_two_days = completed.assessment_date + Duration::hours(47);
    let summary = store.dashboard_summary(not_quite_two_days);
    assert_eq!(summary.days_since_last_assessment, Some(1));

    let summary = store.dashboard_summary(completed.assessment_date + Duration::days(30));
    assert_eq!(summary.days_since_last_assessment, Some(30));
}

#[test]
fn history_is_chronological_oldest_first() {
    let store = store();
    let first = completed_assessment(&store, 1);
    let second = completed_assessment(&store, 3);
    let third = completed_assessment(&store, 5);

    let history = store.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].overall_score, first.overall_score);
    assert_eq!(history[1].overall_score, second.overall_score);
    assert_eq!(history[2].overall_score, third.overall_score);
    assert_eq!(history[0].date, first.assessment_date.date_naive());
    assert_eq!(history[2].maturity_level, MaturityLevel::Optimised);
}

#[test]
fn history_skips_drafts() {
    let store = store();
    store
        .create_assessment("Sam Archer", "sam@example.org")
        .expect("created");
    completed_assessment(&store, 3);

    assert_eq!(store.history().len(), 1);
}

#[test]
fn comparison_reports_movement_between_two_assessments() {
    let store = store();
    let previous = completed_assessment(&store, 2);
    let current = completed_assessment(&store, 4);

    let comparison = store
        .compare_assessments(current.id, previous.id)
        .expect("both present");

    assert_eq!(comparison.current.id, current.id);
    assert_eq!(comparison.previous.id, previous.id);
    // Uniform answers: 40% -> 80% in every dimension.
    for (_, delta) in comparison.dimension_deltas.iter() {
        assert_eq!(*delta, 40);
    }
    assert_eq!(comparison.overall_delta, 40);
}

#[test]
fn comparison_requires_both_assessments_to_exist() {
    let store = store();
    let present = completed_assessment(&store, 3);
    let missing = AssessmentId(Uuid::new_v4());

    assert!(matches!(
        store.compare_assessments(present.id, missing),
        Err(StoreError::NotFound)
    ));
    assert!(matches!(
        store.compare_assessments(missing, present.id),
        Err(StoreError::NotFound)
    ));
}
