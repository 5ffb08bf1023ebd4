//! End-to-end walkthrough of the assessment lifecycle against the on-disk
//! snapshot backend.

use chrono::Utc;
use govmaturity::assessment::{
    AssessmentStatus, AssessmentStore, FileSnapshotStorage, MaturityLevel, StoreError,
    ValidationError,
};
use govmaturity::catalog;

fn open_store(dir: &std::path::Path) -> AssessmentStore<FileSnapshotStorage> {
    AssessmentStore::new(FileSnapshotStorage::new(dir))
}

#[test]
fn full_assessment_cycle_persists_across_reopen() {
    let data_dir = tempfile::tempdir().expect("temp dir");

    let submitted_id = {
        let store = open_store(data_dir.path());
        let assessment = store
            .create_assessment("Priya Nandakumar", "priya@example.org")
            .expect("created");
        assert_eq!(assessment.status, AssessmentStatus::Draft);

        for question in catalog::questions() {
            store
                .add_or_update_response(
                    assessment.id,
                    question.id,
                    question.dimension,
                    3,
                    Some(format!("current practice for {}", question.id)),
                )
                .expect("response accepted");
        }

        let submitted = store.submit_assessment(assessment.id).expect("submitted");
        assert_eq!(submitted.status, AssessmentStatus::Completed);
        assert_eq!(submitted.overall_score, 60);
        assert_eq!(submitted.maturity_level, MaturityLevel::Defined);
        for (_, score) in submitted.dimension_scores.iter() {
            assert_eq!(*score, 60);
        }
        submitted.id
    };

    // A fresh store over the same directory sees the submitted assessment.
    let reopened = open_store(data_dir.path());
    let assessment = reopened.assessment(submitted_id).expect("rehydrated");
    assert_eq!(assessment.status, AssessmentStatus::Completed);
    assert_eq!(assessment.responses.len(), catalog::total_questions());

    let summary = reopened.dashboard_summary(Utc::now());
    assert_eq!(summary.total_assessments, 1);
    assert_eq!(
        summary.current_assessment.map(|current| current.id),
        Some(submitted_id)
    );
    assert_eq!(summary.days_since_last_assessment, Some(0));

    let history = reopened.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].overall_score, 60);
}

#[test]
fn repeat_assessments_feed_comparison_and_recommendations() {
    let data_dir = tempfile::tempdir().expect("temp dir");
    let store = open_store(data_dir.path());

    let mut submitted = Vec::new();
    for answer in [2u8, 4] {
        let assessment = store
            .create_assessment("Priya Nandakumar", "priya@example.org")
            .expect("created");
        for question in catalog::questions() {
            store
                .add_or_update_response(assessment.id, question.id, question.dimension, answer, None)
                .expect("response accepted");
        }
        submitted.push(store.submit_assessment(assessment.id).expect("submitted"));
    }

    let comparison = store
        .compare_assessments(submitted[1].id, submitted[0].id)
        .expect("both stored");
    assert_eq!(comparison.overall_delta, 40);
    for (_, delta) in comparison.dimension_deltas.iter() {
        assert_eq!(*delta, 40);
    }

    // At a uniform 80 every dimension sits in the Managed band.
    let plan = catalog::recommendations_for_scores(&submitted[1].dimension_scores);
    assert!(plan
        .iter()
        .all(|rec| rec.current_level == MaturityLevel::Managed));
}

#[test]
fn abandoned_drafts_never_reach_history() {
    let data_dir = tempfile::tempdir().expect("temp dir");
    let store = open_store(data_dir.path());

    let draft = store
        .create_assessment("Priya Nandakumar", "priya@example.org")
        .expect("created");

    match store.submit_assessment(draft.id) {
        Err(StoreError::Validation(ValidationError::Incomplete { answered: 0, .. })) => {}
        other => panic!("expected incomplete error, got {other:?}"),
    }

    store.delete_assessment(draft.id).expect("draft removed");

    let reopened = open_store(data_dir.path());
    assert!(reopened.all_assessments().is_empty());
    assert!(reopened.history().is_empty());
}
