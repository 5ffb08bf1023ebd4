use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;
use uuid::Uuid;

use crate::assessment::domain::{
    Assessment, AssessmentId, AssessmentResponse, Dimension, ResponseId,
};
use crate::assessment::router::assessment_router;
use crate::assessment::storage::MemorySnapshotStorage;
use crate::assessment::store::AssessmentStore;
use crate::catalog;

pub(super) fn store() -> AssessmentStore<MemorySnapshotStorage> {
    AssessmentStore::new(MemorySnapshotStorage::default())
}

pub(super) fn store_with(storage: MemorySnapshotStorage) -> AssessmentStore<MemorySnapshotStorage> {
    AssessmentStore::new(storage)
}

/// A detached response for exercising the pure scoring functions directly.
pub(super) fn response(
    question_id: &str,
    dimension: Dimension,
    answer: u8,
) -> AssessmentResponse {
    AssessmentResponse {
        id: ResponseId(Uuid::new_v4()),
        assessment_id: AssessmentId(Uuid::new_v4()),
        question_id: question_id.to_string(),
        dimension,
        answer,
        notes: String::new(),
    }
}

/// Answer the first `count` catalog questions with a uniform answer.
pub(super) fn answer_questions(
    store: &AssessmentStore<MemorySnapshotStorage>,
    assessment_id: AssessmentId,
    count: usize,
    answer: u8,
) {
    for question in catalog::questions().iter().take(count) {
        store
            .add_or_update_response(
                assessment_id,
                question.id,
                question.dimension,
                answer,
                None,
            )
            .expect("response accepted");
    }
}

/// Create, fully answer, and submit an assessment.
pub(super) fn completed_assessment(
    store: &AssessmentStore<MemorySnapshotStorage>,
    answer: u8,
) -> Assessment {
    let assessment = store
        .create_assessment("Jordan Hale", "jordan@example.org")
        .expect("assessment created");
    answer_questions(store, assessment.id, catalog::total_questions(), answer);
    store
        .submit_assessment(assessment.id)
        .expect("submission accepted")
}

pub(super) fn test_router(store: AssessmentStore<MemorySnapshotStorage>) -> axum::Router {
    assessment_router(Arc::new(store))
}

pub(super) fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
