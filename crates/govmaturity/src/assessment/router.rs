use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::domain::{AssessmentId, Dimension};
use super::scoring::{self, GapAnalysis};
use super::store::{AssessmentStore, ResponseInput, StoreError};
use super::storage::SnapshotStorage;
use crate::catalog::{self, Question, Recommendation};

/// Router builder exposing the assessment API.
pub fn assessment_router<S>(store: Arc<AssessmentStore<S>>) -> Router
where
    S: SnapshotStorage + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessments",
            get(list_handler::<S>).post(create_handler::<S>),
        )
        .route("/api/v1/assessments/latest", get(latest_handler::<S>))
        .route(
            "/api/v1/assessments/:assessment_id",
            get(fetch_handler::<S>)
                .put(update_handler::<S>)
                .delete(delete_handler::<S>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/submit",
            post(submit_handler::<S>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/responses",
            post(respond_handler::<S>),
        )
        .route(
            "/api/v1/organisation",
            get(organisation_handler::<S>).put(rename_organisation_handler::<S>),
        )
        .route("/api/v1/questions", get(questions_handler))
        .route(
            "/api/v1/questions/:dimension",
            get(dimension_questions_handler),
        )
        .route("/api/v1/recommendations", get(recommendations_handler))
        .route(
            "/api/v1/recommendations/for/:assessment_id",
            get(recommendation_plan_handler::<S>),
        )
        .route("/api/v1/dashboard/summary", get(summary_handler::<S>))
        .route("/api/v1/dashboard/history", get(history_handler::<S>))
        .route(
            "/api/v1/dashboard/comparison",
            get(comparison_handler::<S>),
        )
        .with_state(store)
}

fn store_error_response(error: StoreError) -> Response {
    let status = match &error {
        StoreError::NotFound => StatusCode::NOT_FOUND,
        StoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StoreError::CompletedImmutable => StatusCode::CONFLICT,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateAssessmentRequest {
    pub(crate) completed_by: String,
    pub(crate) completed_by_email: String,
}

pub(crate) async fn create_handler<S: SnapshotStorage>(
    State(store): State<Arc<AssessmentStore<S>>>,
    Json(payload): Json<CreateAssessmentRequest>,
) -> Response {
    match store.create_assessment(&payload.completed_by, &payload.completed_by_email) {
        Ok(assessment) => (StatusCode::CREATED, Json(assessment)).into_response(),
        Err(error) => store_error_response(error),
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListParams {
    pub(crate) status: Option<String>,
}

pub(crate) async fn list_handler<S: SnapshotStorage>(
    State(store): State<Arc<AssessmentStore<S>>>,
    Query(params): Query<ListParams>,
) -> Response {
    match params.status.as_deref() {
        None => Json(store.all_assessments()).into_response(),
        Some("draft") => Json(store.draft_assessments()).into_response(),
        Some("completed") => Json(store.completed_assessments()).into_response(),
        Some(other) => {
            let payload = json!({ "error": format!("unknown status filter '{other}'") });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn latest_handler<S: SnapshotStorage>(
    State(store): State<Arc<AssessmentStore<S>>>,
) -> Response {
    Json(store.latest_assessment()).into_response()
}

pub(crate) async fn fetch_handler<S: SnapshotStorage>(
    State(store): State<Arc<AssessmentStore<S>>>,
    Path(assessment_id): Path<Uuid>,
) -> Response {
    match store.assessment(AssessmentId(assessment_id)) {
        Some(assessment) => Json(assessment).into_response(),
        None => store_error_response(StoreError::NotFound),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateAssessmentRequest {
    pub(crate) responses: Vec<ResponseInput>,
}

pub(crate) async fn update_handler<S: SnapshotStorage>(
    State(store): State<Arc<AssessmentStore<S>>>,
    Path(assessment_id): Path<Uuid>,
    Json(payload): Json<UpdateAssessmentRequest>,
) -> Response {
    match store.update_assessment(AssessmentId(assessment_id), payload.responses) {
        Ok(assessment) => Json(assessment).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn delete_handler<S: SnapshotStorage>(
    State(store): State<Arc<AssessmentStore<S>>>,
    Path(assessment_id): Path<Uuid>,
) -> Response {
    match store.delete_assessment(AssessmentId(assessment_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn submit_handler<S: SnapshotStorage>(
    State(store): State<Arc<AssessmentStore<S>>>,
    Path(assessment_id): Path<Uuid>,
) -> Response {
    match store.submit_assessment(AssessmentId(assessment_id)) {
        Ok(assessment) => Json(assessment).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn respond_handler<S: SnapshotStorage>(
    State(store): State<Arc<AssessmentStore<S>>>,
    Path(assessment_id): Path<Uuid>,
    Json(payload): Json<ResponseInput>,
) -> Response {
    match store.add_or_update_response(
        AssessmentId(assessment_id),
        &payload.question_id,
        payload.dimension,
        payload.answer,
        payload.notes,
    ) {
        Ok(response) => Json(response).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn organisation_handler<S: SnapshotStorage>(
    State(store): State<Arc<AssessmentStore<S>>>,
) -> Response {
    Json(store.organisation()).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct RenameOrganisationRequest {
    pub(crate) name: String,
}

pub(crate) async fn rename_organisation_handler<S: SnapshotStorage>(
    State(store): State<Arc<AssessmentStore<S>>>,
    Json(payload): Json<RenameOrganisationRequest>,
) -> Response {
    let name = payload.name.trim();
    if name.is_empty() {
        let payload = json!({ "error": "organisation name cannot be empty" });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }
    Json(store.rename_organisation(name)).into_response()
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct DimensionQuestionsView {
    pub(crate) dimension: Dimension,
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) questions: Vec<&'static Question>,
}

fn dimension_questions(dimension: Dimension) -> DimensionQuestionsView {
    DimensionQuestionsView {
        dimension,
        name: dimension.name(),
        description: dimension.description(),
        questions: catalog::questions_for(dimension),
    }
}

pub(crate) async fn questions_handler() -> Json<Vec<DimensionQuestionsView>> {
    Json(Dimension::ALL.into_iter().map(dimension_questions).collect())
}

pub(crate) async fn dimension_questions_handler(Path(dimension): Path<String>) -> Response {
    match Dimension::from_key(&dimension) {
        Some(dimension) => Json(dimension_questions(dimension)).into_response(),
        None => {
            let payload = json!({ "error": format!("unknown dimension '{dimension}'") });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecommendationParams {
    #[serde(default)]
    pub(crate) quick_wins: bool,
    pub(crate) dimension: Option<String>,
}

pub(crate) async fn recommendations_handler(
    Query(params): Query<RecommendationParams>,
) -> Response {
    let mut entries: Vec<&'static Recommendation> = if params.quick_wins {
        catalog::quick_wins()
    } else {
        catalog::recommendations().iter().collect()
    };

    if let Some(raw) = params.dimension.as_deref() {
        match Dimension::from_key(raw) {
            Some(dimension) => entries.retain(|rec| rec.dimension == dimension),
            None => {
                let payload = json!({ "error": format!("unknown dimension '{raw}'") });
                return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
            }
        }
    }

    Json(entries).into_response()
}

/// Guidance for one dimension of a specific assessment.
#[derive(Debug, serde::Serialize)]
pub(crate) struct DimensionGuidance {
    pub(crate) dimension: Dimension,
    pub(crate) score: u8,
    pub(crate) gap: GapAnalysis,
    pub(crate) recommendations: Vec<&'static Recommendation>,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct RecommendationPlan {
    pub(crate) assessment_id: AssessmentId,
    pub(crate) overall_score: u8,
    pub(crate) recommendations: Vec<&'static Recommendation>,
    pub(crate) dimensions: Vec<DimensionGuidance>,
}

pub(crate) async fn recommendation_plan_handler<S: SnapshotStorage>(
    State(store): State<Arc<AssessmentStore<S>>>,
    Path(assessment_id): Path<Uuid>,
) -> Response {
    let Some(assessment) = store.assessment(AssessmentId(assessment_id)) else {
        return store_error_response(StoreError::NotFound);
    };

    let scores = assessment.dimension_scores;
    let dimensions = scores
        .iter()
        .map(|(dimension, score)| {
            let gap = scoring::gap_analysis(*score);
            DimensionGuidance {
                dimension,
                score: *score,
                recommendations: catalog::recommendations_for_level(dimension, gap.current_level),
                gap,
            }
        })
        .collect();

    Json(RecommendationPlan {
        assessment_id: assessment.id,
        overall_score: assessment.overall_score,
        recommendations: catalog::recommendations_for_scores(&scores),
        dimensions,
    })
    .into_response()
}

pub(crate) async fn summary_handler<S: SnapshotStorage>(
    State(store): State<Arc<AssessmentStore<S>>>,
) -> Response {
    Json(store.dashboard_summary(Utc::now())).into_response()
}

pub(crate) async fn history_handler<S: SnapshotStorage>(
    State(store): State<Arc<AssessmentStore<S>>>,
) -> Response {
    Json(store.history()).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct ComparisonParams {
    pub(crate) current: Uuid,
    pub(crate) previous: Uuid,
}

pub(crate) async fn comparison_handler<S: SnapshotStorage>(
    State(store): State<Arc<AssessmentStore<S>>>,
    Query(params): Query<ComparisonParams>,
) -> Response {
    match store.compare_assessments(
        AssessmentId(params.current),
        AssessmentId(params.previous),
    ) {
        Ok(comparison) => Json(comparison).into_response(),
        Err(error) => store_error_response(error),
    }
}
