//! Assessment lifecycle management: draft/submit state machine, response
//! validation, rescoring, and best-effort snapshot persistence.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use super::domain::{
    Assessment, AssessmentId, AssessmentResponse, AssessmentStatus, Dimension, MaturityLevel,
    Organisation, ResponseId, MAX_NOTE_CHARS,
};
use super::scoring;
use super::storage::{SnapshotSlot, SnapshotStorage};
use crate::catalog;

/// User-input problem; the message is surfaced to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("answer must be an integer between 1 and 5, got {answer}")]
    AnswerOutOfRange { answer: u8 },
    #[error("notes cannot exceed {MAX_NOTE_CHARS} characters (got {length})")]
    NotesTooLong { length: usize },
    #[error("completed-by name and email are required")]
    MissingSubmitter,
    #[error("response dimension does not match question '{question_id}'")]
    DimensionMismatch { question_id: String },
    #[error("duplicate response for question '{question_id}'")]
    DuplicateQuestion { question_id: String },
    #[error("assessment must have all {expected} questions answered before submitting (got {answered})")]
    Incomplete { answered: usize, expected: usize },
}

/// Uniform error type for every lifecycle operation.
///
/// The source system mixed throw-based validation errors with silent sentinel
/// returns for illegal-state mutations; here all failure kinds flow through
/// one enum while the observable outcome (nothing mutated) stays the same.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("assessment not found")]
    NotFound,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("assessment is completed and can no longer be modified")]
    CompletedImmutable,
}

/// Incoming answer for one question, before ids are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseInput {
    pub question_id: String,
    pub dimension: Dimension,
    pub answer: u8,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ResponseInput {
    fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=5).contains(&self.answer) {
            return Err(ValidationError::AnswerOutOfRange {
                answer: self.answer,
            });
        }

        if let Some(notes) = &self.notes {
            let length = notes.chars().count();
            if length > MAX_NOTE_CHARS {
                return Err(ValidationError::NotesTooLong { length });
            }
        }

        // Known question ids must carry the right dimension; unknown ids are
        // tolerated (they score with weight 1).
        if let Some(question) = catalog::question_by_id(&self.question_id) {
            if question.dimension != self.dimension {
                return Err(ValidationError::DimensionMismatch {
                    question_id: self.question_id.clone(),
                });
            }
        }

        Ok(())
    }
}

#[derive(Default)]
struct StoreState {
    loaded: bool,
    assessments: Vec<Assessment>,
    organisation: Organisation,
}

/// Repository owning the mutable assessment collection.
///
/// Explicitly constructed with an injected snapshot backend; interior
/// locking makes it safe to share behind an `Arc` within one process, but
/// the design assumes a single logical writer. A multi-writer deployment
/// needs its own per-assessment mutual exclusion on top.
pub struct AssessmentStore<S> {
    storage: S,
    state: Mutex<StoreState>,
}

impl<S: SnapshotStorage> AssessmentStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: Mutex::new(StoreState::default()),
        }
    }

    /// Lock the state, hydrating from storage on first access. Corrupt or
    /// unreadable snapshots load as empty; in-memory state is authoritative
    /// from then on.
    fn state(&self) -> MutexGuard<'_, StoreState> {
        let mut guard = self.state.lock().expect("store mutex poisoned");
        if !guard.loaded {
            guard.loaded = true;

            match self.storage.load(SnapshotSlot::Assessments) {
                Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                    Ok(assessments) => guard.assessments = assessments,
                    Err(err) => warn!(%err, "discarding unreadable assessment snapshot"),
                },
                Ok(None) => {}
                Err(err) => warn!(%err, "assessment snapshot unavailable, starting empty"),
            }

            match self.storage.load(SnapshotSlot::Organisation) {
                Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                    Ok(organisation) => guard.organisation = organisation,
                    Err(err) => warn!(%err, "discarding unreadable organisation snapshot"),
                },
                Ok(None) => {}
                Err(err) => warn!(%err, "organisation snapshot unavailable, using default"),
            }
        }
        guard
    }

    /// Write both slots in full. Failures are logged and swallowed;
    /// durability is best-effort by design.
    fn persist(&self, state: &StoreState) {
        match serde_json::to_vec(&state.assessments) {
            Ok(bytes) => {
                if let Err(err) = self.storage.store(SnapshotSlot::Assessments, &bytes) {
                    warn!(%err, "failed to persist assessment snapshot");
                }
            }
            Err(err) => warn!(%err, "failed to serialize assessment snapshot"),
        }

        match serde_json::to_vec(&state.organisation) {
            Ok(bytes) => {
                if let Err(err) = self.storage.store(SnapshotSlot::Organisation, &bytes) {
                    warn!(%err, "failed to persist organisation snapshot");
                }
            }
            Err(err) => warn!(%err, "failed to serialize organisation snapshot"),
        }
    }

    // Organisation record

    pub fn organisation(&self) -> Organisation {
        self.state().organisation.clone()
    }

    pub fn rename_organisation(&self, name: &str) -> Organisation {
        let mut state = self.state();
        state.organisation.name = name.to_string();
        state.organisation.updated_at = Utc::now();
        self.persist(&state);
        state.organisation.clone()
    }

    // Lifecycle operations

    /// Create a new Draft assessment with zero responses and all scores 0.
    pub fn create_assessment(
        &self,
        completed_by: &str,
        completed_by_email: &str,
    ) -> Result<Assessment, StoreError> {
        if completed_by.trim().is_empty() || completed_by_email.trim().is_empty() {
            return Err(ValidationError::MissingSubmitter.into());
        }

        let now = Utc::now();
        let mut state = self.state();
        let assessment = Assessment {
            id: AssessmentId::generate(),
            organisation_id: state.organisation.id.clone(),
            completed_by: completed_by.to_string(),
            completed_by_email: completed_by_email.to_string(),
            assessment_date: now,
            dimension_scores: Default::default(),
            overall_score: 0,
            // Score 0 bands to the lowest level.
            maturity_level: MaturityLevel::AdHoc,
            status: AssessmentStatus::Draft,
            responses: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        state.assessments.push(assessment.clone());
        self.persist(&state);
        Ok(assessment)
    }

    /// Upsert one response on a Draft assessment and rescore.
    ///
    /// Matched by question id; re-answering re-uses the existing response id.
    pub fn add_or_update_response(
        &self,
        assessment_id: AssessmentId,
        question_id: &str,
        dimension: Dimension,
        answer: u8,
        notes: Option<String>,
    ) -> Result<AssessmentResponse, StoreError> {
        let input = ResponseInput {
            question_id: question_id.to_string(),
            dimension,
            answer,
            notes,
        };
        input.validate()?;

        let mut state = self.state();
        let assessment = Self::draft_mut(&mut state, assessment_id, "update response")?;

        let existing_id = assessment
            .responses
            .iter()
            .find(|response| response.question_id == input.question_id)
            .map(|response| response.id);

        let response = AssessmentResponse {
            id: existing_id.unwrap_or_else(ResponseId::generate),
            assessment_id,
            question_id: input.question_id,
            dimension: input.dimension,
            answer: input.answer,
            notes: input.notes.unwrap_or_default(),
        };

        match assessment
            .responses
            .iter_mut()
            .find(|candidate| candidate.id == response.id)
        {
            Some(slot) => *slot = response.clone(),
            None => assessment.responses.push(response.clone()),
        }

        rescore(assessment, Utc::now());
        self.persist(&state);
        Ok(response)
    }

    /// Replace the full response set of a Draft assessment and rescore.
    pub fn update_assessment(
        &self,
        assessment_id: AssessmentId,
        inputs: Vec<ResponseInput>,
    ) -> Result<Assessment, StoreError> {
        for input in &inputs {
            input.validate()?;
        }
        for (index, input) in inputs.iter().enumerate() {
            if inputs[..index]
                .iter()
                .any(|other| other.question_id == input.question_id)
            {
                return Err(ValidationError::DuplicateQuestion {
                    question_id: input.question_id.clone(),
                }
                .into());
            }
        }

        let mut state = self.state();
        let assessment = Self::draft_mut(&mut state, assessment_id, "bulk update")?;

        let previous = std::mem::take(&mut assessment.responses);
        assessment.responses = inputs
            .into_iter()
            .map(|input| {
                let existing_id = previous
                    .iter()
                    .find(|response| response.question_id == input.question_id)
                    .map(|response| response.id);
                AssessmentResponse {
                    id: existing_id.unwrap_or_else(ResponseId::generate),
                    assessment_id,
                    question_id: input.question_id,
                    dimension: input.dimension,
                    answer: input.answer,
                    notes: input.notes.unwrap_or_default(),
                }
            })
            .collect();

        rescore(assessment, Utc::now());
        let snapshot = assessment.clone();
        self.persist(&state);
        Ok(snapshot)
    }

    /// Draft -> Completed. Requires every catalog question answered; stamps
    /// `assessment_date` to the submission instant, so the date reflects
    /// "when finalized", not "when started".
    pub fn submit_assessment(&self, assessment_id: AssessmentId) -> Result<Assessment, StoreError> {
        let mut state = self.state();
        let assessment = Self::draft_mut(&mut state, assessment_id, "submit")?;

        let expected = catalog::total_questions();
        let answered = assessment.responses.len();
        if answered != expected {
            return Err(ValidationError::Incomplete { answered, expected }.into());
        }

        let now = Utc::now();
        assessment.status = AssessmentStatus::Completed;
        assessment.assessment_date = now;
        assessment.updated_at = now;

        let snapshot = assessment.clone();
        self.persist(&state);
        Ok(snapshot)
    }

    /// Remove a Draft assessment. Completed assessments are retained
    /// permanently.
    pub fn delete_assessment(&self, assessment_id: AssessmentId) -> Result<(), StoreError> {
        let mut state = self.state();
        let index = state
            .assessments
            .iter()
            .position(|assessment| assessment.id == assessment_id)
            .ok_or(StoreError::NotFound)?;

        if !state.assessments[index].is_draft() {
            warn!(%assessment_id, "refusing to delete a completed assessment");
            return Err(StoreError::CompletedImmutable);
        }

        state.assessments.remove(index);
        self.persist(&state);
        Ok(())
    }

    // Reads

    pub fn assessment(&self, assessment_id: AssessmentId) -> Option<Assessment> {
        self.state()
            .assessments
            .iter()
            .find(|assessment| assessment.id == assessment_id)
            .cloned()
    }

    /// All assessments, most recent assessment date first.
    pub fn all_assessments(&self) -> Vec<Assessment> {
        let mut assessments = self.state().assessments.clone();
        assessments.sort_by(|a, b| b.assessment_date.cmp(&a.assessment_date));
        assessments
    }

    pub fn completed_assessments(&self) -> Vec<Assessment> {
        self.all_assessments()
            .into_iter()
            .filter(|assessment| assessment.status == AssessmentStatus::Completed)
            .collect()
    }

    pub fn draft_assessments(&self) -> Vec<Assessment> {
        self.all_assessments()
            .into_iter()
            .filter(Assessment::is_draft)
            .collect()
    }

    /// Most recently finalized Completed assessment, if any.
    pub fn latest_assessment(&self) -> Option<Assessment> {
        self.completed_assessments().into_iter().next()
    }

    fn draft_mut<'a>(
        state: &'a mut StoreState,
        assessment_id: AssessmentId,
        operation: &str,
    ) -> Result<&'a mut Assessment, StoreError> {
        let assessment = state
            .assessments
            .iter_mut()
            .find(|assessment| assessment.id == assessment_id)
            .ok_or(StoreError::NotFound)?;

        if !assessment.is_draft() {
            warn!(%assessment_id, operation, "rejecting mutation of a completed assessment");
            return Err(StoreError::CompletedImmutable);
        }

        Ok(assessment)
    }
}

/// Recompute every derived score field from the response set. This is the
/// only path that writes them.
fn rescore(assessment: &mut Assessment, now: DateTime<Utc>) {
    let results = scoring::assessment_results(&assessment.responses);
    assessment.dimension_scores = results.dimension_scores;
    assessment.overall_score = results.overall_score;
    assessment.maturity_level = results.maturity_level;
    assessment.updated_at = now;
}
