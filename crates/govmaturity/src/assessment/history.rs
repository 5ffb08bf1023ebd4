//! Read-only derivations over the set of completed assessments: dashboard
//! summary, chronological history for charting, and pairwise comparison.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::domain::{
    Assessment, AssessmentId, DimensionDeltas, DimensionScores, MaturityLevel,
};
use super::scoring;
use super::store::{AssessmentStore, StoreError};
use super::storage::SnapshotStorage;

/// Headline view for the dashboard landing page. All fields are `None`/zero
/// when nothing has been completed yet.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub current_assessment: Option<Assessment>,
    pub previous_assessment: Option<Assessment>,
    pub total_assessments: usize,
    pub days_since_last_assessment: Option<i64>,
}

/// One completed assessment flattened for time-series charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub overall_score: u8,
    pub maturity_level: MaturityLevel,
    pub dimension_scores: DimensionScores,
}

/// One side of a pairwise comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSide {
    pub id: AssessmentId,
    pub date: DateTime<Utc>,
    pub overall_score: u8,
    pub maturity_level: MaturityLevel,
    pub dimension_scores: DimensionScores,
}

impl From<&Assessment> for ComparisonSide {
    fn from(assessment: &Assessment) -> Self {
        Self {
            id: assessment.id,
            date: assessment.assessment_date,
            overall_score: assessment.overall_score,
            maturity_level: assessment.maturity_level,
            dimension_scores: assessment.dimension_scores,
        }
    }
}

/// Score movement between two stored assessments.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentComparison {
    pub current: ComparisonSide,
    pub previous: ComparisonSide,
    pub dimension_deltas: DimensionDeltas,
    pub overall_delta: i16,
}

impl<S: SnapshotStorage> AssessmentStore<S> {
    /// Most recent completed assessment, the one immediately before it, the
    /// completed count, and floor days elapsed since the latest finalization.
    pub fn dashboard_summary(&self, now: DateTime<Utc>) -> DashboardSummary {
        let completed = self.completed_assessments();
        let current = completed.first().cloned();
        let previous = completed.get(1).cloned();

        let days_since_last_assessment = current
            .as_ref()
            .map(|assessment| (now - assessment.assessment_date).num_days());

        DashboardSummary {
            current_assessment: current,
            previous_assessment: previous,
            total_assessments: completed.len(),
            days_since_last_assessment,
        }
    }

    /// Every completed assessment, oldest first regardless of store order.
    pub fn history(&self) -> Vec<HistoryPoint> {
        let mut completed = self.completed_assessments();
        completed.reverse();
        completed
            .iter()
            .map(|assessment| HistoryPoint {
                date: assessment.assessment_date.date_naive(),
                overall_score: assessment.overall_score,
                maturity_level: assessment.maturity_level,
                dimension_scores: assessment.dimension_scores,
            })
            .collect()
    }

    /// Compare two stored assessments by id.
    pub fn compare_assessments(
        &self,
        current_id: AssessmentId,
        previous_id: AssessmentId,
    ) -> Result<AssessmentComparison, StoreError> {
        let current = self.assessment(current_id).ok_or(StoreError::NotFound)?;
        let previous = self.assessment(previous_id).ok_or(StoreError::NotFound)?;

        let comparison =
            scoring::compare_scores(&current.dimension_scores, &previous.dimension_scores);

        Ok(AssessmentComparison {
            current: ComparisonSide::from(&current),
            previous: ComparisonSide::from(&previous),
            dimension_deltas: comparison.dimension_deltas,
            overall_delta: comparison.overall_delta,
        })
    }
}
