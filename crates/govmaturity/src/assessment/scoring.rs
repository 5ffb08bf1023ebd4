//! Pure score calculations over response sets.
//!
//! Every function here is total for well-formed input: answer ranges are
//! enforced by the lifecycle store before responses reach this module, and
//! the empty-response case short-circuits to 0 before any division.

use serde::Serialize;

use super::domain::{
    AssessmentResponse, Dimension, DimensionDeltas, DimensionScores, MaturityLevel,
};
use crate::catalog;

/// Score one dimension on a 0-100 scale.
///
/// 0 means "not yet answered", not an error. Otherwise the weighted answer sum
/// over the weighted maximum, rounded half-up. Weights come from the question
/// catalog; unknown question ids weigh 1.
pub fn dimension_score(responses: &[AssessmentResponse], dimension: Dimension) -> u8 {
    let mut total = 0u64;
    let mut max_possible = 0u64;
    for response in responses
        .iter()
        .filter(|response| response.dimension == dimension)
    {
        let weight = u64::from(catalog::question_weight(&response.question_id));
        total += u64::from(response.answer) * weight;
        max_possible += 5 * weight;
    }

    if max_possible == 0 {
        return 0;
    }

    ((total as f64 / max_possible as f64) * 100.0).round() as u8
}

/// Score every dimension; always yields all seven entries.
pub fn all_dimension_scores(responses: &[AssessmentResponse]) -> DimensionScores {
    DimensionScores::from_fn(|dimension| dimension_score(responses, dimension))
}

/// Unweighted mean of the seven dimension scores, rounded half-up.
///
/// Deliberately not weighted by question count: a dimension with zero answers
/// contributes a 0 and drags the overall score down rather than being
/// excluded from the average.
pub fn overall_score(scores: &DimensionScores) -> u8 {
    let sum: u32 = scores.values().map(u32::from).sum();
    (sum as f64 / Dimension::ALL.len() as f64).round() as u8
}

/// What it would take to reach the next maturity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GapAnalysis {
    pub current_level: MaturityLevel,
    pub next_level: Option<MaturityLevel>,
    /// Score at which the next band starts (current band's upper bound + 1).
    pub score_needed: u8,
    /// May be negative when rounding pushed the score past the nominal
    /// threshold; reported as-is.
    pub percentage_gap: i16,
}

pub fn gap_analysis(current_score: u8) -> GapAnalysis {
    let current_level = MaturityLevel::from_score(current_score);

    match current_level.next() {
        None => GapAnalysis {
            current_level,
            next_level: None,
            score_needed: 0,
            percentage_gap: 0,
        },
        Some(next_level) => {
            let score_needed = current_level.upper_bound() + 1;
            GapAnalysis {
                current_level,
                next_level: Some(next_level),
                score_needed,
                percentage_gap: i16::from(score_needed) - i16::from(current_score),
            }
        }
    }
}

/// Per-dimension and overall movement between two score sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreComparison {
    pub dimension_deltas: DimensionDeltas,
    pub overall_delta: i16,
}

/// Compare `current` against `previous`.
///
/// The overall delta is re-derived through [`overall_score`] on both sides
/// rather than averaged from the per-dimension deltas. The two are equivalent
/// under equal-weight averaging and must stay that way.
pub fn compare_scores(current: &DimensionScores, previous: &DimensionScores) -> ScoreComparison {
    let dimension_deltas = DimensionDeltas::from_fn(|dimension| {
        i16::from(*current.get(dimension)) - i16::from(*previous.get(dimension))
    });

    let overall_delta = i16::from(overall_score(current)) - i16::from(overall_score(previous));

    ScoreComparison {
        dimension_deltas,
        overall_delta,
    }
}

/// The complete set of derived fields persisted on an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentResults {
    pub dimension_scores: DimensionScores,
    pub overall_score: u8,
    pub maturity_level: MaturityLevel,
}

/// The single composition the lifecycle store calls on every response
/// mutation; no other code path writes derived score fields.
pub fn assessment_results(responses: &[AssessmentResponse]) -> AssessmentResults {
    let dimension_scores = all_dimension_scores(responses);
    let overall = overall_score(&dimension_scores);

    AssessmentResults {
        dimension_scores,
        overall_score: overall,
        maturity_level: MaturityLevel::from_score(overall),
    }
}
