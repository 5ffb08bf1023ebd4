//! Assessment scoring and lifecycle.
//!
//! `scoring` holds the pure calculation core; `store` owns the draft/submit
//! state machine and persistence; `history` derives the dashboard and
//! time-series views; `router` exposes it all over HTTP.

pub mod domain;
pub mod history;
pub mod router;
pub mod scoring;
pub mod storage;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    Assessment, AssessmentId, AssessmentResponse, AssessmentStatus, Dimension, DimensionDeltas,
    DimensionMap, DimensionScores, MaturityLevel, Organisation, ResponseId, MAX_NOTE_CHARS,
};
pub use history::{AssessmentComparison, ComparisonSide, DashboardSummary, HistoryPoint};
pub use router::assessment_router;
pub use scoring::{AssessmentResults, GapAnalysis, ScoreComparison};
pub use storage::{
    FileSnapshotStorage, MemorySnapshotStorage, SnapshotSlot, SnapshotStorage, StorageError,
};
pub use store::{AssessmentStore, ResponseInput, StoreError, ValidationError};
