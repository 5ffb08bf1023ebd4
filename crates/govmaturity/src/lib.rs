//! Scoring and lifecycle engine for AI governance maturity self-assessments.
//!
//! The crate is split along the seams the service is deployed with: a static
//! reference [`catalog`] of survey questions and recommendations, the
//! [`assessment`] module owning scoring and the draft/submit lifecycle, and
//! the ambient [`config`]/[`telemetry`]/[`error`] plumbing shared with the
//! API service.

pub mod assessment;
pub mod catalog;
pub mod config;
pub mod error;
pub mod telemetry;
