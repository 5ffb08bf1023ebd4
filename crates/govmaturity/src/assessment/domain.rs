use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of the free-text note attached to a response.
pub const MAX_NOTE_CHARS: usize = 500;

/// The seven governance practice areas every assessment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Policy,
    RiskManagement,
    Roles,
    Training,
    Monitoring,
    Vendor,
    Improvement,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Policy,
        Dimension::RiskManagement,
        Dimension::Roles,
        Dimension::Training,
        Dimension::Monitoring,
        Dimension::Vendor,
        Dimension::Improvement,
    ];

    /// Stable key used in routes and serialized payloads.
    pub const fn key(self) -> &'static str {
        match self {
            Dimension::Policy => "policy",
            Dimension::RiskManagement => "risk_management",
            Dimension::Roles => "roles",
            Dimension::Training => "training",
            Dimension::Monitoring => "monitoring",
            Dimension::Vendor => "vendor",
            Dimension::Improvement => "improvement",
        }
    }

    /// Display name shown to assessors.
    pub const fn name(self) -> &'static str {
        match self {
            Dimension::Policy => "Policy & Documentation",
            Dimension::RiskManagement => "Risk Management",
            Dimension::Roles => "Roles & Accountability",
            Dimension::Training => "Training & Awareness",
            Dimension::Monitoring => "Monitoring & Audit",
            Dimension::Vendor => "Vendor Management",
            Dimension::Improvement => "Continuous Improvement",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Dimension::Policy => "Written policies, acceptable use guidelines, procedures",
            Dimension::RiskManagement => {
                "Risk identification, assessment, mitigation strategies"
            }
            Dimension::Roles => "Clear ownership, RACI defined, governance committee",
            Dimension::Training => "Staff education, ongoing learning, compliance awareness",
            Dimension::Monitoring => "Regular reviews, incident tracking, compliance checks",
            Dimension::Vendor => "Due diligence, contract controls, ongoing oversight",
            Dimension::Improvement => "Feedback loops, metrics, iterative enhancement",
        }
    }

    /// Parse a route/payload key back into a dimension.
    pub fn from_key(value: &str) -> Option<Self> {
        Dimension::ALL
            .into_iter()
            .find(|dimension| dimension.key() == value)
    }
}

/// Maturity band derived from a 0-100 percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MaturityLevel {
    AdHoc = 1,
    Developing = 2,
    Defined = 3,
    Managed = 4,
    Optimised = 5,
}

impl MaturityLevel {
    /// Fixed banding with inclusive upper bounds; boundary scores band down.
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=20 => MaturityLevel::AdHoc,
            21..=40 => MaturityLevel::Developing,
            41..=60 => MaturityLevel::Defined,
            61..=80 => MaturityLevel::Managed,
            _ => MaturityLevel::Optimised,
        }
    }

    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            MaturityLevel::AdHoc => "Ad Hoc",
            MaturityLevel::Developing => "Developing",
            MaturityLevel::Defined => "Defined",
            MaturityLevel::Managed => "Managed",
            MaturityLevel::Optimised => "Optimised",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            MaturityLevel::AdHoc => {
                "No formal AI governance; reactive approach; no policies or oversight"
            }
            MaturityLevel::Developing => {
                "Basic awareness; some policies emerging; inconsistent application"
            }
            MaturityLevel::Defined => {
                "Documented policies; assigned responsibilities; regular reviews"
            }
            MaturityLevel::Managed => {
                "Metrics tracked; proactive risk management; embedded in operations"
            }
            MaturityLevel::Optimised => {
                "Continuous improvement; industry leadership; predictive controls"
            }
        }
    }

    /// Inclusive top of this level's score band.
    pub const fn upper_bound(self) -> u8 {
        match self {
            MaturityLevel::AdHoc => 20,
            MaturityLevel::Developing => 40,
            MaturityLevel::Defined => 60,
            MaturityLevel::Managed => 80,
            MaturityLevel::Optimised => 100,
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            MaturityLevel::AdHoc => Some(MaturityLevel::Developing),
            MaturityLevel::Developing => Some(MaturityLevel::Defined),
            MaturityLevel::Defined => Some(MaturityLevel::Managed),
            MaturityLevel::Managed => Some(MaturityLevel::Optimised),
            MaturityLevel::Optimised => None,
        }
    }
}

impl From<MaturityLevel> for u8 {
    fn from(value: MaturityLevel) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for MaturityLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MaturityLevel::AdHoc),
            2 => Ok(MaturityLevel::Developing),
            3 => Ok(MaturityLevel::Defined),
            4 => Ok(MaturityLevel::Managed),
            5 => Ok(MaturityLevel::Optimised),
            other => Err(format!("maturity level must be 1-5, got {other}")),
        }
    }
}

/// Value carried for every one of the seven dimensions.
///
/// A fixed-field struct rather than a map: every dimension is always present,
/// so partial score sets cannot be represented at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionMap<T> {
    pub policy: T,
    pub risk_management: T,
    pub roles: T,
    pub training: T,
    pub monitoring: T,
    pub vendor: T,
    pub improvement: T,
}

impl<T> DimensionMap<T> {
    pub fn from_fn(mut value: impl FnMut(Dimension) -> T) -> Self {
        Self {
            policy: value(Dimension::Policy),
            risk_management: value(Dimension::RiskManagement),
            roles: value(Dimension::Roles),
            training: value(Dimension::Training),
            monitoring: value(Dimension::Monitoring),
            vendor: value(Dimension::Vendor),
            improvement: value(Dimension::Improvement),
        }
    }

    pub fn get(&self, dimension: Dimension) -> &T {
        match dimension {
            Dimension::Policy => &self.policy,
            Dimension::RiskManagement => &self.risk_management,
            Dimension::Roles => &self.roles,
            Dimension::Training => &self.training,
            Dimension::Monitoring => &self.monitoring,
            Dimension::Vendor => &self.vendor,
            Dimension::Improvement => &self.improvement,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: T) {
        match dimension {
            Dimension::Policy => self.policy = value,
            Dimension::RiskManagement => self.risk_management = value,
            Dimension::Roles => self.roles = value,
            Dimension::Training => self.training = value,
            Dimension::Monitoring => self.monitoring = value,
            Dimension::Vendor => self.vendor = value,
            Dimension::Improvement => self.improvement = value,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> {
        Dimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }
}

impl<T: Copy> DimensionMap<T> {
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().map(|(_, value)| *value)
    }
}

/// Per-dimension percentage scores, 0-100 each.
pub type DimensionScores = DimensionMap<u8>;

/// Per-dimension score movement between two assessments.
pub type DimensionDeltas = DimensionMap<i16>;

/// Identifier wrapper for assessments.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct AssessmentId(pub Uuid);

impl AssessmentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier wrapper for individual question responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponseId(pub Uuid);

impl ResponseId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// One answered survey question. At most one exists per question id within an
/// assessment; re-answering re-uses the existing id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub id: ResponseId,
    pub assessment_id: AssessmentId,
    pub question_id: String,
    pub dimension: Dimension,
    pub answer: u8,
    #[serde(default)]
    pub notes: String,
}

/// Lifecycle state of an assessment. Draft is initial, Completed terminal;
/// the only legal transition is Draft -> Completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Draft,
    Completed,
}

impl AssessmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentStatus::Draft => "draft",
            AssessmentStatus::Completed => "completed",
        }
    }
}

/// The assessment aggregate. Score fields are derived from `responses` and
/// are only ever written by the lifecycle store's rescoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: AssessmentId,
    pub organisation_id: String,
    pub completed_by: String,
    pub completed_by_email: String,
    /// When the assessment was finalized; re-stamped at submission.
    pub assessment_date: DateTime<Utc>,
    pub dimension_scores: DimensionScores,
    pub overall_score: u8,
    pub maturity_level: MaturityLevel,
    pub status: AssessmentStatus,
    pub responses: Vec<AssessmentResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Assessment {
    pub fn is_draft(&self) -> bool {
        self.status == AssessmentStatus::Draft
    }
}

/// Single-organisation record kept alongside the assessment collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organisation {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Organisation {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: "default-org".to_string(),
            name: "My Organisation".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
