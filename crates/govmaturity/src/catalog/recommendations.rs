use serde::Serialize;

use crate::assessment::domain::{Dimension, DimensionScores, MaturityLevel};

/// How urgent a recommendation is relative to the rest of the backlog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort key; lower sorts first.
    pub const fn rank(self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

/// Rough implementation effort, independent of priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effort {
    QuickWin,
    Moderate,
    Significant,
}

/// One improvement action, keyed by dimension and the maturity level the
/// organisation currently sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub id: &'static str,
    pub dimension: Dimension,
    pub current_level: MaturityLevel,
    pub target_level: MaturityLevel,
    pub title: &'static str,
    pub description: &'static str,
    pub toolkit_link: &'static str,
    pub priority: Priority,
    pub effort: Effort,
}

pub fn recommendations() -> &'static [Recommendation] {
    &RECOMMENDATIONS
}

pub fn recommendations_for_dimension(dimension: Dimension) -> Vec<&'static Recommendation> {
    RECOMMENDATIONS
        .iter()
        .filter(|rec| rec.dimension == dimension)
        .collect()
}

pub fn recommendations_for_level(
    dimension: Dimension,
    current_level: MaturityLevel,
) -> Vec<&'static Recommendation> {
    RECOMMENDATIONS
        .iter()
        .filter(|rec| rec.dimension == dimension && rec.current_level == current_level)
        .collect()
}

/// Recommendations relevant to a full score set: each dimension contributes
/// the entries tagged with its current band, sorted by priority.
pub fn recommendations_for_scores(scores: &DimensionScores) -> Vec<&'static Recommendation> {
    let mut relevant: Vec<&Recommendation> = scores
        .iter()
        .flat_map(|(dimension, score)| {
            recommendations_for_level(dimension, MaturityLevel::from_score(*score))
        })
        .collect();
    relevant.sort_by_key(|rec| rec.priority.rank());
    relevant
}

/// Low-effort actions regardless of priority.
pub fn quick_wins() -> Vec<&'static Recommendation> {
    RECOMMENDATIONS
        .iter()
        .filter(|rec| rec.effort == Effort::QuickWin)
        .collect()
}

static RECOMMENDATIONS: [Recommendation; 28] = [
    Recommendation {
        id: "rec-policy-1-2",
        dimension: Dimension::Policy,
        current_level: MaturityLevel::AdHoc,
        target_level: MaturityLevel::Developing,
        title: "Create an AI Acceptable Use Policy",
        description: "Draft initial guidelines for how employees should use AI tools. Start with key principles around data handling, prohibited uses, and approval requirements.",
        toolkit_link: "/toolkit/acceptable-use-policy-template",
        priority: Priority::Critical,
        effort: Effort::Moderate,
    },
    Recommendation {
        id: "rec-policy-2-3",
        dimension: Dimension::Policy,
        current_level: MaturityLevel::Developing,
        target_level: MaturityLevel::Defined,
        title: "Formalise and Communicate Your AI Policy",
        description: "Document your AI policy formally and communicate it across the organisation. Implement an acknowledgment process to ensure staff awareness.",
        toolkit_link: "/toolkit/policy-communication-guide",
        priority: Priority::High,
        effort: Effort::QuickWin,
    },
    Recommendation {
        id: "rec-policy-3-4",
        dimension: Dimension::Policy,
        current_level: MaturityLevel::Defined,
        target_level: MaturityLevel::Managed,
        title: "Implement AI Tool Approval Workflow",
        description: "Establish a formal approval process with defined criteria for evaluating new AI tools. Include security, privacy, and business impact assessments.",
        toolkit_link: "/toolkit/tool-approval-workflow",
        priority: Priority::Medium,
        effort: Effort::Moderate,
    },
    Recommendation {
        id: "rec-policy-4-5",
        dimension: Dimension::Policy,
        current_level: MaturityLevel::Managed,
        target_level: MaturityLevel::Optimised,
        title: "Automate Policy Compliance and Updates",
        description: "Integrate your AI register with IT systems for real-time tracking. Establish scheduled policy reviews with stakeholder feedback loops.",
        toolkit_link: "/toolkit/automated-compliance",
        priority: Priority::Low,
        effort: Effort::Significant,
    },
    Recommendation {
        id: "rec-risk-1-2",
        dimension: Dimension::RiskManagement,
        current_level: MaturityLevel::AdHoc,
        target_level: MaturityLevel::Developing,
        title: "Begin Basic AI Risk Assessments",
        description: "Start conducting risk assessments for your most critical AI tools. Focus on data security, privacy, and operational risks.",
        toolkit_link: "/toolkit/basic-risk-assessment",
        priority: Priority::Critical,
        effort: Effort::QuickWin,
    },
    Recommendation {
        id: "rec-risk-2-3",
        dimension: Dimension::RiskManagement,
        current_level: MaturityLevel::Developing,
        target_level: MaturityLevel::Defined,
        title: "Implement the AI Risk Scoring Matrix",
        description: "Apply consistent likelihood x impact scoring to all AI tools. Use the Risk Scoring Matrix to standardise assessments across the organisation.",
        toolkit_link: "/toolkit/risk-scoring-matrix",
        priority: Priority::Critical,
        effort: Effort::Moderate,
    },
    Recommendation {
        id: "rec-risk-3-4",
        dimension: Dimension::RiskManagement,
        current_level: MaturityLevel::Defined,
        target_level: MaturityLevel::Managed,
        title: "Establish Risk Re-assessment Cadence",
        description: "Implement regular risk re-assessments based on risk tier. High-risk tools should be reviewed quarterly, medium-risk semi-annually.",
        toolkit_link: "/toolkit/risk-reassessment-schedule",
        priority: Priority::High,
        effort: Effort::Moderate,
    },
    Recommendation {
        id: "rec-risk-4-5",
        dimension: Dimension::RiskManagement,
        current_level: MaturityLevel::Managed,
        target_level: MaturityLevel::Optimised,
        title: "Deploy Continuous Risk Monitoring",
        description: "Implement automated risk monitoring with alerts for changes in vendor security posture, regulatory requirements, or usage patterns.",
        toolkit_link: "/toolkit/continuous-risk-monitoring",
        priority: Priority::Low,
        effort: Effort::Significant,
    },
    Recommendation {
        id: "rec-roles-1-2",
        dimension: Dimension::Roles,
        current_level: MaturityLevel::AdHoc,
        target_level: MaturityLevel::Developing,
        title: "Designate an AI Governance Owner",
        description: "Assign explicit responsibility for AI governance to an individual, typically within IT, Legal, or Risk. Define their mandate and authority.",
        toolkit_link: "/toolkit/governance-owner-role",
        priority: Priority::Critical,
        effort: Effort::QuickWin,
    },
    Recommendation {
        id: "rec-roles-2-3",
        dimension: Dimension::Roles,
        current_level: MaturityLevel::Developing,
        target_level: MaturityLevel::Defined,
        title: "Document RACI for AI Governance",
        description: "Create a RACI matrix defining who is Responsible, Accountable, Consulted, and Informed for key AI governance activities.",
        toolkit_link: "/toolkit/raci-template",
        priority: Priority::High,
        effort: Effort::QuickWin,
    },
    Recommendation {
        id: "rec-roles-3-4",
        dimension: Dimension::Roles,
        current_level: MaturityLevel::Defined,
        target_level: MaturityLevel::Managed,
        title: "Establish AI Governance Committee",
        description: "Form a cross-functional AI governance committee with representatives from IT, Legal, HR, and business units. Define charter and meeting cadence.",
        toolkit_link: "/toolkit/committee-charter",
        priority: Priority::Medium,
        effort: Effort::Moderate,
    },
    Recommendation {
        id: "rec-roles-4-5",
        dimension: Dimension::Roles,
        current_level: MaturityLevel::Managed,
        target_level: MaturityLevel::Optimised,
        title: "Embed Governance in Performance Management",
        description: "Integrate AI governance responsibilities into job descriptions and performance reviews. Establish board-level reporting with KPIs.",
        toolkit_link: "/toolkit/governance-performance",
        priority: Priority::Low,
        effort: Effort::Significant,
    },
    Recommendation {
        id: "rec-training-1-2",
        dimension: Dimension::Training,
        current_level: MaturityLevel::AdHoc,
        target_level: MaturityLevel::Developing,
        title: "Create Basic AI Awareness Resources",
        description: "Develop introductory materials about AI governance, policies, and risks. Make available through your intranet or learning management system.",
        toolkit_link: "/toolkit/awareness-resources",
        priority: Priority::High,
        effort: Effort::QuickWin,
    },
    Recommendation {
        id: "rec-training-2-3",
        dimension: Dimension::Training,
        current_level: MaturityLevel::Developing,
        target_level: MaturityLevel::Defined,
        title: "Deploy the AI Governance Training Module",
        description: "Roll out the governance training module to all staff. Track completion rates and require acknowledgment of the AI Acceptable Use Policy.",
        toolkit_link: "/toolkit/training-modules",
        priority: Priority::High,
        effort: Effort::Moderate,
    },
    Recommendation {
        id: "rec-training-3-4",
        dimension: Dimension::Training,
        current_level: MaturityLevel::Defined,
        target_level: MaturityLevel::Managed,
        title: "Implement Regular Training with Tracking",
        description: "Establish annual refresher training with completion tracking. Use real case studies to reinforce learning and maintain awareness.",
        toolkit_link: "/toolkit/training-tracking",
        priority: Priority::Medium,
        effort: Effort::Moderate,
    },
    Recommendation {
        id: "rec-training-4-5",
        dimension: Dimension::Training,
        current_level: MaturityLevel::Managed,
        target_level: MaturityLevel::Optimised,
        title: "Develop Role-Specific AI Training Paths",
        description: "Create differentiated training for different roles (executives, developers, general staff). Include certification and assessment components.",
        toolkit_link: "/toolkit/role-training",
        priority: Priority::Low,
        effort: Effort::Significant,
    },
    Recommendation {
        id: "rec-monitoring-1-2",
        dimension: Dimension::Monitoring,
        current_level: MaturityLevel::AdHoc,
        target_level: MaturityLevel::Developing,
        title: "Establish Basic AI Monitoring",
        description: "Begin tracking AI tool usage and any reported issues. Create a simple log for AI-related incidents and concerns.",
        toolkit_link: "/toolkit/basic-monitoring",
        priority: Priority::High,
        effort: Effort::QuickWin,
    },
    Recommendation {
        id: "rec-monitoring-2-3",
        dimension: Dimension::Monitoring,
        current_level: MaturityLevel::Developing,
        target_level: MaturityLevel::Defined,
        title: "Implement AI Incident Tracker",
        description: "Deploy a structured system for tracking AI incidents. Include categorisation, status tracking, and basic reporting.",
        toolkit_link: "/toolkit/incident-tracker",
        priority: Priority::High,
        effort: Effort::Moderate,
    },
    Recommendation {
        id: "rec-monitoring-3-4",
        dimension: Dimension::Monitoring,
        current_level: MaturityLevel::Defined,
        target_level: MaturityLevel::Managed,
        title: "Schedule Regular AI Audits",
        description: "Establish quarterly audit schedule for AI tool compliance. Track findings with owners and deadlines. Report results to governance committee.",
        toolkit_link: "/toolkit/quarterly-audit-tracker",
        priority: Priority::Medium,
        effort: Effort::Moderate,
    },
    Recommendation {
        id: "rec-monitoring-4-5",
        dimension: Dimension::Monitoring,
        current_level: MaturityLevel::Managed,
        target_level: MaturityLevel::Optimised,
        title: "Deploy Continuous Automated Monitoring",
        description: "Implement automated compliance monitoring with real-time alerts. Integrate incident tracking with root cause analysis and prevention measures.",
        toolkit_link: "/toolkit/automated-monitoring",
        priority: Priority::Low,
        effort: Effort::Significant,
    },
    Recommendation {
        id: "rec-vendor-1-2",
        dimension: Dimension::Vendor,
        current_level: MaturityLevel::AdHoc,
        target_level: MaturityLevel::Developing,
        title: "Create Basic Vendor Security Questionnaire",
        description: "Develop a simple questionnaire covering key security and data handling practices for AI vendors. Apply to new vendor evaluations.",
        toolkit_link: "/toolkit/vendor-questionnaire",
        priority: Priority::High,
        effort: Effort::QuickWin,
    },
    Recommendation {
        id: "rec-vendor-2-3",
        dimension: Dimension::Vendor,
        current_level: MaturityLevel::Developing,
        target_level: MaturityLevel::Defined,
        title: "Implement Vendor Vetting Checklist",
        description: "Standardise your vendor evaluation process with a comprehensive checklist covering security, privacy, AI-specific risks, and compliance.",
        toolkit_link: "/toolkit/vendor-vetting-checklist",
        priority: Priority::High,
        effort: Effort::Moderate,
    },
    Recommendation {
        id: "rec-vendor-3-4",
        dimension: Dimension::Vendor,
        current_level: MaturityLevel::Defined,
        target_level: MaturityLevel::Managed,
        title: "Develop Standard AI Contract Addendum",
        description: "Create standard contractual clauses addressing AI-specific concerns: data usage, model training opt-out, output ownership, and audit rights.",
        toolkit_link: "/toolkit/contract-addendum",
        priority: Priority::Medium,
        effort: Effort::Moderate,
    },
    Recommendation {
        id: "rec-vendor-4-5",
        dimension: Dimension::Vendor,
        current_level: MaturityLevel::Managed,
        target_level: MaturityLevel::Optimised,
        title: "Implement Continuous Vendor Monitoring",
        description: "Deploy ongoing vendor risk monitoring based on risk tier. Set up alerts for security incidents, regulatory changes, or material changes to vendor services.",
        toolkit_link: "/toolkit/vendor-monitoring",
        priority: Priority::Low,
        effort: Effort::Significant,
    },
    Recommendation {
        id: "rec-improvement-1-2",
        dimension: Dimension::Improvement,
        current_level: MaturityLevel::AdHoc,
        target_level: MaturityLevel::Developing,
        title: "Begin Documenting Lessons Learned",
        description: "Start recording insights from AI incidents, near-misses, and successful implementations. Create a simple log accessible to the governance team.",
        toolkit_link: "/toolkit/lessons-learned-log",
        priority: Priority::Medium,
        effort: Effort::QuickWin,
    },
    Recommendation {
        id: "rec-improvement-2-3",
        dimension: Dimension::Improvement,
        current_level: MaturityLevel::Developing,
        target_level: MaturityLevel::Defined,
        title: "Establish Quarterly Governance Reviews",
        description: "Schedule quarterly reviews to assess governance effectiveness. Use the Quarterly Audit Tracker to maintain consistency.",
        toolkit_link: "/toolkit/quarterly-audit-tracker",
        priority: Priority::Medium,
        effort: Effort::QuickWin,
    },
    Recommendation {
        id: "rec-improvement-3-4",
        dimension: Dimension::Improvement,
        current_level: MaturityLevel::Defined,
        target_level: MaturityLevel::Managed,
        title: "Implement Governance KPI Dashboard",
        description: "Define and track key performance indicators for AI governance. Create a dashboard showing trends in compliance, incidents, and training completion.",
        toolkit_link: "/toolkit/governance-dashboard",
        priority: Priority::Medium,
        effort: Effort::Moderate,
    },
    Recommendation {
        id: "rec-improvement-4-5",
        dimension: Dimension::Improvement,
        current_level: MaturityLevel::Managed,
        target_level: MaturityLevel::Optimised,
        title: "Establish Industry Benchmarking",
        description: "Participate in industry benchmarking to compare your governance maturity against peers. Seek external validation through audits or certifications.",
        toolkit_link: "/toolkit/benchmarking-guide",
        priority: Priority::Low,
        effort: Effort::Significant,
    },
];
