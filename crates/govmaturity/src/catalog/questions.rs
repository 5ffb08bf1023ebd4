use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::assessment::domain::Dimension;

/// Immutable survey question. Three exist per dimension, 21 in total; the
/// lifecycle store relies on that cardinality when checking submission
/// completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub dimension: Dimension,
    pub text: &'static str,
    pub help_text: &'static str,
    /// What answering 1..5 means for this question.
    pub level_indicators: [&'static str; 5],
    pub weight: u32,
    pub order: u8,
}

pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Number of questions a submittable assessment must have answered.
pub fn total_questions() -> usize {
    QUESTIONS.len()
}

pub fn question_by_id(id: &str) -> Option<&'static Question> {
    static INDEX: OnceLock<HashMap<&'static str, &'static Question>> = OnceLock::new();
    INDEX
        .get_or_init(|| QUESTIONS.iter().map(|question| (question.id, question)).collect())
        .get(id)
        .copied()
}

/// Weight used by the scoring engine. Unknown ids fall back to 1 so stale or
/// foreign question ids never fail a calculation.
pub fn question_weight(id: &str) -> u32 {
    question_by_id(id).map(|question| question.weight).unwrap_or(1)
}

pub fn questions_for(dimension: Dimension) -> Vec<&'static Question> {
    let mut matched: Vec<_> = QUESTIONS
        .iter()
        .filter(|question| question.dimension == dimension)
        .collect();
    matched.sort_by_key(|question| question.order);
    matched
}

static QUESTIONS: [Question; 21] = [
    Question {
        id: "q1.1",
        dimension: Dimension::Policy,
        text: "Do you have a written AI Acceptable Use Policy?",
        help_text: "Consider whether your organisation has formally documented guidelines for how AI tools should be used by employees.",
        level_indicators: [
            "No policy exists",
            "Informal guidelines only",
            "Documented policy, not widely communicated",
            "Documented, communicated, and acknowledged by staff",
            "Regularly reviewed and updated based on feedback",
        ],
        weight: 1,
        order: 1,
    },
    Question {
        id: "q1.2",
        dimension: Dimension::Policy,
        text: "Are there documented procedures for AI tool approval?",
        help_text: "Think about the process employees must follow before using a new AI tool in their work.",
        level_indicators: [
            "No approval process",
            "Ad hoc approval by managers",
            "Basic checklist exists",
            "Formal process with defined criteria",
            "Automated workflow with audit trail",
        ],
        weight: 1,
        order: 2,
    },
    Question {
        id: "q1.3",
        dimension: Dimension::Policy,
        text: "Is there a register of approved vs. prohibited AI tools?",
        help_text: "Consider whether there's a maintained list of which AI tools are sanctioned for use and which are banned.",
        level_indicators: [
            "No register exists",
            "Informal list maintained by IT",
            "Documented register, occasionally updated",
            "Comprehensive register, regularly reviewed",
            "Real-time inventory integrated with IT systems",
        ],
        weight: 1,
        order: 3,
    },
    Question {
        id: "q2.1",
        dimension: Dimension::RiskManagement,
        text: "Do you conduct risk assessments for AI tools?",
        help_text: "Consider whether your organisation formally evaluates the risks associated with each AI tool before and during use.",
        level_indicators: [
            "No risk assessments",
            "Assessments for major tools only",
            "Consistent methodology for all tools",
            "Regular re-assessments with tracking",
            "Continuous risk monitoring with alerts",
        ],
        weight: 1,
        order: 1,
    },
    Question {
        id: "q2.2",
        dimension: Dimension::RiskManagement,
        text: "Is there a risk scoring framework (e.g., likelihood x impact)?",
        help_text: "Think about whether you have a standardised way to quantify and compare AI-related risks.",
        level_indicators: [
            "No framework",
            "Informal risk ratings",
            "Documented framework, inconsistent use",
            "Consistent framework with traffic light ratings",
            "Quantitative framework with historical data",
        ],
        weight: 1,
        order: 2,
    },
    Question {
        id: "q2.3",
        dimension: Dimension::RiskManagement,
        text: "Are AI-specific risks identified (data leakage, bias, hallucination)?",
        help_text: "Consider whether your organisation has identified and documented risks unique to AI systems.",
        level_indicators: [
            "Not considered",
            "Basic awareness, no documentation",
            "Key risks documented",
            "Comprehensive risk taxonomy maintained",
            "Risks mapped to controls and mitigations",
        ],
        weight: 1,
        order: 3,
    },
    Question {
        id: "q3.1",
        dimension: Dimension::Roles,
        text: "Is there a designated AI governance owner/committee?",
        help_text: "Consider whether someone or some group has explicit responsibility for AI governance.",
        level_indicators: [
            "No designated owner",
            "IT informally responsible",
            "Individual owner assigned",
            "Cross-functional committee established",
            "Committee with executive sponsorship and board reporting",
        ],
        weight: 1,
        order: 1,
    },
    Question {
        id: "q3.2",
        dimension: Dimension::Roles,
        text: "Are RACI responsibilities defined for AI governance?",
        help_text: "Think about whether it's clear who is Responsible, Accountable, Consulted, and Informed for AI governance activities.",
        level_indicators: [
            "No RACI exists",
            "Informal understanding",
            "RACI documented for key activities",
            "Comprehensive RACI, communicated to all",
            "RACI embedded in job descriptions and performance reviews",
        ],
        weight: 1,
        order: 2,
    },
    Question {
        id: "q3.3",
        dimension: Dimension::Roles,
        text: "Does the board receive regular AI governance updates?",
        help_text: "Consider whether senior leadership is kept informed about AI governance matters.",
        level_indicators: [
            "No board visibility",
            "Occasional ad hoc updates",
            "Annual governance report",
            "Quarterly structured updates",
            "Standing agenda item with KPIs and trends",
        ],
        weight: 1,
        order: 3,
    },
    Question {
        id: "q4.1",
        dimension: Dimension::Training,
        text: "Have employees received AI governance training?",
        help_text: "Consider whether staff have been educated on your organisation's AI policies and best practices.",
        level_indicators: [
            "No training provided",
            "Optional resources available",
            "One-time training delivered",
            "Regular training programme with tracking",
            "Role-specific training with certification",
        ],
        weight: 1,
        order: 1,
    },
    Question {
        id: "q4.2",
        dimension: Dimension::Training,
        text: "Is there awareness of data protection risks with AI?",
        help_text: "Think about whether employees understand the data privacy implications of using AI tools.",
        level_indicators: [
            "No awareness initiatives",
            "Basic email communications",
            "Training module on data risks",
            "Regular reminders and case studies",
            "Embedded in onboarding and annual compliance",
        ],
        weight: 1,
        order: 2,
    },
    Question {
        id: "q4.3",
        dimension: Dimension::Training,
        text: "Do employees know how to report AI-related concerns?",
        help_text: "Consider whether there's a clear process for staff to raise issues or concerns about AI use.",
        level_indicators: [
            "No reporting mechanism",
            "General IT helpdesk",
            "Dedicated reporting channel",
            "Anonymous reporting with response SLA",
            "Integrated with incident management system",
        ],
        weight: 1,
        order: 3,
    },
    Question {
        id: "q5.1",
        dimension: Dimension::Monitoring,
        text: "Are AI tools monitored for policy compliance?",
        help_text: "Consider whether there's ongoing oversight of how AI tools are being used.",
        level_indicators: [
            "No monitoring",
            "Reactive monitoring (complaints only)",
            "Periodic manual reviews",
            "Regular scheduled audits",
            "Continuous automated monitoring",
        ],
        weight: 1,
        order: 1,
    },
    Question {
        id: "q5.2",
        dimension: Dimension::Monitoring,
        text: "Is there an AI incident tracking process?",
        help_text: "Think about whether AI-related issues are formally recorded and tracked.",
        level_indicators: [
            "No tracking",
            "Ad hoc email records",
            "Spreadsheet-based tracking",
            "Dedicated incident system with workflows",
            "Integrated with root cause analysis and prevention",
        ],
        weight: 1,
        order: 2,
    },
    Question {
        id: "q5.3",
        dimension: Dimension::Monitoring,
        text: "Are audit findings acted upon and tracked to closure?",
        help_text: "Consider whether issues identified in audits are formally addressed and resolved.",
        level_indicators: [
            "Findings not tracked",
            "Some findings documented",
            "All findings logged",
            "Findings tracked with owners and deadlines",
            "Trend analysis and systemic improvements",
        ],
        weight: 1,
        order: 3,
    },
    Question {
        id: "q6.1",
        dimension: Dimension::Vendor,
        text: "Is there a vetting process for AI vendors?",
        help_text: "Consider whether external AI tool providers are evaluated before contracts are signed.",
        level_indicators: [
            "No vetting process",
            "Basic security questionnaire",
            "Standardised checklist for all vendors",
            "Comprehensive due diligence with scoring",
            "Risk-tiered vetting with ongoing monitoring",
        ],
        weight: 1,
        order: 1,
    },
    Question {
        id: "q6.2",
        dimension: Dimension::Vendor,
        text: "Do contracts include AI-specific clauses (data usage, model training)?",
        help_text: "Think about whether your vendor agreements address how your data is used by AI systems.",
        level_indicators: [
            "No AI-specific clauses",
            "Generic data protection clauses",
            "Some AI clauses in new contracts",
            "Standard AI addendum for all vendors",
            "Negotiated clauses with regular review",
        ],
        weight: 1,
        order: 2,
    },
    Question {
        id: "q6.3",
        dimension: Dimension::Vendor,
        text: "Are vendor assessments repeated periodically?",
        help_text: "Consider whether AI vendors are re-evaluated on an ongoing basis.",
        level_indicators: [
            "Never re-assessed",
            "Re-assessed at renewal",
            "Annual re-assessment",
            "Risk-based re-assessment schedule",
            "Continuous monitoring with alerts",
        ],
        weight: 1,
        order: 3,
    },
    Question {
        id: "q7.1",
        dimension: Dimension::Improvement,
        text: "Is there a process to incorporate lessons learned?",
        help_text: "Consider whether insights from AI incidents or projects feed back into governance improvements.",
        level_indicators: [
            "No process",
            "Informal discussions",
            "Post-incident reviews documented",
            "Regular retrospectives with action items",
            "Systematic improvement programme",
        ],
        weight: 1,
        order: 1,
    },
    Question {
        id: "q7.2",
        dimension: Dimension::Improvement,
        text: "Are AI governance metrics tracked and reported?",
        help_text: "Think about whether you measure the effectiveness of your AI governance programme.",
        level_indicators: [
            "No metrics",
            "Basic counts (# tools, # incidents)",
            "KPIs defined and reported",
            "Dashboard with trends",
            "Benchmarking against industry/peers",
        ],
        weight: 1,
        order: 2,
    },
    Question {
        id: "q7.3",
        dimension: Dimension::Improvement,
        text: "Is the governance framework reviewed for effectiveness?",
        help_text: "Consider whether the governance approach itself is periodically evaluated and improved.",
        level_indicators: [
            "Never reviewed",
            "Reviewed when problems arise",
            "Annual review",
            "Quarterly review with stakeholder input",
            "Continuous improvement with external validation",
        ],
        weight: 1,
        order: 3,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dimension_has_exactly_three_questions() {
        for dimension in Dimension::ALL {
            assert_eq!(
                questions_for(dimension).len(),
                3,
                "unexpected question count for {}",
                dimension.key()
            );
        }
        assert_eq!(total_questions(), 21);
    }

    #[test]
    fn question_ids_are_unique() {
        let mut ids: Vec<_> = questions().iter().map(|question| question.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total_questions());
    }

    #[test]
    fn unknown_question_weight_defaults_to_one() {
        assert_eq!(question_weight("q1.1"), 1);
        assert_eq!(question_weight("does-not-exist"), 1);
    }

    #[test]
    fn questions_are_ordered_within_dimension() {
        let policy = questions_for(Dimension::Policy);
        let orders: Vec<_> = policy.iter().map(|question| question.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }
}
