use clap::Args;
use govmaturity::assessment::{
    Assessment, AssessmentStore, Dimension, DimensionMap, MemorySnapshotStorage,
};
use govmaturity::catalog;
use govmaturity::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Name recorded on the demo assessments
    #[arg(long, default_value = "Demo Assessor")]
    pub(crate) submitter: String,
    /// Email recorded on the demo assessments
    #[arg(long, default_value = "demo@example.org")]
    pub(crate) email: String,
    /// Print the full question catalogue before running the walkthrough
    #[arg(long)]
    pub(crate) list_questions: bool,
    /// Stop after the baseline assessment (skips the follow-up and comparison)
    #[arg(long)]
    pub(crate) skip_follow_up: bool,
}

/// Answers used for the baseline round: an organisation with informal
/// practices and no vendor or monitoring discipline yet.
fn baseline_answers() -> DimensionMap<u8> {
    DimensionMap {
        policy: 2,
        risk_management: 1,
        roles: 2,
        training: 3,
        monitoring: 1,
        vendor: 2,
        improvement: 1,
    }
}

/// Follow-up round: every practice area one step further along.
fn follow_up_answers() -> DimensionMap<u8> {
    let baseline = baseline_answers();
    DimensionMap::from_fn(|dimension| (*baseline.get(dimension) + 1).min(5))
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        submitter,
        email,
        list_questions,
        skip_follow_up,
    } = args;

    println!("AI governance maturity demo");

    if list_questions {
        render_question_catalogue();
    }

    let store = AssessmentStore::new(MemorySnapshotStorage::default());

    let baseline = run_assessment_round(&store, &submitter, &email, &baseline_answers())?;
    println!("\nBaseline assessment");
    render_assessment(&baseline);
    render_gap_analysis(&baseline);
    render_recommendations(&baseline);

    if skip_follow_up {
        return Ok(());
    }

    let follow_up = run_assessment_round(&store, &submitter, &email, &follow_up_answers())?;
    println!("\nFollow-up assessment");
    render_assessment(&follow_up);

    let comparison = store.compare_assessments(follow_up.id, baseline.id)?;
    println!("\nProgress since baseline");
    println!("Overall: {:+} points", comparison.overall_delta);
    for (dimension, delta) in comparison.dimension_deltas.iter() {
        println!("- {}: {:+}", dimension.name(), delta);
    }

    let summary = store.dashboard_summary(chrono::Utc::now());
    println!(
        "\nDashboard: {} completed assessment(s), latest {} ({})",
        summary.total_assessments,
        follow_up.overall_score,
        follow_up.maturity_level.name()
    );

    Ok(())
}

fn run_assessment_round(
    store: &AssessmentStore<MemorySnapshotStorage>,
    submitter: &str,
    email: &str,
    answers: &DimensionMap<u8>,
) -> Result<Assessment, AppError> {
    let assessment = store.create_assessment(submitter, email)?;
    for question in catalog::questions() {
        store.add_or_update_response(
            assessment.id,
            question.id,
            question.dimension,
            *answers.get(question.dimension),
            None,
        )?;
    }
    Ok(store.submit_assessment(assessment.id)?)
}

fn render_question_catalogue() {
    for dimension in Dimension::ALL {
        println!("\n{} - {}", dimension.name(), dimension.description());
        for question in catalog::questions_for(dimension) {
            println!("  [{}] {}", question.id, question.text);
        }
    }
}

fn render_assessment(assessment: &Assessment) {
    println!(
        "Overall score {} -> {} ({})",
        assessment.overall_score,
        assessment.maturity_level.name(),
        assessment.maturity_level.description()
    );
    for (dimension, score) in assessment.dimension_scores.iter() {
        println!("- {}: {}", dimension.name(), score);
    }
}

fn render_gap_analysis(assessment: &Assessment) {
    println!("\nPath to the next level");
    for (dimension, score) in assessment.dimension_scores.iter() {
        let gap = govmaturity::assessment::scoring::gap_analysis(*score);
        match gap.next_level {
            Some(next) => println!(
                "- {}: {} points to reach {} (needs {})",
                dimension.name(),
                gap.percentage_gap,
                next.name(),
                gap.score_needed
            ),
            None => println!("- {}: already at the top band", dimension.name()),
        }
    }
}

fn render_recommendations(assessment: &Assessment) {
    let recommendations = catalog::recommendations_for_scores(&assessment.dimension_scores);
    println!("\nRecommended actions ({} total, top 5 shown)", recommendations.len());
    for rec in recommendations.iter().take(5) {
        println!(
            "- [{:?}] {} ({})",
            rec.priority,
            rec.title,
            rec.dimension.name()
        );
    }

    let quick_wins = catalog::quick_wins();
    println!("Quick wins available in the catalogue: {}", quick_wins.len());
}
