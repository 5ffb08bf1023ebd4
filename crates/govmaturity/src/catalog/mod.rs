//! Static reference data: the 21-question survey and the recommendation
//! catalogue. Read-only, compiled in, available from process start.

mod questions;
mod recommendations;

pub use questions::{
    question_by_id, question_weight, questions, questions_for, total_questions, Question,
};
pub use recommendations::{
    quick_wins, recommendations, recommendations_for_dimension, recommendations_for_level,
    recommendations_for_scores, Effort, Priority, Recommendation,
};
